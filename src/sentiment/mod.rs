//! Sentence-aware sentiment polarity

pub mod model;
pub mod pipeline;
pub mod sentencizer;

pub use model::{Polarity, PolarityModel, VaderModel};
pub use pipeline::SentimentPipeline;

use crate::core::models::SentimentScores;
use crate::errors::WorkerError;

/// Scores `entry` with the shared English pipeline, keeping only the
/// negative, positive and neutral components.
///
/// # Errors
///
/// Returns [`WorkerError::DelegateError`] carrying the model's own message.
pub fn analyze(entry: &str) -> Result<SentimentScores, WorkerError> {
    analyze_with(pipeline::english(), entry)
}

/// Same as [`analyze`] with an explicit pipeline.
///
/// # Errors
///
/// Returns [`WorkerError::DelegateError`] carrying the model's own message.
pub fn analyze_with(
    pipeline: &SentimentPipeline,
    entry: &str,
) -> Result<SentimentScores, WorkerError> {
    Ok(pipeline.polarity(entry)?.into())
}
