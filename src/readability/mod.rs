//! Readability statistics for English text
//!
//! Nine published formulas computed from shared word, sentence, syllable and
//! character counts. The consensus grade combines the others.

pub mod consensus;
pub mod formulas;
pub mod text;

pub use formulas::Readability;

use crate::core::models::ComplexityScores;
use crate::errors::WorkerError;

/// Computes all nine readability scores for `entry`.
///
/// # Errors
///
/// Returns [`WorkerError::DelegateError`] when the text cannot be scored.
pub fn analyze(entry: &str) -> Result<ComplexityScores, WorkerError> {
    let stats = Readability::new(entry)?;

    Ok(ComplexityScores {
        flesch_kincaid_grade_level: stats.flesch_kincaid_grade(),
        flesch_reading_ease: stats.flesch_reading_ease(),
        gunning_fog_index: stats.gunning_fog(),
        smog_index: stats.smog_index(),
        automated_readability_index: stats.automated_readability_index(),
        coleman_liau_index: stats.coleman_liau_index(),
        linsear_write_formula: stats.linsear_write_formula(),
        dale_chall_readability_score: stats.dale_chall_readability_score(),
        readability_consensus: consensus::consensus_grade(&stats),
    })
}
