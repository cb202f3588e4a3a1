use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;

use crate::core::config::DEFAULT_LANGUAGE;
use crate::core::models::SentimentScores;
use crate::core::validation::validate_entry;
use crate::errors::WorkerError;
use crate::sentiment::{self, pipeline};

pub use self::function_handler as handler;

/// Validates the payload and scores the sentiment of its entry in English.
///
/// # Errors
///
/// Returns a validation error for a malformed payload, otherwise whatever the
/// sentiment pipeline reports.
pub fn process(payload: &Value) -> Result<SentimentScores, WorkerError> {
    process_in(DEFAULT_LANGUAGE, payload)
}

/// Like [`process`], with the pipeline for `language`.
///
/// # Errors
///
/// Returns [`WorkerError::ConfigError`] before looking at the payload when
/// `language` has no pipeline.
pub fn process_in(language: &str, payload: &Value) -> Result<SentimentScores, WorkerError> {
    let pipeline = pipeline::for_language(language)?;
    let request = validate_entry(payload)?;
    sentiment::analyze_with(pipeline, &request.entry)
}

/// Lambda handler for the sentiment worker.
///
/// # Errors
///
/// Fails the invocation when the configured language is unsupported, the
/// payload is invalid or scoring fails.
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<SentimentScores, Error> {
    super::run_worker("asent", &event, |config, payload| {
        process_in(&config.sentiment_language, payload)
    })
}
