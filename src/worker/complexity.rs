use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;

use crate::core::models::ComplexityScores;
use crate::core::validation::validate_entry;
use crate::errors::WorkerError;
use crate::readability;

pub use self::function_handler as handler;

/// Validates the payload and computes every readability score of its entry.
///
/// # Errors
///
/// Returns a validation error for a malformed payload, or a delegate error
/// when the entry cannot be scored.
pub fn process(payload: &Value) -> Result<ComplexityScores, WorkerError> {
    let request = validate_entry(payload)?;
    readability::analyze(&request.entry)
}

/// Lambda handler for the complexity worker.
///
/// # Errors
///
/// Fails the invocation when the payload is invalid or scoring fails.
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<ComplexityScores, Error> {
    super::run_worker("complexity", &event, |_, payload| process(payload))
}
