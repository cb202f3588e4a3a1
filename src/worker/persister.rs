use std::collections::BTreeMap;

use lambda_runtime::{Error, LambdaEvent};
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::core::validation::validate_event;
use crate::errors::WorkerError;

pub use self::function_handler as handler;

/// Validates a batch of entry events keyed by index, skipping invalid ones.
///
/// # Errors
///
/// Returns [`WorkerError::ParseError`] when the payload is not an index-keyed
/// object and [`WorkerError::EmptyBatch`] when it holds no events.
pub fn process(payload: &Value) -> Result<String, WorkerError> {
    let batch = index_batch(BTreeMap::<String, Value>::deserialize(payload)?)?;
    if batch.is_empty() {
        return Err(WorkerError::EmptyBatch);
    }

    let processed = batch
        .iter()
        .filter(|(index, event)| match validate_event(event) {
            Ok(_) => true,
            Err(e) => {
                let event_id = event.get("id").and_then(Value::as_str).unwrap_or("<missing>");
                warn!(
                    index = **index,
                    "Event {} was skipped because validation failed: {}", event_id, e
                );
                false
            }
        })
        .count();

    Ok(format!("{processed} events were processed"))
}

/// Keys are decimal integers with an optional sign, so `"01"` and `"+1"` both
/// index event 1. A later duplicate index replaces an earlier one.
fn index_batch(raw: BTreeMap<String, Value>) -> Result<BTreeMap<i64, Value>, WorkerError> {
    raw.into_iter()
        .map(|(key, event)| {
            key.parse::<i64>()
                .map(|index| (index, event))
                .map_err(|e| WorkerError::ParseError(format!("batch index '{key}': {e}")))
        })
        .collect()
}

/// Lambda handler for the persister.
///
/// # Errors
///
/// Fails the invocation for an empty or undecodable batch.
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<String, Error> {
    super::run_worker("persister", &event, |_, payload| process(payload))
}
