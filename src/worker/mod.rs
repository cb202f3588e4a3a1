//! Lambda handlers for the entry workers and the persister

pub mod asent;
pub mod complexity;
pub mod persister;

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use crate::core::config::AppConfig;
use crate::errors::WorkerError;

/// Shared shape of every handler: load config, optionally log the payload,
/// run `process` on it and surface failures to the runtime.
pub(crate) fn run_worker<T, F>(
    worker: &str,
    event: &LambdaEvent<Value>,
    process: F,
) -> Result<T, Error>
where
    F: FnOnce(&AppConfig, &Value) -> Result<T, WorkerError>,
{
    let config = AppConfig::from_env().map_err(|e| {
        error!(worker, request_id = %event.context.request_id, "Config error: {}", e);
        Error::from(e)
    })?;

    run_with_config(worker, &config, event, process)
}

fn run_with_config<T, F>(
    worker: &str,
    config: &AppConfig,
    event: &LambdaEvent<Value>,
    process: F,
) -> Result<T, Error>
where
    F: FnOnce(&AppConfig, &Value) -> Result<T, WorkerError>,
{
    let request_id = event.context.request_id.as_str();
    if config.log_payloads {
        info!(worker, request_id, "Received event: {}", event.payload);
    }

    match process(config, &event.payload) {
        Ok(result) => {
            info!(worker, request_id, "Event processed");
            Ok(result)
        }
        Err(e) => {
            error!(worker, request_id, "Failed to process event: {}", e);
            Err(Error::from(e))
        }
    }
}
