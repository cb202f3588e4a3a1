use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("Validation of payload failed: {0}")]
    ValidationError(String),

    #[error("{0}")]
    DelegateError(String),

    #[error("Failed to parse payload: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("received empty event")]
    EmptyBatch,
}

impl WorkerError {
    /// Builds a validation error from every violated constraint, comma-separated.
    #[must_use]
    pub fn from_violations(violations: &[String]) -> Self {
        WorkerError::ValidationError(violations.join(", "))
    }
}

impl From<anyhow::Error> for WorkerError {
    fn from(error: anyhow::Error) -> Self {
        WorkerError::DelegateError(error.to_string())
    }
}

impl From<serde_json::Error> for WorkerError {
    fn from(error: serde_json::Error) -> Self {
        WorkerError::ParseError(error.to_string())
    }
}

impl From<validator::ValidationErrors> for WorkerError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut violations: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| {
                    let detail = error.message.as_ref().unwrap_or(&error.code);
                    format!("'{field}' {detail}")
                })
            })
            .collect();
        violations.sort();
        WorkerError::from_violations(&violations)
    }
}
