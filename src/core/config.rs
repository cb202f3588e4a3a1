use std::env;

use crate::errors::WorkerError;

/// Sentiment language used when `SENTIMENT_LANGUAGE` is unset.
pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Whether handlers log the received payload before processing it.
    pub log_payloads: bool,
    /// Lowercased language tag. Only the sentiment worker reads it, and it
    /// rejects languages it has no pipeline for.
    pub sentiment_language: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_payloads: true,
            sentiment_language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, WorkerError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup, so callers are not tied
    /// to the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, WorkerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_payloads = match lookup("LOG_PAYLOADS") {
            Some(raw) => parse_bool(&raw)
                .ok_or_else(|| WorkerError::ConfigError(format!("LOG_PAYLOADS: {raw}")))?,
            None => true,
        };

        let sentiment_language = lookup("SENTIMENT_LANGUAGE")
            .map(|lang| lang.trim().to_lowercase())
            .filter(|lang| !lang.is_empty())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        Ok(Self {
            log_payloads,
            sentiment_language,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
