//! moood - serverless workers that enrich journal entries with text analysis.
//!
//! This crate implements the Lambda functions of the entry processing pipeline:
//! 1. A sentiment worker (`asent`) that scores the polarity of an entry
//! 2. A complexity worker that computes readability statistics for an entry
//! 3. A persister that validates the enriched batch produced by the workers
//!
//! Every worker validates its payload against a fixed schema first, reporting
//! all violations at once, then delegates to the analysis and returns a flat
//! JSON object of scores.
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution (`lambda_runtime`)
//! - VADER (`vader_sentiment`) behind a sentence-splitting pipeline for sentiment
//! - In-crate readability formulas for complexity
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use serde_json::json;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Set up structured logging
//!     moood::setup_logging();
//!
//!     let payload = json!({ "id": "1", "entry": "I love sunny days." });
//!
//!     let sentiment = moood::worker::asent::process(&payload)?;
//!     println!("positive: {}", sentiment.positive);
//!
//!     let complexity = moood::worker::complexity::process(&payload)?;
//!     println!("reading ease: {}", complexity.flesch_reading_ease);
//!
//!     Ok(())
//! }
//! ```
pub mod core;
pub mod errors;
pub mod readability;
pub mod sentiment;
pub mod worker;

pub use errors::WorkerError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration, filtered by `RUST_LOG` (default `info`). It
/// should be called once at the start of each Lambda binary; later calls are
/// no-ops.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// moood::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
