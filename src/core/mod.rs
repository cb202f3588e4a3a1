//! Configuration, payload models and schema validation shared by every worker

pub mod config;
pub mod models;
pub mod validation;
