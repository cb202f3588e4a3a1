use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Payload accepted by the analysis workers. Fields beyond `id` and `entry`
/// (such as `createdAt` from the orchestrator) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryPayload {
    pub id: String,
    pub entry: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    pub negative: f64,
    pub positive: f64,
    pub neutral: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComplexityScores {
    pub flesch_kincaid_grade_level: f64,
    pub flesch_reading_ease: f64,
    pub gunning_fog_index: f64,
    pub smog_index: f64,
    pub automated_readability_index: f64,
    pub coleman_liau_index: f64,
    pub linsear_write_formula: f64,
    pub dale_chall_readability_score: f64,
    pub readability_consensus: f64,
}

/// An entry after the workers ran, as handed to the persister.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryEvent {
    pub id: String,
    pub entry: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    pub metadata: Map<String, Value>,
}
