use anyhow::{Result, anyhow};
use serde::Serialize;
use vader_sentiment::SentimentIntensityAnalyzer;

use crate::core::models::SentimentScores;

/// Polarity of a single sentence or a whole document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Polarity {
    pub negative: f64,
    pub neutral: f64,
    pub positive: f64,
    pub compound: f64,
}

impl From<Polarity> for SentimentScores {
    fn from(polarity: Polarity) -> Self {
        SentimentScores {
            negative: polarity.negative,
            positive: polarity.positive,
            neutral: polarity.neutral,
        }
    }
}

/// A sentence-level sentiment model.
pub trait PolarityModel: Send + Sync {
    /// # Errors
    ///
    /// Returns an error when the model cannot score the sentence.
    fn polarity(&self, sentence: &str) -> Result<Polarity>;
}

/// English lexicon and rule based model backed by VADER.
pub struct VaderModel {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderModel {
    #[must_use]
    pub fn english() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl PolarityModel for VaderModel {
    fn polarity(&self, sentence: &str) -> Result<Polarity> {
        let scores = self.analyzer.polarity_scores(sentence);
        let field = |key: &str| {
            scores
                .get(key)
                .copied()
                .ok_or_else(|| anyhow!("sentiment model produced no '{key}' score"))
        };

        Ok(Polarity {
            negative: field("neg")?,
            neutral: field("neu")?,
            positive: field("pos")?,
            compound: field("compound")?,
        })
    }
}
