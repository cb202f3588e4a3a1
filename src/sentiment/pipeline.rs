use anyhow::Result;
use once_cell::sync::Lazy;
use tracing::debug;

use super::model::{Polarity, PolarityModel, VaderModel};
use super::sentencizer::split_sentences;
use crate::errors::WorkerError;

static ENGLISH: Lazy<SentimentPipeline> = Lazy::new(|| {
    debug!("Building English sentiment pipeline");
    SentimentPipeline::english()
});

/// The process-wide English pipeline, built on first use.
#[must_use]
pub fn english() -> &'static SentimentPipeline {
    &ENGLISH
}

/// The shared pipeline for a lowercased language tag.
///
/// # Errors
///
/// Returns [`WorkerError::ConfigError`] for a language without a pipeline.
pub fn for_language(language: &str) -> Result<&'static SentimentPipeline, WorkerError> {
    match language {
        "en" => Ok(english()),
        other => Err(WorkerError::ConfigError(format!(
            "SENTIMENT_LANGUAGE: unsupported language '{other}'"
        ))),
    }
}

/// Sentencizer followed by a sentence-level polarity model.
pub struct SentimentPipeline {
    model: Box<dyn PolarityModel>,
}

impl SentimentPipeline {
    pub fn new<M>(model: M) -> Self
    where
        M: PolarityModel + 'static,
    {
        Self {
            model: Box::new(model),
        }
    }

    #[must_use]
    pub fn english() -> Self {
        Self::new(VaderModel::english())
    }

    /// Document polarity as the mean of every sentence's polarity.
    ///
    /// Text without any sentence scores zero across the board.
    ///
    /// # Errors
    ///
    /// Propagates the first error raised by the model.
    pub fn polarity(&self, text: &str) -> Result<Polarity> {
        let sentences = split_sentences(text);
        if sentences.is_empty() {
            return Ok(Polarity::default());
        }

        let mut total = Polarity::default();
        for sentence in &sentences {
            let polarity = self.model.polarity(sentence)?;
            total.negative += polarity.negative;
            total.neutral += polarity.neutral;
            total.positive += polarity.positive;
            total.compound += polarity.compound;
        }

        #[allow(clippy::cast_precision_loss)]
        let count = sentences.len() as f64;
        Ok(Polarity {
            negative: total.negative / count,
            neutral: total.neutral / count,
            positive: total.positive / count,
            compound: total.compound / count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    struct LengthModel;

    impl PolarityModel for LengthModel {
        fn polarity(&self, sentence: &str) -> Result<Polarity> {
            if sentence.contains("boom") {
                bail!("model exploded");
            }
            #[allow(clippy::cast_precision_loss)]
            let len = sentence.len() as f64;
            Ok(Polarity {
                negative: 0.0,
                neutral: 1.0,
                positive: len,
                compound: -len,
            })
        }
    }

    #[test]
    fn averages_sentence_scores() {
        let pipeline = SentimentPipeline::new(LengthModel);
        let polarity = pipeline.polarity("ab. abcd.").unwrap();
        assert!((polarity.positive - 4.0).abs() < f64::EPSILON);
        assert!((polarity.compound + 4.0).abs() < f64::EPSILON);
        assert!((polarity.neutral - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn blank_text_is_zero() {
        let pipeline = SentimentPipeline::new(LengthModel);
        assert_eq!(pipeline.polarity("   ").unwrap(), Polarity::default());
    }

    #[test]
    fn model_errors_propagate_unchanged() {
        let pipeline = SentimentPipeline::new(LengthModel);
        let err = pipeline.polarity("fine. boom.").unwrap_err();
        assert_eq!(err.to_string(), "model exploded");
    }

    #[test]
    fn languages_resolve_to_shared_pipelines() {
        assert!(std::ptr::eq(for_language("en").unwrap(), english()));

        let err = for_language("de").err().unwrap();
        assert!(matches!(err, WorkerError::ConfigError(ref msg) if msg.contains("'de'")));
    }
}
