#![allow(clippy::cast_precision_loss)]

use super::text;
use crate::errors::WorkerError;

/// Words sampled from the start of the text by the Linsear Write formula.
pub const LINSEAR_SAMPLE_WORDS: usize = 100;

/// Rounds half away from zero to `places` decimals.
#[must_use]
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Counts for one text, gathered once and shared by every formula.
#[derive(Debug, Clone)]
pub struct Readability<'a> {
    text: &'a str,
    words: usize,
    sentences: usize,
    syllables: usize,
    chars: usize,
    letters: usize,
}

impl<'a> Readability<'a> {
    /// # Errors
    ///
    /// Returns [`WorkerError::DelegateError`] when the text holds no words,
    /// since every formula divides by the word count.
    pub fn new(text: &'a str) -> Result<Self, WorkerError> {
        let words = text::lexicon_count(text);
        if words == 0 {
            return Err(WorkerError::DelegateError(
                "text contains no words to score".to_string(),
            ));
        }

        Ok(Self {
            text,
            words,
            sentences: text::sentence_count(text),
            syllables: text::syllable_count(text),
            chars: text::char_count(text),
            letters: text::letter_count(text),
        })
    }

    #[must_use]
    pub fn words(&self) -> usize {
        self.words
    }

    #[must_use]
    pub fn sentences(&self) -> usize {
        self.sentences
    }

    #[must_use]
    pub fn avg_sentence_length(&self) -> f64 {
        round_to(self.words as f64 / self.sentences as f64, 1)
    }

    #[must_use]
    pub fn avg_syllables_per_word(&self) -> f64 {
        round_to(self.syllables as f64 / self.words as f64, 1)
    }

    #[must_use]
    pub fn flesch_reading_ease(&self) -> f64 {
        let score = 206.835
            - 1.015 * self.avg_sentence_length()
            - 84.6 * self.avg_syllables_per_word();
        round_to(score, 2)
    }

    #[must_use]
    pub fn flesch_kincaid_grade(&self) -> f64 {
        let grade =
            0.39 * self.avg_sentence_length() + 11.8 * self.avg_syllables_per_word() - 15.59;
        round_to(grade, 1)
    }

    #[must_use]
    pub fn gunning_fog(&self) -> f64 {
        let difficult = text::difficult_words(self.text, 3) as f64;
        let percent_difficult = difficult / self.words as f64 * 100.0;
        round_to(0.4 * (self.avg_sentence_length() + percent_difficult), 2)
    }

    /// Zero for texts shorter than three sentences.
    #[must_use]
    pub fn smog_index(&self) -> f64 {
        if self.sentences < 3 {
            return 0.0;
        }
        let polysyllables = text::polysyllable_count(self.text) as f64;
        let smog = 1.043 * (30.0 * polysyllables / self.sentences as f64).sqrt() + 3.1291;
        round_to(smog, 1)
    }

    #[must_use]
    pub fn automated_readability_index(&self) -> f64 {
        let chars_per_word = round_to(self.chars as f64 / self.words as f64, 2);
        let words_per_sentence = round_to(self.words as f64 / self.sentences as f64, 2);
        round_to(4.71 * chars_per_word + 0.5 * words_per_sentence - 21.43, 1)
    }

    #[must_use]
    pub fn coleman_liau_index(&self) -> f64 {
        let letters_per_word = round_to(self.letters as f64 / self.words as f64, 2);
        let sentences_per_word = round_to(self.sentences as f64 / self.words as f64, 2);
        let letters = round_to(letters_per_word * 100.0, 2);
        let sentences = round_to(sentences_per_word * 100.0, 2);
        round_to(0.058 * letters - 0.296 * sentences - 15.8, 2)
    }

    /// Scored on the first hundred whitespace-separated words only.
    #[must_use]
    pub fn linsear_write_formula(&self) -> f64 {
        let sample: Vec<&str> = self
            .text
            .split_whitespace()
            .take(LINSEAR_SAMPLE_WORDS)
            .collect();

        let (easy, hard) = sample.iter().fold((0usize, 0usize), |(easy, hard), word| {
            if text::word_syllables(word) < 3 {
                (easy + 1, hard)
            } else {
                (easy, hard + 1)
            }
        });

        let sentences = text::sentence_count(&sample.join(" ")) as f64;
        let mut number = (easy + 3 * hard) as f64 / sentences;
        if number <= 20.0 {
            number -= 2.0;
        }
        number / 2.0
    }

    #[must_use]
    pub fn dale_chall_readability_score(&self) -> f64 {
        let difficult = text::difficult_words(self.text, 0) as f64;
        let percent_difficult = difficult / self.words as f64 * 100.0;
        let mut score = 0.1579 * percent_difficult + 0.0496 * self.avg_sentence_length();
        if percent_difficult > 5.0 {
            score += 3.6365;
        }
        round_to(score, 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        assert!((round_to(2.345, 1) - 2.3).abs() < 1e-9);
        assert!((round_to(2.35, 1) - 2.4).abs() < 1e-9);
        assert!((round_to(-1.25, 1) + 1.3).abs() < 1e-9);
        assert!((round_to(7.5, 0) - 8.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_text_without_words() {
        assert!(matches!(
            Readability::new("?! ... --"),
            Err(WorkerError::DelegateError(_))
        ));
    }

    #[test]
    fn simple_sentence_statistics() {
        let stats = Readability::new("The cat sat on the mat.").unwrap();
        assert_eq!(stats.words(), 6);
        assert_eq!(stats.sentences(), 1);
        assert!((stats.avg_sentence_length() - 6.0).abs() < 1e-9);
        assert!((stats.avg_syllables_per_word() - 1.0).abs() < 1e-9);
        assert!((stats.flesch_reading_ease() - 116.15).abs() < 1e-9);
        assert!((stats.flesch_kincaid_grade() + 1.4).abs() < 1e-9);
        assert!(stats.smog_index().abs() < f64::EPSILON);
    }

    #[test]
    fn smog_needs_three_sentences() {
        let text = "Photosynthesis is remarkable today. Chlorophyll captures energy well. \
                    Biologists investigate everything carefully.";
        let stats = Readability::new(text).unwrap();
        assert_eq!(stats.sentences(), 3);
        assert!(stats.smog_index() > 3.1291);
    }

    #[test]
    fn linsear_scores_short_easy_text_low() {
        let stats = Readability::new("The cat sat on the mat.").unwrap();
        // six easy words in one sentence: (6 - 2) / 2
        assert!((stats.linsear_write_formula() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn character_based_grades_for_simple_sentence() {
        let stats = Readability::new("The cat sat on the mat.").unwrap();
        // 18 chars, 17 letters over 6 words in 1 sentence
        assert!((stats.automated_readability_index() + 4.3).abs() < 1e-9);
        assert!((stats.coleman_liau_index() + 4.42).abs() < 1e-9);
    }

    #[test]
    fn word_list_grades_for_simple_sentence() {
        let stats = Readability::new("The cat sat on the mat.").unwrap();
        assert!((stats.gunning_fog() - 2.4).abs() < 1e-9);
        assert!((stats.dale_chall_readability_score() - 0.3).abs() < 1e-9);
    }

    #[test]
    fn dale_chall_adjusts_when_many_words_are_difficult() {
        // 20 of 21 words are off the easy list, 7 words per sentence
        let text = "Notwithstanding considerable institutional resistance, \
                    the administration implemented comprehensive organizational restructuring. \
                    Consequently, interdepartmental communication deteriorated substantially. \
                    Subsequent evaluations identified insufficient managerial accountability.";
        let stats = Readability::new(text).unwrap();
        assert_eq!(stats.words(), 21);
        assert_eq!(stats.sentences(), 3);
        assert!((stats.dale_chall_readability_score() - 19.02).abs() < 1e-9);
    }
}
