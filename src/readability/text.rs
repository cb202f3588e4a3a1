//! Counting primitives the readability formulas are built from.

use std::collections::{BTreeSet, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

static PUNCTUATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s']").expect("static regex compile"));

static SENTENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[^.!?]+[.!?]*").expect("static regex compile"));

static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\w='‘’]+").expect("static regex compile"));

static EASY_WORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| include_str!("easy_words.txt").split_whitespace().collect());

/// Strips everything except word characters, whitespace and apostrophes.
#[must_use]
pub fn remove_punctuation(text: &str) -> String {
    PUNCTUATION_RE.replace_all(text, "").into_owned()
}

#[must_use]
pub fn lexicon_count(text: &str) -> usize {
    remove_punctuation(text).split_whitespace().count()
}

/// Sentences holding more than two words, never less than one.
#[must_use]
pub fn sentence_count(text: &str) -> usize {
    SENTENCE_RE
        .find_iter(text)
        .filter(|sentence| lexicon_count(sentence.as_str()) > 2)
        .count()
        .max(1)
}

/// Non-whitespace characters.
#[must_use]
pub fn char_count(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Non-whitespace characters left after removing punctuation.
#[must_use]
pub fn letter_count(text: &str) -> usize {
    char_count(&remove_punctuation(text))
}

#[must_use]
pub fn syllable_count(text: &str) -> usize {
    remove_punctuation(&text.to_lowercase())
        .split_whitespace()
        .map(word_syllables)
        .sum()
}

/// Words of three or more syllables, repeats included.
#[must_use]
pub fn polysyllable_count(text: &str) -> usize {
    remove_punctuation(text)
        .split_whitespace()
        .filter(|word| word_syllables(word) >= 3)
        .count()
}

#[must_use]
pub fn is_easy_word(word: &str) -> bool {
    EASY_WORDS.contains(word)
}

/// Distinct words not on the easy-word list with at least `syllable_threshold`
/// syllables.
#[must_use]
pub fn difficult_words(text: &str, syllable_threshold: usize) -> usize {
    let lowered = text.to_lowercase();
    let words: BTreeSet<&str> = WORD_RE.find_iter(&lowered).map(|m| m.as_str()).collect();

    words
        .into_iter()
        .filter(|word| !is_easy_word(word) && word_syllables(word) >= syllable_threshold)
        .count()
}

/// Estimated syllables in one word, at least one.
///
/// Counts vowel groups, then corrects for the usual silent endings of English
/// (`-e`, `-es`, `-ed`) and for `ia`/`iu` hiatus.
#[must_use]
pub fn word_syllables(word: &str) -> usize {
    let letters: Vec<char> = word
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect();

    if letters.len() <= 3 {
        return 1;
    }

    let mut count = 0usize;
    let mut prev_vowel = false;
    for &ch in &letters {
        let vowel = is_vowel(ch);
        if vowel && !prev_vowel {
            count += 1;
        }
        prev_vowel = vowel;
    }

    for pair in letters.windows(3) {
        if pair[1] == 'i' && matches!(pair[2], 'a' | 'u') && !matches!(pair[0], 'c' | 's' | 't' | 'g')
        {
            count += 1;
        }
    }

    let n = letters.len();
    let last = letters[n - 1];
    let before_last = letters[n - 2];
    let third_last = letters[n - 3];

    let silent_ending = match (before_last, last) {
        ('l', 'e') => is_vowel(third_last),
        (_, 'e') => before_last != 'e' && !is_vowel(before_last),
        ('e', 'd') => !matches!(third_last, 't' | 'd') && !is_vowel(third_last),
        ('e', 's') => !matches!(third_last, 's' | 'x' | 'z' | 'c' | 'g' | 'h') && !is_vowel(third_last),
        _ => false,
    };
    if silent_ending {
        count = count.saturating_sub(1);
    }

    count.max(1)
}

fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}
