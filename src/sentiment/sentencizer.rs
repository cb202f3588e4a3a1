/// Characters that can end a sentence.
pub const SENTENCE_TERMINATORS: [char; 9] = ['.', '!', '?', '…', '。', '！', '？', '؟', '।'];

/// Characters that stay attached to the sentence they close, e.g. `"Stop!")`.
const CLOSING_CHARS: [char; 9] = ['"', '\'', ')', ']', '}', '»', '”', '’', '›'];

/// Splits text into sentences after runs of sentence-final punctuation.
///
/// A boundary is only placed where the terminator run is followed by
/// whitespace, so decimals like `3.14` stay whole.
/// Returned sentences are trimmed; blank ones are dropped.
#[must_use]
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut after_terminator = false;

    for (idx, ch) in text.char_indices() {
        if SENTENCE_TERMINATORS.contains(&ch) {
            after_terminator = true;
        } else if after_terminator && ch.is_whitespace() {
            push_trimmed(&mut sentences, &text[start..idx]);
            start = idx;
            after_terminator = false;
        } else if !CLOSING_CHARS.contains(&ch) {
            after_terminator = false;
        }
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

fn push_trimmed<'a>(sentences: &mut Vec<&'a str>, candidate: &'a str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed);
    }
}
