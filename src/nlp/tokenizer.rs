use super::WordTokenizer;

/// Punctuation that forms a token of its own.
/// Apostrophes and elision marks are absent: they belong to the word they elide.
pub(crate) fn is_punctuation(ch: char) -> bool {
    match ch {
        '\'' => false,
        c if c.is_ascii_punctuation() => true,
        '\u{00B7}' // middle dot
        | '\u{0387}' // Greek ano teleia
        | '\u{037E}' // Greek question mark
        | '\u{00AB}' | '\u{00BB}'
        | '\u{2013}' | '\u{2014}' | '\u{2026}'
        | '\u{2018}' | '\u{201C}' | '\u{201D}' => true,
        _ => false,
    }
}

/// Splits on whitespace and separates every punctuation character into its own token
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationTokenizer;

impl WordTokenizer for PunctuationTokenizer {
    fn tokenize(&self, sentence: &str) -> anyhow::Result<Vec<String>> {
        let mut tokens = Vec::new();
        let mut word_start: Option<usize> = None;

        for (pos, ch) in sentence.char_indices() {
            if ch.is_whitespace() || is_punctuation(ch) {
                if let Some(start) = word_start.take() {
                    tokens.push(sentence[start..pos].to_string());
                }
                if !ch.is_whitespace() {
                    tokens.push(ch.to_string());
                }
            } else if word_start.is_none() {
                word_start = Some(pos);
            }
        }
        if let Some(start) = word_start {
            tokens.push(sentence[start..].to_string());
        }

        Ok(tokens)
    }
}
