// WHY: rule-driven segmentation keeps the default toolkit free of model files
// Boundary = end punctuation, optional closing quotes/brackets, then whitespace or end of text

use std::collections::HashSet;

use super::SentenceSegmenter;

/// Characters stripped from a word before abbreviation lookup
const QUOTE_CHARS: &[char] = &['"', '\'', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}', '\u{00AB}', '\u{00BB}'];

/// Configuration for sentence boundary detection rules
#[derive(Debug, Clone)]
pub struct SentenceBoundaryRules {
    /// End punctuation characters that can terminate a sentence
    pub end_punctuation: Vec<char>,
    /// Characters that stay attached to the sentence they close
    pub closing_punctuation: Vec<char>,
    /// Words (with their final period) that never end a sentence
    pub abbreviations: HashSet<String>,
}

impl Default for SentenceBoundaryRules {
    fn default() -> Self {
        Self {
            end_punctuation: vec!['.', '?', '!', '\u{037E}'],
            closing_punctuation: vec![
                '"', '\'', '\u{201D}', '\u{2019}', '\u{00BB}', ')', ']', '}',
            ],
            abbreviations: HashSet::new(),
        }
    }
}

impl SentenceBoundaryRules {
    /// Greek texts mark questions with `;`
    pub fn greek() -> Self {
        let mut rules = Self::default();
        rules.end_punctuation.push(';');
        rules
    }

    /// Latin texts abbreviate praenomina, e.g. "M. Tullius"
    pub fn latin() -> Self {
        const PRAENOMINA: &[&str] = &[
            "A.", "Ap.", "C.", "Cn.", "D.", "K.", "L.", "M.", "M'.", "Mam.", "N.", "P.", "Q.",
            "Ser.", "Sex.", "Sp.", "T.", "Ti.",
        ];
        Self {
            abbreviations: PRAENOMINA.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }

    fn is_end(&self, ch: char) -> bool {
        self.end_punctuation.contains(&ch)
    }

    fn is_closing(&self, ch: char) -> bool {
        self.closing_punctuation.contains(&ch)
    }

    /// Check if text ends with a known abbreviation
    fn ends_with_abbreviation(&self, text: &str) -> bool {
        if self.abbreviations.is_empty() {
            return false;
        }
        text.split_whitespace()
            .last()
            .map(|word| self.abbreviations.contains(word.trim_start_matches(QUOTE_CHARS)))
            .unwrap_or(false)
    }
}

/// Sentence segmenter driven by [`SentenceBoundaryRules`]
#[derive(Debug, Clone, Default)]
pub struct PunctuationSegmenter {
    rules: SentenceBoundaryRules,
}

impl PunctuationSegmenter {
    pub fn new(rules: SentenceBoundaryRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &SentenceBoundaryRules {
        &self.rules
    }

    /// Byte offsets just past each sentence-final punctuation run
    fn boundaries(&self, text: &str) -> Vec<usize> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let mut boundaries = Vec::new();
        let mut i = 0;

        while i < chars.len() {
            if !self.rules.is_end(chars[i].1) {
                i += 1;
                continue;
            }

            // Absorb repeated end punctuation and closers, e.g. `?!` or `."`
            let mut j = i + 1;
            while j < chars.len() && (self.rules.is_end(chars[j].1) || self.rules.is_closing(chars[j].1)) {
                j += 1;
            }

            let end = chars.get(j).map(|&(pos, _)| pos).unwrap_or(text.len());
            let followed_by_space = chars.get(j).map_or(true, |&(_, ch)| ch.is_whitespace());
            if followed_by_space && !self.rules.ends_with_abbreviation(&text[..end]) {
                boundaries.push(end);
            }
            i = j;
        }

        boundaries
    }
}

impl SentenceSegmenter for PunctuationSegmenter {
    fn segment(&self, paragraph: &str) -> anyhow::Result<Vec<String>> {
        let mut sentences = Vec::new();
        let mut start = 0;

        for end in self.boundaries(paragraph).into_iter().chain(std::iter::once(paragraph.len())) {
            if end < start {
                continue;
            }
            let sentence = paragraph[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            start = end;
        }

        Ok(sentences)
    }
}
