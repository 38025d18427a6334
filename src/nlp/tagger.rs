use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use super::tokenizer::is_punctuation;
use super::{PosTagger, TaggedToken};

/// Tag for tokens made only of digits
pub const NUMERAL_TAG: &str = "CD";

/// Fallback tag for tokens missing from the lexicon
pub const DEFAULT_TAG: &str = "NN";

/// Dictionary tagger: lowercase lexicon lookup with a fallback tag.
/// Punctuation tokens are tagged with themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconTagger {
    pub default_tag: String,
    pub lexicon: HashMap<String, String>,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self {
            default_tag: DEFAULT_TAG.to_string(),
            lexicon: HashMap::new(),
        }
    }
}

impl LexiconTagger {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self {
            lexicon: entries
                .into_iter()
                .map(|(word, tag)| (word.as_ref().to_lowercase(), tag.into()))
                .collect(),
            ..Self::default()
        }
    }

    /// Load `{"default_tag": "...", "lexicon": {"word": "TAG", ...}}`
    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon {}", path.display()))?;
        let tagger: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse lexicon {}", path.display()))?;
        Ok(Self::new(tagger.lexicon).with_default_tag(tagger.default_tag))
    }

    pub fn with_default_tag(mut self, tag: impl Into<String>) -> Self {
        self.default_tag = tag.into();
        self
    }

    fn tag_for(&self, token: &str) -> String {
        if !token.is_empty() && token.chars().all(is_punctuation) {
            return token.to_string();
        }
        if !token.is_empty() && token.chars().all(|c| c.is_numeric()) {
            return NUMERAL_TAG.to_string();
        }
        self.lexicon
            .get(&token.to_lowercase())
            .cloned()
            .unwrap_or_else(|| self.default_tag.clone())
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, tokens: &[String]) -> anyhow::Result<Vec<TaggedToken>> {
        Ok(tokens
            .iter()
            .map(|token| TaggedToken::new(token.as_str(), self.tag_for(token)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_lexicon_lookup_is_case_insensitive() {
        let tagger = LexiconTagger::new([("Cano", "VB"), ("arma", "NNS")]);
        let tagged = tagger.tag(&tokens(&["ARMA", "virumque", "cano", "."])).unwrap();

        assert_eq!(
            tagged,
            vec![
                TaggedToken::new("ARMA", "NNS"),
                TaggedToken::new("virumque", "NN"),
                TaggedToken::new("cano", "VB"),
                TaggedToken::new(".", "."),
            ]
        );
    }

    #[test]
    fn test_numerals_and_custom_default() {
        let tagger = LexiconTagger::default().with_default_tag("UNK");
        let tagged = tagger.tag(&tokens(&["1184", "Ἀχιλλεύς"])).unwrap();

        assert_eq!(tagged[0].tag, NUMERAL_TAG);
        assert_eq!(tagged[1].tag, "UNK");
    }

    #[test]
    fn test_from_json_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("lexicon.json");
        std::fs::write(&path, r#"{"default_tag": "X", "lexicon": {"Μῆνιν": "NN"}}"#).unwrap();

        let tagger = LexiconTagger::from_json_file(&path).unwrap();
        let tagged = tagger.tag(&tokens(&["μῆνιν", "ἄειδε"])).unwrap();

        assert_eq!(tagged[0].tag, "NN");
        assert_eq!(tagged[1].tag, "X");
    }

    #[test]
    fn test_from_json_file_rejects_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("lexicon.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(LexiconTagger::from_json_file(&path).is_err());
    }
}
