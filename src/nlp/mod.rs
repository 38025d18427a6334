// Pluggable segmentation, tokenization and tagging engines.
// A `Toolkit` bundles one engine per capability; plain closures implement the traits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::error::{CorpusError, Result, Stage};

pub mod sentence;
pub mod tagger;
pub mod tokenizer;

pub use sentence::{PunctuationSegmenter, SentenceBoundaryRules};
pub use tagger::LexiconTagger;
pub use tokenizer::PunctuationTokenizer;

/// A token paired with its part-of-speech label. Labels are opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaggedToken {
    pub token: String,
    pub tag: String,
}

impl TaggedToken {
    pub fn new(token: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            tag: tag.into(),
        }
    }
}

impl From<(String, String)> for TaggedToken {
    fn from((token, tag): (String, String)) -> Self {
        Self { token, tag }
    }
}

impl fmt::Display for TaggedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.token, self.tag)
    }
}

/// Splits a paragraph into ordered sentences
pub trait SentenceSegmenter: Send + Sync {
    fn segment(&self, paragraph: &str) -> anyhow::Result<Vec<String>>;
}

/// Splits a sentence into ordered word tokens
pub trait WordTokenizer: Send + Sync {
    fn tokenize(&self, sentence: &str) -> anyhow::Result<Vec<String>>;
}

/// Assigns one label to each token, in token order
pub trait PosTagger: Send + Sync {
    fn tag(&self, tokens: &[String]) -> anyhow::Result<Vec<TaggedToken>>;
}

impl<F> SentenceSegmenter for F
where
    F: Fn(&str) -> anyhow::Result<Vec<String>> + Send + Sync,
{
    fn segment(&self, paragraph: &str) -> anyhow::Result<Vec<String>> {
        self(paragraph)
    }
}

impl<F> WordTokenizer for F
where
    F: Fn(&str) -> anyhow::Result<Vec<String>> + Send + Sync,
{
    fn tokenize(&self, sentence: &str) -> anyhow::Result<Vec<String>> {
        self(sentence)
    }
}

impl<F> PosTagger for F
where
    F: Fn(&[String]) -> anyhow::Result<Vec<TaggedToken>> + Send + Sync,
{
    fn tag(&self, tokens: &[String]) -> anyhow::Result<Vec<TaggedToken>> {
        self(tokens)
    }
}

/// The set of language engines a corpus decomposes text with
#[derive(Clone)]
pub struct Toolkit {
    segmenter: Arc<dyn SentenceSegmenter>,
    tokenizer: Arc<dyn WordTokenizer>,
    tagger: Arc<dyn PosTagger>,
}

impl Toolkit {
    pub fn new(
        segmenter: impl SentenceSegmenter + 'static,
        tokenizer: impl WordTokenizer + 'static,
        tagger: impl PosTagger + 'static,
    ) -> Self {
        Self {
            segmenter: Arc::new(segmenter),
            tokenizer: Arc::new(tokenizer),
            tagger: Arc::new(tagger),
        }
    }

    /// Punctuation-driven engines with language-neutral rules
    pub fn rule_based() -> Self {
        Self::new(
            PunctuationSegmenter::default(),
            PunctuationTokenizer,
            LexiconTagger::default(),
        )
    }

    /// Rule-based engines treating `;` as the Greek question mark
    pub fn rule_based_greek() -> Self {
        Self::new(
            PunctuationSegmenter::new(SentenceBoundaryRules::greek()),
            PunctuationTokenizer,
            LexiconTagger::default(),
        )
    }

    /// Rule-based engines that know Latin praenomen abbreviations
    pub fn rule_based_latin() -> Self {
        Self::new(
            PunctuationSegmenter::new(SentenceBoundaryRules::latin()),
            PunctuationTokenizer,
            LexiconTagger::default(),
        )
    }

    pub fn with_segmenter(mut self, segmenter: impl SentenceSegmenter + 'static) -> Self {
        self.segmenter = Arc::new(segmenter);
        self
    }

    pub fn with_tokenizer(mut self, tokenizer: impl WordTokenizer + 'static) -> Self {
        self.tokenizer = Arc::new(tokenizer);
        self
    }

    pub fn with_tagger(mut self, tagger: impl PosTagger + 'static) -> Self {
        self.tagger = Arc::new(tagger);
        self
    }

    pub fn segment(&self, paragraph: &str) -> Result<Vec<String>> {
        self.segmenter
            .segment(paragraph)
            .map_err(|e| CorpusError::collaborator(Stage::SentenceSegmentation, e))
    }

    pub fn tokenize(&self, sentence: &str) -> Result<Vec<String>> {
        self.tokenizer
            .tokenize(sentence)
            .map_err(|e| CorpusError::collaborator(Stage::WordTokenization, e))
    }

    /// Tag tokens, rejecting output that does not pair up with the input
    pub fn tag(&self, tokens: &[String]) -> Result<Vec<TaggedToken>> {
        let tagged = self
            .tagger
            .tag(tokens)
            .map_err(|e| CorpusError::collaborator(Stage::PosTagging, e))?;

        if tagged.len() != tokens.len() {
            return Err(CorpusError::collaborator(
                Stage::PosTagging,
                anyhow::anyhow!(
                    "tagger returned {} tagged tokens for {} tokens",
                    tagged.len(),
                    tokens.len()
                ),
            ));
        }
        Ok(tagged)
    }

    /// Segment a paragraph, then tokenize and tag each sentence independently
    pub fn tag_paragraph(&self, paragraph: &str) -> Result<Vec<Vec<TaggedToken>>> {
        self.segment(paragraph)?
            .iter()
            .map(|sentence| self.tag(&self.tokenize(sentence)?))
            .collect()
    }
}

impl Default for Toolkit {
    fn default() -> Self {
        Self::rule_based()
    }
}

impl fmt::Debug for Toolkit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Toolkit").finish_non_exhaustive()
    }
}
