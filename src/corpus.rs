// Layered corpus views over the document stream and the injected toolkit.
// Ids resolve before a view is returned; later errors arrive in-stream.

use futures::stream::{BoxStream, StreamExt, TryStreamExt};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::discovery::{DiscoveryConfig, Locator};
use crate::encoding::TextEncoding;
use crate::error::{CorpusError, Result};
use crate::nlp::{TaggedToken, Toolkit};
use crate::normalization::{normalize_text, split_lines, split_paragraphs};
use crate::reader::{document_stream, ReaderConfig};
use crate::stream_ext::{flat_map_ok, halt_after};

/// Lazy, single-pass sequence produced by a corpus view
pub type CorpusStream<T> = BoxStream<'static, Result<T>>;

/// Sentences of one paragraph, each a sequence of tagged tokens
pub type TaggedParagraph = Vec<Vec<TaggedToken>>;

/// Complete configuration for a corpus reader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    pub discovery: DiscoveryConfig,
    pub reader: ReaderConfig,
    /// Default for the citation toggle on `text`, `lines` and every view built on `text`
    pub strip_citations: bool,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            discovery: DiscoveryConfig::default(),
            reader: ReaderConfig::default(),
            strip_citations: true,
        }
    }
}

impl CorpusConfig {
    pub fn new(root: impl Into<PathBuf>, pattern: impl Into<String>) -> Self {
        Self {
            discovery: DiscoveryConfig::new(root, pattern),
            ..Default::default()
        }
    }

    /// Load configuration from a JSON file; missing fields take their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_error = |reason: String| CorpusError::Config {
            path: path.to_path_buf(),
            reason,
        };

        let content = std::fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| config_error(e.to_string()))
    }
}

/// Reader over a corpus of citation-annotated texts
#[derive(Debug, Clone)]
pub struct TesseraeCorpus {
    locator: Locator,
    config: CorpusConfig,
    toolkit: Toolkit,
}

impl TesseraeCorpus {
    /// Discover the corpus described by `config` without blocking the runtime
    pub async fn open(config: CorpusConfig, toolkit: Toolkit) -> Result<Self> {
        let discovery = config.discovery.clone();
        let root = discovery.root.display().to_string();

        let locator = tokio::task::spawn_blocking(move || Locator::discover(&discovery))
            .await
            .map_err(|e| CorpusError::resolution(root, format!("discovery task failed: {e}")))??;

        info!(
            "Opened corpus at {} with {} documents",
            locator.root().display(),
            locator.fileids().len()
        );
        Ok(Self::from_locator(locator, config, toolkit))
    }

    pub fn from_locator(locator: Locator, config: CorpusConfig, toolkit: Toolkit) -> Self {
        Self {
            locator,
            config,
            toolkit,
        }
    }

    pub fn config(&self) -> &CorpusConfig {
        &self.config
    }

    pub fn toolkit(&self) -> &Toolkit {
        &self.toolkit
    }

    /// Every document id in the corpus, in lexicographic order
    pub fn fileids(&self) -> Vec<String> {
        self.locator.fileids()
    }

    pub fn abspaths<I, S>(&self, ids: I) -> Result<Vec<(PathBuf, TextEncoding)>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.locator.abspaths(ids)
    }

    pub fn encoding(&self, id: &str) -> Result<TextEncoding> {
        if !self.locator.contains(id) {
            return Err(CorpusError::resolution(id, "document is not part of the corpus"));
        }
        self.locator.encoding(id)
    }

    /// Raw text of each document, one whole document per item
    pub fn documents<I, S>(&self, ids: I) -> Result<CorpusStream<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let docs = self.locator.resolve(ids)?;
        debug!("Streaming {} documents", docs.len());
        Ok(document_stream(docs, self.config.reader.clone()))
    }

    /// Normalized text of each document
    pub fn text<I, S>(&self, ids: I, strip_citations: bool) -> Result<CorpusStream<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(self
            .documents(ids)?
            .map(move |doc| doc.map(|raw| normalize_text(&raw, strip_citations)))
            .boxed())
    }

    /// [`text`](Self::text) with the configured citation toggle
    pub fn text_default<I, S>(&self, ids: I) -> Result<CorpusStream<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.text(ids, self.config.strip_citations)
    }

    /// Paragraphs across documents, in document order
    pub fn paragraphs<I, S>(&self, ids: I) -> Result<CorpusStream<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = self.text_default(ids)?;
        Ok(flat_map_ok(text, |text: String| Ok(split_paragraphs(&text).map(str::to_string).collect())).boxed())
    }

    /// Lines across documents with blank-line runs collapsed
    pub fn lines<I, S>(&self, ids: I, strip_citations: bool) -> Result<CorpusStream<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let text = self.text(ids, strip_citations)?;
        Ok(flat_map_ok(text, |text: String| Ok(split_lines(&text))).boxed())
    }

    /// [`lines`](Self::lines) with the configured citation toggle
    pub fn lines_default<I, S>(&self, ids: I) -> Result<CorpusStream<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.lines(ids, self.config.strip_citations)
    }

    /// Sentences across paragraphs; ends after the first segmenter error
    pub fn sentences<I, S>(&self, ids: I) -> Result<CorpusStream<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let paragraphs = self.paragraphs(ids)?;
        let toolkit = self.toolkit.clone();
        let sentences = flat_map_ok(paragraphs, move |paragraph: String| toolkit.segment(&paragraph));
        Ok(halt_after(sentences, CorpusError::is_collaborator).boxed())
    }

    /// Word tokens across sentences; ends after the first collaborator error
    pub fn words<I, S>(&self, ids: I) -> Result<CorpusStream<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sentences = self.sentences(ids)?;
        let toolkit = self.toolkit.clone();
        let words = flat_map_ok(sentences, move |sentence: String| toolkit.tokenize(&sentence));
        Ok(halt_after(words, CorpusError::is_collaborator).boxed())
    }

    /// One item per paragraph: its sentences, each tokenized and tagged independently.
    /// Unlike `sentences` and `words`, results stay nested per paragraph.
    pub fn pos_tagged_paragraphs<I, S>(&self, ids: I) -> Result<CorpusStream<TaggedParagraph>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let paragraphs = self.paragraphs(ids)?;
        let toolkit = self.toolkit.clone();
        let tagged = paragraphs.map(move |paragraph| paragraph.and_then(|p| toolkit.tag_paragraph(&p)));
        Ok(halt_after(tagged, CorpusError::is_collaborator).boxed())
    }
}

/// Drain a view into memory, stopping at the first error
pub async fn collect_all<T>(stream: CorpusStream<T>) -> Result<Vec<T>> {
    stream.try_collect().await
}
