pub mod corpus;
pub mod discovery;
pub mod encoding;
pub mod error;
pub mod nlp;
pub mod normalization;
pub mod reader;
mod stream_ext;

// Re-export main types for convenient access
pub use corpus::{collect_all, CorpusConfig, CorpusStream, TaggedParagraph, TesseraeCorpus};
pub use discovery::{DiscoveryConfig, EncodingOverride, Locator, ResolvedDocument};
pub use encoding::TextEncoding;
pub use error::{CorpusError, Stage};
pub use reader::ReaderConfig;

// Re-export collaborator interfaces and built-in engines
pub use nlp::{
    LexiconTagger, PosTagger, PunctuationSegmenter, PunctuationTokenizer, SentenceBoundaryRules,
    SentenceSegmenter, TaggedToken, Toolkit, WordTokenizer,
};
