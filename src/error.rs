// Error types for corpus reading
// Resolution fails before any text is read; everything else is yielded in-stream.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Pipeline stage that invoked a pluggable collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    SentenceSegmentation,
    WordTokenization,
    PosTagging,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::SentenceSegmentation => "sentence segmentation",
            Stage::WordTokenization => "word tokenization",
            Stage::PosTagging => "part-of-speech tagging",
        };
        f.write_str(name)
    }
}

/// Errors produced while resolving, reading and decomposing corpus documents
#[derive(Error, Debug)]
pub enum CorpusError {
    /// Document id, encoding or corpus root could not be resolved
    #[error("cannot resolve '{id}': {reason}")]
    Resolution { id: String, reason: String },

    /// Underlying resource could not be opened or read
    #[error("failed to read '{id}': {source}")]
    Io {
        id: String,
        #[source]
        source: std::io::Error,
    },

    /// Bytes are not valid in the resolved encoding
    #[error("failed to decode '{id}' as {encoding}: {reason}")]
    Decode {
        id: String,
        encoding: String,
        reason: String,
    },

    /// A segmenter, tokenizer or tagger failed or returned malformed output
    #[error("{stage} failed: {source}")]
    Collaborator {
        stage: Stage,
        #[source]
        source: anyhow::Error,
    },

    /// Configuration file could not be loaded
    #[error("invalid configuration {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },
}

impl CorpusError {
    pub fn resolution(id: impl Into<String>, reason: impl Into<String>) -> Self {
        CorpusError::Resolution {
            id: id.into(),
            reason: reason.into(),
        }
    }

    pub fn collaborator(stage: Stage, source: anyhow::Error) -> Self {
        CorpusError::Collaborator { stage, source }
    }

    pub fn is_resolution(&self) -> bool {
        matches!(self, CorpusError::Resolution { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, CorpusError::Decode { .. })
    }

    pub fn is_collaborator(&self) -> bool {
        matches!(self, CorpusError::Collaborator { .. })
    }

    /// Document the error is attributed to, if any
    pub fn document_id(&self) -> Option<&str> {
        match self {
            CorpusError::Resolution { id, .. }
            | CorpusError::Io { id, .. }
            | CorpusError::Decode { id, .. } => Some(id),
            CorpusError::Collaborator { .. } | CorpusError::Config { .. } => None,
        }
    }
}

pub type Result<T, E = CorpusError> = std::result::Result<T, E>;
