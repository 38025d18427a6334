use glob::{MatchOptions, Pattern};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::encoding::TextEncoding;
use crate::error::{CorpusError, Result};

/// Default pattern for Tesserae-format documents
pub const DEFAULT_PATTERN: &str = "**/*.tess";

/// Encoding applied to documents whose id matches `pattern`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodingOverride {
    pub pattern: String,
    pub encoding: String,
}

/// Configuration for locating corpus documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Corpus root directory
    pub root: PathBuf,
    /// Glob matched against root-relative, `/`-separated paths
    pub pattern: String,
    /// Encoding label used when no override matches
    pub encoding: String,
    /// Per-document encoding overrides, first match wins
    pub encoding_overrides: Vec<EncodingOverride>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("texts"),
            pattern: DEFAULT_PATTERN.to_string(),
            encoding: "utf-8".to_string(),
            encoding_overrides: Vec::new(),
        }
    }
}

impl DiscoveryConfig {
    pub fn new(root: impl Into<PathBuf>, pattern: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            pattern: pattern.into(),
            ..Default::default()
        }
    }
}

/// A document id bound to its absolute path and encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDocument {
    pub id: String,
    pub path: PathBuf,
    pub encoding: TextEncoding,
}

/// Maps a corpus root and pattern to an ordered set of document ids
#[derive(Debug, Clone)]
pub struct Locator {
    root: PathBuf,
    fileids: BTreeSet<String>,
    default_encoding: String,
    overrides: Vec<(Pattern, String)>,
}

// WHY: `*` must not cross directory boundaries so `**` keeps its glob meaning
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

fn compile_pattern(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern)
        .map_err(|e| CorpusError::resolution(pattern, format!("invalid file pattern: {e}")))
}

/// Root-relative id with `/` separators, independent of platform
fn relative_id(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<&str> = relative
        .components()
        .map(|c| c.as_os_str().to_str())
        .collect::<Option<_>>()?;
    Some(parts.join("/"))
}

impl Locator {
    /// Walk `config.root` and record every file whose relative path matches the pattern.
    /// This blocks on filesystem traversal.
    pub fn discover(config: &DiscoveryConfig) -> Result<Self> {
        let root = config.root.clone();
        let root_id = root.display().to_string();

        // WHY: validate root directory exists early to fail fast with clear error
        if !root.exists() {
            return Err(CorpusError::resolution(root_id, "corpus root does not exist"));
        }
        if !root.is_dir() {
            return Err(CorpusError::resolution(root_id, "corpus root is not a directory"));
        }

        let pattern = compile_pattern(&config.pattern)?;
        let overrides = config
            .encoding_overrides
            .iter()
            .map(|o| Ok((compile_pattern(&o.pattern)?, o.encoding.clone())))
            .collect::<Result<Vec<_>>>()?;

        debug!("Starting corpus discovery in {} with pattern {}", root.display(), config.pattern);

        let mut fileids = BTreeSet::new();
        for entry in WalkDir::new(&root).follow_links(true).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable corpus entry: {}", e);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(id) = relative_id(&root, entry.path()) else {
                warn!("Skipping non UTF-8 path: {}", entry.path().display());
                continue;
            };
            if pattern.matches_with(&id, MATCH_OPTIONS) {
                debug!("Found document: {}", id);
                fileids.insert(id);
            }
        }

        info!("Corpus discovery completed: {} documents under {}", fileids.len(), root.display());

        Ok(Self {
            root,
            fileids,
            default_encoding: config.encoding.clone(),
            overrides,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Document ids in lexicographic order
    pub fn fileids(&self) -> Vec<String> {
        self.fileids.iter().cloned().collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.fileids.contains(id)
    }

    /// Encoding declared for a document id
    pub fn encoding(&self, id: &str) -> Result<TextEncoding> {
        let label = self
            .overrides
            .iter()
            .find(|(pattern, _)| pattern.matches_with(id, MATCH_OPTIONS))
            .map(|(_, label)| label.as_str())
            .unwrap_or(&self.default_encoding);

        TextEncoding::from_label(label)
            .ok_or_else(|| CorpusError::resolution(id, format!("unknown encoding '{label}'")))
    }

    /// Resolve every requested id before any of them is read.
    /// The order of `ids` is preserved, duplicates included.
    pub fn resolve<I, S>(&self, ids: I) -> Result<Vec<ResolvedDocument>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ids.into_iter()
            .map(|id| {
                let id = id.as_ref();
                if !self.contains(id) {
                    warn!("Requested document not in corpus: {}", id);
                    return Err(CorpusError::resolution(id, "document is not part of the corpus"));
                }
                Ok(ResolvedDocument {
                    id: id.to_string(),
                    path: self.root.join(id),
                    encoding: self.encoding(id)?,
                })
            })
            .collect()
    }

    /// Absolute paths paired with their encodings
    pub fn abspaths<I, S>(&self, ids: I) -> Result<Vec<(PathBuf, TextEncoding)>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(self
            .resolve(ids)?
            .into_iter()
            .map(|doc| (doc.path, doc.encoding))
            .collect())
    }
}
