use futures::stream::{self, BoxStream, StreamExt};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::discovery::ResolvedDocument;
use crate::error::{CorpusError, Result};
use crate::stream_ext::halt_after;

/// Configuration for document reading behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    /// End the stream after the first read or decode error
    pub fail_fast: bool,
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
    /// Documents read ahead concurrently; output order is unaffected.
    /// Up to this many documents are held in memory at once.
    pub prefetch: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            buffer_size: 8192, // WHY: 8KB is optimal for most filesystems and network storage
            prefetch: 1,
        }
    }
}

/// Statistics for one document read
#[derive(Debug, Clone)]
struct ReadStats {
    id: String,
    bytes_read: u64,
    duration_ms: u64,
}

impl ReadStats {
    fn megabytes_per_sec(&self) -> f64 {
        if self.duration_ms > 0 {
            (self.bytes_read as f64 / 1_000_000.0) / (self.duration_ms as f64 / 1000.0)
        } else {
            0.0
        }
    }
}

/// Read and decode one whole document.
/// The file handle is released before decoding starts, and on every early return.
pub async fn read_document(doc: &ResolvedDocument, config: &ReaderConfig) -> Result<String> {
    let start_time = Instant::now();
    debug!("Starting async read of document: {}", doc.id);

    let io_error = |source| CorpusError::Io {
        id: doc.id.clone(),
        source,
    };

    let bytes = {
        let file = File::open(&doc.path).await.map_err(io_error)?;
        // WHY: BufReader with custom buffer size reduces syscalls and improves throughput
        let mut reader = BufReader::with_capacity(config.buffer_size.max(1), file);
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await.map_err(io_error)?;
        bytes
    };

    let stats = ReadStats {
        id: doc.id.clone(),
        bytes_read: bytes.len() as u64,
        duration_ms: start_time.elapsed().as_millis() as u64,
    };

    let text = doc.encoding.decode(bytes).map_err(|reason| {
        warn!("Decoding error in {}: {}", doc.id, reason);
        CorpusError::Decode {
            id: doc.id.clone(),
            encoding: doc.encoding.to_string(),
            reason,
        }
    })?;

    info!(
        "Read {}: {} bytes in {}ms ({:.2} MB/s)",
        stats.id,
        stats.bytes_read,
        stats.duration_ms,
        stats.megabytes_per_sec()
    );

    Ok(text)
}

/// Lazily read `docs` in order, one whole document per item.
///
/// Nothing is opened until the stream is polled. Dropping the stream drops
/// any in-flight read together with its file handle.
pub fn document_stream(
    docs: Vec<ResolvedDocument>,
    config: ReaderConfig,
) -> BoxStream<'static, Result<String>> {
    let prefetch = config.prefetch.max(1);
    let fail_fast = config.fail_fast;

    let reads = stream::iter(docs)
        .map(move |doc| {
            let config = config.clone();
            async move { read_document(&doc, &config).await }
        })
        // WHY: `buffered` yields in submission order, so read-ahead never reorders documents
        .buffered(prefetch);

    if fail_fast {
        halt_after(reads, |_| true).boxed()
    } else {
        reads.boxed()
    }
}
