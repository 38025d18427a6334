// Integration test utilities and common code
// WHY: Centralized utilities avoid duplication across integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tesserae::{CorpusConfig, TesseraeCorpus, Toolkit};

/// Install a test-writer subscriber once per test binary
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_target(false)
        .with_test_writer()
        .try_init();
}

/// Test fixture helper for creating temporary corpora of `.tess` files
pub struct TestFixture {
    pub temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestFixture {
    /// Create a new test fixture with temporary directory
    pub fn new() -> Self {
        init_test_logging();
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            root_path,
        }
    }

    /// Create a corpus document with given content
    pub fn create_tess_file<P: AsRef<Path>>(&self, relative_path: P, content: &str) -> PathBuf {
        self.create_raw_file(relative_path, content.as_bytes())
    }

    /// Create a file with arbitrary bytes, e.g. invalid UTF-8
    pub fn create_raw_file<P: AsRef<Path>>(&self, relative_path: P, content: &[u8]) -> PathBuf {
        let file_path = self.root_path.join(relative_path);

        // Create parent directories if needed
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }

        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    pub fn config(&self) -> CorpusConfig {
        CorpusConfig::new(&self.root_path, "**/*.tess")
    }

    /// Open the fixture corpus with the default toolkit
    pub async fn open(&self) -> TesseraeCorpus {
        self.open_with(self.config(), Toolkit::default()).await
    }

    pub async fn open_with(&self, config: CorpusConfig, toolkit: Toolkit) -> TesseraeCorpus {
        TesseraeCorpus::open(config, toolkit)
            .await
            .expect("Failed to open fixture corpus")
    }

    /// Number of file descriptors this process holds open under the fixture root
    #[cfg(target_os = "linux")]
    pub fn open_handles(&self) -> usize {
        let root = fs::canonicalize(&self.root_path).expect("Failed to canonicalize root");
        fs::read_dir("/proc/self/fd")
            .expect("Failed to list /proc/self/fd")
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| fs::read_link(entry.path()).ok())
            .filter(|target| target.starts_with(&root))
            .count()
    }
}

/// Compare two strings line by line, providing detailed diff on mismatch
pub fn assert_golden_file(actual: &str, expected: &str, context: &str) {
    let actual_lines: Vec<&str> = actual.lines().collect();
    let expected_lines: Vec<&str> = expected.lines().collect();

    if actual_lines.len() != expected_lines.len() {
        panic!(
            "{}: Line count mismatch. Expected {} lines, got {} lines\nActual:\n{}",
            context,
            expected_lines.len(),
            actual_lines.len(),
            actual
        );
    }

    for (i, (actual_line, expected_line)) in actual_lines.iter().zip(expected_lines.iter()).enumerate() {
        if actual_line != expected_line {
            panic!(
                "{}: Line {} mismatch\nExpected: {}\nActual:   {}",
                context,
                i + 1,
                expected_line,
                actual_line
            );
        }
    }
}
