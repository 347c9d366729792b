//! Size policy applied by callers before extraction

use crate::IngestError;
use std::path::Path;
use tracing::warn;

/// Above this size a warning is logged (10 MiB)
pub const DEFAULT_WARN_BYTES: u64 = 10 * 1024 * 1024;

/// Above this size a document is rejected (50 MiB)
pub const DEFAULT_MAX_BYTES: u64 = 50 * 1024 * 1024;

/// Soft and hard size thresholds for input documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputPolicy {
    /// Soft threshold: warn about longer processing
    pub warn_bytes: u64,
    /// Hard threshold: reject
    pub max_bytes: u64,
}

impl Default for InputPolicy {
    fn default() -> Self {
        Self {
            warn_bytes: DEFAULT_WARN_BYTES,
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

impl InputPolicy {
    /// Check a file's size on disk before any of it is read
    ///
    /// Returns `true` when the soft threshold was crossed.
    pub async fn check_file(&self, path: &Path) -> Result<bool, IngestError> {
        let size = tokio::fs::metadata(path).await?.len();
        self.check_size(size)
    }

    /// Check a document size in bytes against the thresholds
    ///
    /// Returns `true` when the soft threshold was crossed.
    pub fn check_size(&self, size: u64) -> Result<bool, IngestError> {
        if size > self.max_bytes {
            return Err(IngestError::TooLarge {
                size,
                limit: self.max_bytes,
            });
        }
        if size > self.warn_bytes {
            warn!(
                "Large file detected: {:.2}MB. Processing may take longer.",
                size as f64 / 1024.0 / 1024.0
            );
            return Ok(true);
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_default_thresholds() {
        let policy = InputPolicy::default();
        assert_eq!(policy.warn_bytes, 10 * 1024 * 1024);
        assert_eq!(policy.max_bytes, 50 * 1024 * 1024);
    }

    #[test]
    fn test_small_document_passes_quietly() {
        let policy = InputPolicy { warn_bytes: 10, max_bytes: 20 };
        assert!(!policy.check_size(10).unwrap());
    }

    #[test]
    fn test_soft_threshold_warns() {
        let policy = InputPolicy { warn_bytes: 10, max_bytes: 20 };
        assert!(policy.check_size(11).unwrap());
        assert!(policy.check_size(20).unwrap());
    }

    #[test]
    fn test_hard_threshold_rejects() {
        let policy = InputPolicy { warn_bytes: 10, max_bytes: 20 };
        match policy.check_size(21) {
            Err(IngestError::TooLarge { size, limit }) => {
                assert_eq!(size, 21);
                assert_eq!(limit, 20);
            }
            other => panic!("Expected TooLarge, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_file_size_comes_from_metadata() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("huge.pdf");
        // Sparse: the length is set without writing any content
        File::create(&path).unwrap().set_len(DEFAULT_MAX_BYTES + 1).unwrap();

        match InputPolicy::default().check_file(&path).await {
            Err(IngestError::TooLarge { size, limit }) => {
                assert_eq!(size, DEFAULT_MAX_BYTES + 1);
                assert_eq!(limit, DEFAULT_MAX_BYTES);
            }
            other => panic!("Expected TooLarge, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let result = InputPolicy::default().check_file(&dir.path().join("absent.txt")).await;
        assert!(matches!(result, Err(IngestError::Io(_))));
    }
}
