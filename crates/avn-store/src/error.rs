//! Error types for the content store.
//!
//! Reads never fail: an absent or undecodable collection is an empty one.
//! Only writes to the underlying key-value backend can surface an error.

use std::path::PathBuf;

/// Errors that can occur in the content store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or writing a backing file failed.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A backing file exists but is not a JSON object of strings.
    #[error("corrupt store file {}: {source}", .path.display())]
    Corrupt {
        /// File that failed to decode.
        path: PathBuf,
        /// The underlying decode error.
        source: serde_json::Error,
    },

    /// A serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The write would take the store past its size quota.
    #[error("quota exceeded writing {key}: {required} bytes needed, quota is {quota}")]
    QuotaExceeded {
        /// Key being written.
        key: String,
        /// Total size the store would have after the write.
        required: usize,
        /// Configured maximum size.
        quota: usize,
    },
}
