//! Error types for the `avn-site` binary.

use std::path::PathBuf;

use avn_render::RenderError;
use avn_store::StoreError;

use crate::config::ConfigError;

/// Errors that can end an `avn-site` command.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The content store failed to read or write.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A fragment could not be rendered.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// A record file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Input {
        /// The record file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A record file does not hold a JSON object of the expected shape.
    #[error("{} is not a valid {kind} record: {source}", path.display())]
    Record {
        /// The record file.
        path: PathBuf,
        /// `event` or `article`.
        kind: &'static str,
        /// The underlying JSON error.
        source: serde_json::Error,
    },

    /// Command output could not be written.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
