//! Configuration Error Types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the rule resource
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Rule file does not exist
    #[error("Rule file not found: {}", path.display())]
    Missing { path: PathBuf },

    /// Rule file exists but could not be read
    #[error("Failed to read rule file {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content is not a JSON array of rule objects
    #[error("Malformed rule data: {0}")]
    Malformed(#[from] serde_json::Error),
}
