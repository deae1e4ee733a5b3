//! Error types for project loading

use thiserror::Error;

/// Result type alias for project loading
pub type Result<T> = std::result::Result<T, LoadError>;

/// Everything that can go wrong between issuing the retrieval and holding a
/// parsed project list. All variants share one handling path in the gallery.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Request never produced a response
    #[error("Could not reach {url}: {reason}")]
    Network { url: String, reason: String },

    /// Response arrived with a non-2xx status
    #[error("Could not load {url}: {status}")]
    Status { url: String, status: u16 },

    /// Body is not valid JSON
    #[error("Malformed project data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Body is valid JSON but not a list
    #[error("Project data is not a list")]
    NotAnArray,
}

impl LoadError {
    pub fn network(url: &str, reason: impl std::fmt::Display) -> Self {
        LoadError::Network {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}
