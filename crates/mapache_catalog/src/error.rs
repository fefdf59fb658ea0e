//! Error types for the catalog module.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur while loading or querying the catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Unknown agent: {0}")]
    UnknownAgent(String),

    #[error("Duplicate agent id {id} (slugs '{first}' and '{second}')")]
    DuplicateId {
        id: u32,
        first: String,
        second: String,
    },

    #[error("Duplicate agent slug: {0}")]
    DuplicateSlug(String),

    #[error("Manifest parse error in {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    #[error("Unsupported manifest format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Create a parse error for a named manifest source.
    pub fn parse(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            message: message.into(),
        }
    }
}
