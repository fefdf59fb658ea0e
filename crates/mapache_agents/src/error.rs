//! Error types for the agents module.

use thiserror::Error;

/// Result type alias for agent operations.
pub type AgentResult<T> = Result<T, AgentError>;

/// Errors that can occur during agent operations.
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Agent not found: {0}")]
    NotFound(String),

    #[error("Agent execution failed: {agent} - {message}")]
    ExecutionFailed { agent: String, message: String },

    #[error("Catalog error: {0}")]
    Catalog(#[from] mapache_catalog::CatalogError),

    #[error("Core error: {0}")]
    Core(#[from] mapache_core::CoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
