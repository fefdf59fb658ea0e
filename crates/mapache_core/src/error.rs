//! Error types for the core module.

use thiserror::Error;

/// Result type alias for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur during core operations.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Agent not found: {0}")]
    AgentNotFound(String),

    #[error("Step execution failed: {agent} - {message}")]
    StepExecutionFailed { agent: String, message: String },

    #[error("Workflow not found: {0}")]
    WorkflowNotFound(String),

    #[error("Invalid workflow state: {0}")]
    InvalidState(String),

    #[error("Timeout waiting for agent: {0}")]
    Timeout(String),

    #[error("Catalog error: {0}")]
    Catalog(#[from] mapache_catalog::CatalogError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}
