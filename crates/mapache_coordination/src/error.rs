//! Error types for the coordination module.

use thiserror::Error;

/// Result type alias for coordination operations.
pub type CoordinationResult<T> = Result<T, CoordinationError>;

/// Errors that can occur during agent coordination.
#[derive(Error, Debug)]
pub enum CoordinationError {
    #[error("Broker is shut down")]
    BrokerShutDown,

    #[error("No mailbox registered for agent: {0}")]
    NoMailbox(String),

    #[error("Invalid priority {0} (expected 0-10)")]
    InvalidPriority(u8),
}
