//! Error types for the stepwise core library

use thiserror::Error;

/// Core error type for agent operations
#[derive(Error, Debug)]
pub enum StepwiseError {
    /// The policy failed to produce a response
    #[error("Policy error: {0}")]
    Policy(String),

    /// Configuration rejected at construction time
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias for agent operations
pub type Result<T> = std::result::Result<T, StepwiseError>;
