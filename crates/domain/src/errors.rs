//! Error types raised outside the network path

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Domain-level error for configuration and input problems
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum FlumeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for domain operations
pub type Result<T> = std::result::Result<T, FlumeError>;
