//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Numerolog
///
/// Every variant carries a single human-readable message. `Api`,
/// `Validation` and `Avatar` display the bare message because it is shown to
/// the user as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum NumerologyError {
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx backend response (server `detail` or the generic fallback).
    #[error("{0}")]
    Api(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Avatar(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl NumerologyError {
    /// Whether the backend reported that the requested record does not exist.
    ///
    /// Status codes are not preserved past the HTTP boundary, so this looks
    /// at the message the way the backend phrases it ("User not found").
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Api(message) => {
                let lower = message.to_lowercase();
                lower.contains("404") || lower.contains("not found")
            }
            _ => false,
        }
    }

    /// The message shown to the user.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Result type alias for Numerolog operations
pub type Result<T> = std::result::Result<T, NumerologyError>;
