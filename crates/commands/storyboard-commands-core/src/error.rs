//! Error types for the command compiler.

use serde::{Deserialize, Serialize};

/// Errors raised at the edges of the compiler.
///
/// The keyframe and simplification algorithms themselves are total; these
/// variants cover bad input entering the core and misuse of the sampling API.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CommandError {
    /// A state or setting carried a value the geometry cannot work with.
    #[error("Invalid {field} at time {time}: {reason}")]
    Validation {
        field: String,
        time: f64,
        reason: String,
    },

    /// The API was used in a way its configuration does not support.
    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    /// JSON import/export failed.
    #[error("Serialization error: {reason}")]
    Serialization { reason: String },
}

pub type Result<T> = core::result::Result<T, CommandError>;

impl CommandError {
    pub fn validation(field: impl Into<String>, time: f64, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            time,
            reason: reason.into(),
        }
    }

    pub fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation",
            Self::Configuration { .. } => "configuration",
            Self::Serialization { .. } => "serialization",
        }
    }
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}
