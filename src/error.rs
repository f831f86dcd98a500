//! Error types for xlcmd.
//!
//! The command layer itself has no failure path: it builds an
//! expression and hands it off. Errors here come from the host stand-in
//! (unknown command name), an evaluator implementation, or I/O when
//! writing the generated script.

use thiserror::Error;

/// Result type alias for xlcmd operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the dispatcher, evaluator, or CLI.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown command: {name}")]
    UnknownCommand { name: String },

    #[error("Evaluator error: {0}")]
    Evaluator(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Category-based exit code for the binary.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::UnknownCommand { .. } => 2,
            Self::Evaluator(_) => 3,
            Self::Io(_) | Self::Json(_) => 8,
        }
    }

    /// Recovery hint, if an actionable one exists.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::UnknownCommand { name } => Some(format!(
                "No command named '{name}'. Use `xlcmd list` to see available commands."
            )),
            Self::Evaluator(_) | Self::Io(_) | Self::Json(_) => None,
        }
    }
}
