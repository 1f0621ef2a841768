//! State machine error types.

use thiserror::Error;

/// Errors from mapping raw key input onto intents.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IntentError {
    #[error("Unrecognized key '{0}'")]
    UnrecognizedKey(String),
}

/// Errors from exporting the keystroke tape.
#[derive(Debug, Error)]
pub enum TapeError {
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),
}
