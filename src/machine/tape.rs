//! Keystroke tape: an immutable journal of transitions.
//!
//! The tape records what was pressed and what the display showed after
//! each press, in order. It lives only in memory; `to_json` hands the
//! caller an export string, nothing is persisted.

use crate::machine::error::TapeError;
use crate::machine::Intent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single keypress and the display it produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TapeEntry {
    /// The intent that was applied
    pub intent: Intent,
    /// Display text after the transition
    pub display: String,
    /// When the intent was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered journal of keypresses.
///
/// The tape is immutable - `record` returns a new tape with the entry
/// appended, following the same discipline as the rest of the core.
///
/// # Example
///
/// ```rust
/// use deskcalc::machine::{Intent, Tape, TapeEntry};
/// use chrono::Utc;
///
/// let tape = Tape::new();
/// let tape = tape.record(TapeEntry {
///     intent: Intent::Digit('7'),
///     display: "7".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(tape.len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tape {
    entries: Vec<TapeEntry>,
}

impl Tape {
    /// Create a new empty tape.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record an entry, returning a new tape.
    ///
    /// This is a pure function - it does not mutate the existing tape but
    /// returns a new one with the entry appended.
    pub fn record(&self, entry: TapeEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.push(entry);
        Self { entries }
    }

    /// Get all entries in press order.
    pub fn entries(&self) -> &[TapeEntry] {
        &self.entries
    }

    /// Number of recorded keypresses.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether anything has been pressed yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Elapsed time from first to last keypress.
    ///
    /// Returns `None` for an empty tape.
    pub fn duration(&self) -> Option<Duration> {
        match (self.entries.first(), self.entries.last()) {
            (Some(first), Some(last)) => last
                .timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok(),
            _ => None,
        }
    }

    /// Export the tape as a JSON document.
    pub fn to_json(&self) -> Result<String, TapeError> {
        serde_json::to_string(self).map_err(|err| TapeError::SerializationFailed(err.to_string()))
    }
}
