//! Crate-level error types.

use std::fmt;

/// Errors produced by the walkthrough crate.
///
/// Only startup and host paths return these. The navigation core itself
/// never fails: unknown viewpoints, malformed links and stale transitions
/// all degrade to "nothing happens".
#[derive(Debug)]
pub enum WalkthroughError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML/JSON options parsing or serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for WalkthroughError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for WalkthroughError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for WalkthroughError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
