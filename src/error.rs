//! Crate-level error types.

use std::fmt;

/// Errors produced by the backdrop crate.
///
/// The per-frame animation path never fails; these cover the edges that
/// touch the filesystem, serialization, or platform APIs.
#[derive(Debug)]
pub enum BackdropError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Frame snapshot serialization failure.
    Snapshot(serde_json::Error),
    /// A platform API (e.g. `matchMedia`) was unavailable or failed.
    Platform(String),
}

impl fmt::Display for BackdropError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Snapshot(e) => write!(f, "snapshot error: {e}"),
            Self::Platform(msg) => write!(f, "platform error: {msg}"),
        }
    }
}

impl std::error::Error for BackdropError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Snapshot(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BackdropError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for BackdropError {
    fn from(e: serde_json::Error) -> Self {
        Self::Snapshot(e)
    }
}
