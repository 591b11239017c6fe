//! Crate-level error types.

use std::fmt;

/// Errors produced by the veneer crate.
///
/// Behaviors treat missing elements and malformed payloads as no-ops, so
/// these only cover plumbing: option files and host DOM calls that the
/// browser rejected.
#[derive(Debug)]
pub enum VeneerError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A DOM call failed on the host (stringified JS exception).
    Dom(String),
    /// A required global (`window`, `document`) is missing.
    MissingGlobal(&'static str),
}

impl fmt::Display for VeneerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Dom(msg) => write!(f, "DOM error: {msg}"),
            Self::MissingGlobal(name) => {
                write!(f, "no global `{name}` available")
            }
        }
    }
}

impl std::error::Error for VeneerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VeneerError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
