//! Error kinds for initguard operations

use std::fmt;

/// The kind of error that occurred.
///
/// Callers match on `ErrorKind` to decide how to handle a failure instead of
/// parsing message text. `LibraryState` sits alongside the other kinds a
/// guarded library reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The library was used before initialization or after teardown
    LibraryState,

    /// Invalid argument passed to function
    InvalidArgument,

    /// Invalid configuration
    ConfigInvalid,

    /// IO operation failed
    IoFailed,

    /// An unexpected error occurred - catch-all for unhandled cases
    Unexpected,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::LibraryState => "LibraryState",
            ErrorKind::InvalidArgument => "InvalidArgument",
            ErrorKind::ConfigInvalid => "ConfigInvalid",
            ErrorKind::IoFailed => "IoFailed",
            ErrorKind::Unexpected => "Unexpected",
        }
    }

    /// Check if this error kind signals a bug in the calling code
    pub fn is_programmer_error(&self) -> bool {
        matches!(self, ErrorKind::LibraryState | ErrorKind::InvalidArgument)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
