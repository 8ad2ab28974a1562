//! Guard error types
//!
//! Re-exports initguard-error and provides the messages the guard raises.

pub use initguard_error::{Cause, Error, ErrorKind, LibraryStateError, Result};

// =============================================================================
// Guard-specific error constructors
// =============================================================================

/// Create the error for an operation attempted before initialization
pub fn not_initialized() -> LibraryStateError {
    LibraryStateError::with_message("Library not initialized")
}

/// Create the error for a second initialization
pub fn already_initialized() -> LibraryStateError {
    LibraryStateError::with_message("Library already initialized")
}

/// Create the error for an operation attempted after teardown
pub fn torn_down() -> LibraryStateError {
    LibraryStateError::with_message("Library has been torn down")
}

/// Create a ConfigInvalid error wrapping the parser failure
pub fn config_invalid(err: serde_json::Error) -> Error {
    Error::config_invalid(err.to_string())
        .with_operation("config::from_json")
        .with_context("line", err.line().to_string())
        .set_source(err)
}
