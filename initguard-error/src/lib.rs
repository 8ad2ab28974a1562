//! # initguard-error
//!
//! Error taxonomy for libraries that must be initialized before use.
//!
//! ## Design Philosophy
//!
//! - **LibraryStateError**: the leaf error raised when the library is used
//!   before initialization (or after teardown)
//! - **ErrorKind**: know what error occurred, discriminate by tag not by text
//! - **Error**: the unified error with operation and key/value context
//! - **Cause**: a shared handle to the underlying error, kept through wrapping
//!
//! ## Usage
//!
//! ```rust
//! use initguard_error::{ErrorKind, LibraryStateError};
//!
//! fn render() -> Result<(), LibraryStateError> {
//!     Err(LibraryStateError::with_message("Library not initialized"))
//! }
//!
//! let err = render().unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::LibraryState);
//! assert_eq!(err.message(), Some("Library not initialized"));
//! ```
//!
//! ## Principles
//!
//! - Library misuse is a programmer error, not a recoverable condition
//! - `LibraryStateError` implements `std::error::Error + Send + Sync`, so `?`
//!   carries it into `anyhow::Error`, `Box<dyn Error>` or [`Error`] without
//!   every caller naming it
//! - Wrapping never drops the cause: the original stays reachable via `source()`

mod cause;
mod error;
mod kind;
mod state;

pub use cause::Cause;
pub use error::Error;
pub use kind::ErrorKind;
pub use state::LibraryStateError;

/// Result type alias using the unified Error
pub type Result<T> = std::result::Result<T, Error>;
