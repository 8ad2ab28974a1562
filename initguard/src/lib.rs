//! # initguard
//!
//! Guards a library's one-time setup and raises [`LibraryStateError`] when an
//! operation runs before initialization or after teardown.
//!
//! ## Core Concepts
//! - **LibraryGuard**: lock-free lifecycle cell (`Uninitialized -> Initialized -> TornDown`)
//! - **GuardConfig**: serde-loadable settings for a guard
//! - **boundary**: catch a raised error by type at the top level and log its chain
//!
//! ```rust
//! use initguard::{GuardConfig, LibraryGuard};
//!
//! let guard = LibraryGuard::new(GuardConfig::default());
//! let err = guard.ensure_initialized("widget::render").unwrap_err();
//! assert_eq!(err.message(), Some("Library not initialized"));
//!
//! guard.initialize().unwrap();
//! assert!(guard.ensure_initialized("widget::render").is_ok());
//! ```

pub mod boundary;
pub mod config;
pub mod error;
pub mod guard;

pub use config::GuardConfig;
pub use error::{Cause, Error, ErrorKind, LibraryStateError, Result};
pub use guard::{LibraryGuard, LibraryState};
