//! # Initialization guard
//!
//! Tracks whether the library has been set up and rejects operations that
//! need setup when it has not happened (or has been undone).

use crate::config::GuardConfig;
use crate::error::{self, LibraryStateError};
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use tracing::{debug, warn};

/// Lifecycle of a guarded library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LibraryState {
    /// Setup has not run yet
    Uninitialized = 0,

    /// Setup completed, operations are allowed
    Initialized = 1,

    /// Torn down; operations are rejected again
    TornDown = 2,
}

impl LibraryState {
    /// Returns the state as a static string
    pub fn as_str(&self) -> &'static str {
        match self {
            LibraryState::Uninitialized => "uninitialized",
            LibraryState::Initialized => "initialized",
            LibraryState::TornDown => "torn down",
        }
    }
}

impl From<u8> for LibraryState {
    fn from(v: u8) -> Self {
        match v {
            1 => LibraryState::Initialized,
            2 => LibraryState::TornDown,
            _ => LibraryState::Uninitialized,
        }
    }
}

impl From<LibraryState> for u8 {
    fn from(state: LibraryState) -> u8 {
        state as u8
    }
}

impl fmt::Display for LibraryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Initialization guard for one library.
///
/// All transitions are atomic compare-exchanges, so a guard can be shared
/// across threads (typically in a `static` or an `Arc`) without a lock.
/// Exactly one of several concurrent `initialize` calls succeeds.
#[derive(Debug)]
pub struct LibraryGuard {
    state: AtomicU8,
    config: GuardConfig,
}

impl Default for LibraryGuard {
    fn default() -> Self {
        Self::new(GuardConfig::default())
    }
}

impl LibraryGuard {
    /// Create a guard in the `Uninitialized` state
    pub fn new(config: GuardConfig) -> Self {
        Self {
            state: AtomicU8::new(LibraryState::Uninitialized.into()),
            config,
        }
    }

    /// Get the guard configuration
    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Current lifecycle state
    pub fn state(&self) -> LibraryState {
        LibraryState::from(self.state.load(Ordering::Acquire))
    }

    /// Check if operations are currently allowed
    pub fn is_initialized(&self) -> bool {
        self.state() == LibraryState::Initialized
    }

    /// Mark setup as complete.
    ///
    /// Fails if already initialized, or if torn down and the config does not
    /// allow re-initialization.
    pub fn initialize(&self) -> Result<(), LibraryStateError> {
        let mut current = self.state();
        loop {
            match current {
                LibraryState::Initialized => {
                    return Err(self.reject("initialize", current, error::already_initialized()));
                }
                LibraryState::TornDown if !self.config.allow_reinitialize => {
                    return Err(self.reject("initialize", current, error::torn_down()));
                }
                _ => {}
            }

            match self.state.compare_exchange(
                current.into(),
                LibraryState::Initialized.into(),
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => {
                    debug!(library = %self.config.library, from = %current, "library initialized");
                    return Ok(());
                }
                Err(actual) => current = LibraryState::from(actual),
            }
        }
    }

    /// Undo setup; later guarded operations are rejected.
    ///
    /// Only an initialized library can be torn down: from any other state,
    /// including an earlier teardown, this fails with `Library not initialized`.
    pub fn teardown(&self) -> Result<(), LibraryStateError> {
        match self.state.compare_exchange(
            LibraryState::Initialized.into(),
            LibraryState::TornDown.into(),
            Ordering::AcqRel,
            Ordering::Acquire,
        ) {
            Ok(_) => {
                debug!(library = %self.config.library, "library torn down");
                Ok(())
            }
            Err(actual) => Err(self.reject(
                "teardown",
                LibraryState::from(actual),
                error::not_initialized(),
            )),
        }
    }

    /// Check that `operation` may run now.
    ///
    /// An uninitialized library yields a `LibraryStateError` with the message
    /// `Library not initialized` and no cause.
    pub fn ensure_initialized(&self, operation: &'static str) -> Result<(), LibraryStateError> {
        match self.state() {
            LibraryState::Initialized => Ok(()),
            LibraryState::Uninitialized => Err(self.reject(
                operation,
                LibraryState::Uninitialized,
                error::not_initialized(),
            )),
            LibraryState::TornDown => {
                Err(self.reject(operation, LibraryState::TornDown, error::torn_down()))
            }
        }
    }

    /// Like [`ensure_initialized`](Self::ensure_initialized), but raises the
    /// error by unwinding instead of returning it
    pub fn assert_initialized(&self, operation: &'static str) {
        if let Err(err) = self.ensure_initialized(operation) {
            err.raise();
        }
    }

    /// Run `f` only if the library is initialized
    pub fn guarded<T>(
        &self,
        operation: &'static str,
        f: impl FnOnce() -> T,
    ) -> Result<T, LibraryStateError> {
        self.ensure_initialized(operation)?;
        Ok(f())
    }

    fn reject(
        &self,
        operation: &'static str,
        state: LibraryState,
        err: LibraryStateError,
    ) -> LibraryStateError {
        warn!(
            library = %self.config.library,
            operation,
            state = %state,
            "{}",
            err
        );
        err
    }
}
