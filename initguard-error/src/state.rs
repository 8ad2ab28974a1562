//! The error raised when the library is used without initialization

use crate::{Cause, ErrorKind};
use std::error::Error as StdError;
use std::fmt;

const DEFAULT_MESSAGE: &str = "library used before initialization";

/// An operation that needs an initialized library ran before initialization
/// completed, or after teardown.
///
/// The value is immutable: `message` and `cause` are fixed at construction and
/// every accessor returns the same thing on each call. Constructing one has no
/// side effect; whoever catches it decides whether to log, display or abort.
///
/// There are four constructors, one for each combination of message and cause:
///
/// ```rust
/// use initguard_error::LibraryStateError;
/// use std::io;
///
/// let bare = LibraryStateError::new();
/// assert!(bare.message().is_none() && bare.cause().is_none());
///
/// let msg = LibraryStateError::with_message("Library not initialized");
/// assert_eq!(msg.message(), Some("Library not initialized"));
///
/// let caused = LibraryStateError::with_cause(io::Error::other("theme missing"));
/// assert!(caused.message().is_none());
/// assert_eq!(caused.to_string(), "theme missing");
///
/// let both = LibraryStateError::with_message_and_cause(
///     "init aborted",
///     io::Error::other("theme missing"),
/// );
/// assert_eq!(both.message(), Some("init aborted"));
/// assert!(both.cause().is_some());
/// ```
///
/// # Display
///
/// The message when one was given, otherwise the cause's own text, otherwise
/// `library used before initialization`. [`message`](Self::message) never
/// substitutes anything: it is `None` unless a message was supplied.
#[derive(Clone, Default)]
pub struct LibraryStateError {
    message: Option<String>,
    cause: Option<Cause>,
}

impl LibraryStateError {
    /// Create an error with no message and no cause
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an error with a message and no cause
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            cause: None,
        }
    }

    /// Create an error wrapping a cause, with no message of its own
    pub fn with_cause(cause: impl Into<Cause>) -> Self {
        Self {
            message: None,
            cause: Some(cause.into()),
        }
    }

    /// Create an error with both a message and a cause
    pub fn with_message_and_cause(message: impl Into<String>, cause: impl Into<Cause>) -> Self {
        Self {
            message: Some(message.into()),
            cause: Some(cause.into()),
        }
    }

    // =========================================================================
    // Getters
    // =========================================================================

    /// The message supplied at construction, if any
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The cause supplied at construction, if any
    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// Always [`ErrorKind::LibraryState`]
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::LibraryState
    }

    /// Unwind with this error as the panic payload.
    ///
    /// This is the unchecked way to report misuse: nothing in between needs to
    /// know about it. The panic hook is not invoked, so raising prints nothing.
    /// A boundary recovers the value with `catch_unwind` and
    /// `downcast::<LibraryStateError>()`.
    ///
    /// The downcast yields a `Box<LibraryStateError>`. Dereference it before
    /// calling [`cause`](Self::cause), otherwise the deprecated
    /// `std::error::Error::cause` of `Box` is picked instead.
    pub fn raise(self) -> ! {
        std::panic::resume_unwind(Box::new(self))
    }
}

impl fmt::Display for LibraryStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.message, &self.cause) {
            (Some(message), _) => f.write_str(message),
            (None, Some(cause)) => write!(f, "{}", cause),
            (None, None) => f.write_str(DEFAULT_MESSAGE),
        }
    }
}

impl fmt::Debug for LibraryStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("LibraryStateError");
        if let Some(message) = &self.message {
            debug.field("message", message);
        }
        if let Some(cause) = &self.cause {
            debug.field("cause", cause);
        }
        debug.finish()
    }
}

impl StdError for LibraryStateError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| cause.as_error() as &(dyn StdError + 'static))
    }
}
