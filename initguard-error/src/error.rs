//! The unified Error type for initguard

use crate::{ErrorKind, LibraryStateError};
use std::fmt;

/// The error type of a library built on initguard.
///
/// Wraps a [`LibraryStateError`] (or any other failure) with the operation that
/// was running and key/value context for logs. The original error is kept as
/// the `source`, so nothing is lost by converting.
///
/// ```rust
/// use initguard_error::{Error, ErrorKind, LibraryStateError};
///
/// let err = Error::from(LibraryStateError::with_message("Library not initialized"))
///     .with_operation("widget::render")
///     .with_context("widget", "toolbar");
///
/// assert_eq!(err.kind(), ErrorKind::LibraryState);
/// assert_eq!(err.to_string(), "LibraryState at widget::render { widget: toolbar }: Library not initialized");
/// assert!(err.library_state().is_some());
/// ```
pub struct Error {
    kind: ErrorKind,
    message: String,
    operation: &'static str,
    context: Vec<(&'static str, String)>,
    source: Option<anyhow::Error>,
}

impl Error {
    /// Create an error of `kind` with no operation, context or source
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            operation: "",
            context: Vec::new(),
            source: None,
        }
    }

    /// Create a ConfigInvalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create a LibraryState error for an operation attempted too early
    pub fn not_initialized(operation: &'static str) -> Self {
        Self::from(LibraryStateError::with_message("Library not initialized"))
            .with_operation(operation)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }

    pub fn source_ref(&self) -> Option<&anyhow::Error> {
        self.source.as_ref()
    }

    /// The wrapped library-state error, when this is one
    pub fn library_state(&self) -> Option<&LibraryStateError> {
        self.source.as_ref()?.downcast_ref::<LibraryStateError>()
    }

    /// Set the operation; a previous one is kept in context as `called`
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        if !self.operation.is_empty() {
            self.context.push(("called", self.operation.to_string()));
        }
        self.operation = operation;
        self
    }

    pub fn with_context(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.context.push((key, value.into()));
        self
    }

    /// Set the source error.
    ///
    /// # Panics (debug only)
    /// Panics in debug mode if source was already set.
    pub fn set_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        debug_assert!(self.source.is_none(), "source error already set");
        self.source = Some(source.into());
        self
    }
}

/// Single line: `Kind at operation { key: value }: message`
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.as_str())?;
        if !self.operation.is_empty() {
            write!(f, " at {}", self.operation)?;
        }
        if let Some(((key, value), rest)) = self.context.split_first() {
            write!(f, " {{ {}: {}", key, value)?;
            for (key, value) in rest {
                write!(f, ", {}: {}", key, value)?;
            }
            f.write_str(" }")?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .field("operation", &self.operation)
            .field("context", &self.context)
            .field("source", &self.source)
            .finish()
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl From<LibraryStateError> for Error {
    fn from(err: LibraryStateError) -> Self {
        let message = err.message().unwrap_or_default().to_string();
        Error::new(ErrorKind::LibraryState, message).set_source(err)
    }
}
