//! # Top-level boundary
//!
//! Where a raised [`LibraryStateError`] ends up: caught by type, rendered,
//! logged, and either recovered from or re-raised.

use crate::error::LibraryStateError;
use std::error::Error as StdError;
use std::panic::{self, UnwindSafe};
use tracing::error;

/// Run `f`, turning a raised `LibraryStateError` into `Err`.
///
/// Panics with any other payload are resumed untouched, so unrelated failures
/// are never mistaken for misuse.
///
/// When catching by hand instead, `payload.downcast::<LibraryStateError>()`
/// gives a `Box<LibraryStateError>`: call `(*boxed).cause()`, since
/// `boxed.cause()` resolves to the deprecated `std::error::Error::cause`.
pub fn catch_library_state<T>(f: impl FnOnce() -> T + UnwindSafe) -> Result<T, LibraryStateError> {
    match panic::catch_unwind(f) {
        Ok(value) => Ok(value),
        Err(payload) => match payload.downcast::<LibraryStateError>() {
            Ok(err) => Err(*err),
            Err(other) => panic::resume_unwind(other),
        },
    }
}

/// Display text of `err` followed by every error in its `source()` chain
pub fn chain(err: &(dyn StdError + 'static)) -> Vec<String> {
    let mut lines = vec![err.to_string()];
    let mut next = err.source();
    while let Some(source) = next {
        lines.push(source.to_string());
        next = source.source();
    }
    lines
}

/// Log the error chain at error level and return it
pub fn report(err: &(dyn StdError + 'static)) -> Vec<String> {
    let lines = chain(err);
    for (depth, line) in lines.iter().enumerate() {
        error!(depth, "{}", line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cause, Error, ErrorKind, GuardConfig, LibraryGuard};
    use std::io;
    use std::sync::Mutex;

    #[test]
    fn test_catch_raised() {
        let guard = LibraryGuard::new(GuardConfig::new("widgets"));
        let err = catch_library_state(|| guard.assert_initialized("widget::render")).unwrap_err();
        assert_eq!(err.message(), Some("Library not initialized"));
    }

    #[test]
    fn test_passes_value_through() {
        assert_eq!(catch_library_state(|| 7).unwrap(), 7);
    }

    #[test]
    fn test_unrelated_panic_not_intercepted() {
        let outer = panic::catch_unwind(|| {
            let _ = catch_library_state(|| panic::panic_any(io::Error::new(io::ErrorKind::Other, "disk")));
        })
        .unwrap_err();

        assert!(outer.downcast_ref::<io::Error>().is_some());
        assert!(outer.downcast_ref::<LibraryStateError>().is_none());
    }

    #[test]
    fn test_chain() {
        let inner = LibraryStateError::with_message_and_cause(
            "Library not initialized",
            io::Error::new(io::ErrorKind::Other, "display server unreachable"),
        );
        let outer = LibraryStateError::with_message_and_cause("toolbar::draw failed", inner);

        assert_eq!(
            chain(&outer),
            vec![
                "toolbar::draw failed".to_string(),
                "Library not initialized".to_string(),
                "display server unreachable".to_string(),
            ]
        );
    }

    #[test]
    fn test_report_unified() {
        let err = Error::from(LibraryStateError::with_message("Library not initialized"))
            .with_operation("widget::render");
        let lines = report(&err);

        assert_eq!(err.kind(), ErrorKind::LibraryState);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "Library not initialized");
    }

    /// Guard trips, the caller catches by type, logs the message and re-raises
    /// the same instance.
    #[test]
    fn test_catch_log_reraise() {
        let guard = LibraryGuard::default();
        let kept = Mutex::new(None);

        let reraised = panic::catch_unwind(|| {
            let err = catch_library_state(|| guard.assert_initialized("widget::render")).unwrap_err();

            let logged = report(&err);
            assert_eq!(logged, vec!["Library not initialized".to_string()]);

            let original = Cause::from(err);
            *kept.lock().unwrap() = Some(original.clone());
            LibraryStateError::with_cause(original).raise()
        })
        .unwrap_err();

        let top = reraised
            .downcast::<LibraryStateError>()
            .expect("re-raised as LibraryStateError");
        let cause = (*top).cause().expect("original kept as cause");
        let original = kept.lock().unwrap().take().expect("original stored");

        assert!(cause.ptr_eq(&original));
        assert_eq!(
            cause.downcast_ref::<LibraryStateError>().and_then(|e| e.message()),
            Some("Library not initialized")
        );
        assert_eq!(top.to_string(), "Library not initialized");
    }
}
