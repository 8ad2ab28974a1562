//! Shared handle to the error that caused another one

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// The underlying error carried by a [`LibraryStateError`](crate::LibraryStateError).
///
/// Cloning a `Cause` shares the same allocation, so identity survives any
/// number of clones and wrappings and can be checked with [`Cause::ptr_eq`].
///
/// Any `std::error::Error + Send + Sync + 'static` converts into a `Cause`.
/// Already erased errors go through [`Cause::from_boxed`] or
/// [`Cause::from_anyhow`].
/// `Cause` does not implement `std::error::Error` itself; use
/// [`Cause::as_error`] to view it as one.
#[derive(Clone)]
pub struct Cause(Arc<dyn StdError + Send + Sync + 'static>);

impl Cause {
    /// Adopt an already shared error without re-wrapping it
    pub fn shared(error: Arc<dyn StdError + Send + Sync + 'static>) -> Self {
        Self(error)
    }

    /// Adopt a boxed, type-erased error
    pub fn from_boxed(error: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self(Arc::from(error))
    }

    /// Adopt an `anyhow::Error`; its text and `source()` chain are kept
    pub fn from_anyhow(error: anyhow::Error) -> Self {
        Self::from_boxed(error.into())
    }

    /// View the cause as a standard error
    pub fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.0
    }

    /// Downcast to the concrete error type, if it matches
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.0.downcast_ref::<E>()
    }

    /// Check if the cause is of the given concrete type
    pub fn is<E: StdError + 'static>(&self) -> bool {
        self.0.is::<E>()
    }

    /// Check if both handles point to the same error instance
    pub fn ptr_eq(&self, other: &Cause) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<E> From<E> for Cause
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self(Arc::new(error))
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_clone_shares_identity() {
        let cause = Cause::from(io::Error::new(io::ErrorKind::Other, "disk gone"));
        let copy = cause.clone();
        assert!(cause.ptr_eq(&copy));

        let other = Cause::from(io::Error::new(io::ErrorKind::Other, "disk gone"));
        assert!(!cause.ptr_eq(&other));
    }

    #[test]
    fn test_downcast() {
        let cause = Cause::from(io::Error::new(io::ErrorKind::NotFound, "no assets"));
        assert!(cause.is::<io::Error>());
        assert_eq!(
            cause.downcast_ref::<io::Error>().map(|e| e.kind()),
            Some(io::ErrorKind::NotFound)
        );
        assert!(cause.downcast_ref::<std::fmt::Error>().is_none());
        assert_eq!(cause.to_string(), "no assets");
    }

    #[test]
    fn test_from_erased() {
        let boxed: Box<dyn StdError + Send + Sync> =
            Box::new(io::Error::new(io::ErrorKind::NotFound, "skin.css"));
        let cause = Cause::from_boxed(boxed);
        assert!(cause.is::<io::Error>());
        assert_eq!(cause.to_string(), "skin.css");

        let any = anyhow::Error::new(io::Error::new(io::ErrorKind::Other, "gpu reset"));
        let cause = Cause::from_anyhow(any);
        assert_eq!(cause.to_string(), "gpu reset");
    }

    #[test]
    fn test_shared_keeps_allocation() {
        let arc: Arc<dyn StdError + Send + Sync> = Arc::new(std::fmt::Error);
        let a = Cause::shared(arc.clone());
        let b = Cause::shared(arc);
        assert!(a.ptr_eq(&b));
    }
}
