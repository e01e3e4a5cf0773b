//! Error types for the vpath library.
//!
//! Only two operations on a path can fail, and both fail only on a root
//! (zero-segment) path. Everything else in the library is total: malformed
//! strings parse to whatever survives normalization, out-of-range indices
//! return `None`, and guarded setters return the value unchanged.

use thiserror::Error;

/// Result type alias for operations that may fail with a vpath error.
///
/// # Examples
///
/// ```
/// use vpath::{Error, Result};
///
/// fn example_operation() -> Result<&'static str> {
///     Ok("bin")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for path operations.
///
/// Errors are local and immediate: there are no retries, no recovery
/// layers, and no partial-failure states, because every operation is a
/// single pure computation. Callers that need failure-free control flow
/// can check [`PathValue::is_root`](crate::PathValue::is_root) first.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An operation that requires at least one segment was invoked on a
    /// root path.
    #[error("empty path has no name")]
    EmptyPath,

    /// `parent()` was invoked on a root path.
    #[error("root path has no parent")]
    NoParent,
}

impl Error {
    /// Check if the error came from reading the name of a root path.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::Error;
    ///
    /// assert!(Error::EmptyPath.is_empty_path());
    /// assert!(!Error::NoParent.is_empty_path());
    /// ```
    #[must_use]
    pub fn is_empty_path(&self) -> bool {
        matches!(self, Self::EmptyPath)
    }

    /// Check if the error came from taking the parent of a root path.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::Error;
    ///
    /// assert!(Error::NoParent.is_no_parent());
    /// ```
    #[must_use]
    pub fn is_no_parent(&self) -> bool {
        matches!(self, Self::NoParent)
    }
}
