//! Construction entry points for path values.
//!
//! A thin convenience layer over [`PathValue`]: one function for the root
//! path and one for parsing a raw string. Nothing here adds logic beyond
//! composing the parser and the value type.

use crate::value::PathValue;

/// Create the root (zero-segment) path for a separator.
///
/// # Examples
///
/// ```
/// use vpath::root_path;
///
/// let root = root_path('/');
/// assert!(root.is_root());
/// assert_eq!(root.depth(), 0);
/// ```
#[must_use]
pub fn root_path(separator: char) -> PathValue {
    PathValue::root(separator)
}

/// Create a path value by parsing a raw string.
///
/// Equivalent to [`PathValue::parse`].
///
/// # Examples
///
/// ```
/// use vpath::path_from_string;
///
/// let path = path_from_string("a/./b/../c", '/');
/// assert_eq!(path.elements(), ["a", "c"]);
/// ```
#[must_use]
pub fn path_from_string(input: &str, separator: char) -> PathValue {
    PathValue::parse(input, separator)
}
