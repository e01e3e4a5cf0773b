//! The immutable path value type.
//!
//! [`PathValue`] is a purely functional value: every transformation returns
//! a new value and never mutates the receiver, so instances are safe to
//! share across threads without coordination.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::hash::{digest_segments, HashAlgorithm};
use crate::parse::parse_segments;

/// The default rendering separator: the host platform's directory
/// separator.
///
/// This is an explicit constant rather than hidden global state, so callers
/// can always pin a separator for deterministic cross-platform behavior.
pub const DEFAULT_SEPARATOR: char = std::path::MAIN_SEPARATOR;

/// An immutable, separator-agnostic path value.
///
/// A `PathValue` is an ordered sequence of non-empty segments (root to
/// leaf) plus a separator used only for textual rendering and parsing. A
/// path with zero segments is the root path for its separator.
///
/// Values built through the parser never contain `""`, `"."`, or `".."`
/// segments; [`PathValue::new`] and [`PathValue::child`] trust the caller
/// and do not re-validate.
///
/// # Examples
///
/// ```
/// use vpath::PathValue;
///
/// let path = PathValue::parse("etc/ssh", '/');
/// let config = path.child("sshd_config");
/// assert_eq!(config.render(), "etc/ssh/sshd_config");
///
/// // The original is untouched
/// assert_eq!(path.depth(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathValue {
    segments: Vec<String>,
    separator: char,
}

impl PathValue {
    /// Create a path directly from a segment sequence.
    ///
    /// The segments are taken as-is: no `.`/`..` collapsing and no
    /// validation is applied. Use [`PathValue::parse`] for untrusted
    /// string input.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::PathValue;
    ///
    /// let path = PathValue::new(vec!["usr".into(), "bin".into()], '/');
    /// assert_eq!(path.render(), "usr/bin");
    /// ```
    #[must_use]
    pub fn new(segments: Vec<String>, separator: char) -> Self {
        Self {
            segments,
            separator,
        }
    }

    /// Create the root (zero-segment) path for a separator.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::PathValue;
    ///
    /// let root = PathValue::root('/');
    /// assert!(root.is_root());
    /// assert_eq!(root.depth(), 0);
    /// ```
    #[must_use]
    pub fn root(separator: char) -> Self {
        Self {
            segments: Vec::new(),
            separator,
        }
    }

    /// Parse a raw path string into a normalized path value.
    ///
    /// See [`parse_segments`](crate::parse_segments) for the normalization
    /// rules. Parsing never fails; input that fully collapses yields the
    /// root path.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::PathValue;
    ///
    /// let path = PathValue::parse("/usr//local/../bin", '/');
    /// assert_eq!(path.elements(), ["usr", "bin"]);
    /// ```
    #[must_use]
    pub fn parse(input: &str, separator: char) -> Self {
        Self {
            segments: parse_segments(input, separator),
            separator,
        }
    }

    /// Returns `true` if this path has no segments.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::PathValue;
    ///
    /// assert_eq!(PathValue::parse("a/b/c", '/').depth(), 3);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Returns the last segment, commonly the file name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPath`] if this is a root path.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::PathValue;
    ///
    /// let path = PathValue::parse("usr/bin", '/');
    /// assert_eq!(path.name().unwrap(), "bin");
    /// assert!(PathValue::root('/').name().is_err());
    /// ```
    pub fn name(&self) -> Result<&str> {
        self.segments
            .last()
            .map(String::as_str)
            .ok_or(Error::EmptyPath)
    }

    /// Returns a new path with the last segment replaced by `name`.
    ///
    /// On a root path the name becomes the sole segment; there is nothing
    /// to replace, so it is appended.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::PathValue;
    ///
    /// let path = PathValue::parse("usr/bin", '/');
    /// assert_eq!(path.with_name("lib").render(), "usr/lib");
    /// assert_eq!(PathValue::root('/').with_name("opt").render(), "opt");
    /// ```
    #[must_use]
    pub fn with_name(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.pop();
        segments.push(name.to_string());
        Self {
            segments,
            separator: self.separator,
        }
    }

    /// Returns a new path with `name` appended as a child segment.
    ///
    /// The segment is taken as-is; the caller is responsible for not
    /// passing `.`/`..`/empty names here. Use [`PathValue::with_suffix`]
    /// for the guarded variant.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::PathValue;
    ///
    /// let path = PathValue::parse("usr", '/');
    /// assert_eq!(path.child("bin").render(), "usr/bin");
    /// ```
    #[must_use]
    pub fn child(&self, name: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(name.to_string());
        Self {
            segments,
            separator: self.separator,
        }
    }

    /// Returns a new path with the last segment removed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoParent`] if this is already a root path.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::PathValue;
    ///
    /// let path = PathValue::parse("usr/bin", '/');
    /// assert_eq!(path.parent().unwrap().render(), "usr");
    /// assert!(PathValue::root('/').parent().is_err());
    /// ```
    pub fn parent(&self) -> Result<Self> {
        if self.is_root() {
            return Err(Error::NoParent);
        }
        Ok(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
            separator: self.separator,
        })
    }

    /// Render the path as a string, segments joined by the separator.
    ///
    /// Rendering is relative-style: no leading separator is emitted. This
    /// makes render/parse an exact round trip, not one modulo a cosmetic
    /// leading separator. The root path renders as the empty string.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::PathValue;
    ///
    /// let path = PathValue::parse("/usr/bin/", '/');
    /// assert_eq!(path.render(), "usr/bin");
    /// assert_eq!(PathValue::root('/').render(), "");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        let mut sep = [0u8; 4];
        self.segments.join(self.separator.encode_utf8(&mut sep))
    }

    /// Returns a new path with `other`'s segments appended to this path's.
    ///
    /// This path's separator is retained regardless of `other`'s.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::PathValue;
    ///
    /// let base = PathValue::parse("usr", '/');
    /// let sub = PathValue::parse("local\\bin", '\\');
    /// assert_eq!(base.with_suffix_path(&sub).render(), "usr/local/bin");
    /// ```
    #[must_use]
    pub fn with_suffix_path(&self, other: &Self) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(other.segments.iter().cloned());
        Self {
            segments,
            separator: self.separator,
        }
    }

    /// Returns a new path with `other`'s segments prepended to this path's.
    ///
    /// This path's separator is retained regardless of `other`'s.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::PathValue;
    ///
    /// let path = PathValue::parse("bin", '/');
    /// let prefix = PathValue::parse("usr/local", '/');
    /// assert_eq!(path.with_prefix_path(&prefix).render(), "usr/local/bin");
    /// ```
    #[must_use]
    pub fn with_prefix_path(&self, other: &Self) -> Self {
        let mut segments = other.segments.clone();
        segments.extend(self.segments.iter().cloned());
        Self {
            segments,
            separator: self.separator,
        }
    }

    /// Returns a new path with `segment` appended, unless the segment is
    /// structurally unsafe.
    ///
    /// The reserved segments `""`, `"."`, `".."`, `"/"`, `"\\"`, and the
    /// current separator would corrupt the path structure if inserted
    /// verbatim, so for those the path is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::PathValue;
    ///
    /// let path = PathValue::parse("usr", '/');
    /// assert_eq!(path.with_suffix("bin").render(), "usr/bin");
    /// assert_eq!(path.with_suffix(".."), path);
    /// assert_eq!(path.with_suffix("/"), path);
    /// ```
    #[must_use]
    pub fn with_suffix(&self, segment: &str) -> Self {
        if self.is_reserved_segment(segment) {
            return self.clone();
        }
        self.child(segment)
    }

    /// Returns a new path with `segment` prepended, unless the segment is
    /// structurally unsafe.
    ///
    /// Same reserved-segment guard as [`PathValue::with_suffix`].
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::PathValue;
    ///
    /// let path = PathValue::parse("bin", '/');
    /// assert_eq!(path.with_prefix("usr").render(), "usr/bin");
    /// assert_eq!(path.with_prefix("."), path);
    /// ```
    #[must_use]
    pub fn with_prefix(&self, segment: &str) -> Self {
        if self.is_reserved_segment(segment) {
            return self.clone();
        }
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.push(segment.to_string());
        segments.extend(self.segments.iter().cloned());
        Self {
            segments,
            separator: self.separator,
        }
    }

    /// Returns a new path with the same segments and a different rendering
    /// separator.
    ///
    /// A `'.'` separator would make every rendered path reparse into
    /// nothing, so for `'.'` the path is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::PathValue;
    ///
    /// let path = PathValue::parse("usr/bin", '/');
    /// assert_eq!(path.with_separator('\\').render(), "usr\\bin");
    /// assert_eq!(path.with_separator('.'), path);
    /// ```
    #[must_use]
    pub fn with_separator(&self, separator: char) -> Self {
        if separator == '.' {
            return self.clone();
        }
        Self {
            segments: self.segments.clone(),
            separator,
        }
    }

    /// Returns the segment at `index`, or `None` if out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::PathValue;
    ///
    /// let path = PathValue::parse("usr/bin", '/');
    /// assert_eq!(path.element_at(0), Some("usr"));
    /// assert_eq!(path.element_at(2), None);
    /// ```
    #[must_use]
    pub fn element_at(&self, index: usize) -> Option<&str> {
        self.segments.get(index).map(String::as_str)
    }

    /// Returns the segment sequence, root to leaf.
    #[must_use]
    pub fn elements(&self) -> &[String] {
        &self.segments
    }

    /// Returns the rendering separator.
    #[must_use]
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Compute the unique id with the default algorithm (SHA-256).
    ///
    /// The id is a hex digest over the segments joined by a single NUL
    /// byte, so it depends only on the segment sequence: two paths with
    /// the same segments and different separators share an id. Intended as
    /// a stable cache/identity key.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::PathValue;
    ///
    /// let slash = PathValue::parse("usr/bin", '/');
    /// let back = slash.with_separator('\\');
    /// assert_eq!(slash.unique_id(), back.unique_id());
    /// ```
    #[must_use]
    pub fn unique_id(&self) -> String {
        self.unique_id_with(HashAlgorithm::default())
    }

    /// Compute the unique id with an explicit algorithm.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::{HashAlgorithm, PathValue};
    ///
    /// let path = PathValue::parse("usr/bin", '/');
    /// let id = path.unique_id_with(HashAlgorithm::Sha1);
    /// assert_eq!(id.len(), 40);
    /// ```
    #[must_use]
    pub fn unique_id_with(&self, algorithm: HashAlgorithm) -> String {
        digest_segments(&self.segments, algorithm)
    }

    fn is_reserved_segment(&self, segment: &str) -> bool {
        if matches!(segment, "" | "." | ".." | "/" | "\\") {
            return true;
        }
        let mut sep = [0u8; 4];
        segment == self.separator.encode_utf8(&mut sep)
    }
}

impl fmt::Display for PathValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

impl FromStr for PathValue {
    type Err = std::convert::Infallible;

    /// Parses with [`DEFAULT_SEPARATOR`]; never fails.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s, DEFAULT_SEPARATOR))
    }
}
