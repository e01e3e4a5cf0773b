#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # vpath
//!
//! An immutable, separator-agnostic path value type.
//!
//! This library models a filesystem-like path as an ordered sequence of
//! segments plus a rendering separator. Paths are parsed from strings with
//! `.`/`..` normalization, transformed through pure operations that always
//! return a new value, and identified by a stable content digest that is
//! independent of the display separator.
//!
//! There is no I/O here: no disk access, no symlink resolution, no
//! permission checks. `vpath` is a data-modeling library.
//!
//! ## Core Types
//!
//! - [`PathValue`]: the immutable path value and all its transformations
//! - [`HashAlgorithm`]: digest selector for [`PathValue::unique_id_with`]
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use vpath::path_from_string;
//!
//! let path = path_from_string("/usr//local/../bin", '/');
//! assert_eq!(path.elements(), ["usr", "bin"]);
//! assert_eq!(path.depth(), 2);
//! assert_eq!(path.name().unwrap(), "bin");
//! assert_eq!(path.render(), "usr/bin");
//!
//! // The unique id ignores the separator entirely
//! let windows = path.with_separator('\\');
//! assert_eq!(path.unique_id(), windows.unique_id());
//! ```

pub mod error;
pub mod factory;
pub mod hash;
pub mod parse;
pub mod value;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use factory::{path_from_string, root_path};
pub use hash::HashAlgorithm;
pub use parse::parse_segments;
pub use value::{PathValue, DEFAULT_SEPARATOR};
