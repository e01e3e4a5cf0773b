//! Stable content hashing for path identity.
//!
//! A path's unique id is a hex-encoded digest of its segments joined by a
//! single NUL byte. NUL cannot appear in a rendered separator, so two
//! different segment sequences can never collide through joining, and the
//! digest is fully independent of the display separator. The joined-by-NUL
//! input format is contractual: consumers use these ids as external cache
//! keys, so it must not change silently.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha256};

/// Byte placed between segments before hashing.
const HASH_JOINER: u8 = 0;

/// Digest algorithm selector for [`PathValue::unique_id_with`](crate::PathValue::unique_id_with).
///
/// # Examples
///
/// ```
/// use vpath::HashAlgorithm;
///
/// assert_eq!(HashAlgorithm::default(), HashAlgorithm::Sha256);
/// assert_eq!(HashAlgorithm::parse("sha1").unwrap(), HashAlgorithm::Sha1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// SHA-256 (the default).
    #[default]
    Sha256,
    /// SHA-1.
    Sha1,
}

impl HashAlgorithm {
    /// Parses an algorithm from a string.
    ///
    /// Recognizes: "sha256", "sha1" (case-insensitive, "sha-256"/"sha-1"
    /// accepted as well).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use vpath::HashAlgorithm;
    ///
    /// assert_eq!(HashAlgorithm::parse("SHA256").unwrap(), HashAlgorithm::Sha256);
    /// assert_eq!(HashAlgorithm::parse("sha-1").unwrap(), HashAlgorithm::Sha1);
    /// assert!(HashAlgorithm::parse("md5").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(Self::Sha256),
            "sha1" | "sha-1" => Ok(Self::Sha1),
            _ => Err(format!("invalid hash algorithm: {s}")),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sha256 => write!(f, "sha256"),
            Self::Sha1 => write!(f, "sha1"),
        }
    }
}

/// Compute the hex digest of a segment sequence.
///
/// The joiner goes between segments only, never leading or trailing, so a
/// root path hashes the empty byte string.
#[must_use]
pub(crate) fn digest_segments(segments: &[String], algorithm: HashAlgorithm) -> String {
    match algorithm {
        HashAlgorithm::Sha256 => hex::encode(fold::<Sha256>(segments)),
        HashAlgorithm::Sha1 => hex::encode(fold::<Sha1>(segments)),
    }
}

fn fold<D: Digest>(segments: &[String]) -> Vec<u8> {
    let mut hasher = D::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            hasher.update([HASH_JOINER]);
        }
        hasher.update(segment.as_bytes());
    }
    hasher.finalize().to_vec()
}
