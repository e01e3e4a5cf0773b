//! Path string parsing and segment normalization.
//!
//! The parser converts a raw path string plus a separator into a normalized
//! segment sequence by:
//! - Unifying `\` and `/` to the chosen separator before splitting
//! - Dropping empty components (leading/trailing/doubled separators)
//! - Dropping `.` components
//! - Collapsing `..` against the preceding segment (stack-based)
//!
//! Parsing never fails. Input that fully collapses, including the empty
//! string, yields an empty segment sequence (a root path).

/// Parse a raw path string into a normalized segment sequence.
///
/// Both `\` and `/` are treated as separators regardless of the target
/// `separator`, so mixed-separator input normalizes cleanly. A `..` at the
/// head of the path (nothing left to pop) is silently dropped rather than
/// being an error.
///
/// # Examples
///
/// ```
/// use vpath::parse_segments;
///
/// assert_eq!(parse_segments("a/./b", '/'), ["a", "b"]);
/// assert_eq!(parse_segments("a/b/../c", '/'), ["a", "c"]);
/// assert_eq!(parse_segments("../a", '/'), ["a"]);
/// assert_eq!(parse_segments("a\\b/c", '/'), ["a", "b", "c"]);
/// assert!(parse_segments("//..//.", '/').is_empty());
/// ```
#[must_use]
pub fn parse_segments(input: &str, separator: char) -> Vec<String> {
    let unified: String = input
        .chars()
        .map(|c| if c == '/' || c == '\\' { separator } else { c })
        .collect();

    let mut stack: Vec<String> = Vec::new();
    for piece in unified.split(separator) {
        match piece {
            "" | "." => {}
            ".." => {
                // Silently a no-op when the stack is empty.
                stack.pop();
            }
            name => stack.push(name.to_string()),
        }
    }

    log::trace!("parsed {input:?} into {} segment(s)", stack.len());
    stack
}
