//! Property-based tests for path parsing and transformation.
//!
//! The leaf modules already cover the concrete cases; this module checks
//! the algebraic properties over arbitrary input.

use proptest::prelude::*;

use crate::hash::HashAlgorithm;
use crate::parse::parse_segments;
use crate::value::PathValue;

// Strategy for ordinary segment names (no separators, no dot components)
fn segment_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,12}"
}

fn segments_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(segment_strategy(), 0..8)
}

// Strategy for raw path strings mixing names, dot components, and both
// separator styles
fn raw_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(".".to_string()),
            Just("..".to_string()),
            Just(String::new()),
            segment_strategy(),
        ],
        0..10,
    )
    .prop_map(|parts| parts.join("/"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Parsed paths never contain empty, ".", or ".." segments
    #[test]
    fn parse_output_is_normalized(raw in raw_path_strategy()) {
        for segment in parse_segments(&raw, '/') {
            prop_assert!(!segment.is_empty());
            prop_assert_ne!(segment.as_str(), ".");
            prop_assert_ne!(segment.as_str(), "..");
        }
    }

    // Parsing is idempotent through rendering: parse(render(p)) == p
    #[test]
    fn render_parse_round_trip(raw in raw_path_strategy()) {
        let path = PathValue::parse(&raw, '/');
        let reparsed = PathValue::parse(&path.render(), '/');
        prop_assert_eq!(reparsed, path);
    }

    // Backslashes and slashes normalize identically
    #[test]
    fn parse_separator_style_agnostic(parts in prop::collection::vec(segment_strategy(), 0..8)) {
        let forward = parts.join("/");
        let backward = parts.join("\\");
        prop_assert_eq!(parse_segments(&forward, '/'), parse_segments(&backward, '/'));
    }

    // child then parent restores the original segment sequence
    #[test]
    fn child_parent_inverse(segments in segments_strategy(), name in segment_strategy()) {
        let path = PathValue::new(segments, '/');
        let back = path.child(&name).parent().unwrap();
        prop_assert_eq!(back.elements(), path.elements());
    }

    // Suffix/prefix composition concatenates segment sequences exactly
    #[test]
    fn suffix_prefix_composition(a in segments_strategy(), b in segments_strategy()) {
        let left = PathValue::new(a.clone(), '/');
        let right = PathValue::new(b.clone(), '/');

        let mut suffixed: Vec<String> = a.clone();
        suffixed.extend(b.iter().cloned());
        prop_assert_eq!(left.with_suffix_path(&right).elements(), &suffixed[..]);

        let mut prefixed: Vec<String> = b;
        prefixed.extend(a);
        prop_assert_eq!(left.with_prefix_path(&right).elements(), &prefixed[..]);
    }

    // Reserved segments are always a structural no-op
    #[test]
    fn reserved_segments_never_change_path(segments in segments_strategy()) {
        let path = PathValue::new(segments, '/');
        for reserved in ["", ".", "..", "/", "\\"] {
            prop_assert_eq!(&path.with_suffix(reserved), &path);
            prop_assert_eq!(&path.with_prefix(reserved), &path);
        }
    }

    // The unique id depends only on the segment sequence
    #[test]
    fn unique_id_separator_independent(segments in segments_strategy()) {
        let slash = PathValue::new(segments.clone(), '/');
        let pipe = PathValue::new(segments, '|');
        prop_assert_eq!(slash.unique_id(), pipe.unique_id());
        prop_assert_eq!(
            slash.unique_id_with(HashAlgorithm::Sha1),
            pipe.unique_id_with(HashAlgorithm::Sha1)
        );
    }

    // Transformations never mutate the receiver
    #[test]
    fn transformations_leave_receiver_intact(segments in segments_strategy(), name in segment_strategy()) {
        let path = PathValue::new(segments.clone(), '/');
        let _ = path.child(&name);
        let _ = path.with_name(&name);
        let _ = path.with_suffix(&name);
        let _ = path.with_prefix(&name);
        let _ = path.with_separator('\\');
        let _ = path.parent();
        prop_assert_eq!(path.elements(), &segments[..]);
        prop_assert_eq!(path.separator(), '/');
    }
}
