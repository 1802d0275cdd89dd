//! Property tests for archive entry paths

use localx_assets::EntryPath;
use proptest::prelude::*;

fn segment() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_][A-Za-z0-9_.-]{0,11}".prop_filter("dot segments", |s| s != "." && s != "..")
}

proptest! {
    #[test]
    fn well_formed_relative_paths_are_accepted(segments in prop::collection::vec(segment(), 1..5)) {
        let joined = segments.join("/");
        let path = EntryPath::parse(&joined).unwrap();
        prop_assert_eq!(path.as_str(), joined.as_str());
    }

    #[test]
    fn parent_segments_are_always_rejected(
        before in prop::collection::vec(segment(), 0..3),
        after in prop::collection::vec(segment(), 0..3),
    ) {
        let mut parts = before;
        parts.push("..".to_string());
        parts.extend(after);
        prop_assert!(EntryPath::parse(&parts.join("/")).is_err());
    }

    #[test]
    fn absolute_paths_are_always_rejected(segments in prop::collection::vec(segment(), 1..4)) {
        let path = format!("/{}", segments.join("/"));
        prop_assert!(EntryPath::parse(&path).is_err());
    }
}
