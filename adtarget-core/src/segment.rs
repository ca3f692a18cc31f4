//! Segment keys and hierarchy helpers.
//!
//! A segment is an opaque taxonomy key such as `"technology & computing"` or
//! `"technology & computing-software"`. Equality is exact string match; the
//! helpers below only look at the `parent-child` split.

use crate::constants::SEGMENT_SEPARATOR;

/// Taxonomy key identifying a targeting category.
pub type Segment = String;

/// Split a segment into its hierarchy components.
///
/// `"parent-child"` yields `["parent", "child"]`; a flat segment yields itself.
pub fn split_segment(segment: &str) -> Vec<&str> {
    segment.split(SEGMENT_SEPARATOR).collect()
}

/// The top-level component of a segment.
pub fn parent_segment(segment: &str) -> &str {
    segment
        .split_once(SEGMENT_SEPARATOR)
        .map_or(segment, |(parent, _)| parent)
}

/// Whether the segment has no child component.
pub fn is_parent_segment(segment: &str) -> bool {
    !segment.contains(SEGMENT_SEPARATOR)
}

/// Whether the segment carries a child component.
pub fn has_child_segment(segment: &str) -> bool {
    !is_parent_segment(segment)
}

/// Map every segment to its parent, dropping duplicates but keeping the
/// order in which parents first appear.
pub fn parent_segments(segments: &[Segment]) -> Vec<Segment> {
    let mut parents: Vec<Segment> = Vec::with_capacity(segments.len());
    for segment in segments {
        let parent = parent_segment(segment);
        if !parents.iter().any(|p| p == parent) {
            parents.push(parent.to_string());
        }
    }
    parents
}

/// A segment is usable as input when it is non-empty after trimming.
pub fn is_valid_segment(segment: &str) -> bool {
    !segment.trim().is_empty()
}
