use super::{RoadCategory, RoadSegment};
use std::collections::BTreeMap;

/// groups segments by category, most important category first. segments keep
/// their relative order within each group.
pub fn group_by_category(segments: &[RoadSegment]) -> BTreeMap<RoadCategory, Vec<&RoadSegment>> {
    let mut groups: BTreeMap<RoadCategory, Vec<&RoadSegment>> = BTreeMap::new();
    for segment in segments {
        groups.entry(segment.category).or_default().push(segment);
    }
    groups
}
