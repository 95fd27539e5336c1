//! read-only reference data describing every OSM `highway=*` value the
//! detector recognizes. built once per process on first access.
use super::RoadCategory;
use indexmap::IndexMap;
use serde::Serialize;
use std::sync::LazyLock;

/// priority assigned to highway types missing from the taxonomy.
pub const UNKNOWN_TYPE_PRIORITY: u32 = 999;

/// taxonomy entry for a single highway type.
#[derive(Serialize, Clone, Copy, Debug, PartialEq)]
pub struct HighwayTypeInfo {
    pub category: RoadCategory,
    /// tie-break rank within the whole taxonomy, lower is more important
    pub priority: u32,
    /// plausible carriageway width range, meters
    pub min_width: f64,
    pub max_width: f64,
    /// width used when a way carries neither `width` nor `lanes`, meters
    pub default_width: f64,
}

const fn entry(
    category: RoadCategory,
    priority: u32,
    min_width: f64,
    max_width: f64,
    default_width: f64,
) -> HighwayTypeInfo {
    HighwayTypeInfo {
        category,
        priority,
        min_width,
        max_width,
        default_width,
    }
}

use RoadCategory::*;

const HIGHWAY_TYPES: [(&str, HighwayTypeInfo); 23] = [
    ("motorway", entry(MajorHighway, 1, 7.0, 30.0, 12.0)),
    ("motorway_link", entry(MajorHighway, 2, 4.0, 12.0, 6.0)),
    ("trunk", entry(MajorHighway, 3, 6.0, 25.0, 10.0)),
    ("trunk_link", entry(MajorHighway, 4, 4.0, 10.0, 5.0)),
    ("primary", entry(SecondaryRoad, 10, 5.0, 20.0, 8.0)),
    ("primary_link", entry(SecondaryRoad, 11, 3.5, 10.0, 5.0)),
    ("secondary", entry(SecondaryRoad, 12, 4.0, 16.0, 7.0)),
    ("secondary_link", entry(SecondaryRoad, 13, 3.0, 8.0, 4.5)),
    ("tertiary", entry(SecondaryRoad, 14, 3.5, 12.0, 6.0)),
    ("tertiary_link", entry(SecondaryRoad, 15, 3.0, 8.0, 4.0)),
    ("residential", entry(LocalRoad, 20, 3.0, 10.0, 5.5)),
    ("unclassified", entry(LocalRoad, 21, 3.0, 10.0, 5.0)),
    ("living_street", entry(LocalRoad, 22, 2.5, 8.0, 4.5)),
    ("road", entry(LocalRoad, 23, 3.0, 10.0, 5.0)),
    ("service", entry(ServiceRoad, 30, 2.5, 8.0, 3.5)),
    ("track", entry(ServiceRoad, 31, 2.0, 5.0, 3.0)),
    ("busway", entry(ServiceRoad, 32, 3.0, 8.0, 4.0)),
    ("pedestrian", entry(SpecialRoad, 40, 2.0, 20.0, 5.0)),
    ("footway", entry(SpecialRoad, 41, 1.0, 5.0, 2.0)),
    ("cycleway", entry(SpecialRoad, 42, 1.5, 5.0, 2.5)),
    ("path", entry(SpecialRoad, 43, 1.0, 4.0, 1.5)),
    ("steps", entry(SpecialRoad, 44, 1.0, 5.0, 2.0)),
    ("bridleway", entry(SpecialRoad, 45, 1.5, 5.0, 2.5)),
];

static TAXONOMY: LazyLock<IndexMap<&'static str, HighwayTypeInfo>> =
    LazyLock::new(|| HIGHWAY_TYPES.into_iter().collect());

pub fn get(highway_type: &str) -> Option<&'static HighwayTypeInfo> {
    TAXONOMY.get(highway_type)
}

pub fn is_known(highway_type: &str) -> bool {
    TAXONOMY.contains_key(highway_type)
}

pub fn category_of(highway_type: &str) -> Option<RoadCategory> {
    get(highway_type).map(|info| info.category)
}

/// type priority, or [`UNKNOWN_TYPE_PRIORITY`] when the type is not in the taxonomy.
pub fn priority_of(highway_type: &str) -> u32 {
    get(highway_type)
        .map(|info| info.priority)
        .unwrap_or(UNKNOWN_TYPE_PRIORITY)
}

pub fn default_width_of(highway_type: &str) -> Option<f64> {
    get(highway_type).map(|info| info.default_width)
}

pub fn width_range_of(highway_type: &str) -> Option<(f64, f64)> {
    get(highway_type).map(|info| (info.min_width, info.max_width))
}

/// all highway types, most important first.
pub fn highway_types() -> impl Iterator<Item = (&'static str, &'static HighwayTypeInfo)> {
    TAXONOMY.iter().map(|(k, v)| (*k, v))
}

pub fn types_in_category(category: RoadCategory) -> Vec<&'static str> {
    highway_types()
        .filter(|(_, info)| info.category == category)
        .map(|(name, _)| name)
        .collect()
}
