use super::width_resolution::resolve_width;
use crate::config::RoadProcessorConfig;
use crate::model::osm::{OsmJsonField, OsmNodeCache, OsmWay};
use crate::model::road::{highway_taxonomy, LatLon, RoadCategory, RoadSegment};
use serde::Serialize;
use std::fmt::Display;

/// why a way did not become a [`RoadSegment`].
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    NoHighwayTag,
    ExcludedType { highway_type: String },
    UnknownType { highway_type: String },
    CategoryNotProcessed { highway_type: String, category: RoadCategory },
    InsufficientGeometry { node_refs: usize, coordinates: usize },
    WidthRejected { highway_type: String, width: f64 },
    Malformed { message: String },
}

impl SkipReason {
    /// true for ways removed by configuration rather than by their data.
    pub fn is_filtered(&self) -> bool {
        matches!(
            self,
            SkipReason::ExcludedType { .. }
                | SkipReason::UnknownType { .. }
                | SkipReason::CategoryNotProcessed { .. }
                | SkipReason::WidthRejected { .. }
        )
    }
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::NoHighwayTag => write!(f, "no highway tag"),
            SkipReason::ExcludedType { highway_type } => {
                write!(f, "highway type '{highway_type}' is excluded")
            }
            SkipReason::UnknownType { highway_type } => {
                write!(f, "highway type '{highway_type}' is not recognized")
            }
            SkipReason::CategoryNotProcessed {
                highway_type,
                category,
            } => write!(
                f,
                "category {category} of highway type '{highway_type}' is not processed"
            ),
            SkipReason::InsufficientGeometry {
                node_refs,
                coordinates,
            } => write!(
                f,
                "insufficient geometry, {coordinates} distinct coordinates from {node_refs} node references"
            ),
            SkipReason::WidthRejected {
                highway_type,
                width,
            } => write!(
                f,
                "width {width}m of highway type '{highway_type}' is outside configured bounds"
            ),
            SkipReason::Malformed { message } => write!(f, "malformed way: {message}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum WayOutcome {
    Segment(RoadSegment),
    Skipped(SkipReason),
}

/// result of classifying one way.
#[derive(Clone, Debug, PartialEq)]
pub struct WayClassification {
    pub outcome: WayOutcome,
    /// node references that had no cached coordinate
    pub missing_nodes: usize,
}

impl WayClassification {
    fn skipped(reason: SkipReason) -> WayClassification {
        WayClassification {
            outcome: WayOutcome::Skipped(reason),
            missing_nodes: 0,
        }
    }
}

/// turns a single way record into a segment, or reports why it was skipped.
/// never fails: malformed records are a [`SkipReason::Malformed`].
pub fn classify_way(
    way_id: &str,
    way: &serde_json::Value,
    node_cache: &OsmNodeCache,
    config: &RoadProcessorConfig,
) -> WayClassification {
    let way = match OsmWay::try_from(way) {
        Ok(w) => w,
        Err(e) => {
            return WayClassification::skipped(SkipReason::Malformed {
                message: e.to_string(),
            })
        }
    };
    let highway_type = match way.highway_type() {
        Some(t) => t.to_string(),
        None => return WayClassification::skipped(SkipReason::NoHighwayTag),
    };

    if config.is_excluded(&highway_type) {
        return WayClassification::skipped(SkipReason::ExcludedType { highway_type });
    }
    let mapped_category = match highway_taxonomy::category_of(&highway_type) {
        Some(c) => c,
        None => return WayClassification::skipped(SkipReason::UnknownType { highway_type }),
    };
    if !config.is_category_processed(mapped_category) {
        return WayClassification::skipped(SkipReason::CategoryNotProcessed {
            highway_type,
            category: mapped_category,
        });
    }

    let node_refs = way.node_refs.len();
    if node_refs < 2 {
        return WayClassification::skipped(SkipReason::InsufficientGeometry {
            node_refs,
            coordinates: 0,
        });
    }
    let resolved: Vec<LatLon> = way
        .node_refs
        .iter()
        .filter_map(|r| r.as_deref().and_then(|id| node_cache.get(id)))
        .collect();
    let missing_nodes = node_refs - resolved.len();
    let coordinates = collapse_consecutive_duplicates(resolved);
    if coordinates.len() < 2 {
        return WayClassification {
            outcome: WayOutcome::Skipped(SkipReason::InsufficientGeometry {
                node_refs,
                coordinates: coordinates.len(),
            }),
            missing_nodes,
        };
    }

    let category = highway_taxonomy::category_of(&highway_type).unwrap_or(RoadCategory::LocalRoad);
    let width = resolve_width(&way, &highway_type, config).width;
    if !config.should_process_road(&highway_type, width) {
        return WayClassification {
            outcome: WayOutcome::Skipped(SkipReason::WidthRejected {
                highway_type,
                width,
            }),
            missing_nodes,
        };
    }

    let priority = highway_taxonomy::priority_of(&highway_type) + category.band_offset();
    let name = way.tag(OsmJsonField::Name.to_str()).map(String::from);
    let segment = RoadSegment {
        osm_id: way_id.to_string(),
        highway_type,
        category,
        coordinates,
        width,
        name,
        tags: way.tags,
        priority,
    };
    WayClassification {
        outcome: WayOutcome::Segment(segment),
        missing_nodes,
    }
}

/// drops every coordinate equal to the one before it.
pub fn collapse_consecutive_duplicates(coordinates: Vec<LatLon>) -> Vec<LatLon> {
    let mut result: Vec<LatLon> = Vec::with_capacity(coordinates.len());
    for coord in coordinates {
        if result.last() != Some(&coord) {
            result.push(coord);
        }
    }
    result
}
