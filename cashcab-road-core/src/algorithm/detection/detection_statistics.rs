use super::way_classification::{SkipReason, WayClassification, WayOutcome};
use crate::model::road::RoadCategory;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// counters accumulated over one detection pass.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DetectionStatistics {
    /// every way record seen
    pub total_ways: usize,
    /// ways carrying a `highway` tag
    pub highway_ways: usize,
    /// ways removed by type, category or width rules
    pub filtered_ways: usize,
    /// ways left with fewer than two distinct coordinates
    pub insufficient_geometry: usize,
    /// malformed way records
    pub failed_ways: usize,
    /// node references without a cached coordinate
    pub missing_nodes: usize,
    pub segments: usize,
    pub by_category: BTreeMap<RoadCategory, usize>,
    pub by_highway_type: BTreeMap<String, usize>,
}

impl DetectionStatistics {
    pub fn record(&mut self, classification: &WayClassification) {
        self.total_ways += 1;
        self.missing_nodes += classification.missing_nodes;
        match &classification.outcome {
            WayOutcome::Segment(segment) => {
                self.highway_ways += 1;
                self.segments += 1;
                *self.by_category.entry(segment.category).or_default() += 1;
                *self
                    .by_highway_type
                    .entry(segment.highway_type.clone())
                    .or_default() += 1;
            }
            WayOutcome::Skipped(SkipReason::NoHighwayTag) => {}
            WayOutcome::Skipped(SkipReason::Malformed { .. }) => self.failed_ways += 1,
            WayOutcome::Skipped(SkipReason::InsufficientGeometry { .. }) => {
                self.highway_ways += 1;
                self.insufficient_geometry += 1;
            }
            WayOutcome::Skipped(_) => {
                self.highway_ways += 1;
                self.filtered_ways += 1;
            }
        }
    }

    pub fn skipped_ways(&self) -> usize {
        self.total_ways - self.segments
    }

    /// one-line description for logging.
    pub fn summary(&self) -> String {
        let categories = self
            .by_category
            .iter()
            .map(|(category, count)| format!("{category}={count}"))
            .join(", ");
        format!(
            "{} segments from {} ways ({} highway, {} filtered, {} insufficient geometry, {} failed, {} missing nodes) [{}]",
            self.segments,
            self.total_ways,
            self.highway_ways,
            self.filtered_ways,
            self.insufficient_geometry,
            self.failed_ways,
            self.missing_nodes,
            categories
        )
    }
}
