use super::{QualitySettings, RoadProcessorConfigBuilder};
use crate::model::road::RoadCategory;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// rank returned for a category without a configured priority.
pub const UNKNOWN_CATEGORY_PRIORITY: u32 = 999;

/// validated settings controlling road detection. created through
/// [`RoadProcessorConfigBuilder`] and read-only afterwards.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RoadProcessorConfig {
    pub(super) enable_filtering: bool,
    pub(super) min_road_width: f64,
    pub(super) max_road_width: f64,
    pub(super) excluded_highway_types: BTreeSet<String>,
    pub(super) process_categories: Vec<RoadCategory>,
    pub(super) road_widths: BTreeMap<String, f64>,
    pub(super) category_priorities: BTreeMap<RoadCategory, u32>,
    pub(super) quality_level: String,
    pub(super) curve_resolution: u32,
    pub(super) simplification_threshold: f64,
    pub(super) generate_markings: bool,
    pub(super) mesh_subdivisions: u32,
    pub(super) smooth_shading: bool,
    pub(super) batch_size: usize,
    pub(super) max_workers: usize,
    pub(super) enable_parallel_processing: bool,
}

impl Default for RoadProcessorConfig {
    fn default() -> Self {
        RoadProcessorConfigBuilder::default().finalize()
    }
}

impl RoadProcessorConfig {
    pub fn builder() -> RoadProcessorConfigBuilder {
        RoadProcessorConfigBuilder::default()
    }

    pub(super) fn apply_quality_settings(&mut self, settings: QualitySettings) {
        self.curve_resolution = settings.curve_resolution;
        self.simplification_threshold = settings.simplification_threshold;
        self.generate_markings = settings.generate_markings;
        self.batch_size = settings.batch_size;
    }

    /// default width for a highway type, or `min_road_width` for types
    /// without one.
    pub fn get_road_width(&self, highway_type: &str) -> f64 {
        self.road_widths
            .get(highway_type)
            .copied()
            .unwrap_or(self.min_road_width)
    }

    /// with filtering disabled every road is processed. otherwise excluded
    /// types and widths outside `[min_road_width, max_road_width]` are not.
    pub fn should_process_road(&self, highway_type: &str, width: f64) -> bool {
        if !self.enable_filtering {
            return true;
        }
        if self.is_excluded(highway_type) {
            return false;
        }
        self.min_road_width <= width && width <= self.max_road_width
    }

    pub fn get_category_priority(&self, category: RoadCategory) -> u32 {
        self.category_priorities
            .get(&category)
            .copied()
            .unwrap_or(UNKNOWN_CATEGORY_PRIORITY)
    }

    pub fn is_excluded(&self, highway_type: &str) -> bool {
        self.excluded_highway_types.contains(highway_type)
    }

    pub fn is_category_processed(&self, category: RoadCategory) -> bool {
        self.process_categories.contains(&category)
    }

    pub fn enable_filtering(&self) -> bool {
        self.enable_filtering
    }

    pub fn min_road_width(&self) -> f64 {
        self.min_road_width
    }

    pub fn max_road_width(&self) -> f64 {
        self.max_road_width
    }

    pub fn excluded_highway_types(&self) -> &BTreeSet<String> {
        &self.excluded_highway_types
    }

    pub fn process_categories(&self) -> &[RoadCategory] {
        &self.process_categories
    }

    pub fn quality_level(&self) -> &str {
        &self.quality_level
    }

    pub fn curve_resolution(&self) -> u32 {
        self.curve_resolution
    }

    pub fn simplification_threshold(&self) -> f64 {
        self.simplification_threshold
    }

    pub fn generate_markings(&self) -> bool {
        self.generate_markings
    }

    pub fn mesh_subdivisions(&self) -> u32 {
        self.mesh_subdivisions
    }

    pub fn smooth_shading(&self) -> bool {
        self.smooth_shading
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn max_workers(&self) -> usize {
        self.max_workers
    }

    pub fn enable_parallel_processing(&self) -> bool {
        self.enable_parallel_processing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_road_width() {
        let config = RoadProcessorConfig::default();
        assert_eq!(config.get_road_width("motorway"), 12.0);
        assert_eq!(config.get_road_width("runway"), config.min_road_width());
    }

    #[test]
    fn test_should_process_road() {
        let config = RoadProcessorConfig::builder()
            .width_bounds(2.0, 20.0)
            .build()
            .unwrap();
        assert!(config.should_process_road("residential", 5.0));
        assert!(config.should_process_road("residential", 2.0));
        assert!(config.should_process_road("residential", 20.0));
        assert!(!config.should_process_road("residential", 1.9));
        assert!(!config.should_process_road("residential", 20.1));
        assert!(!config.should_process_road("construction", 5.0));
    }

    #[test]
    fn test_filtering_disabled_processes_everything() {
        let config = RoadProcessorConfig::builder()
            .enable_filtering(false)
            .width_bounds(2.0, 20.0)
            .build()
            .unwrap();
        assert!(config.should_process_road("construction", 500.0));
        assert!(config.should_process_road("footway", 0.5));
    }

    #[test]
    fn test_get_category_priority() {
        let config = RoadProcessorConfig::default();
        assert_eq!(config.get_category_priority(RoadCategory::MajorHighway), 1);
        assert_eq!(config.get_category_priority(RoadCategory::SpecialRoad), 5);

        let mut builder = RoadProcessorConfig::builder();
        builder.category_priorities.remove(&RoadCategory::ServiceRoad);
        let config = builder.build().unwrap();
        assert_eq!(
            config.get_category_priority(RoadCategory::ServiceRoad),
            UNKNOWN_CATEGORY_PRIORITY
        );
    }
}
