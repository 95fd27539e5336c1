use super::{
    ConfigWarning, QualityLevel, RoadProcessorConfig, RoadProcessorConfigError,
};
use crate::model::road::{highway_taxonomy, RoadCategory};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

/// caller-facing settings for a [`RoadProcessorConfig`]. every field has a
/// default, so a builder can be deserialized from a partial document.
///
/// building happens in two steps. first the settings are validated as given.
/// then, if `quality_level` names a known tier, the tier's values replace
/// `curve_resolution`, `simplification_threshold`, `generate_markings` and
/// `batch_size`, whatever the caller set for them.
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct RoadProcessorConfigBuilder {
    /// when false, every recognized road type passes the width/type check
    pub enable_filtering: bool,
    /// narrowest accepted road, meters
    pub min_road_width: f64,
    /// widest accepted road, meters
    pub max_road_width: f64,
    /// `highway=*` values that are never turned into segments
    pub excluded_highway_types: BTreeSet<String>,
    /// categories that are turned into segments
    pub process_categories: Vec<RoadCategory>,
    /// per-type default widths, merged over the built-in taxonomy widths
    pub road_widths: BTreeMap<String, f64>,
    /// rank reported by [`RoadProcessorConfig::get_category_priority`]
    pub category_priorities: BTreeMap<RoadCategory, u32>,
    /// one of low, medium, high, ultra. other values leave settings as given
    pub quality_level: String,
    /// curve points per segment, recommended range 3 to 64
    pub curve_resolution: u32,
    /// geometry simplification tolerance, meters
    pub simplification_threshold: f64,
    pub generate_markings: bool,
    pub mesh_subdivisions: u32,
    pub smooth_shading: bool,
    /// segments handed to mesh generation at a time
    pub batch_size: usize,
    /// worker threads for batch processing, values below 1 become 1
    pub max_workers: i64,
    pub enable_parallel_processing: bool,
}

impl Default for RoadProcessorConfigBuilder {
    fn default() -> Self {
        let excluded_highway_types = ["construction", "proposed", "abandoned", "platform", "raceway"]
            .iter()
            .map(|t| t.to_string())
            .collect();
        let category_priorities = RoadCategory::ALL
            .iter()
            .map(|c| (*c, c.rank()))
            .collect();
        RoadProcessorConfigBuilder {
            enable_filtering: true,
            min_road_width: 1.0,
            max_road_width: 50.0,
            excluded_highway_types,
            process_categories: vec![
                RoadCategory::MajorHighway,
                RoadCategory::SecondaryRoad,
                RoadCategory::LocalRoad,
                RoadCategory::ServiceRoad,
            ],
            road_widths: BTreeMap::new(),
            category_priorities,
            quality_level: QualityLevel::Medium.to_string(),
            curve_resolution: 12,
            simplification_threshold: 1.0,
            generate_markings: true,
            mesh_subdivisions: 1,
            smooth_shading: true,
            batch_size: 50,
            max_workers: 4,
            enable_parallel_processing: false,
        }
    }
}

impl RoadProcessorConfigBuilder {
    pub fn new() -> RoadProcessorConfigBuilder {
        RoadProcessorConfigBuilder::default()
    }

    pub fn enable_filtering(mut self, enabled: bool) -> Self {
        self.enable_filtering = enabled;
        self
    }

    pub fn width_bounds(mut self, min_road_width: f64, max_road_width: f64) -> Self {
        self.min_road_width = min_road_width;
        self.max_road_width = max_road_width;
        self
    }

    pub fn exclude_highway_type(mut self, highway_type: &str) -> Self {
        self.excluded_highway_types.insert(highway_type.to_string());
        self
    }

    pub fn excluded_highway_types<I, S>(mut self, highway_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_highway_types = highway_types.into_iter().map(Into::into).collect();
        self
    }

    pub fn process_categories(mut self, categories: &[RoadCategory]) -> Self {
        self.process_categories = categories.to_vec();
        self
    }

    pub fn road_width(mut self, highway_type: &str, width: f64) -> Self {
        self.road_widths.insert(highway_type.to_string(), width);
        self
    }

    pub fn quality_level(mut self, quality_level: &str) -> Self {
        self.quality_level = quality_level.to_string();
        self
    }

    pub fn curve_resolution(mut self, curve_resolution: u32) -> Self {
        self.curve_resolution = curve_resolution;
        self
    }

    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn max_workers(mut self, max_workers: i64) -> Self {
        self.max_workers = max_workers;
        self
    }

    pub fn enable_parallel_processing(mut self, enabled: bool) -> Self {
        self.enable_parallel_processing = enabled;
        self
    }

    /// checks the settings as given, before any quality tier is applied.
    /// returns the non-fatal findings.
    pub fn validate(&self) -> Result<Vec<ConfigWarning>, RoadProcessorConfigError> {
        if self.min_road_width < 0.0 {
            return Err(RoadProcessorConfigError::NegativeMinWidth(
                self.min_road_width,
            ));
        }
        // negated so that NaN bounds are rejected too
        if !(self.min_road_width <= self.max_road_width) {
            return Err(RoadProcessorConfigError::InvalidWidthBounds {
                min: self.min_road_width,
                max: self.max_road_width,
            });
        }
        for (highway_type, width) in self.road_widths.iter() {
            if !highway_taxonomy::is_known(highway_type) {
                return Err(RoadProcessorConfigError::UnknownHighwayType(
                    highway_type.clone(),
                ));
            }
            if !width.is_finite() || *width <= 0.0 {
                return Err(RoadProcessorConfigError::InvalidRoadWidth {
                    highway_type: highway_type.clone(),
                    width: *width,
                });
            }
        }

        let mut warnings = vec![];
        if !(3..=64).contains(&self.curve_resolution) {
            warnings.push(ConfigWarning::CurveResolutionOutOfRange(
                self.curve_resolution,
            ));
        }
        if self.max_workers < 1 {
            warnings.push(ConfigWarning::MaxWorkersClamped(self.max_workers));
        }
        Ok(warnings)
    }

    /// validates, then applies the quality tier.
    pub fn build(self) -> Result<RoadProcessorConfig, RoadProcessorConfigError> {
        let warnings = self.validate()?;
        for warning in warnings.iter() {
            log::warn!("road processor config: {warning}");
        }
        Ok(self.finalize())
    }

    /// assembles the config from settings already known to be valid.
    pub(super) fn finalize(self) -> RoadProcessorConfig {
        let mut road_widths: BTreeMap<String, f64> = highway_taxonomy::highway_types()
            .map(|(name, info)| (name.to_string(), info.default_width))
            .collect();
        road_widths.extend(self.road_widths);

        let quality = QualityLevel::from_str(&self.quality_level).ok();
        if quality.is_none() {
            log::debug!(
                "quality level '{}' is not a known tier, keeping explicit settings",
                self.quality_level
            );
        }

        let mut config = RoadProcessorConfig {
            enable_filtering: self.enable_filtering,
            min_road_width: self.min_road_width,
            max_road_width: self.max_road_width,
            excluded_highway_types: self.excluded_highway_types,
            process_categories: self.process_categories,
            road_widths,
            category_priorities: self.category_priorities,
            quality_level: self.quality_level,
            curve_resolution: self.curve_resolution,
            simplification_threshold: self.simplification_threshold,
            generate_markings: self.generate_markings,
            mesh_subdivisions: self.mesh_subdivisions,
            smooth_shading: self.smooth_shading,
            batch_size: self.batch_size,
            max_workers: self.max_workers.max(1) as usize,
            enable_parallel_processing: self.enable_parallel_processing,
        };
        if let Some(level) = quality {
            config.apply_quality_settings(level.settings());
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_builds() {
        let config = RoadProcessorConfigBuilder::default().build().unwrap();
        // medium tier overrides the explicit curve_resolution of 12
        assert_eq!(config.curve_resolution(), 8);
        assert_eq!(config.batch_size(), 50);
        assert_eq!(config.max_workers(), 4);
    }

    #[test]
    fn test_min_greater_than_max_fails() {
        let result = RoadProcessorConfigBuilder::new().width_bounds(10.0, 5.0).build();
        assert_eq!(
            result.err(),
            Some(RoadProcessorConfigError::InvalidWidthBounds {
                min: 10.0,
                max: 5.0
            })
        );
    }

    #[test]
    fn test_negative_min_fails() {
        let result = RoadProcessorConfigBuilder::new().width_bounds(-1.0, 5.0).build();
        assert_eq!(
            result.err(),
            Some(RoadProcessorConfigError::NegativeMinWidth(-1.0))
        );
    }

    #[test]
    fn test_nan_bounds_fail() {
        let result = RoadProcessorConfigBuilder::new()
            .width_bounds(1.0, f64::NAN)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_equal_bounds_allowed() {
        let config = RoadProcessorConfigBuilder::new()
            .width_bounds(0.0, 0.0)
            .build()
            .unwrap();
        assert_eq!(config.min_road_width(), 0.0);
    }

    #[test]
    fn test_curve_resolution_out_of_range_warns() {
        let builder = RoadProcessorConfigBuilder::new().curve_resolution(100);
        let warnings = builder.validate().unwrap();
        assert_eq!(
            warnings,
            vec![ConfigWarning::CurveResolutionOutOfRange(100)]
        );
        assert!(builder.build().is_ok());
    }

    #[test]
    fn test_max_workers_clamped() {
        let builder = RoadProcessorConfigBuilder::new().max_workers(-3);
        assert_eq!(
            builder.validate().unwrap(),
            vec![ConfigWarning::MaxWorkersClamped(-3)]
        );
        let config = builder.build().unwrap();
        assert_eq!(config.max_workers(), 1);
    }

    #[test]
    fn test_quality_tier_wins_over_explicit_fields() {
        let config = RoadProcessorConfigBuilder::new()
            .quality_level("ultra")
            .curve_resolution(5)
            .batch_size(500)
            .build()
            .unwrap();
        assert_eq!(config.curve_resolution(), 32);
        assert_eq!(config.batch_size(), 10);
        assert_eq!(config.simplification_threshold(), 0.1);
        assert!(config.generate_markings());
    }

    #[test]
    fn test_unknown_quality_tier_keeps_explicit_fields() {
        let config = RoadProcessorConfigBuilder::new()
            .quality_level("cinematic")
            .curve_resolution(5)
            .batch_size(500)
            .build()
            .unwrap();
        assert_eq!(config.curve_resolution(), 5);
        assert_eq!(config.batch_size(), 500);
        assert_eq!(config.quality_level(), "cinematic");
    }

    #[test]
    fn test_low_tier_disables_markings() {
        let config = RoadProcessorConfigBuilder::new()
            .quality_level("Low")
            .build()
            .unwrap();
        assert!(!config.generate_markings());
        assert_eq!(config.batch_size(), 100);
    }

    #[test]
    fn test_road_width_overrides() {
        let config = RoadProcessorConfigBuilder::new()
            .road_width("residential", 6.5)
            .build()
            .unwrap();
        assert_eq!(config.get_road_width("residential"), 6.5);
        assert_eq!(config.get_road_width("primary"), 8.0);

        let unknown = RoadProcessorConfigBuilder::new()
            .road_width("runway", 45.0)
            .build();
        assert_eq!(
            unknown.err(),
            Some(RoadProcessorConfigError::UnknownHighwayType(
                "runway".to_string()
            ))
        );

        let invalid = RoadProcessorConfigBuilder::new()
            .road_width("residential", 0.0)
            .build();
        assert!(matches!(
            invalid,
            Err(RoadProcessorConfigError::InvalidRoadWidth { .. })
        ));
    }

    #[test]
    fn test_deserialize_partial() {
        let builder: RoadProcessorConfigBuilder = serde_json::from_value(serde_json::json!({
            "min_road_width": 2.5,
            "excluded_highway_types": ["motorway"],
            "process_categories": ["MAJOR_HIGHWAY", "SPECIAL_ROAD"]
        }))
        .unwrap();
        assert_eq!(builder.max_road_width, 50.0);
        let config = builder.build().unwrap();
        assert_eq!(config.min_road_width(), 2.5);
        assert!(config.is_excluded("motorway"));
        assert!(config.is_category_processed(RoadCategory::SpecialRoad));
        assert!(!config.is_category_processed(RoadCategory::LocalRoad));
    }

    #[test]
    fn test_deserialize_rejects_unknown_fields() {
        let result: Result<RoadProcessorConfigBuilder, _> =
            serde_json::from_value(serde_json::json!({ "min_width": 2.5 }));
        assert!(result.is_err());
    }
}
