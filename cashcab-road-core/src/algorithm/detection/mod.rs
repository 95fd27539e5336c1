mod detection_reporter;
mod detection_statistics;
pub mod road_data_validation;
mod road_detector;
mod way_classification;
pub mod width_resolution;


pub use detection_reporter::{CollectingReporter, DetectionEvent, DetectionReporter, LogReporter};
pub use detection_statistics::DetectionStatistics;
pub use road_data_validation::{validate_road_data, ValidationReport, ValidationStatistics};
pub use road_detector::RoadDetector;
pub use way_classification::{
    classify_way, collapse_consecutive_duplicates, SkipReason, WayClassification, WayOutcome,
};
pub use width_resolution::{ResolvedWidth, WidthSource};
