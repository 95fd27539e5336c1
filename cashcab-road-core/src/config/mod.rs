mod config_error;
mod quality_level;
mod road_processor_config;
mod road_processor_config_builder;

pub use config_error::{ConfigWarning, RoadProcessorConfigError};
pub use quality_level::{QualityLevel, QualitySettings};
pub use road_processor_config::{RoadProcessorConfig, UNKNOWN_CATEGORY_PRIORITY};
pub use road_processor_config_builder::RoadProcessorConfigBuilder;
