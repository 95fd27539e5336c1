use std::fmt::Display;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RoadProcessorConfigError {
    #[error("min_road_width ({min}) must not exceed max_road_width ({max})")]
    InvalidWidthBounds { min: f64, max: f64 },
    #[error("min_road_width must be non-negative, found {0}")]
    NegativeMinWidth(f64),
    #[error("road width override for '{0}' names an unknown highway type")]
    UnknownHighwayType(String),
    #[error("road width override for '{highway_type}' must be a positive number, found {width}")]
    InvalidRoadWidth { highway_type: String, width: f64 },
}

/// a configuration value that is accepted but probably not what the caller intended.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    CurveResolutionOutOfRange(u32),
    MaxWorkersClamped(i64),
}

impl Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigWarning::CurveResolutionOutOfRange(r) => write!(
                f,
                "curve_resolution {r} is outside the recommended range [3, 64]"
            ),
            ConfigWarning::MaxWorkersClamped(w) => {
                write!(f, "max_workers {w} is below 1, using 1")
            }
        }
    }
}
