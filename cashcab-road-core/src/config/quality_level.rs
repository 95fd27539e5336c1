use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// named presets that control geometry quality downstream of detection.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QualityLevel {
    Low,
    Medium,
    High,
    Ultra,
}

/// the fields a [`QualityLevel`] overwrites when a config is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QualitySettings {
    pub curve_resolution: u32,
    pub simplification_threshold: f64,
    pub generate_markings: bool,
    pub batch_size: usize,
}

impl QualityLevel {
    pub fn settings(&self) -> QualitySettings {
        match self {
            QualityLevel::Low => QualitySettings {
                curve_resolution: 4,
                simplification_threshold: 2.0,
                generate_markings: false,
                batch_size: 100,
            },
            QualityLevel::Medium => QualitySettings {
                curve_resolution: 8,
                simplification_threshold: 1.0,
                generate_markings: true,
                batch_size: 50,
            },
            QualityLevel::High => QualitySettings {
                curve_resolution: 16,
                simplification_threshold: 0.5,
                generate_markings: true,
                batch_size: 25,
            },
            QualityLevel::Ultra => QualitySettings {
                curve_resolution: 32,
                simplification_threshold: 0.1,
                generate_markings: true,
                batch_size: 10,
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QualityLevel::Low => "low",
            QualityLevel::Medium => "medium",
            QualityLevel::High => "high",
            QualityLevel::Ultra => "ultra",
        }
    }
}

impl Display for QualityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QualityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(QualityLevel::Low),
            "medium" => Ok(QualityLevel::Medium),
            "high" => Ok(QualityLevel::High),
            "ultra" => Ok(QualityLevel::Ultra),
            other => Err(format!("unknown quality level '{other}'")),
        }
    }
}
