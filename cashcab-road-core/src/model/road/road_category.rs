use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// coarse grouping of highway types. the variant order is the importance
/// order, so the derived `Ord` sorts major highways first.
#[derive(
    Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoadCategory {
    MajorHighway,
    SecondaryRoad,
    LocalRoad,
    ServiceRoad,
    SpecialRoad,
}

impl RoadCategory {
    pub const ALL: [RoadCategory; 5] = [
        RoadCategory::MajorHighway,
        RoadCategory::SecondaryRoad,
        RoadCategory::LocalRoad,
        RoadCategory::ServiceRoad,
        RoadCategory::SpecialRoad,
    ];

    /// 1-based importance rank of this category.
    pub fn rank(&self) -> u32 {
        match self {
            RoadCategory::MajorHighway => 1,
            RoadCategory::SecondaryRoad => 2,
            RoadCategory::LocalRoad => 3,
            RoadCategory::ServiceRoad => 4,
            RoadCategory::SpecialRoad => 5,
        }
    }

    /// priority offset added to every highway-type priority in this category.
    /// large enough that category grouping dominates the per-type rank.
    pub fn band_offset(&self) -> u32 {
        1000 * self.rank()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoadCategory::MajorHighway => "MAJOR_HIGHWAY",
            RoadCategory::SecondaryRoad => "SECONDARY_ROAD",
            RoadCategory::LocalRoad => "LOCAL_ROAD",
            RoadCategory::ServiceRoad => "SERVICE_ROAD",
            RoadCategory::SpecialRoad => "SPECIAL_ROAD",
        }
    }
}

impl Display for RoadCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RoadCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoadCategory::ALL
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .copied()
            .ok_or_else(|| {
                let valid = RoadCategory::ALL.iter().map(|c| c.as_str()).collect::<Vec<_>>();
                format!("unknown road category '{s}', must be one of {valid:?}")
            })
    }
}
