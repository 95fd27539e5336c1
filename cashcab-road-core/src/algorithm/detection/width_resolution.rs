use crate::config::RoadProcessorConfig;
use crate::model::osm::{OsmJsonField, OsmWay};
use serde::Serialize;

/// assumed width of a single traffic lane, meters.
pub const LANE_WIDTH: f64 = 3.5;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WidthSource {
    WidthTag,
    LaneCount,
    TypeDefault,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResolvedWidth {
    pub width: f64,
    pub source: WidthSource,
}

/// reads a `width` tag such as `7` or `7.5`. a trailing `m` unit (`7.5 m`)
/// is also accepted, beyond plain numbers. only finite positive values count.
pub fn parse_width_tag(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let number = trimmed
        .strip_suffix('m')
        .map(str::trim_end)
        .unwrap_or(trimmed);
    number
        .parse::<f64>()
        .ok()
        .filter(|w| w.is_finite() && *w > 0.0)
}

/// reads a `lanes` tag as an integer lane count. any integer counts,
/// including negative ones and ones too large for `i64`, which are read as
/// the nearest `f64`. non-integers are unreadable.
pub fn parse_lanes_tag(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if let Ok(lanes) = trimmed.parse::<i64>() {
        return Some(lanes as f64);
    }
    let digits = trimmed.strip_prefix(['-', '+']).unwrap_or(trimmed);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        trimmed.parse::<f64>().ok()
    } else {
        None
    }
}

/// an explicit width tag wins, then a lane count estimate floored at
/// `min_road_width`, then the configured default for the highway type.
/// unreadable tags fall through to the next rule.
pub fn resolve_width(
    way: &OsmWay,
    highway_type: &str,
    config: &RoadProcessorConfig,
) -> ResolvedWidth {
    if let Some(width) = way
        .tag(OsmJsonField::Width.to_str())
        .and_then(parse_width_tag)
    {
        return ResolvedWidth {
            width,
            source: WidthSource::WidthTag,
        };
    }
    if let Some(lanes) = way
        .tag(OsmJsonField::Lanes.to_str())
        .and_then(parse_lanes_tag)
    {
        let estimate = lanes * LANE_WIDTH;
        return ResolvedWidth {
            width: estimate.max(config.min_road_width()),
            source: WidthSource::LaneCount,
        };
    }
    ResolvedWidth {
        width: config.get_road_width(highway_type),
        source: WidthSource::TypeDefault,
    }
}
