use crate::app::road_app::RoadAppError;
use cashcab_road_core::model::road::RoadSegment;
use geo::{BoundingRect, MultiLineString};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Display;
use uom::si::length::meter;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SegmentOutputFormat {
    /// the serialized segment records
    #[default]
    Json,
    /// a FeatureCollection with one LineString feature per segment
    GeoJson,
}

impl Display for SegmentOutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SegmentOutputFormat::Json => "json",
            SegmentOutputFormat::GeoJson => "geo_json",
        };
        write!(f, "{s}")
    }
}

impl SegmentOutputFormat {
    pub fn generate_segment_output(
        &self,
        segments: &[RoadSegment],
        include_tags: bool,
    ) -> Result<serde_json::Value, RoadAppError> {
        match self {
            SegmentOutputFormat::Json => {
                let mut output = serde_json::to_value(segments).map_err(|e| {
                    RoadAppError::OutputFailure(format!("failed serializing segments: {e}"))
                })?;
                if !include_tags {
                    if let Some(rows) = output.as_array_mut() {
                        for row in rows.iter_mut().filter_map(|r| r.as_object_mut()) {
                            row.remove("tags");
                        }
                    }
                }
                Ok(output)
            }
            SegmentOutputFormat::GeoJson => {
                let features = segments
                    .iter()
                    .map(|s| segment_feature(s, include_tags))
                    .collect();
                let collection = FeatureCollection {
                    bbox: bounding_box(segments),
                    features,
                    foreign_members: None,
                };
                serde_json::to_value(&collection).map_err(|e| {
                    RoadAppError::OutputFailure(format!("failed serializing feature collection: {e}"))
                })
            }
        }
    }
}

/// `[min lon, min lat, max lon, max lat]` over all segments.
fn bounding_box(segments: &[RoadSegment]) -> Option<Vec<f64>> {
    let lines: MultiLineString<f64> = segments.iter().map(|s| s.line_string()).collect();
    lines
        .bounding_rect()
        .map(|rect| vec![rect.min().x, rect.min().y, rect.max().x, rect.max().y])
}

fn segment_feature(segment: &RoadSegment, include_tags: bool) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("osm_id".to_string(), json![segment.osm_id]);
    properties.insert("highway_type".to_string(), json![segment.highway_type]);
    properties.insert("category".to_string(), json![segment.category]);
    properties.insert("width".to_string(), json![segment.width]);
    properties.insert("priority".to_string(), json![segment.priority]);
    properties.insert("name".to_string(), json![segment.name]);
    properties.insert("length_m".to_string(), json![segment.length().get::<meter>()]);
    properties.insert("oneway".to_string(), json![segment.is_oneway()]);
    if include_tags {
        properties.insert("tags".to_string(), json![segment.tags]);
    }
    let geometry = Geometry::new(geojson::Value::from(&segment.line_string()));
    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: Some(geojson::feature::Id::String(segment.osm_id.clone())),
        properties: Some(properties),
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cashcab_road_core::model::road::RoadCategory;

    fn segment() -> RoadSegment {
        serde_json::from_value(json!({
            "osm_id": "42",
            "highway_type": "primary",
            "category": "SECONDARY_ROAD",
            "coordinates": [[40.0, -105.0], [40.001, -105.0]],
            "width": 8.0,
            "name": "Colfax",
            "tags": {"highway": "primary", "name": "Colfax"},
            "priority": 2010
        }))
        .unwrap()
    }

    #[test]
    fn test_json_output_without_tags() {
        let output = SegmentOutputFormat::Json
            .generate_segment_output(&[segment()], false)
            .unwrap();
        assert_eq!(output[0]["osm_id"], json!("42"));
        assert_eq!(output[0]["category"], json!("SECONDARY_ROAD"));
        assert!(output[0].get("tags").is_none());
    }

    #[test]
    fn test_geojson_output() {
        let output = SegmentOutputFormat::GeoJson
            .generate_segment_output(&[segment()], true)
            .unwrap();
        assert_eq!(output["type"], json!("FeatureCollection"));
        assert_eq!(output["bbox"], json!([-105.0, 40.0, -105.0, 40.001]));
        let feature = &output["features"][0];
        assert_eq!(feature["geometry"]["type"], json!("LineString"));
        assert_eq!(feature["geometry"]["coordinates"][0], json!([-105.0, 40.0]));
        assert_eq!(feature["properties"]["category"], json!(RoadCategory::SecondaryRoad));
        assert_eq!(feature["properties"]["tags"]["name"], json!("Colfax"));
        let length = feature["properties"]["length_m"].as_f64().unwrap();
        assert!((length - 111.2).abs() < 0.5);
    }
}
