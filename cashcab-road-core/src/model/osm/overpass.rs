//! conversion of raw Overpass API JSON into the `{nodes, ways}` document
//! shape read by the detector.
use super::{
    osm_json_ops::{element_id, json_type_name},
    OsmDataError, OsmJsonField,
};
use serde_json::{json, Map, Value};

/// true when the document looks like an Overpass response rather than an
/// already-converted `{nodes, ways}` document.
pub fn is_overpass_json(value: &Value) -> bool {
    value.get(OsmJsonField::Elements.to_str()).is_some()
        && value.get(OsmJsonField::Ways.to_str()).is_none()
}

/// builds a `{nodes, ways}` document from Overpass `elements`. relations and
/// other element types are ignored. ways fetched with `out geom` carry a
/// `geometry` list aligned with their node references; those coordinates
/// fill in nodes the response does not list on their own.
pub fn from_overpass_json(response: &Value) -> Result<Value, OsmDataError> {
    let elements = response
        .get(OsmJsonField::Elements.to_str())
        .ok_or_else(|| OsmDataError::OverpassFormat(String::from("missing 'elements'")))?
        .as_array()
        .ok_or_else(|| OsmDataError::OverpassFormat(String::from("'elements' is not an array")))?;

    let mut nodes = Map::new();
    let mut ways = Map::new();
    let mut geometry_nodes = Map::new();

    for (idx, element) in elements.iter().enumerate() {
        let element_type = element
            .get(OsmJsonField::ElementType.to_str())
            .and_then(Value::as_str)
            .unwrap_or_default();
        let id = element.get(OsmJsonField::Id.to_str()).and_then(element_id);
        match (element_type, id) {
            ("node", Some(id)) => {
                let lat = element.get(OsmJsonField::Lat.to_str()).cloned();
                let lon = element.get(OsmJsonField::Lon.to_str()).cloned();
                let mut node = Map::new();
                if let (Some(lat), Some(lon)) = (lat, lon) {
                    node.insert(OsmJsonField::Lat.to_string(), lat);
                    node.insert(OsmJsonField::Lon.to_string(), lon);
                }
                if let Some(tags) = element.get(OsmJsonField::Tags.to_str()) {
                    node.insert(OsmJsonField::Tags.to_string(), tags.clone());
                }
                nodes.insert(id, Value::Object(node));
            }
            ("way", Some(id)) => {
                let refs = element
                    .get(OsmJsonField::Nodes.to_str())
                    .cloned()
                    .unwrap_or_else(|| json!([]));
                if let (Some(ref_list), Some(geometry)) =
                    (refs.as_array(), element.get("geometry").and_then(Value::as_array))
                {
                    for (node_ref, point) in ref_list.iter().zip(geometry.iter()) {
                        if let Some(node_id) = element_id(node_ref) {
                            geometry_nodes.entry(node_id).or_insert_with(|| point.clone());
                        }
                    }
                }
                let tags = element
                    .get(OsmJsonField::Tags.to_str())
                    .cloned()
                    .unwrap_or_else(|| json!({}));
                ways.insert(id, json!({ "tags": tags, "nodes": refs }));
            }
            ("node", None) | ("way", None) => {
                return Err(OsmDataError::OverpassFormat(format!(
                    "{element_type} element at index {idx} has no usable id"
                )));
            }
            ("", _) => {
                log::debug!(
                    "skipping overpass element at index {idx} without a type ({})",
                    json_type_name(element)
                );
            }
            _ => {}
        }
    }

    for (node_id, point) in geometry_nodes {
        nodes.entry(node_id).or_insert(point);
    }

    Ok(json!({ "nodes": nodes, "ways": ways }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_overpass_json() {
        let response = json!({
            "version": 0.6,
            "elements": [
                {"type": "node", "id": 1, "lat": 40.0, "lon": -105.0},
                {"type": "node", "id": 2, "lat": 40.1, "lon": -105.1},
                {"type": "way", "id": 10, "nodes": [1, 2], "tags": {"highway": "primary"}},
                {"type": "relation", "id": 99, "members": []}
            ]
        });
        assert!(is_overpass_json(&response));
        let doc = from_overpass_json(&response).unwrap();
        assert_eq!(doc["nodes"]["1"]["lat"], json!(40.0));
        assert_eq!(doc["ways"]["10"]["tags"]["highway"], json!("primary"));
        assert_eq!(doc["ways"]["10"]["nodes"], json!([1, 2]));
        assert!(!is_overpass_json(&doc));
    }

    #[test]
    fn test_way_geometry_fills_missing_nodes() {
        let response = json!({
            "elements": [
                {"type": "node", "id": 1, "lat": 40.0, "lon": -105.0},
                {
                    "type": "way", "id": 10, "nodes": [1, 2],
                    "geometry": [{"lat": 41.0, "lon": -106.0}, {"lat": 40.1, "lon": -105.1}],
                    "tags": {"highway": "primary"}
                }
            ]
        });
        let doc = from_overpass_json(&response).unwrap();
        // listed node wins over way geometry
        assert_eq!(doc["nodes"]["1"]["lat"], json!(40.0));
        assert_eq!(doc["nodes"]["2"]["lon"], json!(-105.1));
    }

    #[test]
    fn test_missing_elements() {
        assert!(from_overpass_json(&json!({"nodes": {}})).is_err());
        assert!(from_overpass_json(&json!({"elements": {}})).is_err());
        assert!(from_overpass_json(&json!({"elements": [{"type": "way"}]})).is_err());
    }
}
