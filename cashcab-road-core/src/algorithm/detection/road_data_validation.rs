use crate::model::osm::{
    osm_json_ops::{coordinate_of, json_type_name, parse_tags},
    OsmJsonField,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// coordinate coverage below this fraction produces a warning.
pub const MIN_COORDINATE_COVERAGE: f64 = 0.9;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ValidationStatistics {
    pub node_count: usize,
    pub way_count: usize,
    pub nodes_with_coordinates: usize,
    /// fraction of nodes with a usable coordinate, 0 when there are no nodes
    pub coordinate_coverage: f64,
    pub highway_ways: usize,
    /// fraction of ways with a `highway` tag, 0 when there are no ways
    pub highway_coverage: f64,
    pub highway_types: BTreeSet<String>,
}

/// outcome of [`validate_road_data`]. errors make the document unusable,
/// warnings only describe its quality.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub statistics: ValidationStatistics,
}

/// `null` counts as an empty collection, as it does for detection.
fn collection_len(value: &Value) -> Option<usize> {
    match value {
        Value::Null => Some(0),
        Value::Object(map) => Some(map.len()),
        Value::Array(list) => Some(list.len()),
        _ => None,
    }
}

fn collection_values(value: &Value) -> Box<dyn Iterator<Item = &Value> + '_> {
    match value {
        Value::Object(map) => Box::new(map.values()),
        Value::Array(list) => Box::new(list.iter()),
        _ => Box::new(std::iter::empty()),
    }
}

/// inspects an OSM document without modifying it.
pub fn validate_road_data(osm_data: &Value) -> ValidationReport {
    let mut report = ValidationReport::default();

    if !osm_data.is_object() {
        report.errors.push(format!(
            "osm data must be an object, found {}",
            json_type_name(osm_data)
        ));
        return report;
    }
    let nodes = osm_data.get(OsmJsonField::Nodes.to_str());
    let ways = osm_data.get(OsmJsonField::Ways.to_str());
    for (field, value) in [(OsmJsonField::Nodes, nodes), (OsmJsonField::Ways, ways)] {
        match value {
            None => report.errors.push(format!("missing '{field}' key")),
            Some(v) if collection_len(v).is_none() => report.errors.push(format!(
                "'{field}' must be an object or array, found {}",
                json_type_name(v)
            )),
            Some(_) => {}
        }
    }
    let (nodes, ways) = match (nodes, ways) {
        (Some(n), Some(w)) if report.errors.is_empty() => (n, w),
        _ => return report,
    };

    let stats = &mut report.statistics;
    stats.node_count = collection_len(nodes).unwrap_or_default();
    stats.way_count = collection_len(ways).unwrap_or_default();
    stats.nodes_with_coordinates = collection_values(nodes)
        .filter(|n| coordinate_of(n).is_some())
        .count();
    for way in collection_values(ways) {
        let highway = way
            .get(OsmJsonField::Tags.to_str())
            .and_then(|t| parse_tags(t).ok())
            .and_then(|tags| tags.get(OsmJsonField::Highway.to_str()).cloned());
        if let Some(highway_type) = highway {
            stats.highway_ways += 1;
            stats.highway_types.insert(highway_type);
        }
    }
    if stats.node_count > 0 {
        stats.coordinate_coverage = stats.nodes_with_coordinates as f64 / stats.node_count as f64;
    }
    if stats.way_count > 0 {
        stats.highway_coverage = stats.highway_ways as f64 / stats.way_count as f64;
    }

    if stats.node_count > 0 && stats.coordinate_coverage < MIN_COORDINATE_COVERAGE {
        let coverage = stats.coordinate_coverage * 100.0;
        report
            .warnings
            .push(format!("only {coverage:.1}% of nodes have coordinates"));
    }
    if stats.highway_ways == 0 {
        report
            .warnings
            .push(String::from("no ways carry a highway tag"));
    }
    report.valid = true;
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_document() {
        let report = validate_road_data(&json!({
            "nodes": {"n1": {"lat": 0.0, "lon": 0.0}, "n2": {"lat": 0.0, "lon": 1.0}},
            "ways": {
                "w1": {"tags": {"highway": "primary"}, "nodes": ["n1", "n2"]},
                "w2": {"tags": {"building": "yes"}, "nodes": ["n1", "n2"]},
                "w3": {"tags": {"highway": "footway"}, "nodes": ["n1", "n2"]}
            }
        }));
        assert!(report.valid);
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
        assert_eq!(report.statistics.node_count, 2);
        assert_eq!(report.statistics.way_count, 3);
        assert_eq!(report.statistics.coordinate_coverage, 1.0);
        assert_eq!(report.statistics.highway_ways, 2);
        let types: Vec<&str> = report
            .statistics
            .highway_types
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(types, vec!["footway", "primary"]);
    }

    #[test]
    fn test_not_an_object() {
        let report = validate_road_data(&json!([1, 2, 3]));
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn test_missing_keys() {
        let report = validate_road_data(&json!({"nodes": {}}));
        assert!(!report.valid);
        assert_eq!(report.errors, vec!["missing 'ways' key".to_string()]);

        let report = validate_road_data(&json!({}));
        assert_eq!(report.errors.len(), 2);
    }

    #[test]
    fn test_null_collections_are_empty() {
        let report = validate_road_data(&json!({"nodes": null, "ways": null}));
        assert!(report.valid);
        assert!(report.errors.is_empty());
        assert_eq!(report.statistics.node_count, 0);
        assert_eq!(report.statistics.way_count, 0);
        assert_eq!(report.warnings, vec!["no ways carry a highway tag".to_string()]);

        let report = validate_road_data(&json!({"nodes": 3, "ways": null}));
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn test_quality_warnings() {
        let report = validate_road_data(&json!({
            "nodes": {"n1": {"lat": 0.0, "lon": 0.0}, "n2": {"lat": 0.0}},
            "ways": {"w1": {"tags": {"building": "yes"}, "nodes": ["n1", "n2"]}}
        }));
        assert!(report.valid);
        assert_eq!(report.statistics.coordinate_coverage, 0.5);
        assert_eq!(report.warnings.len(), 2);
        assert!(report.warnings[0].contains("50.0%"));
    }
}
