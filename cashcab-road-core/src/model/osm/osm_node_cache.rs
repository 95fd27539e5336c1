use super::{
    osm_json_ops::{collection_entries, coordinate_of, entries},
    OsmDataError, OsmJsonField,
};
use crate::model::road::LatLon;
use serde_json::Value;
use std::collections::HashMap;

/// node id → coordinate lookup, rebuilt from scratch for every detection pass.
#[derive(Default, Debug, Clone)]
pub struct OsmNodeCache {
    coordinates: HashMap<String, LatLon>,
}

impl OsmNodeCache {
    pub fn new() -> OsmNodeCache {
        OsmNodeCache::default()
    }

    pub fn clear(&mut self) {
        self.coordinates.clear();
    }

    /// clears the cache and fills it from the `nodes` collection of an OSM
    /// document. nodes without a usable coordinate are left out. returns the
    /// number of cached nodes.
    pub fn rebuild(&mut self, osm_data: &Value) -> Result<usize, OsmDataError> {
        self.clear();
        let nodes = collection_entries(osm_data, OsmJsonField::Nodes)?;
        Ok(self.fill(nodes))
    }

    /// like [`OsmNodeCache::rebuild`], from a bare `nodes` collection.
    pub fn rebuild_from_collection(&mut self, nodes: &Value) -> Result<usize, OsmDataError> {
        self.clear();
        let nodes = entries(nodes, OsmJsonField::Nodes)?;
        Ok(self.fill(nodes))
    }

    fn fill(&mut self, entries: Vec<(String, &Value)>) -> usize {
        self.coordinates.reserve(entries.len());
        for (id, node) in entries {
            if let Some(coord) = coordinate_of(node) {
                self.coordinates.insert(id, coord);
            }
        }
        self.coordinates.len()
    }

    pub fn get(&self, node_id: &str) -> Option<LatLon> {
        self.coordinates.get(node_id).copied()
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rebuild_replaces_contents() {
        let mut cache = OsmNodeCache::new();
        cache
            .rebuild(&json!({"nodes": {"a": {"lat": 1.0, "lon": 2.0}}}))
            .unwrap();
        assert_eq!(cache.get("a"), Some((1.0, 2.0)));

        let count = cache
            .rebuild(&json!({"nodes": {"b": {"lat": 3.0, "lon": 4.0}, "c": {"lat": 5.0}}}))
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(cache.get("a"), None);
        assert_eq!(cache.get("b"), Some((3.0, 4.0)));
        assert_eq!(cache.get("c"), None);
    }

    #[test]
    fn test_rebuild_missing_nodes_clears() {
        let mut cache = OsmNodeCache::new();
        cache
            .rebuild(&json!({"nodes": {"a": {"lat": 1.0, "lon": 2.0}}}))
            .unwrap();
        assert!(cache.rebuild(&json!({"ways": {}})).is_err());
        assert!(cache.is_empty());
    }
}
