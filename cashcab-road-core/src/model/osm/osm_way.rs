use super::{
    osm_json_ops::{element_id, json_type_name, parse_tags},
    OsmDataError, OsmJsonField,
};
use indexmap::IndexMap;
use serde_json::Value;

/// a way record read from OSM-shaped JSON.
#[derive(Clone, Debug, PartialEq)]
pub struct OsmWay {
    pub tags: IndexMap<String, String>,
    /// node references in way order. references that are not a string or
    /// integer id are kept as `None` so they count as unresolved nodes.
    pub node_refs: Vec<Option<String>>,
}

impl OsmWay {
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags.get(key).map(String::as_str)
    }

    pub fn highway_type(&self) -> Option<&str> {
        self.tag(OsmJsonField::Highway.to_str())
    }
}

impl TryFrom<&Value> for OsmWay {
    type Error = OsmDataError;

    /// a way without `tags` or `nodes` reads as empty; a way whose `tags` is
    /// not a mapping or whose `nodes` is not a list is malformed.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let obj = value.as_object().ok_or_else(|| {
            OsmDataError::MalformedWay(format!(
                "way must be an object, found {}",
                json_type_name(value)
            ))
        })?;
        let tags = match obj.get(OsmJsonField::Tags.to_str()) {
            None | Some(Value::Null) => IndexMap::new(),
            Some(t) => parse_tags(t).map_err(OsmDataError::MalformedWay)?,
        };
        let node_refs = match obj.get(OsmJsonField::Nodes.to_str()) {
            None | Some(Value::Null) => vec![],
            Some(Value::Array(refs)) => refs.iter().map(element_id).collect(),
            Some(other) => {
                return Err(OsmDataError::MalformedWay(format!(
                    "way nodes must be an array, found {}",
                    json_type_name(other)
                )))
            }
        };
        Ok(OsmWay { tags, node_refs })
    }
}
