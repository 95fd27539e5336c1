use super::OsmDataError;
use crate::model::road::LatLon;
use indexmap::IndexMap;
use serde_json::Value;
use std::fmt::Display;

/// keys read from OSM-shaped JSON documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsmJsonField {
    Nodes,
    Ways,
    Tags,
    Id,
    Lat,
    Lon,
    Elements,
    ElementType,
    Highway,
    Width,
    Lanes,
    Name,
}

impl OsmJsonField {
    pub fn to_str(&self) -> &'static str {
        match self {
            OsmJsonField::Nodes => "nodes",
            OsmJsonField::Ways => "ways",
            OsmJsonField::Tags => "tags",
            OsmJsonField::Id => "id",
            OsmJsonField::Lat => "lat",
            OsmJsonField::Lon => "lon",
            OsmJsonField::Elements => "elements",
            OsmJsonField::ElementType => "type",
            OsmJsonField::Highway => "highway",
            OsmJsonField::Width => "width",
            OsmJsonField::Lanes => "lanes",
            OsmJsonField::Name => "name",
        }
    }
}

impl Display for OsmJsonField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

/// short name of a JSON value's type, for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// true for a `nodes` or `ways` value with nothing in it: `null`, `{}` or
/// `[]`. other scalars are not collections at all and read as non-empty.
pub fn is_empty_collection(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(list) => list.is_empty(),
        _ => false,
    }
}

/// OSM identifiers arrive either as strings (object keys) or as integers
/// (Overpass element ids, way node references). both normalize to the
/// decimal string form.
pub fn element_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.is_i64() || n.is_u64() => Some(n.to_string()),
        _ => None,
    }
}

/// reads a `{lat, lon}` pair from a node record. both must be finite numbers.
pub fn coordinate_of(node: &Value) -> Option<LatLon> {
    let lat = node.get(OsmJsonField::Lat.to_str())?.as_f64()?;
    let lon = node.get(OsmJsonField::Lon.to_str())?.as_f64()?;
    if lat.is_finite() && lon.is_finite() {
        Some((lat, lon))
    } else {
        None
    }
}

/// reads a tag mapping. scalar values are stringified, nested values are an error.
pub fn parse_tags(value: &Value) -> Result<IndexMap<String, String>, String> {
    let obj = value
        .as_object()
        .ok_or_else(|| format!("tags must be an object, found {}", json_type_name(value)))?;
    obj.iter()
        .map(|(k, v)| {
            let tag_value = match v {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                other => {
                    return Err(format!(
                        "tag '{k}' must be a scalar value, found {}",
                        json_type_name(other)
                    ))
                }
            };
            Ok((k.clone(), tag_value))
        })
        .collect()
}

/// the entries of a `nodes` or `ways` collection in document order. the
/// collection is either an object keyed by id or an array of records which
/// carry their own `id` field. array records without a usable id are keyed
/// by their position, e.g. `#3`.
pub fn collection_entries<'a>(
    osm_data: &'a Value,
    field: OsmJsonField,
) -> Result<Vec<(String, &'a Value)>, OsmDataError> {
    let collection = osm_data
        .get(field.to_str())
        .ok_or_else(|| OsmDataError::MissingCollection(field.to_string()))?;
    entries(collection, field)
}

/// the entries of a collection value already taken out of its document.
pub fn entries(
    collection: &Value,
    field: OsmJsonField,
) -> Result<Vec<(String, &Value)>, OsmDataError> {
    match collection {
        Value::Object(map) => Ok(map.iter().map(|(k, v)| (k.clone(), v)).collect()),
        Value::Array(records) => Ok(records
            .iter()
            .enumerate()
            .map(|(idx, record)| {
                let id = record
                    .get(OsmJsonField::Id.to_str())
                    .and_then(element_id)
                    .unwrap_or_else(|| format!("#{idx}"));
                (id, record)
            })
            .collect()),
        other => Err(OsmDataError::InvalidCollection(
            field.to_string(),
            json_type_name(other).to_string(),
        )),
    }
}
