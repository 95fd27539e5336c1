mod osm_data_error;
pub mod osm_json_ops;
mod osm_node_cache;
mod osm_way;
pub mod overpass;

pub use osm_data_error::OsmDataError;
pub use osm_json_ops::OsmJsonField;
pub use osm_node_cache::OsmNodeCache;
pub use osm_way::OsmWay;
pub use overpass::from_overpass_json;
