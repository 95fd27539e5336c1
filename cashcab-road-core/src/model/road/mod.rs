pub mod highway_taxonomy;
mod road_category;
mod road_segment;
mod road_segment_ops;

pub use highway_taxonomy::{HighwayTypeInfo, UNKNOWN_TYPE_PRIORITY};
pub use road_category::RoadCategory;
pub use road_segment::{LatLon, RoadSegment};
pub use road_segment_ops::group_by_category;
