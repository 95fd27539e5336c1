//! Road segment detection and classification for OpenStreetMap way data.
//!
//! The kernel turns an already-fetched OSM document (nodes and ways) into an
//! ordered list of [`model::road::RoadSegment`] records. Ways are classified
//! against a fixed highway taxonomy, filtered by a [`config::RoadProcessorConfig`],
//! given a resolved width and sorted by road importance.
pub mod algorithm;
pub mod config;
pub mod model;
