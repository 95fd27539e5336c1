#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum OsmDataError {
    #[error("osm data must be a JSON object, found {0}")]
    NotAnObject(String),
    #[error("osm data is missing the '{0}' collection")]
    MissingCollection(String),
    #[error("osm data collection '{0}' must be a JSON object or array, found {1}")]
    InvalidCollection(String, String),
    #[error("malformed way: {0}")]
    MalformedWay(String),
    #[error("malformed overpass response: {0}")]
    OverpassFormat(String),
}
