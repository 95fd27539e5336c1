use cashcab_road_core::{config::RoadProcessorConfigError, model::osm::OsmDataError};

#[derive(thiserror::Error, Debug)]
pub enum RoadAppError {
    #[error("failure reading application configuration: {0}")]
    ConfigFailure(#[from] config::ConfigError),
    #[error("invalid road processor configuration: {0}")]
    ProcessorConfigFailure(#[from] RoadProcessorConfigError),
    #[error("failure reading input file {path}: {source}")]
    InputReadFailure {
        path: String,
        source: std::io::Error,
    },
    #[error("failure parsing input file {path} as JSON: {source}")]
    InputParseFailure {
        path: String,
        source: serde_json::Error,
    },
    #[error("input file {path} failed validation: {}", .errors.join("; "))]
    InvalidInput { path: String, errors: Vec<String> },
    #[error(transparent)]
    OsmDataFailure(#[from] OsmDataError),
    #[error("failure writing output: {0}")]
    OutputFailure(String),
    #[error("internal error: {0}")]
    InternalError(String),
}
