use super::SegmentOutputFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// controls the shape of each per-file response.
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// how segments are written
    pub format: SegmentOutputFormat,
    /// include the full OSM tag set of every segment
    pub include_tags: bool,
    /// include the input validation report
    pub include_validation: bool,
    /// pretty-print the written JSON
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            format: SegmentOutputFormat::Json,
            include_tags: true,
            include_validation: true,
            pretty: false,
        }
    }
}
