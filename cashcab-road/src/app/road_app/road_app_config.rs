use super::RoadAppError;
use crate::app::output::OutputConfig;
use cashcab_road_core::config::RoadProcessorConfigBuilder;
use config::{Config, File, FileFormat};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// top-level application configuration, one section per concern.
///
/// every section is optional in the file. a file containing only
/// `[road_processor]` settings is a complete configuration.
#[derive(Serialize, Deserialize, Clone, Debug, Default, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct RoadAppConfig {
    /// settings for road detection
    pub road_processor: RoadProcessorConfigBuilder,
    /// shape of the per-file responses
    pub output: OutputConfig,
    /// batch behavior
    pub execution: ExecutionConfig,
}

#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct ExecutionConfig {
    /// run validation before detection and report invalid files as errors
    pub validate_inputs: bool,
    /// show a progress bar on stderr while files are processed
    pub progress_bar: bool,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        ExecutionConfig {
            validate_inputs: true,
            progress_bar: true,
        }
    }
}

impl RoadAppConfig {
    /// reads a configuration from a string in the given format.
    /// `original_file_path` only appears in error messages.
    pub fn from_str(
        config: &str,
        original_file_path: &str,
        format: FileFormat,
    ) -> Result<RoadAppConfig, RoadAppError> {
        let source = Config::builder()
            .add_source(File::from_str(config, format))
            .build()?;
        source.try_deserialize::<RoadAppConfig>().map_err(|e| {
            RoadAppError::ConfigFailure(config::ConfigError::Message(format!(
                "failure deserializing {original_file_path}: {e}"
            )))
        })
    }
}

impl TryFrom<&Path> for RoadAppConfig {
    type Error = RoadAppError;

    /// reads a TOML or JSON file, picked by extension.
    fn try_from(config_file: &Path) -> Result<Self, Self::Error> {
        let source = Config::builder()
            .add_source(File::from(config_file))
            .build()?;
        let config = source.try_deserialize::<RoadAppConfig>().map_err(|e| {
            RoadAppError::ConfigFailure(config::ConfigError::Message(format!(
                "failure deserializing {}: {e}",
                config_file.display()
            )))
        })?;
        log::debug!("loaded application configuration from {}", config_file.display());
        Ok(config)
    }
}
