use super::{road_app_ops as ops, ExecutionConfig, RoadAppConfig, RoadAppError};
use crate::app::output::{generate_detection_output, OutputConfig};
use cashcab_road_core::{
    algorithm::detection::{validate_road_data, RoadDetector, ValidationReport},
    config::RoadProcessorConfig,
};
use itertools::Itertools;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// runs road detection over batches of OSM input files.
///
/// the processor config is shared by every task. each file gets its own
/// [`RoadDetector`], so files can be processed on separate threads.
pub struct RoadApp {
    pub config: Arc<RoadProcessorConfig>,
    pub output: OutputConfig,
    pub execution: ExecutionConfig,
}

impl TryFrom<&RoadAppConfig> for RoadApp {
    type Error = RoadAppError;

    fn try_from(config: &RoadAppConfig) -> Result<Self, Self::Error> {
        let processor_config = config.road_processor.clone().build()?;
        log::info!(
            "road processor ready: quality '{}', width bounds [{}, {}] m, {} excluded type(s)",
            processor_config.quality_level(),
            processor_config.min_road_width(),
            processor_config.max_road_width(),
            processor_config.excluded_highway_types().len()
        );
        Ok(RoadApp {
            config: Arc::new(processor_config),
            output: config.output.clone(),
            execution: config.execution.clone(),
        })
    }
}

impl TryFrom<&Path> for RoadApp {
    type Error = RoadAppError;

    fn try_from(config_file: &Path) -> Result<Self, Self::Error> {
        let config = RoadAppConfig::try_from(config_file)?;
        RoadApp::try_from(&config)
    }
}

impl RoadApp {
    /// worker threads used by [`RoadApp::run`], 1 unless parallel processing
    /// is enabled.
    pub fn parallelism(&self) -> usize {
        if self.config.enable_parallel_processing() {
            self.config.max_workers()
        } else {
            1
        }
    }

    /// detects roads in every input file. the result holds one response per
    /// input, in input order. a file that cannot be read or fails validation
    /// yields an error response instead of stopping the batch.
    pub fn run(&self, inputs: &[PathBuf]) -> Result<Vec<Value>, RoadAppError> {
        log::info!(
            "running road detection on {} file(s) with {} worker(s)",
            inputs.len(),
            self.parallelism()
        );
        log::debug!("inputs: {}", inputs.iter().map(|p| p.display()).join(", "));
        ops::run_batch(
            inputs,
            self.parallelism(),
            self.execution.progress_bar,
            "road detection",
            |input| match self.run_file(input) {
                Ok(response) => response,
                Err(e) => {
                    log::error!("{e}");
                    ops::package_error(input, &e)
                }
            },
        )
    }

    /// reads, validates and detects a single file.
    pub fn run_file(&self, input: &Path) -> Result<Value, RoadAppError> {
        let osm_data = ops::read_osm_document(input)?;
        self.run_document(&osm_data, &input.display().to_string())
    }

    /// detects roads in an OSM document already in memory.
    pub fn run_document(&self, osm_data: &Value, input_name: &str) -> Result<Value, RoadAppError> {
        let validation = if self.execution.validate_inputs {
            let report = validate_road_data(osm_data);
            if !report.valid {
                return Err(RoadAppError::InvalidInput {
                    path: input_name.to_string(),
                    errors: report.errors,
                });
            }
            for warning in report.warnings.iter() {
                log::warn!("{input_name}: {warning}");
            }
            Some(report)
        } else {
            None
        };

        let mut detector = RoadDetector::new(self.config.clone());
        let segments = detector.detect_road_segments(osm_data);
        generate_detection_output(
            input_name,
            &segments,
            detector.statistics(),
            validation.as_ref(),
            &self.output,
        )
    }

    /// validation reports for each input, without detection.
    pub fn validate(&self, inputs: &[PathBuf]) -> Result<Vec<Value>, RoadAppError> {
        ops::run_batch(
            inputs,
            self.parallelism(),
            self.execution.progress_bar,
            "validation",
            |input| {
                let result = ops::read_osm_document(input).and_then(|osm_data| {
                    let report: ValidationReport = validate_road_data(&osm_data);
                    serde_json::to_value(report).map_err(|e| {
                        RoadAppError::OutputFailure(format!(
                            "failure serializing validation report: {e}"
                        ))
                    })
                });
                match result {
                    Ok(report) => json!({
                        "input_file": input.display().to_string(),
                        "validation": report,
                    }),
                    Err(e) => ops::package_error(input, &e),
                }
            },
        )
    }
}
