use super::OutputConfig;
use crate::app::road_app::RoadAppError;
use cashcab_road_core::{
    algorithm::detection::{DetectionStatistics, ValidationReport},
    model::road::RoadSegment,
};
use chrono::Local;
use serde_json::{json, Map, Value};
use std::fmt::Display;

/// keys of a per-file detection response.
#[derive(Debug, Clone, Copy)]
pub enum DetectionJsonField {
    InputFile,
    DetectionExecutedTime,
    Validation,
    Statistics,
    Segments,
    SegmentCount,
    Error,
}

impl DetectionJsonField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionJsonField::InputFile => "input_file",
            DetectionJsonField::DetectionExecutedTime => "detection_executed_time",
            DetectionJsonField::Validation => "validation",
            DetectionJsonField::Statistics => "statistics",
            DetectionJsonField::Segments => "segments",
            DetectionJsonField::SegmentCount => "segment_count",
            DetectionJsonField::Error => "error",
        }
    }
}

impl Display for DetectionJsonField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// assembles the response for one detected input file.
pub fn generate_detection_output(
    input_file: &str,
    segments: &[RoadSegment],
    statistics: &DetectionStatistics,
    validation: Option<&ValidationReport>,
    config: &OutputConfig,
) -> Result<Value, RoadAppError> {
    let executed_time = Local::now().to_rfc3339();
    let statistics_json = serde_json::to_value(statistics)
        .map_err(|e| RoadAppError::OutputFailure(format!("failure serializing statistics: {e}")))?;
    let segments_json = config
        .format
        .generate_segment_output(segments, config.include_tags)?;

    let mut output = Map::new();
    output.insert(DetectionJsonField::InputFile.to_string(), json![input_file]);
    output.insert(
        DetectionJsonField::DetectionExecutedTime.to_string(),
        json![executed_time],
    );
    output.insert(DetectionJsonField::Statistics.to_string(), statistics_json);
    output.insert(DetectionJsonField::SegmentCount.to_string(), json![segments.len()]);
    output.insert(DetectionJsonField::Segments.to_string(), segments_json);
    if let (Some(report), true) = (validation, config.include_validation) {
        let validation_json = serde_json::to_value(report).map_err(|e| {
            RoadAppError::OutputFailure(format!("failure serializing validation report: {e}"))
        })?;
        output.insert(DetectionJsonField::Validation.to_string(), validation_json);
    }
    Ok(Value::Object(output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::output::SegmentOutputFormat;

    #[test]
    fn test_response_fields() {
        let config = OutputConfig::default();
        let report = ValidationReport {
            valid: true,
            ..Default::default()
        };
        let output = generate_detection_output(
            "boulder.json",
            &[],
            &DetectionStatistics::default(),
            Some(&report),
            &config,
        )
        .unwrap();
        assert_eq!(output["input_file"], json!("boulder.json"));
        assert_eq!(output["segment_count"], json!(0));
        assert_eq!(output["segments"], json!([]));
        assert_eq!(output["validation"]["valid"], json!(true));
        assert!(output["detection_executed_time"].is_string());
        assert_eq!(output["statistics"]["total_ways"], json!(0));
    }

    #[test]
    fn test_validation_omitted() {
        let config = OutputConfig {
            format: SegmentOutputFormat::GeoJson,
            include_validation: false,
            ..Default::default()
        };
        let output = generate_detection_output(
            "boulder.json",
            &[],
            &DetectionStatistics::default(),
            Some(&ValidationReport::default()),
            &config,
        )
        .unwrap();
        assert!(output.get("validation").is_none());
        assert_eq!(output["segments"]["type"], json!("FeatureCollection"));
    }
}
