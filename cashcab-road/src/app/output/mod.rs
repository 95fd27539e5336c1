mod output_config;
mod output_generator;
mod segment_output_format;

pub use output_config::OutputConfig;
pub use output_generator::{generate_detection_output, DetectionJsonField};
pub use segment_output_format::SegmentOutputFormat;
