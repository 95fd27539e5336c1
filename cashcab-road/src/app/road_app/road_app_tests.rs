use super::*;
use crate::app::output::SegmentOutputFormat;
use serde_json::json;
use std::path::{Path, PathBuf};

fn test_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("app")
        .join("road_app")
        .join("test")
}

fn boulder_input() -> PathBuf {
    test_dir().join("boulder_osm.json")
}

fn boulder_app() -> RoadApp {
    let conf_file = test_dir().join("boulder_test.toml");
    RoadApp::try_from(conf_file.as_path()).unwrap()
}

fn segment_ids(response: &serde_json::Value) -> Vec<String> {
    response["segments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["osm_id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_boulder_config_file() {
    let app = boulder_app();
    assert_eq!(app.config.min_road_width(), 2.5);
    assert_eq!(app.config.max_road_width(), 30.0);
    assert_eq!(app.config.get_road_width("residential"), 6.0);
    // the low tier replaces the explicit quality settings
    assert_eq!(app.config.curve_resolution(), 4);
    assert_eq!(app.config.batch_size(), 100);
    assert!(!app.config.generate_markings());
    assert_eq!(app.parallelism(), 1);
    assert!(app.output.pretty);
}

#[test]
fn test_run_boulder() {
    let app = boulder_app();
    let responses = app.run(&[boulder_input()]).unwrap();
    assert_eq!(responses.len(), 1);
    let response = &responses[0];

    assert!(response.get("error").is_none(), "{response}");
    assert_eq!(segment_ids(response), vec!["2002", "2004", "2001"]);

    let segments = &response["segments"];
    assert_eq!(segments[0]["category"], json!("MAJOR_HIGHWAY"));
    assert_eq!(segments[0]["width"], json!(10.5));
    assert_eq!(segments[0]["priority"], json!(1001));
    assert_eq!(segments[1]["width"], json!(9.5));
    assert_eq!(segments[1]["coordinates"].as_array().unwrap().len(), 3);
    assert_eq!(segments[2]["width"], json!(6.0));
    assert_eq!(segments[2]["name"], json!("Pearl Street"));
    assert_eq!(segments[2]["tags"]["highway"], json!("residential"));

    let statistics = &response["statistics"];
    assert_eq!(statistics["total_ways"], json!(6));
    assert_eq!(statistics["highway_ways"], json!(5));
    assert_eq!(statistics["filtered_ways"], json!(2));
    assert_eq!(statistics["missing_nodes"], json!(1));
    assert_eq!(statistics["segments"], json!(3));

    let validation = &response["validation"];
    assert_eq!(validation["valid"], json!(true));
    assert_eq!(validation["statistics"]["node_count"], json!(6));
    assert_eq!(validation["warnings"].as_array().unwrap().len(), 1);
}

#[test]
fn test_run_keeps_input_order_with_failures() {
    let conf = RoadAppConfig::from_str(
        "[road_processor]\nenable_parallel_processing = true\nmax_workers = 2\n[execution]\nprogress_bar = false\n",
        "parallel.toml",
        config::FileFormat::Toml,
    )
    .unwrap();
    let app = RoadApp::try_from(&conf).unwrap();
    assert_eq!(app.parallelism(), 2);

    let missing = test_dir().join("missing.json");
    let inputs = vec![boulder_input(), missing, boulder_input()];
    let responses = app.run(&inputs).unwrap();
    assert_eq!(responses.len(), 3);
    assert_eq!(segment_ids(&responses[0]), segment_ids(&responses[2]));
    assert!(responses[1]["error"]
        .as_str()
        .unwrap()
        .contains("missing.json"));
}

#[test]
fn test_invalid_document_is_an_error_response() {
    let app = RoadApp::try_from(&RoadAppConfig::default()).unwrap();
    let result = app.run_document(&json!({"nodes": {}}), "partial.json");
    match result {
        Err(RoadAppError::InvalidInput { path, errors }) => {
            assert_eq!(path, "partial.json");
            assert_eq!(errors, vec!["missing 'ways' key".to_string()]);
        }
        other => panic!("expected invalid input, found {other:?}"),
    }
}

#[test]
fn test_skip_validation_detects_nothing() {
    let mut conf = RoadAppConfig::default();
    conf.execution.validate_inputs = false;
    let app = RoadApp::try_from(&conf).unwrap();
    let response = app.run_document(&json!({"nodes": {}}), "partial.json").unwrap();
    assert_eq!(response["segment_count"], json!(0));
    assert!(response.get("validation").is_none());
}

#[test]
fn test_geojson_response() {
    let mut conf = RoadAppConfig::default();
    conf.output.format = SegmentOutputFormat::GeoJson;
    conf.execution.progress_bar = false;
    let app = RoadApp::try_from(&conf).unwrap();
    let responses = app.run(&[boulder_input()]).unwrap();
    let features = responses[0]["segments"]["features"].as_array().unwrap();
    // default widths: motorway 10.5 from lanes, primary 9.5 tagged, residential 5.5
    assert_eq!(features.len(), 3);
    assert_eq!(features[0]["id"], json!("2002"));
    assert_eq!(features[0]["properties"]["oneway"], json!(true));
    assert_eq!(features[2]["properties"]["width"], json!(5.5));
}

#[test]
fn test_invalid_processor_config() {
    let mut conf = RoadAppConfig::default();
    conf.road_processor.min_road_width = 10.0;
    conf.road_processor.max_road_width = 5.0;
    let result = RoadApp::try_from(&conf);
    assert!(matches!(
        result,
        Err(RoadAppError::ProcessorConfigFailure(_))
    ));
}

#[test]
fn test_validate_files() {
    let app = RoadApp::try_from(&RoadAppConfig::default()).unwrap();
    let responses = app
        .validate(&[boulder_input(), Path::new("nope.json").to_path_buf()])
        .unwrap();
    assert_eq!(responses[0]["validation"]["statistics"]["highway_ways"], json!(5));
    assert!(responses[1].get("error").is_some());
}

#[test]
fn test_write_then_read_responses() {
    let app = boulder_app();
    let responses = app.run(&[boulder_input()]).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("segments.json");
    road_app_ops::write_responses(&responses, Some(&out), app.output.pretty).unwrap();
    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(written[0]["segment_count"], json!(3));
}
