use super::RoadAppError;
use crate::app::output::DetectionJsonField;
use cashcab_road_core::model::osm::overpass;
use kdam::{Bar, BarExt};
use rayon::prelude::*;
use serde_json::{json, Map, Value};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Creates a shared progress bar wrapped in Arc<Mutex<>> for parallel processing.
pub fn create_progress_bar(total: usize, desc: &str) -> Result<Arc<Mutex<Bar>>, RoadAppError> {
    let pb = Bar::builder()
        .total(total)
        .animation("fillup")
        .desc(desc)
        .build()
        .map_err(|e| RoadAppError::InternalError(format!("could not build progress bar: {e}")))?;
    Ok(Arc::new(Mutex::new(pb)))
}

/// reads one input file as an OSM document. Overpass API responses are
/// converted to the node/way shape on the way in.
pub fn read_osm_document(path: &Path) -> Result<Value, RoadAppError> {
    let contents = std::fs::read_to_string(path).map_err(|source| RoadAppError::InputReadFailure {
        path: path.display().to_string(),
        source,
    })?;
    let value: Value =
        serde_json::from_str(&contents).map_err(|source| RoadAppError::InputParseFailure {
            path: path.display().to_string(),
            source,
        })?;
    if overpass::is_overpass_json(&value) {
        log::debug!("{} is an Overpass response, converting", path.display());
        let converted = overpass::from_overpass_json(&value)?;
        Ok(converted)
    } else {
        Ok(value)
    }
}

/// the response written in place of a file that could not be processed.
pub fn package_error(input_file: &Path, error: &RoadAppError) -> Value {
    let mut output = Map::new();
    output.insert(
        DetectionJsonField::InputFile.to_string(),
        json![input_file.display().to_string()],
    );
    output.insert(DetectionJsonField::Error.to_string(), json![error.to_string()]);
    Value::Object(output)
}

/// applies `f` to every input, in parallel when `parallelism` is above 1.
/// results keep the order of `inputs`.
pub fn run_batch<F>(
    inputs: &[PathBuf],
    parallelism: usize,
    progress_bar: bool,
    pb_desc: &str,
    f: F,
) -> Result<Vec<Value>, RoadAppError>
where
    F: Fn(&Path) -> Value + Sync + Send,
{
    if inputs.is_empty() {
        return Ok(vec![]);
    }
    let pb = if progress_bar {
        Some(create_progress_bar(inputs.len(), pb_desc)?)
    } else {
        None
    };
    let run_one = |input: &PathBuf| {
        let result = f(input.as_path());
        if let Some(pb) = &pb {
            if let Ok(mut pb_local) = pb.lock() {
                let _ = pb_local.update(1);
            }
        }
        result
    };

    let results: Vec<Value> = if parallelism > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(parallelism)
            .build()
            .map_err(|e| {
                RoadAppError::InternalError(format!("failure building thread pool: {e}"))
            })?;
        pool.install(|| inputs.par_iter().map(run_one).collect())
    } else {
        inputs.iter().map(run_one).collect()
    };

    if pb.is_some() {
        eprintln!();
    }
    Ok(results)
}

/// writes responses as a JSON array to `output_file`, or to stdout when
/// no file is given.
pub fn write_responses(
    responses: &[Value],
    output_file: Option<&Path>,
    pretty: bool,
) -> Result<(), RoadAppError> {
    let serialized = if pretty {
        serde_json::to_string_pretty(responses)
    } else {
        serde_json::to_string(responses)
    }
    .map_err(|e| RoadAppError::OutputFailure(format!("failure serializing responses: {e}")))?;

    match output_file {
        Some(path) => {
            std::fs::write(path, serialized).map_err(|e| {
                RoadAppError::OutputFailure(format!("failure writing {}: {e}", path.display()))
            })?;
            log::info!("wrote {} response(s) to {}", responses.len(), path.display());
        }
        None => println!("{serialized}"),
    }
    Ok(())
}
