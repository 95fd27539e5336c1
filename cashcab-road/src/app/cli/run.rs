use super::{CliArgs, Command};
use crate::app::road_app::{road_app_ops, RoadApp, RoadAppConfig, RoadAppError};
use cashcab_road_core::model::road::{highway_taxonomy, RoadCategory};
use serde_json::{json, Value};

/// executes a parsed command line.
pub fn command_line_runner(args: &CliArgs) -> Result<(), RoadAppError> {
    match &args.command {
        Command::Detect {
            config,
            output,
            inputs,
        } => {
            let app = match config {
                Some(config_file) => RoadApp::try_from(config_file.as_path())?,
                None => {
                    log::info!("no configuration file given, using defaults");
                    RoadApp::try_from(&RoadAppConfig::default())?
                }
            };
            let responses = app.run(inputs)?;
            let failed = responses.iter().filter(|r| r.get("error").is_some()).count();
            if failed > 0 {
                log::warn!("{failed} of {} input file(s) failed", responses.len());
            }
            road_app_ops::write_responses(&responses, output.as_deref(), app.output.pretty)
        }
        Command::Validate { inputs } => {
            let app = RoadApp::try_from(&RoadAppConfig::default())?;
            let responses = app.validate(inputs)?;
            road_app_ops::write_responses(&responses, None, true)
        }
        Command::Taxonomy { category } => {
            let taxonomy = taxonomy_json(*category);
            let serialized = serde_json::to_string_pretty(&taxonomy)
                .map_err(|e| RoadAppError::OutputFailure(e.to_string()))?;
            println!("{serialized}");
            Ok(())
        }
    }
}

/// the highway taxonomy as a JSON array, most important type first.
pub fn taxonomy_json(category: Option<RoadCategory>) -> Value {
    highway_taxonomy::highway_types()
        .filter(|(_, info)| category.is_none_or(|c| info.category == c))
        .map(|(name, info)| {
            json!({
                "highway_type": name,
                "category": info.category,
                "priority": info.priority,
                "min_width": info.min_width,
                "max_width": info.max_width,
                "default_width": info.default_width,
            })
        })
        .collect::<Vec<_>>()
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_taxonomy_json() {
        let all = taxonomy_json(None);
        assert_eq!(all[0]["highway_type"], json!("motorway"));
        assert_eq!(all[0]["category"], json!("MAJOR_HIGHWAY"));

        let service = taxonomy_json(Some(RoadCategory::ServiceRoad));
        let rows = service.as_array().unwrap();
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|r| r["category"] == json!("SERVICE_ROAD")));
    }
}
