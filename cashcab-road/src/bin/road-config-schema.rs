use cashcab_road::app::road_app::RoadAppConfig;

/// writes the JSON schema of the road application configuration to stdout
pub fn main() {
    let schema = schemars::schema_for!(RoadAppConfig);
    match serde_json::to_string_pretty(&schema) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("failure serializing schema: {e}");
            std::process::exit(1);
        }
    }
}
