use cashcab_road_core::model::road::RoadCategory;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cashcab-road")]
#[command(about = "Detect and classify roads in OpenStreetMap extracts")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Detect road segments in one or more OSM JSON files
    Detect {
        /// TOML or JSON application configuration, defaults apply when omitted
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// file to write the responses to, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// OSM JSON documents or raw Overpass responses
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
    /// Report the structure and coverage of OSM JSON files without detecting
    Validate {
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
    },
    /// Print the highway type taxonomy
    Taxonomy {
        /// only list types of this category (e.g. LOCAL_ROAD)
        #[arg(long)]
        category: Option<RoadCategory>,
    },
}
