pub mod cli;
pub mod output;
pub mod road_app;
