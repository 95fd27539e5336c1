mod road_app;
mod road_app_config;
mod road_app_error;
pub mod road_app_ops;

#[cfg(test)]
mod road_app_tests;

pub use road_app::RoadApp;
pub use road_app_config::{ExecutionConfig, RoadAppConfig};
pub use road_app_error::RoadAppError;
