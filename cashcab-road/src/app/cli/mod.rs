mod cli_args;
mod run;

pub use cli_args::{CliArgs, Command};
pub use run::{command_line_runner, taxonomy_json};
