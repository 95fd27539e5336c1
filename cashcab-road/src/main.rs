use cashcab_road::app::cli::{command_line_runner, CliArgs};
use clap::Parser;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CliArgs::parse();
    if let Err(e) = command_line_runner(&args) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
