use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use elevator_sim::modules;
use elevator_sim::utilities::config::{Args, Config};

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.parse().unwrap_or(LevelFilter::Info))
        .parse_default_env()
        .init();

    let config = match Config::get(&args) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE
        },
    };

    match modules::run(config, args.dashboard) {
        Ok(status) => {
            match serde_json::to_string_pretty(&status) {
                Ok(json) => println!("{}", json),
                Err(e) => log::error!("Could not serialize final status: {}", e),
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        },
    }
}
