use std::process::ExitCode;

use clap::Parser;
use log::debug;
use nsfg_survey::cli::{CliParser, failure_message, run_report};
use nsfg_survey::config::Config;

fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    if let Ok(path) = dotenv {
        debug!("loaded environment from {}", path.display());
    }

    let cli = CliParser::parse();
    let config = Config::resolve(cli.data_dir);

    match run_report(&config) {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!("{:?}", err);
            eprintln!("{}", failure_message(&config, &err));
            ExitCode::FAILURE
        }
    }
}
