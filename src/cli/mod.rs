use std::fmt::Display;

use log::info;

use crate::{
    cli::messages::{highlight_argument, system_message},
    config::Config,
    error::{Result, SurveyError},
    persistence::{Pregnancy, Raw, Respondent, Table},
};

mod colors;
pub mod messages;
pub mod parsers;

pub use parsers::CliParser;

/// The three counts printed by the `nsfg` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub respondents: usize,
    pub pregnancies: usize,
    pub first_births: usize,
}

pub fn run_report(config: &Config) -> Result<Report> {
    //! Load both tables from `config.data_dir`, then count first births
    //! from a separate read of the pregnancy file.

    info!("reading survey files from {}", config.data_dir.display());

    let respondents = Table::<Respondent, Raw>::load(&config.data_dir, config.limit)?;
    let pregnancies = Table::<Pregnancy, Raw>::load(&config.data_dir, config.limit)?;
    let first_births = Table::<Pregnancy, Raw>::birth_order_count(&config.data_dir, config.limit)?;

    Ok(Report {
        respondents: respondents.len(),
        pregnancies: pregnancies.len(),
        first_births,
    })
}

pub fn failure_message(config: &Config, err: &SurveyError) -> String {
    //! The one diagnostic printed when the report cannot be produced.

    system_message(
        "error",
        format!(
            "no survey report for {}: {}",
            highlight_argument(&config.data_dir.display().to_string()),
            err
        ),
    )
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Number of respondents : {}", self.respondents)?;
        writeln!(f, "Number of pregnancies : {}", self.pregnancies)?;
        write!(f, "birthord count : {}", self.first_births)
    }
}
