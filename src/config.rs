//! Runtime configuration for the report.

use std::env;
use std::path::PathBuf;

use log::warn;

pub const DATA_DIR_VAR: &str = "NSFG_DATA_DIR";
pub const LIMIT_VAR: &str = "NSFG_LIMIT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the survey data files.
    pub data_dir: PathBuf,
    /// Read at most this many lines of each file.
    pub limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            limit: None,
        }
    }
}

impl Config {
    pub fn resolve(data_dir: Option<PathBuf>) -> Config {
        //! Build the configuration from the command line argument and the
        //! environment (including a `.env` file, if one was loaded).
        //!
        //! The argument wins over [`DATA_DIR_VAR`], which wins over `.`.

        Config::from_sources(
            data_dir,
            env::var(DATA_DIR_VAR).ok(),
            env::var(LIMIT_VAR).ok(),
        )
    }

    pub fn from_sources(
        data_dir_arg: Option<PathBuf>,
        data_dir_var: Option<String>,
        limit_var: Option<String>,
    ) -> Config {
        let defaults = Config::default();

        let data_dir = data_dir_arg
            .or_else(|| data_dir_var.filter(|dir| !dir.is_empty()).map(PathBuf::from))
            .unwrap_or(defaults.data_dir);

        let limit = limit_var.and_then(|raw| match raw.trim().parse::<usize>() {
            Ok(limit) => Some(limit),
            Err(_) => {
                warn!("ignoring {}={:?}: not a line count", LIMIT_VAR, raw);
                None
            }
        });

        Config { data_dir, limit }
    }
}
