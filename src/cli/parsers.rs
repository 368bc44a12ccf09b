//! The command line parser.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "nsfg")]
#[command(about = "Count respondents, pregnancies and first births in NSFG survey files", long_about = None)]
pub struct CliParser {
    // Directory holding 2002FemResp.dat.gz and 2002FemPreg.dat.gz.
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}
