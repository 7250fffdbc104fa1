//! CLI command definitions
//!
//! Defines the clap arguments for the practice runner. With no subcommand
//! the runner executes the scenarios.

use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Options controlling a scenario run
#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Seed for the scenario 1 draws (fresh entropy when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run only the given scenario number(s), e.g. --only 2 --only 4
    #[arg(long, value_name = "N")]
    pub only: Vec<u8>,

    /// Also run scenario 6, which aborts with a division-by-zero error
    #[arg(long)]
    pub with_exception: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the scenarios and whether a plain run includes them
    #[command(alias = "ls")]
    List,

    /// Show the configuration file location and effective settings
    Config {
        /// Configuration file to inspect instead of the default location
        #[arg(long, value_name = "PATH")]
        path: Option<PathBuf>,
    },
}
