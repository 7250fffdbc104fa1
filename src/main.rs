//! Debug practice CLI
//!
//! Runs the practice scenarios and prints their results. Set a breakpoint in
//! any exercise and step through.

use clap::Parser;
use debug_practice::commands::{Commands, RunArgs};
use debug_practice::common::logging;
use debug_practice::cli;

#[derive(Parser)]
#[command(name = "debug-practice", about = "Scenarios for practicing step-debugging")]
#[command(version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,

    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    logging::init_cli(cli.verbose);

    let result = match cli.command {
        Some(command) => cli::dispatch(command),
        None => cli::run(cli.run),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
