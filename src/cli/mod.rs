//! CLI command handling
//!
//! Resolves configuration against command-line flags and writes results to
//! stdout.

use std::io;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::commands::{Commands, RunArgs};
use crate::common::config::Config;
use crate::common::paths;
use crate::common::Result;
use crate::scenarios::{Driver, Scenario, Selection};

/// Dispatch a CLI subcommand
pub fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::List => {
            for scenario in Scenario::ALL {
                let note = if scenario.enabled_by_default() {
                    ""
                } else {
                    " (disabled by default, use --with-exception)"
                };
                println!("{:>2}  {}{}", scenario.number(), scenario.title(), note);
            }
            Ok(())
        }

        Commands::Config { path } => {
            let config = load_config(path.as_deref())?;
            match path.or_else(paths::config_path) {
                Some(p) if p.exists() => println!("Config file: {}", p.display()),
                Some(p) => println!("Config file: {} (not present, using defaults)", p.display()),
                None => println!("Config file: none (no config directory on this platform)"),
            }
            match config.driver.seed {
                Some(seed) => println!("seed: {seed}"),
                None => println!("seed: random"),
            }
            println!("enable_exception: {}", config.driver.enable_exception);
            println!("draw range: {}..={}", config.random.min, config.random.max);
            Ok(())
        }
    }
}

/// Run the scenarios
pub fn run(args: RunArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let selection = resolve_selection(&args, &config)?;

    let rng = match args.seed.or(config.driver.seed) {
        Some(seed) => {
            tracing::debug!(seed, "using seeded random source");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let stdout = io::stdout();
    let mut driver = Driver::new(stdout.lock(), rng)
        .with_draw_range(config.random.min, config.random.max);
    driver.run(&selection)
}

fn load_config(path: Option<&std::path::Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Work out which scenarios to run from flags and configuration
fn resolve_selection(args: &RunArgs, config: &Config) -> Result<Selection> {
    let selection = if args.only.is_empty() {
        Selection::default_run()
    } else {
        Selection::only(&args.only)?
    };

    if args.with_exception || config.driver.enable_exception {
        Ok(selection.with_exception())
    } else {
        Ok(selection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_run_selection() {
        let selection = resolve_selection(&RunArgs::default(), &Config::default()).unwrap();
        assert_eq!(selection, Selection::default_run());
    }

    #[test]
    fn test_config_enables_exception() {
        let config = Config::parse("[driver]\nenable_exception = true").unwrap();
        let selection = resolve_selection(&RunArgs::default(), &config).unwrap();
        assert!(selection.contains(Scenario::ExceptionHandling));
    }

    #[test]
    fn test_only_with_exception_flag() {
        let args = RunArgs {
            only: vec![2],
            with_exception: true,
            ..RunArgs::default()
        };
        let selection = resolve_selection(&args, &Config::default()).unwrap();
        let numbers: Vec<u8> = selection.iter().map(Scenario::number).collect();
        assert_eq!(numbers, vec![2, 6]);
    }

    #[test]
    fn test_only_six_enables_exception() {
        let args = RunArgs {
            only: vec![6],
            ..RunArgs::default()
        };
        let selection = resolve_selection(&args, &Config::default()).unwrap();
        assert!(selection.contains(Scenario::ExceptionHandling));
    }
}
