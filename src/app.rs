//! Application orchestrator.
//! Loads/merges config, initializes logging, validates the prefixes, runs every
//! manifest and maps the outcome to an exit status.

use anyhow::{anyhow, Result};
use tracing::debug;

use labelmv::cli::Args;
use labelmv::errors::EXIT_FATAL;
use labelmv::output as out;
use labelmv::{
    default_config_path, load_config_from_xml, processor, validate_and_normalize, Config, LogLevel,
};

use crate::logging::init_tracing;

/// Build the effective config: defaults, then the config file, then CLI flags.
fn build_config(args: &Args) -> Result<Config> {
    if let Some(raw) = args.log_level.as_deref()
        && LogLevel::parse(raw).is_none()
    {
        return Err(anyhow!("invalid log level: '{raw}'"));
    }
    let mut cfg = Config::default();
    if let Some(file_cfg) = load_config_from_xml()? {
        file_cfg.apply(&mut cfg);
    }
    args.apply_overrides(&mut cfg);
    Ok(cfg)
}

fn report_fatal(e: &anyhow::Error) {
    out::print_user("Error initializing...");
    out::print_error(&format!("{e:#}"));
}

fn print_config_location() {
    match default_config_path() {
        Some(p) => {
            out::print_info(&format!("labelmv config path:\n  {}\n", p.display()));
            if p.is_file() {
                out::print_info("A config file exists at that location.");
            } else {
                out::print_info("No config file exists there; built-in defaults apply.");
            }
        }
        None => out::print_error("Could not determine a default config path."),
    }
}

/// Run the CLI application and return the process exit status.
pub fn run(args: Args) -> i32 {
    if args.print_config {
        print_config_location();
        return 0;
    }

    let mut cfg = match build_config(&args) {
        Ok(cfg) => cfg,
        Err(e) => {
            report_fatal(&e);
            return EXIT_FATAL;
        }
    };

    let guard = match init_tracing(&cfg.log_level, cfg.log_file.as_deref(), args.json) {
        Ok(guard) => guard,
        Err(e) => {
            report_fatal(&e.context("failed to initialize logging"));
            return EXIT_FATAL;
        }
    };

    debug!("Starting labelmv: {:?}", args);

    let code = match validate_and_normalize(&mut cfg) {
        Ok(()) => processor::run(&cfg).exit_code(cfg.strict),
        Err(e) => {
            report_fatal(&e);
            EXIT_FATAL
        }
    };

    // Flush the file appender before the process exits.
    drop(guard);
    code
}
