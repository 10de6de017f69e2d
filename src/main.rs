//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dnsaudit` library that handles:
//! - Banner output
//! - Command-line argument parsing
//! - Logger initialization
//! - Mapping the audit result to an exit code
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use dnsaudit::initialization::init_logger_with;
use dnsaudit::{cli_exit_code, normalize_legacy_flags, print_banner, run_audit, Config, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    let mut stdout = std::io::stdout();

    // The banner goes out before arguments are validated, like --help output.
    print_banner(&mut stdout).context("Failed to print banner")?;

    let opt = match Opt::try_parse_from(normalize_legacy_flags(std::env::args_os())) {
        Ok(opt) => opt,
        Err(e) => {
            // Help and version go to stdout, usage errors to stderr.
            let _ = e.print();
            process::exit(cli_exit_code(&e));
        }
    };
    let config = Config::from(opt);

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_audit(&config, &mut stdout).await {
        Ok(outcome) => {
            log::debug!("Audit finished: {:?}", outcome);
            Ok(())
        }
        Err(e) => {
            log::debug!("Audit failed: {:?}", e);
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    }
}
