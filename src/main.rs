//! REST documentation from source - command-line tool listing the REST resources of a Rust project.
//!
//! # Usage
//!
//! ```bash
//! restdoc-from-source [OPTIONS] <PROJECT_PATH>
//! ```
//!
//! # Examples
//!
//! Print the report to stdout:
//! ```bash
//! restdoc-from-source ./my-service
//! ```
//!
//! Write a JSON route listing:
//! ```bash
//! restdoc-from-source ./my-service -f json -o routes.json
//! ```

use anyhow::Result;
use clap::Parser;
use log::info;
use restdoc_from_source::cli;

fn main() -> Result<()> {
    // The verbose flag decides the log level, so arguments are parsed before the logger
    // exists and validated after it is set up.
    let args = cli::CliArgs::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    info!("REST documentation generator starting...");

    let args = cli::parse_args_from_parsed(args)?;
    cli::run(args)?;

    info!("REST documentation generation completed successfully");

    Ok(())
}
