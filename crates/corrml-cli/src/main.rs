//! Correspondence Markup CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use corrml_cli::{Args, error_adapter::to_reportable};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    let args = Args::parse();

    // Initialize the logger with the specified log level
    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting corrml");
    debug!(args:?; "Parsed arguments");

    if let Err(err) = corrml_cli::run(&args) {
        let reportable = to_reportable(&err);

        let mut writer = String::new();
        if miette::GraphicalReportHandler::new()
            .render_report(&mut writer, reportable.as_ref())
            .is_err()
        {
            writer = reportable.to_string();
        }

        error!("{writer}");

        process::exit(1);
    }

    info!("Completed successfully");
}
