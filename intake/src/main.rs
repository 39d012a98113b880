// statement-intake entry point
use anyhow::Result;
use clap::Parser;
use statement_intake::config::IntakeSettings;
use statement_intake::logging;

mod cli;
mod commands;

use cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref());

    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(error) => {
            tracing::error!(error = ?error, "Command failed");
            eprintln!("error: {:#}", error);
            2
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<i32> {
    let settings = match &cli.config {
        Some(path) => IntakeSettings::load(path)?,
        None => IntakeSettings::load_default()?,
    };

    match cli.command {
        Command::Validate { file, mime_type } => {
            commands::run_validate(&settings, &file, mime_type)
        }
        Command::Format { statement, locale, csv } => {
            commands::run_format(&settings, &statement, locale.as_deref(), csv.as_ref())?;
            Ok(0)
        }
        Command::Rules { locale } => {
            commands::run_rules(&settings, locale.as_deref())?;
            Ok(0)
        }
        Command::Size { bytes } => {
            commands::run_size(bytes);
            Ok(0)
        }
    }
}
