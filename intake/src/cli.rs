use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "statement-intake",
    version,
    about = "Validate statement uploads and format extracted banking data"
)]
pub struct Cli {
    /// JSON settings file; the embedded defaults are used when omitted.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter (e.g. `debug`, `statement_intake=trace`). Overrides RUST_LOG.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check whether a file would be accepted as a statement upload.
    Validate {
        file: PathBuf,
        /// Declared MIME type; inferred from the extension when omitted.
        #[arg(long)]
        mime_type: Option<String>,
    },
    /// Format a standardized statement (JSON) for display.
    Format {
        statement: PathBuf,
        #[arg(long)]
        locale: Option<String>,
        /// Also write the formatted transactions to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Print the formatting rules of a locale.
    Rules {
        #[arg(long)]
        locale: Option<String>,
    },
    /// Render a byte count the way upload sizes are shown to users.
    Size { bytes: u64 },
}
