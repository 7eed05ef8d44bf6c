use clap::{CommandFactory, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

use crate::pipeline::DEFAULT_OUTPUT_CSV;

#[derive(Parser, Debug)]
#[command(name = "loadprep", author, version, about, long_about = None)]
pub struct Cli {
    /// Set the logging level
    #[arg(long, default_value = "info", global = true)]
    pub log_level: tracing::Level,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the hourly load + synthetic weather CSV from the UCI household archive
    Prepare {
        /// Path to household_power_consumption.txt.zip
        #[arg(long, value_hint = ValueHint::FilePath)]
        input_zip: PathBuf,
        /// Output CSV path
        #[arg(long, default_value = DEFAULT_OUTPUT_CSV, value_hint = ValueHint::FilePath)]
        output_csv: PathBuf,
    },
}

pub fn build_cli_command() -> clap::Command {
    Cli::command()
}
