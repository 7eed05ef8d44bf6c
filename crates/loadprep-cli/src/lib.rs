pub mod cli;
pub mod pipeline;

pub use cli::{build_cli_command, Cli, Commands};
pub use pipeline::{prepare, prepare_with, PrepareOptions, PrepareSummary};
