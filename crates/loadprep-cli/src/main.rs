use clap::Parser;
use loadprep_cli::cli::{Cli, Commands};
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

mod commands;

fn main() {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    match &cli.command {
        Some(Commands::Prepare {
            input_zip,
            output_csv,
        }) => {
            if let Err(e) = commands::prepare::handle(input_zip, output_csv) {
                error!("Prepare command failed: {:?}", e);
                std::process::exit(1);
            }
            info!("Prepare command successful!");
        }
        None => {
            info!("No subcommand provided. Use `loadprep --help` for more information.");
        }
    }
}
