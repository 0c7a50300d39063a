use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing on stderr so stdout stays a clean document
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("kratix_sdk=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = cli.output;

    match &cli.command {
        Commands::Get(args) => commands::document::get(args, format),
        Commands::Set(args) => commands::document::set(args, format),
        Commands::Remove(args) => commands::document::remove(args, format),
        Commands::Merge(args) => commands::document::merge_files(args, format),
        Commands::Status(args) => commands::status::run(args, format),
    }
}
