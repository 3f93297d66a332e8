//! Ansage CLI - Transit Announcement Builder
//!
//! Command-line interface for fetching station announcement clips and
//! concatenating them into a single WAV file.

use clap::Parser;
use env_logger::Env;
use log::info;

use ansage::cli::{commands, Cli, Commands};
use ansage::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    info!("Ansage v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(cmd) => handle_command(cmd),
        None => {
            println!("Ansage v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}

fn handle_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Stations => commands::list_stations(),
        Commands::Lines => commands::list_lines(),
        Commands::Export { urls, out } => commands::export(&urls, &out),
        Commands::Line {
            name,
            route,
            base_url,
            out,
        } => commands::export_line(&name, route, &base_url, &out),
    }
}
