//! CLI Module
//!
//! Command-line interface for building announcement WAV files.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Ansage - transit announcement audio builder
#[derive(Parser, Debug)]
#[command(name = "ansage")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the stations in the directory
    #[command(name = "stations")]
    Stations,

    /// List known lines and their routes
    #[command(name = "lines")]
    Lines,

    /// Fetch clip URLs and write them as one WAV file
    #[command(name = "export")]
    Export {
        /// Clip URLs, concatenated in order
        #[arg(required = true)]
        urls: Vec<String>,

        /// Output WAV file
        #[arg(short, long, default_value = "announcement.wav")]
        out: PathBuf,
    },

    /// Build the announcement for one route of a line
    #[command(name = "line")]
    Line {
        /// Line name (e.g. U1)
        name: String,

        /// Route index within the line
        #[arg(short, long, default_value_t = 0)]
        route: usize,

        /// Base URL the station clip names are resolved against
        #[arg(short, long)]
        base_url: String,

        /// Output WAV file
        #[arg(short, long, default_value = "announcement.wav")]
        out: PathBuf,
    },
}
