pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "veille")]
#[command(about = "Fetch RSS feeds and mail an HTML digest", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch feeds, build the digest and send it
    Run {
        /// Path to the TOML configuration file
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Build the digest and print it to stdout without sending
    Preview {
        /// Path to the TOML configuration file
        #[arg(short, long)]
        config: PathBuf,
    },
}
