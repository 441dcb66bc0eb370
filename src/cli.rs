use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for bselect
#[derive(Parser, Debug)]
#[command(name = "bselect")]
#[command(about = "Compile and inspect browser routing rules from bselect.ini")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load the config and report whether it compiles
    Check {
        /// Config file path (default: bselect.ini next to the binary)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the compiled routing rules in order
    Rules {
        /// Config file path (default: bselect.ini next to the binary)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the configured browsers in order
    Browsers {
        /// Config file path (default: bselect.ini next to the binary)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a sample config, rotating any existing file to a backup name
    Init {
        /// Config file path (default: bselect.ini next to the binary)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
