mod cli;
mod commands;

use clap::Parser;
use cli::Cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        cli::Commands::Check { config } => commands::check(config),
        cli::Commands::Rules { config, json } => commands::rules(config, json),
        cli::Commands::Browsers { config, json } => commands::browsers(config, json),
        cli::Commands::Init { config } => commands::init(config),
    }
}
