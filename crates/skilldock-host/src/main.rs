mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::Config;
use std::io::Read;

#[derive(Parser)]
#[command(
    name = "skilldock-host",
    version,
    about = "Load guidance entries and decide which ones activate for a context"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Match a context string against the installed guidance entries
    Match {
        /// Context text, joined with spaces; omit to read from stdin
        context: Vec<String>,
        /// Print activations as JSON
        #[arg(long)]
        json: bool,
        /// Also print the body of every activated entry
        #[arg(long)]
        full: bool,
    },
    /// List the installed guidance catalog
    List,
    /// Print the full document body for one entry
    Show {
        /// Entry name (slug)
        name: String,
    },
    /// Validate every configured guidance directory
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load()?;
    skilldock_logging::init_logging(&config.logging.level)?;

    match cli.command {
        Command::Match {
            context,
            json,
            full,
        } => {
            let context = if context.is_empty() {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            } else {
                context.join(" ")
            };
            commands::run_match(&config, &context, json, full)
        }
        Command::List => commands::run_list(&config),
        Command::Show { name } => commands::run_show(&config, &name),
        Command::Check => commands::run_check(&config),
    }
}
