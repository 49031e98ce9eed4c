//! Star Video player CLI entry point.

mod commands;

use anyhow::Result;
use clap::Parser;

use starplay::cli::{Cli, Commands, ConfigCommand};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => commands::play::handle(args),
        Commands::Favorites(command) => commands::favorites::handle(command),
        Commands::Config(command) => match command {
            ConfigCommand::Show => commands::config::handle_show(),
            ConfigCommand::Path => commands::config::handle_path(),
            ConfigCommand::Init => commands::config::handle_init(),
            ConfigCommand::Edit => commands::config::handle_edit(),
        },
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
