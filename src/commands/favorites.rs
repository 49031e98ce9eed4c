//! Favorites subcommands handler

use anyhow::Result;

use starplay::cli::FavoritesCommand;
use starplay::theme::current_theme;
use starplay::{Config, FavoritesStore};

pub fn handle(command: FavoritesCommand) -> Result<()> {
    let config = Config::load()?;
    let store = FavoritesStore::new(config.favorites_path()?);
    let theme = current_theme();

    let change = match command {
        FavoritesCommand::Add { id } => store.add(id)?,
        FavoritesCommand::Remove { id } => store.remove(id)?,
        FavoritesCommand::Toggle { id } => store.toggle(id)?,
        FavoritesCommand::List => {
            let ids = store.list()?;
            if ids.is_empty() {
                println!("{}", theme.secondary_text("No favorites yet."));
            }
            for id in ids {
                println!("{}", id);
            }
            return Ok(());
        }
    };

    let message = change.message();
    if change.is_change() {
        println!("{}", theme.success_text(&message));
    } else {
        println!("{}", theme.secondary_text(&message));
    }
    Ok(())
}
