//! Command-line interface definitions.
//!
//! Kept in the library so `xtask` can render the man page from the same
//! definitions the binary parses.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::favorites::MovieId;

/// Title used when neither `--title` nor `--movie` is given.
pub const DEFAULT_TITLE: &str = "Jumanji: Welcome to the Jungle";

/// Running time of the default title, in seconds.
pub const DEFAULT_LENGTH_SECS: f64 = 7140.0;

#[cfg(not(feature = "release"))]
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("STARPLAY_BUILD_DATE"),
    ")"
);

#[cfg(feature = "release")]
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("STARPLAY_BUILD_DATE"),
    ")"
);

/// Star Video player: watch a movie with full playback controls in the terminal
#[derive(Parser, Debug)]
#[command(name = "starplay")]
#[command(author, version, long_version = LONG_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the player
    ///
    /// Playback is simulated against a virtual clock; every control of the
    /// player page works (seek, skip, volume, speed, fullscreen, settings).
    /// Press ? inside the player for keyboard shortcuts.
    Play(PlayArgs),

    /// Manage the favorites list
    #[command(subcommand)]
    Favorites(FavoritesCommand),

    /// Show or edit configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
pub struct PlayArgs {
    /// Movie title shown in the header
    #[arg(short, long)]
    pub title: Option<String>,

    /// Movie metadata file (TOML, or JSON by extension)
    #[arg(short, long, value_name = "FILE")]
    pub movie: Option<PathBuf>,

    /// Length of the movie in seconds
    #[arg(short, long, value_name = "SECONDS", value_parser = parse_length)]
    pub length: Option<f64>,
}

#[derive(Subcommand, Debug)]
pub enum FavoritesCommand {
    /// Add a movie to favorites
    Add {
        /// Movie id
        id: MovieId,
    },
    /// Remove a movie from favorites
    Remove {
        /// Movie id
        id: MovieId,
    },
    /// Add a movie if absent, remove it otherwise
    Toggle {
        /// Movie id
        id: MovieId,
    },
    /// List favorite movie ids
    List,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Write a default config file if none exists
    Init,
    /// Open the config file in $EDITOR
    Edit,
}

/// Accept only positive, finite lengths.
fn parse_length(value: &str) -> Result<f64, String> {
    let length: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if !length.is_finite() || length <= 0.0 {
        return Err(format!("length must be positive, got {}", value));
    }
    Ok(length)
}
