//! Play command handler

use anyhow::Result;

use starplay::cli::{PlayArgs, DEFAULT_LENGTH_SECS, DEFAULT_TITLE};
use starplay::player::render::format_time;
use starplay::player::{play_movie, PlaybackResult};
use starplay::theme::current_theme;
use starplay::config::PlayerConfig;
use starplay::{logging, Config, MovieInfo};

/// Resolve movie metadata from the arguments.
///
/// `--title` overrides the title of a `--movie` file.
fn resolve_movie(args: &PlayArgs) -> Result<MovieInfo> {
    let mut movie = match &args.movie {
        Some(path) => MovieInfo::load(path)?,
        None => MovieInfo::titled(DEFAULT_TITLE),
    };
    if let Some(title) = &args.title {
        movie.title = title.clone();
    }
    if movie.title.is_empty() {
        movie.title = DEFAULT_TITLE.to_string();
    }
    Ok(movie)
}

#[cfg(not(tarpaulin_include))]
pub fn handle(args: PlayArgs) -> Result<()> {
    let config = Config::load()?;
    let theme = current_theme();

    match Config::data_dir() {
        Ok(dir) => {
            if let Err(e) = logging::init(&dir) {
                eprintln!("{}", theme.error_text(&format!("Logging disabled: {:#}", e)));
            }
        }
        Err(e) => eprintln!("{}", theme.error_text(&format!("Logging disabled: {}", e))),
    }

    let result = run(&args, &config, play_movie)?;
    match &result {
        PlaybackResult::Completed(_) => println!("{}", theme.success_text(&summary(&result))),
        PlaybackResult::Stopped { .. } => println!("{}", theme.primary_text(&summary(&result))),
    }
    Ok(())
}

/// Resolve the movie and hand it to `player` with the player settings.
fn run<F>(args: &PlayArgs, config: &Config, player: F) -> Result<PlaybackResult>
where
    F: FnOnce(MovieInfo, f64, &PlayerConfig) -> Result<PlaybackResult>,
{
    let movie = resolve_movie(args)?;
    let length = args.length.unwrap_or(DEFAULT_LENGTH_SECS);
    player(movie, length, &config.player)
}

/// One-line report printed after the player closes.
fn summary(result: &PlaybackResult) -> String {
    match result {
        PlaybackResult::Completed(title) => format!("Finished: {}", title),
        PlaybackResult::Stopped { title, position } => {
            format!("Stopped {} at {}", title, format_time(*position))
        }
    }
}
