//! Terminal player run loop.
//!
//! Owns the terminal for the duration of playback: raw mode, alternate
//! screen and mouse capture are entered on start and always restored,
//! including on error.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info};

use crate::config::PlayerConfig;
use crate::movie::MovieInfo;
use crate::player::controller::{ControllerOptions, PlayerController};
use crate::player::events::UiEvent;
use crate::player::input::handle_event;
use crate::player::playback::{SimulatedMedia, SimulationTiming};
use crate::player::render::{draw, ShortcutSteps, TerminalView};
use crate::player::state::InputResult;
use crate::player::surface::MediaSurface;
use crate::theme::current_theme;

/// How long to wait for input before advancing the media clock.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// How a playback session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackResult {
    /// Quit after the movie reached its end
    Completed(String),
    /// Quit before the end, at `position` seconds
    Stopped { title: String, position: f64 },
}

impl From<&PlayerConfig> for SimulationTiming {
    fn from(config: &PlayerConfig) -> Self {
        Self {
            preload: Duration::from_millis(config.preload_ms),
            time_update_interval: Duration::from_millis(config.time_update_ms.max(1)),
        }
    }
}

/// Restores the terminal when dropped.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        let setup = execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")
            .and_then(|()| {
                Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
            });
        match setup {
            Ok(terminal) => Ok(Self { terminal }),
            Err(e) => {
                restore_terminal(&mut io::stdout());
                Err(e)
            }
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal(self.terminal.backend_mut());
        let _ = self.terminal.show_cursor();
    }
}

/// Leave raw mode, the alternate screen and mouse capture. Errors are ignored.
fn restore_terminal<W: Write>(out: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(out, LeaveAlternateScreen, DisableMouseCapture);
}

/// Play a simulated movie of `length` seconds in the terminal.
pub fn play_movie(movie: MovieInfo, length: f64, config: &PlayerConfig) -> Result<PlaybackResult> {
    let title = movie.title.clone();
    let media = SimulatedMedia::new(length, SimulationTiming::from(config));
    let options = ControllerOptions::from(config);
    let view = TerminalView::new(movie).with_steps(ShortcutSteps::from(&options));
    let mut controller = PlayerController::new(media, view, options, Instant::now());

    info!(title = %title, length, "starting playback");
    {
        let mut guard = TerminalGuard::enter()?;
        run_loop(&mut guard.terminal, &mut controller)?;
    }

    let (media, _view) = controller.into_parts();
    let result = if media.is_ended() {
        PlaybackResult::Completed(title)
    } else {
        PlaybackResult::Stopped {
            title,
            position: media.current_time(),
        }
    };
    info!(?result, "playback finished");
    Ok(result)
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    controller: &mut PlayerController<SimulatedMedia, TerminalView>,
) -> Result<()> {
    let theme = current_theme();
    let mut last_tick = Instant::now();

    loop {
        let session = controller.session().clone();
        terminal.draw(|frame| draw(frame, controller.view_mut(), &session, &theme))?;

        if event::poll(POLL_INTERVAL)? {
            let input = event::read()?;
            if handle_event(input, controller, Instant::now()) == InputResult::Quit {
                debug!("quit requested");
                break;
            }
        }

        let now = Instant::now();
        controller.media_mut().advance(now.duration_since(last_tick));
        last_tick = now;
        for media_event in controller.media_mut().drain_events() {
            controller.handle(&UiEvent::media(media_event), now);
        }
        controller.tick(now);
    }

    controller.shutdown();
    Ok(())
}
