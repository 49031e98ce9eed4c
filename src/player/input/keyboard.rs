//! Keyboard input handling for the terminal player.
//!
//! Host-level keys (quit, help, settings panel) are handled here; every
//! other key is dispatched to the controller as a document key event.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::Instant;

use crate::player::controller::PlayerController;
use crate::player::events::{Target, UiEvent};
use crate::player::render::TerminalView;
use crate::player::state::InputResult;
use crate::player::surface::MediaSurface;

/// Handle a keyboard event.
pub fn handle_key_event<M: MediaSurface>(
    key: KeyEvent,
    controller: &mut PlayerController<M, TerminalView>,
    now: Instant,
) -> InputResult {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputResult::Quit;
    }

    // If help is showing, any key closes it
    if controller.view().show_help {
        controller.view_mut().show_help = false;
        return InputResult::Continue;
    }

    // Keyboard use counts as activity for the auto-hide timer
    controller.show_controls(now);
    let settings_open = controller.session().settings_open;

    match key.code {
        KeyCode::Char('q') => return InputResult::Quit,
        KeyCode::Esc => {
            if !settings_open {
                return InputResult::Quit;
            }
            controller.handle(&UiEvent::click(Target::SettingsClose), now);
        }
        KeyCode::Char('?') => controller.view_mut().toggle_help(),
        KeyCode::Char('s') => {
            let target = if settings_open {
                Target::SettingsClose
            } else {
                Target::SettingsButton
            };
            controller.handle(&UiEvent::click(target), now);
        }
        KeyCode::Char('c') => {
            controller.handle(&UiEvent::click(Target::SpeedButton), now);
        }
        KeyCode::Char(digit @ '1'..='3') if settings_open => {
            let event = selector_event(controller, digit);
            controller.handle(&event, now);
        }
        code => {
            controller.handle(&UiEvent::key(code), now);
        }
    }
    InputResult::Continue
}

/// Change event selecting the next option of the numbered settings row.
fn selector_event<M: MediaSurface>(
    controller: &PlayerController<M, TerminalView>,
    digit: char,
) -> UiEvent {
    let session = controller.session();
    match digit {
        '1' => UiEvent::select(Target::QualitySelect, session.quality.next().label()),
        '2' => UiEvent::select(Target::SpeedSelect, session.speed.next().to_string()),
        _ => UiEvent::select(Target::SubtitleSelect, session.subtitles.next().label()),
    }
}
