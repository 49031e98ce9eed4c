//! Input handling for the terminal player.
//!
//! This module turns crossterm keyboard and mouse events into controller
//! events and returns control flow signals to the run loop.

mod keyboard;
mod mouse;

pub use keyboard::handle_key_event;
pub use mouse::translate_mouse;

use crossterm::event::{Event, KeyEventKind};
use std::time::Instant;

use crate::player::controller::PlayerController;
use crate::player::render::TerminalView;
use crate::player::state::InputResult;
use crate::player::surface::MediaSurface;

/// Handle any input event, dispatching to the appropriate handler.
///
/// Resizes need no handling here: the next draw recomputes the layout
/// and the hit map.
pub fn handle_event<M: MediaSurface>(
    event: Event,
    controller: &mut PlayerController<M, TerminalView>,
    now: Instant,
) -> InputResult {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            handle_key_event(key, controller, now)
        }
        Event::Mouse(mouse) => {
            let events = translate_mouse(mouse, &controller.view().hit_map, controller.session());
            for event in &events {
                controller.handle(event, now);
            }
            InputResult::Continue
        }
        _ => InputResult::Continue, // Ignore focus events, key releases, etc.
    }
}
