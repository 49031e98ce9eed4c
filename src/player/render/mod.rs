//! Rendering components for the terminal player.
//!
//! This module contains the frame layout, the presentation surface the
//! controller writes to, progress bar geometry and the help overlay.

mod draw;
mod help;
mod progress;
mod view;

pub use draw::{centered_box, draw, player_layout, PlayerLayout, FOOTER_KEYS, HEADER_HEIGHT};
pub use help::{help_area, help_lines, render_help, HELP_BOX_WIDTH};
pub use progress::{format_time, BarGeometry};
pub use view::{HitMap, ShortcutSteps, TerminalView, ViewModel};
