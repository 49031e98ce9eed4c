//! Playback logic for the player.
//!
//! This module handles seek/skip arithmetic and the simulated media surface
//! used by the terminal front end.

mod seeking;
mod simulated;

pub use seeking::{fraction_in_bar, known_duration, progress_fraction, seek_target, skip_target};
pub use simulated::{SimulatedMedia, SimulationTiming};
