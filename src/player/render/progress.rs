//! Progress bar rendering for the terminal player.
//!
//! Time formatting plus the geometry that maps pointer columns onto the bar.

use crate::player::playback::fraction_in_bar;

/// Format a position in seconds as `MM:SS`.
///
/// Minutes are not wrapped into hours, so long media shows e.g. `125:00`.
/// Non-finite or negative input renders as `00:00`.
pub fn format_time(seconds: f64) -> String {
    let seconds = if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    };
    let mins = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{:02}:{:02}", mins, secs)
}

/// Screen-space bounding box of the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BarGeometry {
    pub left: u16,
    pub row: u16,
    pub width: u16,
}

impl BarGeometry {
    /// Fraction of the bar at `column`, clamped to the bar's ends.
    ///
    /// The last column maps to 1.0 so a click at the far right reaches the end.
    pub fn fraction_at(&self, column: u16) -> Option<f64> {
        let span = f64::from(self.width.saturating_sub(1));
        if span <= 0.0 {
            return if self.width == 1 { Some(0.0) } else { None };
        }
        fraction_in_bar(f64::from(column), f64::from(self.left), span)
    }

    /// Number of filled cells for a progress fraction.
    pub fn filled_cells(&self, fraction: f64) -> u16 {
        let fraction = if fraction.is_finite() {
            fraction.clamp(0.0, 1.0)
        } else {
            0.0
        };
        (f64::from(self.width) * fraction).round() as u16
    }
}
