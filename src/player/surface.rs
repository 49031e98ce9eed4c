//! Capability traits the controller is built against.
//!
//! `MediaSurface` stands in for the native media element; `Presentation`
//! is everything the controller draws on. Both are injected, so tests and
//! alternative front ends can substitute their own implementations.

use crate::player::error::PlayerError;
use crate::player::state::{PlayIcon, VolumeIcon};

/// The media element: transport commands plus readable properties.
///
/// Lifecycle notifications are delivered separately as
/// [`MediaEvent`](crate::player::events::MediaEvent)s.
pub trait MediaSurface {
    /// Request playback. The host may refuse (autoplay policy, no data yet).
    fn play(&mut self) -> Result<(), PlayerError>;
    fn pause(&mut self);
    fn paused(&self) -> bool;

    /// Current position in seconds.
    fn current_time(&self) -> f64;
    fn set_current_time(&mut self, seconds: f64);
    /// Total length in seconds, `None` until metadata has loaded.
    fn duration(&self) -> Option<f64>;

    /// Volume in `[0, 1]`.
    fn volume(&self) -> f64;
    fn set_volume(&mut self, volume: f64);
    fn muted(&self) -> bool;
    fn set_muted(&mut self, muted: bool);

    fn playback_rate(&self) -> f64;
    fn set_playback_rate(&mut self, rate: f64);
}

/// Display and host capabilities used by the controller.
///
/// Implementations only render; they never call back into the controller.
pub trait Presentation {
    fn set_play_icon(&mut self, icon: PlayIcon);
    /// Big play overlay shown before playback starts and after it ends.
    fn set_play_overlay(&mut self, visible: bool);
    /// Playing-state visual mode (background treatment, pulse).
    fn set_playing_mode(&mut self, active: bool);
    /// One-shot end-of-playback cue.
    fn show_replay_cue(&mut self);

    fn set_duration_text(&mut self, text: &str);
    fn set_elapsed_text(&mut self, text: &str);
    /// Progress as a fraction in `[0, 1]`.
    fn set_progress(&mut self, fraction: f64);

    fn set_volume_icon(&mut self, icon: VolumeIcon);
    /// Slider position in `[0, 100]`.
    fn set_volume_slider(&mut self, level: f64);
    fn set_speed_label(&mut self, label: &str);
    fn set_fullscreen_icon(&mut self, fullscreen: bool);

    fn set_buffering(&mut self, visible: bool);
    fn set_controls_visible(&mut self, visible: bool);
    fn set_settings_visible(&mut self, visible: bool);

    /// Ask the host to enter fullscreen on the page root.
    fn request_fullscreen(&mut self) -> Result<(), PlayerError>;
    fn exit_fullscreen(&mut self) -> Result<(), PlayerError>;
}
