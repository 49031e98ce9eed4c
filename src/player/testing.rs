//! Recording fakes for the controller's collaborators.
//!
//! `FakeMedia` obeys commands immediately but, like a real media element,
//! never confirms them on its own; tests deliver lifecycle events by hand.
//! `FakeView` keeps the last value pushed to each display slot.

use crate::player::error::PlayerError;
use crate::player::state::{PlayIcon, VolumeIcon};
use crate::player::surface::{MediaSurface, Presentation};

#[derive(Debug, Clone)]
pub struct FakeMedia {
    pub duration: Option<f64>,
    pub time: f64,
    pub paused: bool,
    pub volume: f64,
    pub muted: bool,
    pub rate: f64,
    pub refuse_play: bool,
    pub play_calls: usize,
    pub pause_calls: usize,
}

impl FakeMedia {
    pub fn with_duration(duration: f64) -> Self {
        Self {
            duration: Some(duration),
            ..Self::default()
        }
    }
}

impl Default for FakeMedia {
    fn default() -> Self {
        Self {
            duration: None,
            time: 0.0,
            paused: true,
            volume: 1.0,
            muted: false,
            rate: 1.0,
            refuse_play: false,
            play_calls: 0,
            pause_calls: 0,
        }
    }
}

impl MediaSurface for FakeMedia {
    fn play(&mut self) -> Result<(), PlayerError> {
        self.play_calls += 1;
        if self.refuse_play {
            return Err(PlayerError::PlaybackRefused("autoplay blocked".to_string()));
        }
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        self.pause_calls += 1;
        self.paused = true;
    }

    fn paused(&self) -> bool {
        self.paused
    }

    fn current_time(&self) -> f64 {
        self.time
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.time = seconds;
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume;
    }

    fn muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn playback_rate(&self) -> f64 {
        self.rate
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.rate = rate;
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakeView {
    pub play_icon: Option<PlayIcon>,
    pub play_overlay: bool,
    pub playing_mode: bool,
    pub replay_cues: usize,
    pub duration_text: String,
    pub elapsed_text: String,
    pub progress: f64,
    pub volume_icon: Option<VolumeIcon>,
    pub volume_slider: f64,
    pub speed_label: String,
    pub fullscreen_icon: bool,
    pub buffering: bool,
    pub controls_visible: bool,
    pub settings_visible: bool,
    pub reject_fullscreen: bool,
    pub fullscreen_requests: usize,
    pub fullscreen_exits: usize,
}

impl Presentation for FakeView {
    fn set_play_icon(&mut self, icon: PlayIcon) {
        self.play_icon = Some(icon);
    }

    fn set_play_overlay(&mut self, visible: bool) {
        self.play_overlay = visible;
    }

    fn set_playing_mode(&mut self, active: bool) {
        self.playing_mode = active;
    }

    fn show_replay_cue(&mut self) {
        self.replay_cues += 1;
    }

    fn set_duration_text(&mut self, text: &str) {
        self.duration_text = text.to_string();
    }

    fn set_elapsed_text(&mut self, text: &str) {
        self.elapsed_text = text.to_string();
    }

    fn set_progress(&mut self, fraction: f64) {
        self.progress = fraction;
    }

    fn set_volume_icon(&mut self, icon: VolumeIcon) {
        self.volume_icon = Some(icon);
    }

    fn set_volume_slider(&mut self, level: f64) {
        self.volume_slider = level;
    }

    fn set_speed_label(&mut self, label: &str) {
        self.speed_label = label.to_string();
    }

    fn set_fullscreen_icon(&mut self, fullscreen: bool) {
        self.fullscreen_icon = fullscreen;
    }

    fn set_buffering(&mut self, visible: bool) {
        self.buffering = visible;
    }

    fn set_controls_visible(&mut self, visible: bool) {
        self.controls_visible = visible;
    }

    fn set_settings_visible(&mut self, visible: bool) {
        self.settings_visible = visible;
    }

    fn request_fullscreen(&mut self) -> Result<(), PlayerError> {
        self.fullscreen_requests += 1;
        if self.reject_fullscreen {
            return Err(PlayerError::FullscreenRejected("not allowed".to_string()));
        }
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<(), PlayerError> {
        self.fullscreen_exits += 1;
        if self.reject_fullscreen {
            return Err(PlayerError::FullscreenRejected("not allowed".to_string()));
        }
        Ok(())
    }
}
