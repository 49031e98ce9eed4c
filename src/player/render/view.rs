//! Terminal presentation surface.
//!
//! `TerminalView` receives display updates from the controller and keeps
//! them in a `ViewModel` that the draw pass reads. Drawing records a
//! `HitMap` so the next mouse event can be resolved to a target.

use ratatui::layout::Rect;

use crate::movie::MovieInfo;
use crate::player::controller::ControllerOptions;
use crate::player::error::PlayerError;
use crate::player::events::Target;
use crate::player::render::progress::BarGeometry;
use crate::player::state::{PlayIcon, VolumeIcon};
use crate::player::surface::Presentation;

/// Everything the controller has pushed for display.
#[derive(Debug, Clone)]
pub struct ViewModel {
    pub play_icon: PlayIcon,
    pub play_overlay: bool,
    pub playing_mode: bool,
    /// Set by the end-of-playback cue, cleared when playback resumes
    pub replay_cue: bool,
    pub duration_text: String,
    pub elapsed_text: String,
    pub progress: f64,
    pub volume_icon: VolumeIcon,
    pub volume_slider: f64,
    pub speed_label: String,
    pub fullscreen: bool,
    pub buffering: bool,
    pub controls_visible: bool,
    pub settings_visible: bool,
}

impl Default for ViewModel {
    fn default() -> Self {
        Self {
            play_icon: PlayIcon::Play,
            play_overlay: true,
            playing_mode: false,
            replay_cue: false,
            duration_text: "00:00".to_string(),
            elapsed_text: "00:00".to_string(),
            progress: 0.0,
            volume_icon: VolumeIcon::Full,
            volume_slider: 100.0,
            speed_label: "1x".to_string(),
            fullscreen: false,
            buffering: false,
            controls_visible: true,
            settings_visible: false,
        }
    }
}

/// Clickable regions from the last draw, topmost last.
///
/// A region without a target absorbs clicks (e.g. the body of a panel).
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<(Rect, Option<Target>)>,
    progress: Option<BarGeometry>,
    volume: Option<BarGeometry>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.regions.clear();
        self.progress = None;
        self.volume = None;
    }

    pub fn push(&mut self, area: Rect, target: Target) {
        self.regions.push((area, Some(target)));
    }

    /// Region that swallows clicks aimed at anything beneath it.
    pub fn push_blocker(&mut self, area: Rect) {
        self.regions.push((area, None));
    }

    pub fn set_volume_slider(&mut self, bar: BarGeometry) {
        self.volume = Some(bar);
    }

    pub fn volume_slider(&self) -> Option<BarGeometry> {
        self.volume
    }

    pub fn set_progress(&mut self, bar: BarGeometry) {
        self.progress = Some(bar);
    }

    pub fn progress(&self) -> Option<BarGeometry> {
        self.progress
    }

    /// Topmost target under (`column`, `row`).
    pub fn target_at(&self, column: u16, row: u16) -> Option<Target> {
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| {
                column >= area.x
                    && column < area.x.saturating_add(area.width)
                    && row >= area.y
                    && row < area.y.saturating_add(area.height)
            })
            .and_then(|(_, target)| *target)
    }
}

/// Step sizes of the skip and volume shortcuts, as shown in the help overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShortcutSteps {
    pub skip_seconds: f64,
    pub volume_step: f64,
}

impl Default for ShortcutSteps {
    fn default() -> Self {
        Self::from(&ControllerOptions::default())
    }
}

impl From<&ControllerOptions> for ShortcutSteps {
    fn from(options: &ControllerOptions) -> Self {
        Self {
            skip_seconds: options.skip_seconds,
            volume_step: options.volume_step,
        }
    }
}

/// Presentation backed by the terminal.
#[derive(Debug, Clone)]
pub struct TerminalView {
    pub model: ViewModel,
    pub movie: MovieInfo,
    pub steps: ShortcutSteps,
    pub show_help: bool,
    pub hit_map: HitMap,
}

impl TerminalView {
    pub fn new(movie: MovieInfo) -> Self {
        Self {
            model: ViewModel::default(),
            movie,
            steps: ShortcutSteps::default(),
            show_help: false,
            hit_map: HitMap::default(),
        }
    }

    pub fn with_steps(mut self, steps: ShortcutSteps) -> Self {
        self.steps = steps;
        self
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }
}

impl Presentation for TerminalView {
    fn set_play_icon(&mut self, icon: PlayIcon) {
        self.model.play_icon = icon;
    }

    fn set_play_overlay(&mut self, visible: bool) {
        self.model.play_overlay = visible;
    }

    fn set_playing_mode(&mut self, active: bool) {
        self.model.playing_mode = active;
        if active {
            self.model.replay_cue = false;
        }
    }

    fn show_replay_cue(&mut self) {
        self.model.replay_cue = true;
    }

    fn set_duration_text(&mut self, text: &str) {
        self.model.duration_text = text.to_string();
    }

    fn set_elapsed_text(&mut self, text: &str) {
        self.model.elapsed_text = text.to_string();
    }

    fn set_progress(&mut self, fraction: f64) {
        self.model.progress = fraction;
    }

    fn set_volume_icon(&mut self, icon: VolumeIcon) {
        self.model.volume_icon = icon;
    }

    fn set_volume_slider(&mut self, level: f64) {
        self.model.volume_slider = level;
    }

    fn set_speed_label(&mut self, label: &str) {
        self.model.speed_label = label.to_string();
    }

    fn set_fullscreen_icon(&mut self, fullscreen: bool) {
        self.model.fullscreen = fullscreen;
    }

    fn set_buffering(&mut self, visible: bool) {
        self.model.buffering = visible;
    }

    fn set_controls_visible(&mut self, visible: bool) {
        self.model.controls_visible = visible;
    }

    fn set_settings_visible(&mut self, visible: bool) {
        self.model.settings_visible = visible;
    }

    // The terminal's "fullscreen" is theater mode: the movie header is
    // dropped and the video area takes the freed rows. It cannot fail.
    fn request_fullscreen(&mut self) -> Result<(), PlayerError> {
        Ok(())
    }

    fn exit_fullscreen(&mut self) -> Result<(), PlayerError> {
        Ok(())
    }
}
