//! The player controller.
//!
//! Translates user intent and media lifecycle events into session changes
//! and media commands. The media surface is the source of truth for
//! playback: control operations only issue commands, and `is_playing`
//! follows the surface's confirmation events.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use tracing::{debug, info};

use crate::config::PlayerConfig;
use crate::player::events::{Action, EventDetail, MediaEvent, Subscriptions, UiEvent};
use crate::player::playback::{progress_fraction, seek_target, skip_target};
use crate::player::render::format_time;
use crate::player::state::{
    KeyOutcome, PlayIcon, PlaybackSession, PlaybackSpeed, Quality, Subtitles, VolumeIcon,
};
use crate::player::surface::{MediaSurface, Presentation};
use crate::player::timer::ControlsTimer;

/// Tunables for the controller.
#[derive(Debug, Clone)]
pub struct ControllerOptions {
    /// Seconds moved by rewind/forward and the arrow keys
    pub skip_seconds: f64,
    /// Slider units moved by the up/down arrow keys
    pub volume_step: f64,
    /// Inactivity before the control overlay hides
    pub controls_hide: Duration,
    /// Starting volume in slider units
    pub initial_volume: u8,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            skip_seconds: 10.0,
            volume_step: 10.0,
            controls_hide: ControlsTimer::DEFAULT_DELAY,
            initial_volume: 100,
        }
    }
}

impl From<&PlayerConfig> for ControllerOptions {
    fn from(config: &PlayerConfig) -> Self {
        Self {
            skip_seconds: config.skip_seconds,
            volume_step: f64::from(config.volume_step),
            controls_hide: Duration::from_millis(config.controls_hide_ms),
            initial_volume: config.initial_volume,
        }
    }
}

/// Owns one playback session and keeps it in sync with the media surface.
#[derive(Debug)]
pub struct PlayerController<M, P> {
    media: M,
    view: P,
    session: PlaybackSession,
    subscriptions: Subscriptions,
    controls_timer: ControlsTimer,
    options: ControllerOptions,
}

impl<M: MediaSurface, P: Presentation> PlayerController<M, P> {
    /// Create a controller with the standard subscription table.
    ///
    /// Pushes the initial state to both collaborators and arms the
    /// auto-hide timer from `now`.
    pub fn new(media: M, view: P, options: ControllerOptions, now: Instant) -> Self {
        let session = PlaybackSession::new(options.initial_volume);
        let mut controller = Self {
            media,
            view,
            session,
            subscriptions: Subscriptions::standard(),
            controls_timer: ControlsTimer::new(options.controls_hide),
            options,
        };
        controller.sync_initial_state();
        controller.controls_timer.arm(now);
        controller
    }

    fn sync_initial_state(&mut self) {
        self.media.set_volume(self.session.volume);
        self.media.set_muted(false);
        self.media.set_playback_rate(self.session.speed.rate());

        self.view.set_play_icon(PlayIcon::Play);
        self.view.set_play_overlay(true);
        self.view.set_playing_mode(false);
        self.view.set_duration_text(&format_time(0.0));
        self.view.set_elapsed_text(&format_time(0.0));
        self.view.set_progress(0.0);
        self.view
            .set_volume_icon(VolumeIcon::for_level(self.session.volume_level()));
        self.view.set_volume_slider(self.session.volume_level());
        self.view.set_speed_label(&self.session.speed.label());
        self.view.set_fullscreen_icon(false);
        self.view.set_buffering(false);
        self.view.set_controls_visible(true);
        self.view.set_settings_visible(false);
    }

    // === Accessors ===

    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    pub fn media_mut(&mut self) -> &mut M {
        &mut self.media
    }

    pub fn view(&self) -> &P {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut P {
        &mut self.view
    }

    pub fn subscriptions(&self) -> &Subscriptions {
        &self.subscriptions
    }

    pub fn subscriptions_mut(&mut self) -> &mut Subscriptions {
        &mut self.subscriptions
    }

    pub fn controls_timer(&self) -> &ControlsTimer {
        &self.controls_timer
    }

    pub fn options(&self) -> &ControllerOptions {
        &self.options
    }

    // === Dispatch ===

    /// Run every action bound to the event.
    ///
    /// Returns the keyboard outcome for key events and `Ignored` otherwise.
    pub fn handle(&mut self, event: &UiEvent, now: Instant) -> KeyOutcome {
        let actions: Vec<Action> = self
            .subscriptions
            .actions_for(event.target, event.kind)
            .collect();

        let mut outcome = KeyOutcome::Ignored;
        for action in actions {
            if self.apply(action, event, now) == KeyOutcome::PreventDefault {
                outcome = KeyOutcome::PreventDefault;
            }
        }
        outcome
    }

    fn apply(&mut self, action: Action, event: &UiEvent, now: Instant) -> KeyOutcome {
        match action {
            Action::OnLoadedMetadata => self.on_media_event(MediaEvent::LoadedMetadata),
            Action::OnTimeUpdate => self.on_media_event(MediaEvent::TimeUpdate),
            Action::OnPlay => self.on_media_event(MediaEvent::Play),
            Action::OnPause => self.on_media_event(MediaEvent::Pause),
            Action::OnEnded => self.on_media_event(MediaEvent::Ended),
            Action::ShowBuffering => self.on_media_event(MediaEvent::Waiting),
            Action::HideBuffering => self.on_media_event(MediaEvent::CanPlayThrough),
            Action::TogglePlay => self.toggle_play(),
            Action::Seek => {
                if let Some(fraction) = event.fraction() {
                    self.seek_to(fraction);
                }
            }
            Action::StartSeekDrag => {
                if let Some(fraction) = event.fraction() {
                    self.start_seek_drag(fraction);
                }
            }
            Action::ContinueSeekDrag => {
                if let Some(fraction) = event.fraction() {
                    self.continue_seek_drag(fraction);
                }
            }
            Action::EndSeekDrag => self.end_seek_drag(),
            Action::ToggleMute => self.toggle_mute(),
            Action::SetVolume => {
                if let EventDetail::Level(level) = event.detail {
                    self.set_volume(level);
                }
            }
            Action::CycleSpeed => self.cycle_speed(),
            Action::ToggleFullscreen => self.toggle_fullscreen(),
            Action::Rewind => self.rewind(),
            Action::Forward => self.forward(),
            Action::ShowSettings => self.show_settings(),
            Action::HideSettings => self.hide_settings(),
            Action::ChangeQuality => {
                if let EventDetail::Value(value) = &event.detail {
                    match value.parse::<Quality>() {
                        Ok(quality) => self.change_quality(quality),
                        Err(e) => debug!("ignoring quality selection: {}", e),
                    }
                }
            }
            Action::ChangeSpeed => {
                if let EventDetail::Value(value) = &event.detail {
                    match value.parse::<PlaybackSpeed>() {
                        Ok(speed) => self.set_speed(speed),
                        Err(e) => debug!("ignoring speed selection: {}", e),
                    }
                }
            }
            Action::ChangeSubtitles => {
                if let EventDetail::Value(value) = &event.detail {
                    match value.parse::<Subtitles>() {
                        Ok(subtitles) => self.change_subtitles(subtitles),
                        Err(e) => debug!("ignoring subtitle selection: {}", e),
                    }
                }
            }
            Action::HandleKeyboard => {
                if let EventDetail::Key(code) = event.detail {
                    return self.handle_keyboard(code);
                }
            }
            Action::ShowControls => self.show_controls(now),
        }
        KeyOutcome::Ignored
    }

    // === Media lifecycle ===

    /// React to a media surface notification.
    pub fn on_media_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::LoadedMetadata => {
                let duration = self.media.duration().unwrap_or(0.0);
                debug!(duration, "metadata loaded");
                self.view.set_duration_text(&format_time(duration));
            }
            MediaEvent::TimeUpdate => {
                let current = self.media.current_time();
                if !self.session.is_seeking {
                    if let Some(fraction) = progress_fraction(current, self.media.duration()) {
                        self.view.set_progress(fraction);
                    }
                }
                self.view.set_elapsed_text(&format_time(current));
            }
            MediaEvent::Play => {
                self.session.is_playing = true;
                self.view.set_play_icon(PlayIcon::Pause);
                self.view.set_play_overlay(false);
                self.view.set_playing_mode(true);
            }
            MediaEvent::Pause => {
                self.session.is_playing = false;
                self.view.set_play_icon(PlayIcon::Play);
                self.view.set_playing_mode(false);
            }
            MediaEvent::Ended => {
                self.session.is_playing = false;
                self.view.set_play_icon(PlayIcon::Play);
                self.view.set_play_overlay(true);
                self.view.set_playing_mode(false);
                self.view.show_replay_cue();
            }
            MediaEvent::Waiting => {
                self.session.buffering = true;
                self.view.set_buffering(true);
            }
            MediaEvent::CanPlayThrough => {
                self.session.buffering = false;
                self.view.set_buffering(false);
            }
        }
    }

    // === Transport ===

    /// Issue play when paused, pause otherwise.
    ///
    /// Does not touch `is_playing`; that follows the confirmation event.
    pub fn toggle_play(&mut self) {
        if self.media.paused() {
            if let Err(e) = self.media.play() {
                debug!("play request had no effect: {}", e);
            }
        } else {
            self.media.pause();
        }
    }

    /// Jump to `fraction` of the media. No-op until the duration is known.
    ///
    /// Returns whether a seek was issued.
    pub fn seek_to(&mut self, fraction: f64) -> bool {
        let Some(target) = seek_target(fraction, self.media.duration()) else {
            debug!("seek ignored: duration unknown");
            return false;
        };
        self.media.set_current_time(target);
        if self.session.is_seeking {
            // Time updates are suppressed while dragging, so show the drag position
            if let Some(fraction) = progress_fraction(target, self.media.duration()) {
                self.view.set_progress(fraction);
            }
        }
        true
    }

    pub fn start_seek_drag(&mut self, fraction: f64) {
        self.session.is_seeking = true;
        self.seek_to(fraction);
    }

    /// Follow the pointer while a drag is active, anywhere on screen.
    pub fn continue_seek_drag(&mut self, fraction: f64) {
        if self.session.is_seeking {
            self.seek_to(fraction);
        }
    }

    pub fn end_seek_drag(&mut self) {
        self.session.is_seeking = false;
    }

    /// Move by `delta` seconds, clamped to `[0, duration]`.
    ///
    /// Returns whether a seek was issued.
    pub fn skip(&mut self, delta: f64) -> bool {
        match skip_target(self.media.current_time(), delta, self.media.duration()) {
            Some(target) => {
                self.media.set_current_time(target);
                true
            }
            None => {
                debug!("skip ignored: duration unknown");
                false
            }
        }
    }

    pub fn rewind(&mut self) {
        self.skip(-self.options.skip_seconds);
    }

    pub fn forward(&mut self) {
        self.skip(self.options.skip_seconds);
    }

    // === Audio ===

    /// Set volume from slider units in `[0, 100]`. Always unmutes.
    ///
    /// The slider is written back so hosts that draw it from the view stay in step.
    pub fn set_volume(&mut self, level: f64) {
        let level = if level.is_nan() {
            0.0
        } else {
            level.clamp(0.0, 100.0)
        };
        self.session.volume = level / 100.0;
        self.session.muted = false;
        self.media.set_volume(self.session.volume);
        self.media.set_muted(false);
        self.view.set_volume_icon(VolumeIcon::for_level(level));
        self.view.set_volume_slider(level);
    }

    fn step_volume(&mut self, delta: f64) {
        let level = (self.media.volume() * 100.0 + delta).clamp(0.0, 100.0);
        self.set_volume(level);
    }

    pub fn toggle_mute(&mut self) {
        if self.media.muted() {
            self.media.set_muted(false);
            self.session.muted = false;
            let level = self.media.volume() * 100.0;
            self.view.set_volume_icon(VolumeIcon::for_level(level));
            self.view.set_volume_slider(level);
        } else {
            self.media.set_muted(true);
            self.session.muted = true;
            self.view.set_volume_icon(VolumeIcon::Muted);
        }
    }

    // === Speed ===

    /// Advance to the next speed in the fixed cycle.
    pub fn cycle_speed(&mut self) {
        self.set_speed(self.session.speed.next());
    }

    pub fn set_speed(&mut self, speed: PlaybackSpeed) {
        self.session.speed = speed;
        self.media.set_playback_rate(speed.rate());
        self.view.set_speed_label(&speed.label());
    }

    // === Fullscreen ===

    /// Enter or leave fullscreen.
    ///
    /// The flag is tracked locally and flips even if the host rejects the
    /// request. Hosts that can observe fullscreen changes made elsewhere
    /// should report them through [`sync_fullscreen`](Self::sync_fullscreen).
    pub fn toggle_fullscreen(&mut self) {
        let result = if self.session.is_fullscreen {
            self.view.exit_fullscreen()
        } else {
            self.view.request_fullscreen()
        };
        if let Err(e) = result {
            debug!("fullscreen change had no effect: {}", e);
        }
        self.session.is_fullscreen = !self.session.is_fullscreen;
        self.view.set_fullscreen_icon(self.session.is_fullscreen);
    }

    /// Adopt a fullscreen state changed by the host (e.g. OS-level escape).
    pub fn sync_fullscreen(&mut self, active: bool) {
        if self.session.is_fullscreen != active {
            self.session.is_fullscreen = active;
            self.view.set_fullscreen_icon(active);
        }
    }

    // === Settings panel ===

    pub fn show_settings(&mut self) {
        self.session.settings_open = true;
        self.view.set_settings_visible(true);
    }

    pub fn hide_settings(&mut self) {
        self.session.settings_open = false;
        self.view.set_settings_visible(false);
    }

    pub fn change_quality(&mut self, quality: Quality) {
        self.session.quality = quality;
        info!(quality = quality.label(), "quality changed");
    }

    pub fn change_subtitles(&mut self, subtitles: Subtitles) {
        self.session.subtitles = subtitles;
        info!(subtitles = subtitles.label(), "subtitles changed");
    }

    // === Keyboard ===

    /// Apply a player shortcut.
    pub fn handle_keyboard(&mut self, code: KeyCode) -> KeyOutcome {
        match code {
            KeyCode::Char(' ') => self.toggle_play(),
            KeyCode::Left => self.rewind(),
            KeyCode::Right => self.forward(),
            KeyCode::Up => self.step_volume(self.options.volume_step),
            KeyCode::Down => self.step_volume(-self.options.volume_step),
            KeyCode::Char('f') | KeyCode::Char('F') => self.toggle_fullscreen(),
            KeyCode::Char('m') | KeyCode::Char('M') => self.toggle_mute(),
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::PreventDefault
    }

    // === Controls auto-hide ===

    /// Show the control overlay and restart the inactivity timer.
    pub fn show_controls(&mut self, now: Instant) {
        self.session.controls_visible = true;
        self.view.set_controls_visible(true);
        self.controls_timer.arm(now);
    }

    /// Fire the auto-hide timer if due. Controls only hide while playing.
    pub fn tick(&mut self, now: Instant) {
        if self.controls_timer.fire_if_due(now) && self.session.is_playing {
            self.session.controls_visible = false;
            self.view.set_controls_visible(false);
        }
    }

    /// Release pending timers.
    pub fn shutdown(&mut self) {
        self.controls_timer.cancel();
    }

    /// Consume the controller, returning its collaborators.
    pub fn into_parts(mut self) -> (M, P) {
        self.shutdown();
        (self.media, self.view)
    }
}
