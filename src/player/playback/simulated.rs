//! Virtual-clock media surface.
//!
//! Behaves like a media element playing a file of known length: it buffers,
//! reports metadata, advances with the playback rate, and confirms every
//! transport command with the matching lifecycle event. The host drives
//! the clock with [`SimulatedMedia::advance`] and drains queued events.

use std::collections::VecDeque;
use std::time::Duration;

use tracing::trace;

use crate::player::error::PlayerError;
use crate::player::events::MediaEvent;
use crate::player::surface::MediaSurface;

/// Timing parameters for [`SimulatedMedia`].
#[derive(Debug, Clone, Copy)]
pub struct SimulationTiming {
    /// Buffering time before metadata is available
    pub preload: Duration,
    /// Interval between time-update events while playing
    pub time_update_interval: Duration,
}

impl Default for SimulationTiming {
    fn default() -> Self {
        Self {
            preload: Duration::from_millis(400),
            time_update_interval: Duration::from_millis(250),
        }
    }
}

#[derive(Debug)]
pub struct SimulatedMedia {
    length: f64,
    timing: SimulationTiming,
    loaded: bool,
    preload_left: Duration,
    position: f64,
    paused: bool,
    ended: bool,
    volume: f64,
    muted: bool,
    rate: f64,
    since_time_update: Duration,
    events: VecDeque<MediaEvent>,
}

impl SimulatedMedia {
    /// Create a surface for media `length_secs` long. Starts buffering.
    pub fn new(length_secs: f64, timing: SimulationTiming) -> Self {
        let length = if length_secs.is_finite() {
            length_secs.max(0.0)
        } else {
            0.0
        };
        let mut events = VecDeque::new();
        events.push_back(MediaEvent::Waiting);
        Self {
            length,
            timing,
            loaded: false,
            preload_left: timing.preload,
            position: 0.0,
            paused: true,
            ended: false,
            volume: 1.0,
            muted: false,
            rate: 1.0,
            since_time_update: Duration::ZERO,
            events,
        }
    }

    /// Advance the virtual clock by `elapsed` wall time.
    pub fn advance(&mut self, elapsed: Duration) {
        if !self.loaded {
            self.preload_left = self.preload_left.saturating_sub(elapsed);
            if self.preload_left.is_zero() {
                self.loaded = true;
                self.push(MediaEvent::LoadedMetadata);
                self.push(MediaEvent::CanPlayThrough);
            }
            return;
        }
        if self.paused {
            return;
        }

        self.position += elapsed.as_secs_f64() * self.rate;
        self.since_time_update += elapsed;

        if self.position >= self.length {
            self.position = self.length;
            self.paused = true;
            self.ended = true;
            self.since_time_update = Duration::ZERO;
            self.push(MediaEvent::TimeUpdate);
            self.push(MediaEvent::Pause);
            self.push(MediaEvent::Ended);
            return;
        }

        if self.since_time_update >= self.timing.time_update_interval {
            self.since_time_update = Duration::ZERO;
            self.push(MediaEvent::TimeUpdate);
        }
    }

    /// Next queued lifecycle event.
    pub fn poll_event(&mut self) -> Option<MediaEvent> {
        self.events.pop_front()
    }

    pub fn drain_events(&mut self) -> Vec<MediaEvent> {
        self.events.drain(..).collect()
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    fn push(&mut self, event: MediaEvent) {
        trace!(?event, position = self.position, "media event");
        self.events.push_back(event);
    }
}

impl MediaSurface for SimulatedMedia {
    fn play(&mut self) -> Result<(), PlayerError> {
        if !self.loaded {
            return Err(PlayerError::PlaybackRefused("media not loaded".to_string()));
        }
        if !self.paused {
            return Ok(());
        }
        if self.ended || self.position >= self.length {
            self.position = 0.0;
            self.ended = false;
        }
        self.paused = false;
        self.push(MediaEvent::Play);
        Ok(())
    }

    fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            self.push(MediaEvent::Pause);
        }
    }

    fn paused(&self) -> bool {
        self.paused
    }

    fn current_time(&self) -> f64 {
        self.position
    }

    fn set_current_time(&mut self, seconds: f64) {
        if !self.loaded || !seconds.is_finite() {
            return;
        }
        self.position = seconds.clamp(0.0, self.length);
        if self.position < self.length {
            self.ended = false;
        }
        self.since_time_update = Duration::ZERO;
        self.push(MediaEvent::TimeUpdate);
    }

    fn duration(&self) -> Option<f64> {
        self.loaded.then_some(self.length)
    }

    fn volume(&self) -> f64 {
        self.volume
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = crate::player::state::clamp_volume(volume);
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
        if rate.is_finite() && rate > 0.0 {
            self.rate = rate;
        }
    }
}
