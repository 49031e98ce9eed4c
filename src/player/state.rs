//! Player state management
//!
//! Contains the central `PlaybackSession` struct that mirrors the media
//! element, as well as the small value types shared across player modules.

use std::fmt;
use std::str::FromStr;

use crate::player::error::PlayerError;

/// Result of handing a key press to the controller.
///
/// Mapped shortcuts suppress the host's default handling for that key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The key was consumed; the host must not apply its default action
    PreventDefault,
    /// Not a player shortcut
    Ignored,
}

impl KeyOutcome {
    pub fn is_handled(self) -> bool {
        self == Self::PreventDefault
    }
}

/// Result of processing an input event in the terminal front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep running
    Continue,
    /// Leave the player
    Quit,
}

/// Playback speed multiplier, restricted to the fixed speed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaybackSpeed {
    Half,
    ThreeQuarters,
    #[default]
    Normal,
    OneAndQuarter,
    OneAndHalf,
    Double,
}

impl PlaybackSpeed {
    /// Every selectable speed, in cycle order.
    pub const ALL: [PlaybackSpeed; 6] = [
        Self::Half,
        Self::ThreeQuarters,
        Self::Normal,
        Self::OneAndQuarter,
        Self::OneAndHalf,
        Self::Double,
    ];

    /// Multiplier applied to the media surface.
    pub fn rate(self) -> f64 {
        match self {
            Self::Half => 0.5,
            Self::ThreeQuarters => 0.75,
            Self::Normal => 1.0,
            Self::OneAndQuarter => 1.25,
            Self::OneAndHalf => 1.5,
            Self::Double => 2.0,
        }
    }

    /// Look up the speed for an exact rate. Rates outside the set yield `None`.
    pub fn from_rate(rate: f64) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|speed| (speed.rate() - rate).abs() < f64::EPSILON)
    }

    fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|&speed| speed == self)
            .unwrap_or_default()
    }

    /// Next speed in the cycle, wrapping from the last back to the first.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Label shown on the speed button, e.g. `0.75x` or `2x`.
    pub fn label(self) -> String {
        format!("{}x", self)
    }
}

impl fmt::Display for PlaybackSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f64's Display already drops the trailing ".0" (1.0 -> "1")
        write!(f, "{}", self.rate())
    }
}

impl FromStr for PlaybackSpeed {
    type Err = PlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches(['x', 'X']);
        trimmed
            .parse::<f64>()
            .ok()
            .and_then(Self::from_rate)
            .ok_or_else(|| PlayerError::UnsupportedSpeed(s.to_string()))
    }
}

/// Icon tier shown on the volume button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeIcon {
    Muted,
    Low,
    Full,
}

impl VolumeIcon {
    /// Tier for a slider level in `[0, 100]`: muted at 0, low below 50, full otherwise.
    pub fn for_level(level: f64) -> Self {
        if level <= 0.0 {
            Self::Muted
        } else if level < 50.0 {
            Self::Low
        } else {
            Self::Full
        }
    }

    /// Button text for the tier.
    pub fn label(self) -> &'static str {
        match self {
            Self::Muted => "Muted",
            Self::Low => "Vol-",
            Self::Full => "Vol+",
        }
    }
}

/// Play/pause button face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayIcon {
    Play,
    Pause,
}

/// Stream quality offered by the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quality {
    #[default]
    Auto,
    P1080,
    P720,
    P480,
    P360,
}

impl Quality {
    pub const ALL: [Quality; 5] = [Self::Auto, Self::P1080, Self::P720, Self::P480, Self::P360];

    /// Next option in selector order, wrapping.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&q| q == self).unwrap_or_default();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Auto => "Auto",
            Self::P1080 => "1080p",
            Self::P720 => "720p",
            Self::P480 => "480p",
            Self::P360 => "360p",
        }
    }
}

impl FromStr for Quality {
    type Err = PlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|q| q.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PlayerError::UnknownOption {
                selector: "quality",
                value: s.to_string(),
            })
    }
}

/// Subtitle track offered by the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Subtitles {
    #[default]
    Off,
    English,
    Spanish,
    French,
}

impl Subtitles {
    pub const ALL: [Subtitles; 4] = [Self::Off, Self::English, Self::Spanish, Self::French];

    /// Next option in selector order, wrapping.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&s| s == self).unwrap_or_default();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::English => "English",
            Self::Spanish => "Spanish",
            Self::French => "French",
        }
    }
}

impl FromStr for Subtitles {
    type Err = PlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|sub| sub.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PlayerError::UnknownOption {
                selector: "subtitles",
                value: s.to_string(),
            })
    }
}

/// Mutable state for one media element.
///
/// `is_playing` is only ever written from media confirmation events, so
/// it reflects actual playback rather than requested playback.
#[derive(Debug, Clone)]
pub struct PlaybackSession {
    // === Playback ===
    /// Mirrors the media surface's play/pause state
    pub is_playing: bool,
    /// True between seek-drag start and end
    pub is_seeking: bool,
    /// Current speed, always a member of the fixed set
    pub speed: PlaybackSpeed,

    // === Audio ===
    /// Volume in `[0, 1]`
    pub volume: f64,
    pub muted: bool,

    // === Presentation ===
    /// Local view of the document fullscreen state
    pub is_fullscreen: bool,
    pub settings_open: bool,
    pub controls_visible: bool,
    pub buffering: bool,

    // === Settings ===
    pub quality: Quality,
    pub subtitles: Subtitles,
}

impl PlaybackSession {
    /// Create a session with the given starting volume (slider units, 0-100).
    pub fn new(initial_volume: u8) -> Self {
        Self {
            is_playing: false,
            is_seeking: false,
            speed: PlaybackSpeed::Normal,
            volume: clamp_volume(f64::from(initial_volume) / 100.0),
            muted: false,
            is_fullscreen: false,
            settings_open: false,
            controls_visible: true,
            buffering: false,
            quality: Quality::Auto,
            subtitles: Subtitles::Off,
        }
    }

    /// Volume expressed in slider units.
    pub fn volume_level(&self) -> f64 {
        self.volume * 100.0
    }
}

impl Default for PlaybackSession {
    fn default() -> Self {
        Self::new(100)
    }
}

/// Clamp a volume into `[0, 1]`, mapping NaN to silence.
pub fn clamp_volume(volume: f64) -> f64 {
    if volume.is_nan() {
        0.0
    } else {
        volume.clamp(0.0, 1.0)
    }
}
