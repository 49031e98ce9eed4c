//! Player operation errors.
//!
//! None of these are fatal: the controller logs them and the control simply
//! has no visible effect.

/// Errors reported by the media and presentation collaborators.
#[derive(Debug, thiserror::Error)]
pub enum PlayerError {
    #[error("Playback refused by host: {0}")]
    PlaybackRefused(String),

    #[error("Fullscreen request rejected: {0}")]
    FullscreenRejected(String),

    #[error("Unsupported playback speed: {0}")]
    UnsupportedSpeed(String),

    #[error("Unknown {selector} option: {value}")]
    UnknownOption {
        selector: &'static str,
        value: String,
    },
}
