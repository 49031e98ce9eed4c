//! Movie player
//!
//! The core is [`PlayerController`], a state machine that turns user
//! input and media lifecycle events into commands on a [`MediaSurface`]
//! and display updates on a [`Presentation`]. Both collaborators are
//! injected, so the controller runs unchanged against the terminal front
//! end, the simulated media clock, or test fakes.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `state`: PlaybackSession and shared value types (speeds, icons, selector options)
//! - `events`: event vocabulary and the subscription table
//! - `controller`: the state machine itself
//! - `timer`: the controls auto-hide deadline
//! - `playback/`: seek arithmetic and the simulated media surface
//! - `input/`: keyboard and mouse translation for the terminal
//! - `render/`: terminal drawing, hit testing and the help overlay
//!
//! # Usage
//!
//! ```no_run
//! use starplay::config::PlayerConfig;
//! use starplay::movie::MovieInfo;
//! use starplay::player::{play_movie, PlaybackResult};
//!
//! let result = play_movie(MovieInfo::titled("Big Buck Bunny"), 596.0, &PlayerConfig::default()).unwrap();
//! match result {
//!     PlaybackResult::Completed(title) => println!("Finished: {}", title),
//!     PlaybackResult::Stopped { title, position } => println!("Stopped {} at {:.0}s", title, position),
//! }
//! ```

pub mod controller;
pub mod error;
pub mod events;
pub(crate) mod input;
mod native;
pub mod playback;
pub mod render;
pub mod state;
pub mod surface;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
pub mod timer;

pub use controller::{ControllerOptions, PlayerController};
pub use error::PlayerError;
pub use events::{
    Action, EventDetail, EventKind, MediaEvent, SubscriptionId, Subscriptions, Target, UiEvent,
};
pub use native::{play_movie, PlaybackResult};
pub use state::{
    InputResult, KeyOutcome, PlayIcon, PlaybackSession, PlaybackSpeed, Quality, Subtitles, VolumeIcon,
};
pub use surface::{MediaSurface, Presentation};
pub use timer::ControlsTimer;
