//! Star Video player library
//!
//! A movie player built around an injectable controller state machine,
//! with a terminal front end, persisted favorites and TOML configuration.

pub mod cli;
pub mod config;
pub mod favorites;
pub mod logging;
pub mod movie;
pub mod player;
pub mod theme;

pub use config::Config;
pub use favorites::FavoritesStore;
pub use movie::MovieInfo;
pub use player::PlayerController;
