//! Favorites store errors.

use std::path::PathBuf;

/// Errors that can occur while reading or writing the favorites file.
#[derive(Debug, thiserror::Error)]
pub enum FavoritesError {
    #[error("Failed to read favorites {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write favorites {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Favorites file {} is corrupt: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid movie id '{0}': expected a non-negative integer")]
    InvalidId(String),
}
