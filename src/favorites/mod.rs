//! Persisted favorites list.
//!
//! Favorites are movie ids kept in a JSON key-value file under the key
//! `starVideoFavorites`. Other keys in the file are left untouched.

mod error;
mod result;
mod store;

pub use error::FavoritesError;
pub use result::FavoriteChange;
pub use store::{FavoritesStore, MovieId, FAVORITES_KEY};
