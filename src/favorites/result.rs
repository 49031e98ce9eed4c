//! Outcomes of favorites changes.

use super::store::MovieId;

/// What a favorites change did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteChange {
    Added(MovieId),
    Removed(MovieId),
    /// The list already had the requested membership
    Unchanged(MovieId),
}

impl FavoriteChange {
    /// User-friendly message describing what happened.
    pub fn message(&self) -> String {
        match self {
            Self::Added(id) => format!("Added movie {} to favorites", id),
            Self::Removed(id) => format!("Removed movie {} from favorites", id),
            Self::Unchanged(id) => format!("Favorites unchanged for movie {}", id),
        }
    }

    /// Whether the file was rewritten.
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged(_))
    }
}
