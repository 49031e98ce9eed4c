//! File-backed favorites store.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use super::error::FavoritesError;
use super::result::FavoriteChange;

/// Key the favorites list is stored under.
pub const FAVORITES_KEY: &str = "starVideoFavorites";

/// Catalogue identifier of a movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub u32);

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MovieId {
    type Err = FavoritesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(MovieId)
            .map_err(|_| FavoritesError::InvalidId(s.to_string()))
    }
}

/// Ordered, duplicate-free favorites list persisted in a JSON file.
///
/// Every operation re-reads the file, so several processes sharing the
/// file see each other's changes.
#[derive(Debug, Clone)]
pub struct FavoritesStore {
    path: PathBuf,
}

impl FavoritesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Favorites in the order they were added. A missing file is an empty list.
    pub fn list(&self) -> Result<Vec<MovieId>, FavoritesError> {
        let document = self.read_document()?;
        self.ids_in(&document)
    }

    pub fn contains(&self, id: MovieId) -> Result<bool, FavoritesError> {
        Ok(self.list()?.contains(&id))
    }

    /// Append `id` unless it is already a favorite.
    pub fn add(&self, id: MovieId) -> Result<FavoriteChange, FavoritesError> {
        let mut document = self.read_document()?;
        let mut ids = self.ids_in(&document)?;
        if ids.contains(&id) {
            return Ok(FavoriteChange::Unchanged(id));
        }
        ids.push(id);
        self.write_document(&mut document, &ids)?;
        Ok(FavoriteChange::Added(id))
    }

    pub fn remove(&self, id: MovieId) -> Result<FavoriteChange, FavoritesError> {
        let mut document = self.read_document()?;
        let mut ids = self.ids_in(&document)?;
        let before = ids.len();
        ids.retain(|&existing| existing != id);
        if ids.len() == before {
            return Ok(FavoriteChange::Unchanged(id));
        }
        self.write_document(&mut document, &ids)?;
        Ok(FavoriteChange::Removed(id))
    }

    /// Add `id` if absent, remove it otherwise.
    pub fn toggle(&self, id: MovieId) -> Result<FavoriteChange, FavoritesError> {
        if self.contains(id)? {
            self.remove(id)
        } else {
            self.add(id)
        }
    }

    fn read_document(&self) -> Result<Map<String, Value>, FavoritesError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(source) => {
                return Err(FavoritesError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        serde_json::from_str(&content).map_err(|source| self.corrupt(source))
    }

    fn ids_in(&self, document: &Map<String, Value>) -> Result<Vec<MovieId>, FavoritesError> {
        let Some(value) = document.get(FAVORITES_KEY) else {
            return Ok(Vec::new());
        };
        let stored: Vec<MovieId> =
            serde_json::from_value(value.clone()).map_err(|source| self.corrupt(source))?;

        // Keep the first occurrence of any id written twice by another tool
        let mut ids = Vec::with_capacity(stored.len());
        for id in stored {
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        Ok(ids)
    }

    fn write_document(
        &self,
        document: &mut Map<String, Value>,
        ids: &[MovieId],
    ) -> Result<(), FavoritesError> {
        let write_err = |source| FavoritesError::Write {
            path: self.path.clone(),
            source,
        };
        let list = serde_json::to_value(ids).map_err(|source| self.corrupt(source))?;
        document.insert(FAVORITES_KEY.to_string(), list);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
        let content =
            serde_json::to_string_pretty(document).map_err(|source| self.corrupt(source))?;
        fs::write(&self.path, content).map_err(write_err)?;
        debug!(path = %self.path.display(), count = ids.len(), "favorites saved");
        Ok(())
    }

    fn corrupt(&self, source: serde_json::Error) -> FavoritesError {
        FavoritesError::Corrupt {
            path: self.path.clone(),
            source,
        }
    }
}
