//! Movie metadata shown above the player.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Descriptive details for the movie being played.
///
/// Every field except the title is optional so a bare `--title` works.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieInfo {
    pub title: String,
    pub year: Option<u16>,
    pub rating: Option<String>,
    /// Human-readable running time, e.g. "119 min"
    pub duration_label: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
}

impl MovieInfo {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Load from a `.json` file, or TOML for any other extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read movie file {}", path.display()))?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let movie = if is_json {
            serde_json::from_str(content)
                .with_context(|| format!("Invalid movie JSON in {}", path.display()))?
        } else {
            toml::from_str(content)
                .with_context(|| format!("Invalid movie TOML in {}", path.display()))?
        };
        Ok(movie)
    }

    /// One-line summary: `2017 • PG-13 • 119 min • Action, Adventure`.
    pub fn summary(&self) -> String {
        let year = self.year.map(|y| y.to_string());
        [
            year.as_deref(),
            self.rating.as_deref(),
            self.duration_label.as_deref(),
            self.genre.as_deref(),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" • ")
    }
}
