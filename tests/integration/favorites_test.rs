//! Integration tests for favorites persistence

use std::fs;

use starplay::config::Config;
use starplay::favorites::{FavoriteChange, FavoritesStore, MovieId, FAVORITES_KEY};
use tempfile::TempDir;

#[test]
fn two_stores_on_one_file_see_each_other() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("favorites.json");
    let first = FavoritesStore::new(&path);
    let second = FavoritesStore::new(&path);

    first.add(MovieId(1)).unwrap();
    assert!(second.contains(MovieId(1)).unwrap());

    assert_eq!(second.toggle(MovieId(1)).unwrap(), FavoriteChange::Removed(MovieId(1)));
    assert!(first.list().unwrap().is_empty());
}

#[test]
fn existing_document_keys_survive_updates() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("storage.json");
    fs::write(&path, r#"{"theme":"dark","starVideoFavorites":[4]}"#).unwrap();

    let store = FavoritesStore::new(&path);
    store.add(MovieId(9)).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["theme"], "dark");
    assert_eq!(value[FAVORITES_KEY], serde_json::json!([4, 9]));
}

#[test]
fn configured_favorites_file_is_used() {
    let dir = TempDir::new().unwrap();
    let custom = dir.path().join("shared").join("favs.json");
    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        format!("[storage]\nfavorites_file = {:?}\n", custom.display().to_string()),
    )
    .unwrap();

    let config = Config::load_from(&config_path).unwrap();
    let store = FavoritesStore::new(config.favorites_path().unwrap());
    assert_eq!(store.path(), custom.as_path());

    store.add(MovieId(2)).unwrap();
    assert!(custom.exists());
}
