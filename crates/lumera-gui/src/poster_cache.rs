//! Poster image cache: downloaded once to disk, tracked in memory.
//!
//! Keys are the catalog identity (`MediaKey`) so a movie and a series that
//! share a numeric ID never collide.

use std::collections::HashMap;
use std::path::PathBuf;

use lumera_core::config::AppConfig;
use lumera_core::models::MediaKey;

/// State of one poster image.
#[derive(Debug, Clone)]
pub enum PosterState {
    Loading,
    Loaded(PathBuf),
    Failed,
}

/// In-memory map from catalog identity to poster state.
#[derive(Debug, Default)]
pub struct PosterCache {
    pub states: HashMap<MediaKey, PosterState>,
}

impl PosterCache {
    pub fn get(&self, key: MediaKey) -> Option<&PosterState> {
        self.states.get(&key)
    }
}

/// Expected file path for a poster image.
pub fn poster_path(key: MediaKey) -> PathBuf {
    AppConfig::posters_dir().join(format!(
        "{}-{}.jpg",
        key.media_type.as_api_str(),
        key.id
    ))
}

/// Download a poster and save it to disk. Returns the saved path.
pub async fn fetch_poster(key: MediaKey, url: String) -> Result<PathBuf, String> {
    let dir = AppConfig::posters_dir();
    std::fs::create_dir_all(&dir).map_err(|e| e.to_string())?;

    let path = poster_path(key);

    let bytes = reqwest::get(&url)
        .await
        .map_err(|e| e.to_string())?
        .bytes()
        .await
        .map_err(|e| e.to_string())?;

    std::fs::write(&path, &bytes).map_err(|e| e.to_string())?;
    Ok(path)
}
