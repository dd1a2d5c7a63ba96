//! Persist and restore window geometry across sessions.
//!
//! A small JSON file in the app data dir; best-effort on both ends.

use iced::{Point, Size};
use serde::{Deserialize, Serialize};

const FILE_NAME: &str = "window.json";

/// Persisted window geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowState {
    pub width: f32,
    pub height: f32,
    pub x: f32,
    pub y: f32,
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 800.0,
            x: -1.0,
            y: -1.0,
        }
    }
}

impl WindowState {
    pub fn size(&self) -> Size {
        Size::new(self.width.max(640.0), self.height.max(420.0))
    }

    /// Saved position, if there is a valid one.
    pub fn position(&self) -> Option<Point> {
        if self.x >= 0.0 && self.y >= 0.0 {
            Some(Point::new(self.x, self.y))
        } else {
            None
        }
    }

    /// Load from disk; default geometry if the file is missing or invalid.
    pub fn load() -> Self {
        state_path()
            .and_then(|path| std::fs::read_to_string(&path).ok())
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Write to disk, logging rather than propagating failures.
    pub fn save(&self) {
        let Some(path) = state_path() else {
            return;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    tracing::warn!("Failed to save window state: {e}");
                }
            }
            Err(e) => tracing::warn!("Failed to serialize window state: {e}"),
        }
    }
}

fn state_path() -> Option<std::path::PathBuf> {
    directories::ProjectDirs::from("", "", "lumera").map(|dirs| dirs.data_dir().join(FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry_is_sane() {
        let ws = WindowState::default();
        assert_eq!(ws.size(), Size::new(1200.0, 800.0));
        assert!(ws.position().is_none());
    }

    #[test]
    fn test_size_clamps_to_minimum() {
        let ws = WindowState {
            width: 100.0,
            height: 50.0,
            x: 0.0,
            y: 0.0,
        };
        assert_eq!(ws.size(), Size::new(640.0, 420.0));
        assert_eq!(ws.position(), Some(Point::new(0.0, 0.0)));
    }
}
