//! Core domain logic for the Lumera catalog browser.
//!
//! Holds everything that is independent of the UI and the wire format:
//! catalog models, the persistent favorites store, the paginated listing
//! controller, configuration, playback URL construction, and the update
//! version check.

pub mod config;
pub mod error;
pub mod favorites;
pub mod listing;
pub mod models;
pub mod player;
pub mod update;

pub use error::LumeraError;
pub use favorites::{FavoritesChange, FavoritesStore};
pub use listing::{FetchPass, Listing};
pub use models::{CatalogSummary, FavoriteItem, MediaKey, MediaType};
