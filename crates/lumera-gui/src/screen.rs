pub mod home;
pub mod movies;
pub mod my_list;
pub mod popular;
pub mod search;
pub mod settings;
pub mod tv;

use iced::Task;

use lumera_core::models::{CatalogSummary, FavoriteItem, MediaKey};
use lumera_core::player::PlayTarget;

use crate::app;

/// Which page is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Movies,
    Tv,
    Popular,
    Search,
    MyList,
    Settings,
}

/// Actions a screen can request from the app router.
///
/// Screens never touch shared state (favorites, playback, navigation)
/// directly; they describe the effect and the app applies it.
pub enum Action {
    /// No side-effect.
    None,
    /// Navigate to a different page.
    NavigateTo(Page),
    /// Run an async Iced task that eventually produces an app::Message.
    RunTask(Task<app::Message>),
    /// Open the detail view for a catalog entry (routed by media type).
    OpenDetail(Box<CatalogSummary>),
    /// Toggle membership of an item in the favorites store.
    ToggleFavorite(Box<FavoriteItem>),
    /// Remove an item from the favorites store.
    RemoveFavorite(MediaKey),
    /// Launch playback for a target via the external resolver.
    Play(PlayTarget),
    /// Open a URL in the default browser.
    OpenUrl(String),
    /// Update the status bar message.
    SetStatus(String),
}
