use iced::widget::{column, row, rule, text};
use iced::{Alignment, Element, Length, Task};

use lumera_api::TmdbClient;
use lumera_core::listing::{FetchPass, Listing};
use lumera_core::models::{CatalogSummary, MediaKey};
use lumera_core::FavoritesStore;

use crate::app;
use crate::poster_cache::PosterCache;
use crate::screen::Action;
use crate::style;
use crate::theme::ColorScheme;
use crate::widgets;

/// Query identity for the New & Popular grid: just the catalog language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopularQuery {
    pub language: String,
}

/// New & Popular: the cross-type weekly trending feed as one endless grid.
pub struct Popular {
    listing: Listing<PopularQuery>,
}

#[derive(Debug, Clone)]
pub enum Message {
    PageLoaded(FetchPass<PopularQuery>, Result<Vec<CatalogSummary>, String>),
    Scrolled(f32),
    Open(CatalogSummary),
}

impl Popular {
    pub fn new() -> Self {
        Self {
            listing: Listing::new(),
        }
    }

    /// Start the page-1 fetch if the grid isn't already showing this
    /// language's feed.
    pub fn ensure_loaded(&mut self, api: Option<&TmdbClient>, language: &str) -> Action {
        let query = PopularQuery {
            language: language.to_string(),
        };
        if self.listing.query() == Some(&query) {
            return Action::None;
        }
        let Some(api) = api else {
            return Action::None;
        };
        let pass = self.listing.begin_initial(query);
        Action::RunTask(fetch_page(api, pass))
    }

    pub fn update(&mut self, msg: Message, api: Option<&TmdbClient>) -> Action {
        match msg {
            Message::PageLoaded(pass, result) => {
                self.listing.resolve(&pass, result);
                Action::None
            }
            Message::Scrolled(offset) => {
                if offset < style::LOAD_MORE_THRESHOLD {
                    return Action::None;
                }
                let Some(api) = api else {
                    return Action::None;
                };
                match self.listing.begin_more() {
                    Some(pass) => Action::RunTask(fetch_page(api, pass)),
                    None => Action::None,
                }
            }
            Message::Open(summary) => Action::OpenDetail(Box::new(summary)),
        }
    }

    pub fn poster_wants(&self) -> Vec<(MediaKey, Option<String>)> {
        self.listing
            .items()
            .iter()
            .map(|s| (s.key(), s.poster_path.clone()))
            .collect()
    }

    pub fn view<'a>(
        &'a self,
        cs: &'a ColorScheme,
        posters: &'a PosterCache,
        favorites: &'a FavoritesStore,
        api_configured: bool,
    ) -> Element<'a, Message> {
        let header = row![text("New & Popular")
            .size(style::TEXT_XL)
            .line_height(style::LINE_HEIGHT_TIGHT)
            .width(Length::Fill)]
        .align_y(Alignment::Center)
        .padding([style::SPACE_MD, style::SPACE_LG]);

        let body: Element<'_, Message> = if !api_configured {
            widgets::empty_state(
                cs,
                lucide_icons::iced::icon_flame()
                    .size(48.0)
                    .color(cs.outline)
                    .into(),
                "No catalog key",
                "Add your TMDB API key in Settings to start browsing.",
            )
        } else if self.listing.is_loading_initial() {
            widgets::loading_placeholder(cs)
        } else if self.listing.is_empty() {
            widgets::empty_state(
                cs,
                lucide_icons::iced::icon_flame()
                    .size(48.0)
                    .color(cs.outline)
                    .into(),
                "Nothing trending",
                "Check back later or check your connection.",
            )
        } else {
            let cards: Vec<Element<'a, Message>> = self
                .listing
                .items()
                .iter()
                .map(|s| {
                    widgets::media_card(
                        cs,
                        posters,
                        s,
                        favorites.contains(s.key()),
                        Message::Open(s.clone()),
                    )
                })
                .collect();
            let footer = widgets::grid_footer(&self.listing);
            widgets::media_grid(cs, cards, footer, Message::Scrolled)
        };

        column![header, rule::horizontal(1), body]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn fetch_page(api: &TmdbClient, pass: FetchPass<PopularQuery>) -> Task<app::Message> {
    let api = api.clone();
    Task::perform(
        async move {
            let result = api
                .trending_all(pass.page, &pass.query.language)
                .await
                .map_err(|e| e.to_string());
            (pass, result)
        },
        |(pass, result)| app::Message::Popular(Message::PageLoaded(pass, result)),
    )
}
