use iced::widget::{column, row, text};
use iced::{Alignment, Element, Length, Task};

use lumera_api::TmdbClient;
use lumera_core::models::{CatalogSummary, MediaKey};
use lumera_core::FavoritesStore;

use crate::app;
use crate::poster_cache::PosterCache;
use crate::screen::movies::MovieGenre;
use crate::screen::{Action, Page};
use crate::style;
use crate::theme::ColorScheme;
use crate::widgets;

/// The fixed shelves on the home page, fetched concurrently on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shelf {
    TrendingAll,
    TrendingMovies,
    TopRatedMovies,
    ActionMovies,
    TrendingTv,
    TopRatedTv,
}

impl Shelf {
    const ALL: &[Shelf] = &[
        Self::TrendingAll,
        Self::TrendingMovies,
        Self::TopRatedMovies,
        Self::ActionMovies,
        Self::TrendingTv,
        Self::TopRatedTv,
    ];

    fn title(self) -> &'static str {
        match self {
            Self::TrendingAll => "Trending Now",
            Self::TrendingMovies => "Trending Movies",
            Self::TopRatedMovies => "Top Rated Movies",
            Self::ActionMovies => "Action",
            Self::TrendingTv => "Trending Series",
            Self::TopRatedTv => "Top Rated Series",
        }
    }

    /// Where the shelf's "See all" link leads.
    fn explore_page(self) -> Page {
        match self {
            Self::TrendingAll => Page::Popular,
            Self::TrendingMovies | Self::TopRatedMovies | Self::ActionMovies => Page::Movies,
            Self::TrendingTv | Self::TopRatedTv => Page::Tv,
        }
    }
}

/// Home screen: horizontal shelves of movies and series.
pub struct Home {
    /// Language the current shelves were loaded for; `None` until loaded.
    language: Option<String>,
    generation: u64,
    /// Shelf fetches still in flight for the current generation.
    pending: usize,
    shelves: Vec<(Shelf, Vec<CatalogSummary>)>,
}

#[derive(Debug, Clone)]
pub enum Message {
    ShelfLoaded(u64, Shelf, Result<Vec<CatalogSummary>, String>),
    Open(CatalogSummary),
    Explore(Page),
}

impl Home {
    pub fn new() -> Self {
        Self {
            language: None,
            generation: 0,
            pending: 0,
            shelves: Vec::new(),
        }
    }

    /// Fetch all shelves if they are missing or were loaded for another
    /// language. Each shelf resolves independently.
    pub fn ensure_loaded(&mut self, api: Option<&TmdbClient>, language: &str) -> Action {
        if self.language.as_deref() == Some(language) {
            return Action::None;
        }
        let Some(api) = api else {
            return Action::None;
        };

        self.generation += 1;
        self.language = Some(language.to_string());
        self.pending = Shelf::ALL.len();
        self.shelves.clear();

        let generation = self.generation;
        let tasks: Vec<Task<app::Message>> = Shelf::ALL
            .iter()
            .map(|&shelf| fetch_shelf(api, shelf, generation, language))
            .collect();
        Action::RunTask(Task::batch(tasks))
    }

    pub fn update(&mut self, msg: Message) -> Action {
        match msg {
            Message::ShelfLoaded(generation, shelf, result) => {
                if generation != self.generation {
                    return Action::None;
                }
                self.pending = self.pending.saturating_sub(1);
                match result {
                    Ok(items) => {
                        if !items.is_empty() {
                            self.shelves.push((shelf, items));
                            // Keep the declared shelf order regardless of
                            // arrival order.
                            self.shelves.sort_by_key(|(s, _)| {
                                Shelf::ALL.iter().position(|x| x == s).unwrap_or(usize::MAX)
                            });
                        }
                    }
                    Err(e) => tracing::warn!("Home shelf fetch failed: {e}"),
                }
                Action::None
            }
            Message::Open(summary) => Action::OpenDetail(Box::new(summary)),
            Message::Explore(page) => Action::NavigateTo(page),
        }
    }

    pub fn poster_wants(&self) -> Vec<(MediaKey, Option<String>)> {
        self.shelves
            .iter()
            .flat_map(|(_, items)| items.iter())
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
        if !api_configured {
            return widgets::empty_state(
                cs,
                lucide_icons::iced::icon_film()
                    .size(48.0)
                    .color(cs.outline)
                    .into(),
                "Welcome to Lumera",
                "Add your TMDB API key in Settings to start browsing.",
            );
        }
        if self.pending > 0 && self.shelves.is_empty() {
            return widgets::loading_placeholder(cs);
        }
        if self.shelves.is_empty() {
            return widgets::empty_state(
                cs,
                lucide_icons::iced::icon_film()
                    .size(48.0)
                    .color(cs.outline)
                    .into(),
                "Nothing to show",
                "The catalog did not return anything. Check your connection.",
            );
        }

        let mut page = column![].spacing(style::SPACE_LG);
        for (shelf, items) in &self.shelves {
            let cards: Vec<Element<'a, Message>> = items
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

            let see_all = iced::widget::button(
                text("See all")
                    .size(style::TEXT_XS)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            )
            .padding([style::SPACE_XXS, style::SPACE_SM])
            .on_press(Message::Explore(shelf.explore_page()))
            .style(crate::theme::ghost_button(cs));

            let header = row![
                text(shelf.title())
                    .size(style::TEXT_LG)
                    .line_height(style::LINE_HEIGHT_TIGHT)
                    .width(Length::Fill),
                see_all,
            ]
            .align_y(Alignment::Center)
            .padding([0.0, style::SPACE_LG]);

            page = page.push(
                column![header, widgets::media_row(cs, cards)].spacing(style::SPACE_SM),
            );
        }

        widgets::styled_scrollable(
            iced::widget::container(page).padding([style::SPACE_MD, 0.0]),
            cs,
        )
        .height(Length::Fill)
        .into()
    }
}

fn fetch_shelf(
    api: &TmdbClient,
    shelf: Shelf,
    generation: u64,
    language: &str,
) -> Task<app::Message> {
    let api = api.clone();
    let language = language.to_string();
    Task::perform(
        async move {
            let result = match shelf {
                Shelf::TrendingAll => api.trending_all(1, &language).await,
                Shelf::TrendingMovies => api.trending_movies(1, &language).await,
                Shelf::TopRatedMovies => api.top_rated_movies(1, &language).await,
                Shelf::ActionMovies => {
                    api.discover_movies(MovieGenre::Action.id(), 1, &language).await
                }
                Shelf::TrendingTv => api.trending_tv(1, &language).await,
                Shelf::TopRatedTv => api.top_rated_tv(1, &language).await,
            };
            result.map_err(|e| e.to_string())
        },
        move |result| app::Message::Home(Message::ShelfLoaded(generation, shelf, result)),
    )
}
