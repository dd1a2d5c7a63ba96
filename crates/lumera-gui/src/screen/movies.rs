use iced::widget::{button, column, container, pick_list, row, rule, text};
use iced::{Alignment, Element, Length, Task};

use lumera_api::tmdb::types::MovieDetails;
use lumera_api::TmdbClient;
use lumera_core::listing::{FetchPass, Listing};
use lumera_core::models::{CatalogSummary, Credits, FavoriteItem, MediaKey};
use lumera_core::player::PlayTarget;
use lumera_core::FavoritesStore;

use crate::app;
use crate::format;
use crate::poster_cache::PosterCache;
use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

// ── Categories ────────────────────────────────────────────────────

/// Genres offered in the picker, with their catalog IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieGenre {
    Action,
    Comedy,
    Drama,
    Horror,
    SciFi,
    Animation,
    Thriller,
    Romance,
}

impl MovieGenre {
    pub const ALL: &[MovieGenre] = &[
        Self::Action,
        Self::Comedy,
        Self::Drama,
        Self::Horror,
        Self::SciFi,
        Self::Animation,
        Self::Thriller,
        Self::Romance,
    ];

    pub fn id(self) -> u64 {
        match self {
            Self::Action => 28,
            Self::Comedy => 35,
            Self::Drama => 18,
            Self::Horror => 27,
            Self::SciFi => 878,
            Self::Animation => 16,
            Self::Thriller => 53,
            Self::Romance => 10749,
        }
    }
}

impl std::fmt::Display for MovieGenre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Action => "Action",
            Self::Comedy => "Comedy",
            Self::Drama => "Drama",
            Self::Horror => "Horror",
            Self::SciFi => "Sci-Fi",
            Self::Animation => "Animation",
            Self::Thriller => "Thriller",
            Self::Romance => "Romance",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MovieCategory {
    #[default]
    Trending,
    TopRated,
    Genre(MovieGenre),
}

/// Query identity for the movie grid: category + catalog language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieQuery {
    pub category: MovieCategory,
    pub language: String,
}

// ── State ─────────────────────────────────────────────────────────

/// Everything the detail view needs beyond the summary it opened with.
#[derive(Debug, Clone)]
pub struct DetailBundle {
    pub details: MovieDetails,
    pub credits: Credits,
    pub similar: Vec<CatalogSummary>,
}

struct Detail {
    summary: CatalogSummary,
    bundle: Option<DetailBundle>,
    loading: bool,
}

/// Movies screen: category grid with incremental loading, plus the movie
/// detail view.
pub struct Movies {
    category: MovieCategory,
    listing: Listing<MovieQuery>,
    detail: Option<Detail>,
    // Bumped on every detail open/close so late results from a superseded
    // navigation are recognized and dropped.
    detail_generation: u64,
}

// ── Messages ──────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum Message {
    CategoryChanged(MovieCategory),
    GenrePicked(MovieGenre),
    PageLoaded(FetchPass<MovieQuery>, Result<Vec<CatalogSummary>, String>),
    Scrolled(f32),
    Open(CatalogSummary),
    DetailLoaded(u64, Result<Box<DetailBundle>, String>),
    ToggleFavorite,
    Play,
    CloseDetail,
}

// ── Implementation ────────────────────────────────────────────────

impl Movies {
    pub fn new() -> Self {
        Self {
            category: MovieCategory::default(),
            listing: Listing::new(),
            detail: None,
            detail_generation: 0,
        }
    }

    fn current_query(&self, language: &str) -> MovieQuery {
        MovieQuery {
            category: self.category,
            language: language.to_string(),
        }
    }

    /// Start the page-1 fetch if the grid isn't already showing this query.
    /// Called on navigation; a language change reloads through here too.
    pub fn ensure_loaded(&mut self, api: Option<&TmdbClient>, language: &str) -> Action {
        let query = self.current_query(language);
        if self.listing.query() == Some(&query) {
            return Action::None;
        }
        self.reload(api, query)
    }

    fn reload(&mut self, api: Option<&TmdbClient>, query: MovieQuery) -> Action {
        let Some(api) = api else {
            return Action::None;
        };
        let pass = self.listing.begin_initial(query);
        Action::RunTask(fetch_page(api, pass))
    }

    /// Enter the detail view for a movie and fetch its data.
    pub fn open_detail(
        &mut self,
        summary: CatalogSummary,
        api: Option<&TmdbClient>,
        language: &str,
    ) -> Action {
        self.detail_generation += 1;
        let generation = self.detail_generation;
        self.detail = Some(Detail {
            summary: summary.clone(),
            bundle: None,
            loading: api.is_some(),
        });

        // Populate the grid behind the detail as well, so closing it does
        // not land on an empty page.
        let grid = self.ensure_loaded(api, language);

        let Some(api) = api else {
            return grid;
        };
        let api = api.clone();
        let language = language.to_string();
        let id = summary.id;
        let detail_task = Task::perform(
            async move {
                let (details, credits, similar) = tokio::join!(
                    api.movie_details(id, &language),
                    api.movie_credits(id, &language),
                    api.similar_movies(id, &language),
                );
                let details = details.map_err(|e| e.to_string())?;
                let credits = credits.unwrap_or_else(|e| {
                    tracing::warn!("Movie credits fetch failed: {e}");
                    Credits::default()
                });
                let similar = similar.unwrap_or_else(|e| {
                    tracing::warn!("Similar movies fetch failed: {e}");
                    Vec::new()
                });
                Ok(Box::new(DetailBundle {
                    details,
                    credits,
                    similar,
                }))
            },
            move |result| app::Message::Movies(Message::DetailLoaded(generation, result)),
        );

        match grid {
            Action::RunTask(grid_task) => Action::RunTask(Task::batch([grid_task, detail_task])),
            _ => Action::RunTask(detail_task),
        }
    }

    pub fn update(&mut self, msg: Message, api: Option<&TmdbClient>, language: &str) -> Action {
        match msg {
            Message::CategoryChanged(category) => {
                self.category = category;
                self.reload(api, self.current_query(language))
            }
            Message::GenrePicked(genre) => {
                self.category = MovieCategory::Genre(genre);
                self.reload(api, self.current_query(language))
            }
            Message::PageLoaded(pass, result) => {
                self.listing.resolve(&pass, result);
                Action::None
            }
            Message::Scrolled(offset) => {
                // The detail view never paginates.
                if self.detail.is_some() || offset < style::LOAD_MORE_THRESHOLD {
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
            Message::DetailLoaded(generation, result) => {
                if generation != self.detail_generation {
                    return Action::None;
                }
                if let Some(detail) = &mut self.detail {
                    detail.loading = false;
                    match result {
                        Ok(bundle) => detail.bundle = Some(*bundle),
                        Err(e) => tracing::warn!("Movie detail fetch failed: {e}"),
                    }
                }
                Action::None
            }
            Message::ToggleFavorite => match &self.detail {
                Some(detail) => {
                    let summary = detail
                        .bundle
                        .as_ref()
                        .map(|b| b.details.to_summary())
                        .unwrap_or_else(|| detail.summary.clone());
                    Action::ToggleFavorite(Box::new(FavoriteItem::from(&summary)))
                }
                None => Action::None,
            },
            Message::Play => match &self.detail {
                Some(detail) => Action::Play(PlayTarget::Movie {
                    id: detail.summary.id,
                }),
                None => Action::None,
            },
            Message::CloseDetail => {
                self.detail = None;
                self.detail_generation += 1;
                Action::None
            }
        }
    }

    /// Posters the current view wants, for the app's batch requests.
    pub fn poster_wants(&self) -> Vec<(MediaKey, Option<String>)> {
        let mut wants: Vec<(MediaKey, Option<String>)> = self
            .listing
            .items()
            .iter()
            .map(|s| (s.key(), s.poster_path.clone()))
            .collect();
        if let Some(detail) = &self.detail {
            wants.push((detail.summary.key(), detail.summary.poster_path.clone()));
            if let Some(bundle) = &detail.bundle {
                wants.extend(
                    bundle
                        .similar
                        .iter()
                        .map(|s| (s.key(), s.poster_path.clone())),
                );
            }
        }
        wants
    }

    // ── View ──────────────────────────────────────────────────────

    pub fn view<'a>(
        &'a self,
        cs: &'a ColorScheme,
        posters: &'a PosterCache,
        favorites: &'a FavoritesStore,
        api_configured: bool,
    ) -> Element<'a, Message> {
        if let Some(detail) = &self.detail {
            return self.view_detail(detail, cs, posters, favorites);
        }
        self.view_grid(cs, posters, favorites, api_configured)
    }

    fn view_grid<'a>(
        &'a self,
        cs: &'a ColorScheme,
        posters: &'a PosterCache,
        favorites: &'a FavoritesStore,
        api_configured: bool,
    ) -> Element<'a, Message> {
        let selected_genre = match self.category {
            MovieCategory::Genre(g) => Some(g),
            _ => None,
        };

        let chips = row![
            widgets::category_chip(cs, "Trending", self.category == MovieCategory::Trending,
                Message::CategoryChanged(MovieCategory::Trending)),
            widgets::category_chip(cs, "Top Rated", self.category == MovieCategory::TopRated,
                Message::CategoryChanged(MovieCategory::TopRated)),
            pick_list(MovieGenre::ALL, selected_genre, Message::GenrePicked)
                .placeholder("Genre")
                .text_size(style::TEXT_SM)
                .padding([style::SPACE_XS, style::SPACE_MD])
                .style(theme::pick_list_style(cs))
                .menu_style(theme::pick_list_menu_style(cs)),
        ]
        .spacing(style::SPACE_XS)
        .align_y(Alignment::Center);

        let header = row![
            text("Movies")
                .size(style::TEXT_XL)
                .line_height(style::LINE_HEIGHT_TIGHT)
                .width(Length::Fill),
            chips,
        ]
        .align_y(Alignment::Center)
        .padding([style::SPACE_MD, style::SPACE_LG]);

        let body: Element<'_, Message> = if !api_configured {
            widgets::empty_state(
                cs,
                lucide_icons::iced::icon_film()
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
                lucide_icons::iced::icon_film()
                    .size(48.0)
                    .color(cs.outline)
                    .into(),
                "Nothing here",
                "Try a different category or check your connection.",
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

    fn view_detail<'a>(
        &'a self,
        detail: &'a Detail,
        cs: &'a ColorScheme,
        posters: &'a PosterCache,
        favorites: &'a FavoritesStore,
    ) -> Element<'a, Message> {
        let back = button(
            row![
                lucide_icons::iced::icon_arrow_left()
                    .size(style::TEXT_SM)
                    .center(),
                text("Back")
                    .size(style::TEXT_SM)
                    .line_height(style::LINE_HEIGHT_NORMAL),
            ]
            .spacing(style::SPACE_XS)
            .align_y(Alignment::Center),
        )
        .padding([style::SPACE_SM, style::SPACE_MD])
        .on_press(Message::CloseDetail)
        .style(theme::ghost_button(cs));

        let poster = widgets::rounded_poster(
            cs,
            posters,
            detail.summary.key(),
            style::DETAIL_POSTER_WIDTH,
            style::DETAIL_POSTER_HEIGHT,
            style::RADIUS_LG,
        );

        let title = detail
            .bundle
            .as_ref()
            .map(|b| b.details.title.as_str())
            .unwrap_or(detail.summary.title.as_str());

        let mut info = column![].spacing(style::SPACE_SM);

        if let Some(tagline) = detail
            .bundle
            .as_ref()
            .and_then(|b| b.details.tagline.as_deref())
            .filter(|t| !t.is_empty())
        {
            info = info.push(
                text(tagline)
                    .size(style::TEXT_SM)
                    .color(cs.primary)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            );
        }

        info = info.push(
            text(title)
                .size(style::TEXT_2XL)
                .line_height(style::LINE_HEIGHT_TIGHT),
        );

        let vote = detail
            .bundle
            .as_ref()
            .map(|b| b.details.vote_average)
            .unwrap_or(detail.summary.vote_average);
        let mut meta = row![
            lucide_icons::iced::icon_star()
                .size(style::TEXT_SM)
                .color(cs.star),
            text(format::rating(vote))
                .size(style::TEXT_SM)
                .color(cs.on_surface)
                .line_height(style::LINE_HEIGHT_LOOSE),
        ]
        .spacing(style::SPACE_XS)
        .align_y(Alignment::Center);
        if let Some(year) = detail.summary.year() {
            meta = meta.push(
                text(year.to_string())
                    .size(style::TEXT_SM)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            );
        }
        if let Some(runtime) = detail.bundle.as_ref().and_then(|b| b.details.runtime) {
            if runtime > 0 {
                meta = meta.push(
                    text(format::runtime(runtime))
                        .size(style::TEXT_SM)
                        .color(cs.on_surface_variant)
                        .line_height(style::LINE_HEIGHT_LOOSE),
                );
            }
        }
        info = info.push(meta);

        if let Some(bundle) = &detail.bundle {
            if !bundle.details.genres.is_empty() {
                let genres = bundle
                    .details
                    .genres
                    .iter()
                    .map(|g| g.name.as_str())
                    .collect::<Vec<_>>()
                    .join("  \u{00B7}  ");
                info = info.push(
                    text(genres)
                        .size(style::TEXT_XS)
                        .color(cs.outline)
                        .line_height(style::LINE_HEIGHT_LOOSE),
                );
            }
        }

        let overview = detail
            .bundle
            .as_ref()
            .and_then(|b| b.details.overview.as_deref())
            .or(detail.summary.overview.as_deref());
        if let Some(overview) = overview {
            info = info.push(
                text(overview)
                    .size(style::TEXT_BASE)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_NORMAL),
            );
        }

        let saved = favorites.contains(detail.summary.key());
        info = info.push(widgets::action_row(cs, saved, Message::Play, Message::ToggleFavorite));

        let mut page = column![
            back,
            row![poster, info.width(Length::Fill)]
                .spacing(style::SPACE_XL)
                .align_y(Alignment::Start),
        ]
        .spacing(style::SPACE_LG);

        if detail.loading && detail.bundle.is_none() {
            page = page.push(widgets::loading_placeholder(cs));
        }

        if let Some(bundle) = &detail.bundle {
            let director = bundle
                .credits
                .crew_with_job("Director")
                .map(|c| c.name.as_str());
            if let Some(section) = widgets::cast_section(cs, &bundle.credits, director, "Director") {
                page = page.push(section);
            }
            if !bundle.similar.is_empty() {
                let cards: Vec<Element<'a, Message>> = bundle
                    .similar
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
                page = page.push(widgets::section_title(cs, "Similar Movies"));
                page = page.push(widgets::media_row(cs, cards));
            }
        }

        widgets::styled_scrollable(
            container(page).padding([style::SPACE_MD, style::SPACE_LG]),
            cs,
        )
        .height(Length::Fill)
        .into()
    }
}

// ── Tasks ─────────────────────────────────────────────────────────

fn fetch_page(api: &TmdbClient, pass: FetchPass<MovieQuery>) -> Task<app::Message> {
    let api = api.clone();
    Task::perform(
        async move {
            let query = pass.query.clone();
            let result = match query.category {
                MovieCategory::Trending => api.trending_movies(pass.page, &query.language).await,
                MovieCategory::TopRated => api.top_rated_movies(pass.page, &query.language).await,
                MovieCategory::Genre(genre) => {
                    api.discover_movies(genre.id(), pass.page, &query.language).await
                }
            };
            (pass, result.map_err(|e| e.to_string()))
        },
        |(pass, result)| app::Message::Movies(Message::PageLoaded(pass, result)),
    )
}
