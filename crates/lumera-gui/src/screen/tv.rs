use iced::widget::{button, column, container, pick_list, row, rule, text};
use iced::{Alignment, Element, Length, Task};

use lumera_api::tmdb::types::{EpisodeRow, TvDetails};
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

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TvCategory {
    #[default]
    Trending,
    TopRated,
    Popular,
}

/// Query identity for the series grid: category + catalog language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TvQuery {
    pub category: TvCategory,
    pub language: String,
}

/// Entry in the season picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonChoice(pub u32);

impl std::fmt::Display for SeasonChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Season {}", self.0)
    }
}

// ── State ─────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct DetailBundle {
    pub details: TvDetails,
    pub credits: Credits,
    pub similar: Vec<CatalogSummary>,
}

struct Detail {
    summary: CatalogSummary,
    bundle: Option<DetailBundle>,
    loading: bool,
    selected_season: u32,
    episodes: Vec<EpisodeRow>,
    episodes_loading: bool,
}

/// TV screen: category grid with incremental loading, plus the series
/// detail view with its season/episode picker.
pub struct Tv {
    category: TvCategory,
    listing: Listing<TvQuery>,
    detail: Option<Detail>,
    detail_generation: u64,
}

// ── Messages ──────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum Message {
    CategoryChanged(TvCategory),
    PageLoaded(FetchPass<TvQuery>, Result<Vec<CatalogSummary>, String>),
    Scrolled(f32),
    Open(CatalogSummary),
    DetailLoaded(u64, Result<Box<DetailBundle>, String>),
    SeasonPicked(SeasonChoice),
    EpisodesLoaded(u64, u32, Result<Vec<EpisodeRow>, String>),
    ToggleFavorite,
    PlayEpisode(u32, u32),
    CloseDetail,
}

// ── Implementation ────────────────────────────────────────────────

impl Tv {
    pub fn new() -> Self {
        Self {
            category: TvCategory::default(),
            listing: Listing::new(),
            detail: None,
            detail_generation: 0,
        }
    }

    fn current_query(&self, language: &str) -> TvQuery {
        TvQuery {
            category: self.category,
            language: language.to_string(),
        }
    }

    /// Start the page-1 fetch if the grid isn't already showing this query.
    pub fn ensure_loaded(&mut self, api: Option<&TmdbClient>, language: &str) -> Action {
        let query = self.current_query(language);
        if self.listing.query() == Some(&query) {
            return Action::None;
        }
        self.reload(api, query)
    }

    fn reload(&mut self, api: Option<&TmdbClient>, query: TvQuery) -> Action {
        let Some(api) = api else {
            return Action::None;
        };
        let pass = self.listing.begin_initial(query);
        Action::RunTask(fetch_page(api, pass))
    }

    /// Enter the detail view for a series and fetch its data.
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
            selected_season: 1,
            episodes: Vec::new(),
            episodes_loading: false,
        });

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
                    api.tv_details(id, &language),
                    api.tv_credits(id, &language),
                    api.similar_tv(id, &language),
                );
                let details = details.map_err(|e| e.to_string())?;
                let credits = credits.unwrap_or_else(|e| {
                    tracing::warn!("TV credits fetch failed: {e}");
                    Credits::default()
                });
                let similar = similar.unwrap_or_else(|e| {
                    tracing::warn!("Similar series fetch failed: {e}");
                    Vec::new()
                });
                Ok(Box::new(DetailBundle {
                    details,
                    credits,
                    similar,
                }))
            },
            move |result| app::Message::Tv(Message::DetailLoaded(generation, result)),
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
            Message::PageLoaded(pass, result) => {
                self.listing.resolve(&pass, result);
                Action::None
            }
            Message::Scrolled(offset) => {
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
                let Some(detail) = &mut self.detail else {
                    return Action::None;
                };
                detail.loading = false;
                match result {
                    Ok(bundle) => {
                        let first_season =
                            bundle.details.season_numbers().first().copied().unwrap_or(1);
                        detail.bundle = Some(*bundle);
                        detail.selected_season = first_season;
                        self.fetch_episodes(api, language, first_season)
                    }
                    Err(e) => {
                        tracing::warn!("TV detail fetch failed: {e}");
                        Action::None
                    }
                }
            }
            Message::SeasonPicked(SeasonChoice(season)) => {
                if let Some(detail) = &mut self.detail {
                    detail.selected_season = season;
                    detail.episodes.clear();
                }
                self.fetch_episodes(api, language, season)
            }
            Message::EpisodesLoaded(generation, season, result) => {
                if generation != self.detail_generation {
                    return Action::None;
                }
                if let Some(detail) = &mut self.detail {
                    if detail.selected_season == season {
                        detail.episodes_loading = false;
                        match result {
                            Ok(episodes) => detail.episodes = episodes,
                            Err(e) => tracing::warn!("Season fetch failed: {e}"),
                        }
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
            Message::PlayEpisode(season, episode) => match &self.detail {
                Some(detail) => Action::Play(PlayTarget::Episode {
                    id: detail.summary.id,
                    season,
                    episode,
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

    fn fetch_episodes(
        &mut self,
        api: Option<&TmdbClient>,
        language: &str,
        season: u32,
    ) -> Action {
        let Some(detail) = &mut self.detail else {
            return Action::None;
        };
        let Some(api) = api else {
            return Action::None;
        };
        detail.episodes_loading = true;

        let generation = self.detail_generation;
        let api = api.clone();
        let language = language.to_string();
        let id = detail.summary.id;
        Action::RunTask(Task::perform(
            async move {
                api.tv_season(id, season, &language)
                    .await
                    .map(|s| s.episodes)
                    .map_err(|e| e.to_string())
            },
            move |result| app::Message::Tv(Message::EpisodesLoaded(generation, season, result)),
        ))
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
        let chips = row![
            widgets::category_chip(
                cs,
                "Trending",
                self.category == TvCategory::Trending,
                Message::CategoryChanged(TvCategory::Trending)
            ),
            widgets::category_chip(
                cs,
                "Top Rated",
                self.category == TvCategory::TopRated,
                Message::CategoryChanged(TvCategory::TopRated)
            ),
            widgets::category_chip(
                cs,
                "Popular",
                self.category == TvCategory::Popular,
                Message::CategoryChanged(TvCategory::Popular)
            ),
        ]
        .spacing(style::SPACE_XS)
        .align_y(Alignment::Center);

        let header = row![
            text("TV Shows")
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
                lucide_icons::iced::icon_tv()
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
                lucide_icons::iced::icon_tv()
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
            .map(|b| b.details.name.as_str())
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
        if let Some(bundle) = &detail.bundle {
            let seasons = bundle.details.number_of_seasons;
            if seasons > 0 {
                let label = if seasons == 1 {
                    "1 season".to_string()
                } else {
                    format!("{seasons} seasons")
                };
                meta = meta.push(
                    text(label)
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
        info = info.push(widgets::action_row(
            cs,
            saved,
            Message::PlayEpisode(detail.selected_season, 1),
            Message::ToggleFavorite,
        ));

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
            page = page.push(self.episodes_section(detail, bundle, cs));

            let creator = bundle.details.created_by.first().map(|c| c.name.as_str());
            if let Some(section) = widgets::cast_section(cs, &bundle.credits, creator, "Creator") {
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
                page = page.push(widgets::section_title(cs, "Similar Series"));
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

    fn episodes_section<'a>(
        &'a self,
        detail: &'a Detail,
        bundle: &'a DetailBundle,
        cs: &'a ColorScheme,
    ) -> Element<'a, Message> {
        let choices: Vec<SeasonChoice> = bundle
            .details
            .season_numbers()
            .into_iter()
            .map(SeasonChoice)
            .collect();

        let picker = pick_list(
            choices,
            Some(SeasonChoice(detail.selected_season)),
            Message::SeasonPicked,
        )
        .text_size(style::TEXT_SM)
        .padding([style::SPACE_XS, style::SPACE_MD])
        .style(theme::pick_list_style(cs))
        .menu_style(theme::pick_list_menu_style(cs));

        let header = row![widgets::section_title(cs, "Episodes"), picker]
            .spacing(style::SPACE_MD)
            .align_y(Alignment::Center);

        let body: Element<'_, Message> = if detail.episodes_loading {
            widgets::loading_placeholder(cs)
        } else if detail.episodes.is_empty() {
            text("No episodes listed for this season.")
                .size(style::TEXT_SM)
                .color(cs.outline)
                .line_height(style::LINE_HEIGHT_LOOSE)
                .into()
        } else {
            let rows: Vec<Element<'a, Message>> = detail
                .episodes
                .iter()
                .map(|ep| self.episode_row(detail, ep, cs))
                .collect();
            column(rows).spacing(style::SPACE_XXS).into()
        };

        column![header, body].spacing(style::SPACE_MD).into()
    }

    fn episode_row<'a>(
        &'a self,
        detail: &'a Detail,
        ep: &'a EpisodeRow,
        cs: &'a ColorScheme,
    ) -> Element<'a, Message> {
        let code = format::episode_code(detail.selected_season, ep.episode_number);

        let mut line = row![
            lucide_icons::iced::icon_play().size(style::TEXT_SM).center(),
            text(code)
                .size(style::TEXT_SM)
                .color(cs.primary)
                .line_height(style::LINE_HEIGHT_NORMAL),
            text(ep.name.as_str())
                .size(style::TEXT_SM)
                .color(cs.on_surface)
                .line_height(style::LINE_HEIGHT_NORMAL)
                .width(Length::Fill),
        ]
        .spacing(style::SPACE_MD)
        .align_y(Alignment::Center);

        if ep.vote_average > 0.0 {
            line = line.push(
                text(format::rating(ep.vote_average))
                    .size(style::TEXT_XS)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            );
        }

        button(line)
            .width(Length::Fill)
            .padding([style::SPACE_SM, style::SPACE_MD])
            .on_press(Message::PlayEpisode(
                detail.selected_season,
                ep.episode_number,
            ))
            .style(theme::ghost_button(cs))
            .into()
    }
}

// ── Tasks ─────────────────────────────────────────────────────────

fn fetch_page(api: &TmdbClient, pass: FetchPass<TvQuery>) -> Task<app::Message> {
    let api = api.clone();
    Task::perform(
        async move {
            let query = pass.query.clone();
            let result = match query.category {
                TvCategory::Trending => api.trending_tv(pass.page, &query.language).await,
                TvCategory::TopRated => api.top_rated_tv(pass.page, &query.language).await,
                TvCategory::Popular => api.popular_tv(pass.page, &query.language).await,
            };
            (pass, result.map_err(|e| e.to_string()))
        },
        |(pass, result)| app::Message::Tv(Message::PageLoaded(pass, result)),
    )
}
