use iced::widget::{button, column, container, row, rule, text, text_input};
use iced::{Alignment, Element, Length, Task};

use lumera_api::TmdbClient;
use lumera_core::listing::{FetchPass, Listing};
use lumera_core::models::{CatalogSummary, MediaKey};
use lumera_core::FavoritesStore;

use crate::app;
use crate::poster_cache::PosterCache;
use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

/// Query identity for search: the submitted text + catalog language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub language: String,
}

/// Search screen: query input over an endless multi-search grid.
pub struct Search {
    input: String,
    listing: Listing<SearchQuery>,
}

#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    Submitted,
    Clear,
    PageLoaded(FetchPass<SearchQuery>, Result<Vec<CatalogSummary>, String>),
    Scrolled(f32),
    Open(CatalogSummary),
}

impl Search {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            listing: Listing::new(),
        }
    }

    /// Re-run the current search if the language changed since it loaded.
    pub fn ensure_loaded(&mut self, api: Option<&TmdbClient>, language: &str) -> Action {
        let Some(current) = self.listing.query() else {
            return Action::None;
        };
        if current.language == language {
            return Action::None;
        }
        let query = SearchQuery {
            text: current.text.clone(),
            language: language.to_string(),
        };
        self.start_search(api, query)
    }

    fn start_search(&mut self, api: Option<&TmdbClient>, query: SearchQuery) -> Action {
        let Some(api) = api else {
            return Action::None;
        };
        let pass = self.listing.begin_initial(query);
        Action::RunTask(fetch_page(api, pass))
    }

    pub fn update(&mut self, msg: Message, api: Option<&TmdbClient>, language: &str) -> Action {
        match msg {
            Message::InputChanged(value) => {
                self.input = value;
                Action::None
            }
            Message::Submitted => {
                let text = self.input.trim().to_string();
                if text.is_empty() {
                    return Action::None;
                }
                self.start_search(
                    api,
                    SearchQuery {
                        text,
                        language: language.to_string(),
                    },
                )
            }
            Message::Clear => {
                self.input.clear();
                self.listing.clear();
                Action::None
            }
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
        let search_icon = lucide_icons::iced::icon_search()
            .size(style::TEXT_BASE)
            .color(cs.on_surface_variant);

        let input = text_input("Search movies and series...", &self.input)
            .on_input(Message::InputChanged)
            .on_submit(Message::Submitted)
            .size(style::TEXT_BASE)
            .padding([style::SPACE_XS, style::SPACE_SM])
            .width(Length::Fill)
            .style(theme::text_input_borderless(cs));

        let mut search_row = row![search_icon, input]
            .spacing(style::SPACE_SM)
            .align_y(Alignment::Center);

        if !self.input.is_empty() {
            let clear_size = style::TEXT_SM + style::SPACE_XS * 2.0;
            let clear_btn = button(
                container(
                    lucide_icons::iced::icon_x()
                        .size(style::TEXT_SM)
                        .color(cs.on_surface_variant),
                )
                .center_x(Length::Fill)
                .center_y(Length::Fill),
            )
            .on_press(Message::Clear)
            .padding(0)
            .width(Length::Fixed(clear_size))
            .height(Length::Fixed(clear_size))
            .style(theme::icon_button(cs));
            search_row = search_row.push(clear_btn);
        }

        let header = container(search_row)
            .style(theme::search_bar(cs))
            .padding([style::SPACE_SM, style::SPACE_MD])
            .width(Length::Fill);
        let header = container(header).padding([style::SPACE_SM, style::SPACE_LG]);

        let body: Element<'_, Message> = if !api_configured {
            widgets::empty_state(
                cs,
                lucide_icons::iced::icon_search()
                    .size(48.0)
                    .color(cs.outline)
                    .into(),
                "No catalog key",
                "Add your TMDB API key in Settings to search.",
            )
        } else if self.listing.is_loading_initial() {
            widgets::loading_placeholder(cs)
        } else if self.listing.query().is_none() {
            widgets::empty_state(
                cs,
                lucide_icons::iced::icon_search()
                    .size(48.0)
                    .color(cs.outline)
                    .into(),
                "Search the catalog",
                "Type a title and press Enter.",
            )
        } else if self.listing.is_empty() {
            widgets::empty_state(
                cs,
                lucide_icons::iced::icon_search()
                    .size(48.0)
                    .color(cs.outline)
                    .into(),
                "No results found",
                "Try a different title.",
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

        let result_line: Element<'_, Message> = match self.listing.query() {
            Some(query) if !self.listing.is_loading_initial() => text(format!(
                "Results for \"{}\"",
                query.text
            ))
            .size(style::TEXT_XS)
            .color(cs.outline)
            .line_height(style::LINE_HEIGHT_LOOSE)
            .into(),
            _ => text("").size(1).into(),
        };
        let result_line = container(result_line).padding([0.0, style::SPACE_LG]);

        column![header, result_line, rule::horizontal(1), body]
            .spacing(style::SPACE_XS)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn fetch_page(api: &TmdbClient, pass: FetchPass<SearchQuery>) -> Task<app::Message> {
    let api = api.clone();
    Task::perform(
        async move {
            let result = api
                .search_multi(&pass.query.text, pass.page, &pass.query.language)
                .await
                .map_err(|e| e.to_string());
            (pass, result)
        },
        |(pass, result)| app::Message::Search(Message::PageLoaded(pass, result)),
    )
}
