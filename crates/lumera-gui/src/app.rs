use std::path::PathBuf;

use iced::widget::{button, column, container, row, text};
use iced::{window, Alignment, Element, Length, Subscription, Task, Theme};

use lumera_api::TmdbClient;
use lumera_core::config::AppConfig;
use lumera_core::favorites::{FavoritesChange, FavoritesStore};
use lumera_core::models::{MediaKey, MediaType};
use lumera_core::player;

use crate::poster_cache::{self, PosterCache, PosterState};
use crate::screen::{home, movies, my_list, popular, search, settings, tv, Action, Page};
use crate::style;
use crate::subscription;
use crate::theme::{self, ColorScheme};
use crate::window_state::WindowState;

/// Top-level application state: owns the shared stores and routes messages
/// to the active screen.
pub struct Lumera {
    page: Page,
    config: AppConfig,
    api: Option<TmdbClient>,
    /// The key the current client was built with, to detect changes.
    api_key: String,
    favorites: FavoritesStore,
    scheme: ColorScheme,
    // Screens
    home: home::Home,
    movies: movies::Movies,
    tv: tv::Tv,
    popular: popular::Popular,
    search: search::Search,
    my_list: my_list::MyList,
    settings: settings::Settings,
    // Poster images
    posters: PosterCache,
    // App-level chrome
    status_message: String,
    window_state: WindowState,
}

impl Default for Lumera {
    fn default() -> Self {
        let config = AppConfig::load().unwrap_or_else(|e| {
            tracing::warn!("Failed to load config, using defaults: {e}");
            AppConfig::default()
        });
        let api_key = config.metadata.api_key.clone();
        let api = (!api_key.is_empty()).then(|| TmdbClient::new(api_key.clone()));
        let favorites = FavoritesStore::load(AppConfig::favorites_path());
        let settings_screen = settings::Settings::from_config(&config);

        Self {
            page: Page::default(),
            config,
            api,
            api_key,
            favorites,
            scheme: theme::dark(),
            home: home::Home::new(),
            movies: movies::Movies::new(),
            tv: tv::Tv::new(),
            popular: popular::Popular::new(),
            search: search::Search::new(),
            my_list: my_list::MyList::new(),
            settings: settings_screen,
            posters: PosterCache::default(),
            status_message: "Ready".into(),
            window_state: WindowState::load(),
        }
    }
}

/// All messages the application can handle.
#[derive(Debug, Clone)]
pub enum Message {
    NavigateTo(Page),
    PosterLoaded {
        key: MediaKey,
        result: Result<PathBuf, String>,
    },
    WindowEvent(window::Event),
    Home(home::Message),
    Movies(movies::Message),
    Tv(tv::Message),
    Popular(popular::Message),
    Search(search::Message),
    MyList(my_list::Message),
    Settings(settings::Message),
}

impl Lumera {
    pub fn new() -> (Self, Task<Message>) {
        let mut app = Self::default();

        let language = app.config.general.language.clone();
        let action = app.home.ensure_loaded(app.api.as_ref(), &language);
        let home_task = app.handle_action(action);

        let update_task = if app.config.update.check_on_startup {
            settings::Settings::check_updates_task()
        } else {
            Task::none()
        };

        (app, Task::batch([home_task, update_task]))
    }

    pub fn title(&self) -> String {
        String::from("Lumera")
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NavigateTo(page) => {
                self.page = page;
                let language = self.config.general.language.clone();
                let action = match page {
                    Page::Home => self.home.ensure_loaded(self.api.as_ref(), &language),
                    Page::Movies => self.movies.ensure_loaded(self.api.as_ref(), &language),
                    Page::Tv => self.tv.ensure_loaded(self.api.as_ref(), &language),
                    Page::Popular => self.popular.ensure_loaded(self.api.as_ref(), &language),
                    Page::Search => self.search.ensure_loaded(self.api.as_ref(), &language),
                    Page::MyList | Page::Settings => Action::None,
                };
                let task = self.handle_action(action);
                let posters = self.request_visible_posters();
                Task::batch([task, posters])
            }
            Message::PosterLoaded { key, result } => {
                let state = match result {
                    Ok(path) => PosterState::Loaded(path),
                    Err(_) => PosterState::Failed,
                };
                self.posters.states.insert(key, state);
                Task::none()
            }
            Message::WindowEvent(event) => {
                match event {
                    window::Event::Resized(size) => {
                        self.window_state.width = size.width;
                        self.window_state.height = size.height;
                        self.window_state.save();
                    }
                    window::Event::Moved(pos) => {
                        self.window_state.x = pos.x;
                        self.window_state.y = pos.y;
                        self.window_state.save();
                    }
                    _ => {}
                }
                Task::none()
            }
            Message::Home(msg) => {
                let action = self.home.update(msg);
                self.after_screen_update(action)
            }
            Message::Movies(msg) => {
                let language = self.config.general.language.clone();
                let action = self.movies.update(msg, self.api.as_ref(), &language);
                self.after_screen_update(action)
            }
            Message::Tv(msg) => {
                let language = self.config.general.language.clone();
                let action = self.tv.update(msg, self.api.as_ref(), &language);
                self.after_screen_update(action)
            }
            Message::Popular(msg) => {
                let action = self.popular.update(msg, self.api.as_ref());
                self.after_screen_update(action)
            }
            Message::Search(msg) => {
                let language = self.config.general.language.clone();
                let action = self.search.update(msg, self.api.as_ref(), &language);
                self.after_screen_update(action)
            }
            Message::MyList(msg) => {
                let action = self.my_list.update(msg);
                self.after_screen_update(action)
            }
            Message::Settings(msg) => {
                let action = self.settings.update(msg, &mut self.config);
                self.sync_api_client();
                self.handle_action(action)
            }
        }
    }

    /// Interpret a screen action, then queue poster downloads for whatever
    /// the active page now shows.
    fn after_screen_update(&mut self, action: Action) -> Task<Message> {
        let task = self.handle_action(action);
        let posters = self.request_visible_posters();
        Task::batch([task, posters])
    }

    /// Interpret an Action returned by a screen.
    fn handle_action(&mut self, action: Action) -> Task<Message> {
        match action {
            Action::None => Task::none(),
            Action::NavigateTo(page) => {
                self.page = page;
                Task::none()
            }
            Action::RunTask(task) => task,
            Action::OpenDetail(summary) => {
                let summary = *summary;
                let language = self.config.general.language.clone();
                match summary.media_type {
                    MediaType::Movie => {
                        self.page = Page::Movies;
                        let action = self.movies.open_detail(summary, self.api.as_ref(), &language);
                        self.handle_action(action)
                    }
                    MediaType::Tv => {
                        self.page = Page::Tv;
                        let action = self.tv.open_detail(summary, self.api.as_ref(), &language);
                        self.handle_action(action)
                    }
                }
            }
            Action::ToggleFavorite(item) => {
                let title = item.title.clone();
                match self.favorites.toggle(*item) {
                    FavoritesChange::Added(_) => {
                        self.status_message = format!("Added \"{title}\" to My List");
                    }
                    FavoritesChange::Removed(_) => {
                        self.status_message = format!("Removed \"{title}\" from My List");
                    }
                    FavoritesChange::Unchanged => {}
                }
                Task::none()
            }
            Action::RemoveFavorite(key) => {
                if self.favorites.remove(key) != FavoritesChange::Unchanged {
                    self.status_message = "Removed from My List".into();
                }
                Task::none()
            }
            Action::Play(target) => {
                self.launch_playback(target);
                Task::none()
            }
            Action::OpenUrl(url) => {
                if let Err(e) = open::that_detached(&url) {
                    tracing::warn!("Failed to open {url}: {e}");
                }
                Task::none()
            }
            Action::SetStatus(message) => {
                self.status_message = message;
                Task::none()
            }
        }
    }

    /// Rebuild the API client if the configured key changed.
    fn sync_api_client(&mut self) {
        if self.config.metadata.api_key == self.api_key {
            return;
        }
        self.api_key = self.config.metadata.api_key.clone();
        self.api = (!self.api_key.is_empty()).then(|| TmdbClient::new(self.api_key.clone()));
    }

    /// Build the resolver URL for a target and hand it to the browser.
    fn launch_playback(&mut self, target: player::PlayTarget) {
        let italian = self.config.general.is_italian();
        match player::stream_url(&self.config.playback.resolver_base, target, italian) {
            Ok(url) => {
                tracing::info!(%url, "Launching playback");
                if let Err(e) = open::that_detached(url.as_str()) {
                    tracing::warn!("Failed to open player: {e}");
                    self.status_message = "Could not open the player".into();
                } else {
                    self.status_message = "Playing in your browser".into();
                }
            }
            Err(e) => {
                tracing::warn!("Bad resolver URL: {e}");
                self.status_message = "Invalid resolver URL — check Settings".into();
            }
        }
    }

    // ── Posters ─────────────────────────────────────────────────

    /// Queue downloads for every poster the active page wants.
    fn request_visible_posters(&mut self) -> Task<Message> {
        let wants = match self.page {
            Page::Home => self.home.poster_wants(),
            Page::Movies => self.movies.poster_wants(),
            Page::Tv => self.tv.poster_wants(),
            Page::Popular => self.popular.poster_wants(),
            Page::Search => self.search.poster_wants(),
            Page::MyList => self.my_list.poster_wants(&self.favorites),
            Page::Settings => Vec::new(),
        };
        let tasks: Vec<Task<Message>> = wants
            .into_iter()
            .map(|(key, path)| self.request_poster(key, path.as_deref()))
            .collect();
        if tasks.is_empty() {
            Task::none()
        } else {
            Task::batch(tasks)
        }
    }

    /// Request one poster download unless it is already tracked.
    fn request_poster(&mut self, key: MediaKey, poster_path: Option<&str>) -> Task<Message> {
        let Some(fragment) = poster_path else {
            // Nothing to fetch; record that so the placeholder renders.
            self.posters
                .states
                .entry(key)
                .or_insert(PosterState::Failed);
            return Task::none();
        };
        if self.posters.states.contains_key(&key) {
            return Task::none();
        }
        // Check the disk cache first.
        let path = poster_cache::poster_path(key);
        if path.exists() {
            self.posters.states.insert(key, PosterState::Loaded(path));
            return Task::none();
        }
        self.posters.states.insert(key, PosterState::Loading);
        let url = format!("{}{}", lumera_api::tmdb::POSTER_BASE_URL, fragment);
        Task::perform(
            async move { poster_cache::fetch_poster(key, url).await },
            move |result| Message::PosterLoaded { key, result },
        )
    }

    // ── View ────────────────────────────────────────────────────

    pub fn view(&self) -> Element<'_, Message> {
        let cs = &self.scheme;
        let nav = self.nav_rail(cs);
        let api_configured = self.api.is_some();

        let page_content: Element<'_, Message> = match self.page {
            Page::Home => self
                .home
                .view(cs, &self.posters, &self.favorites, api_configured)
                .map(Message::Home),
            Page::Movies => self
                .movies
                .view(cs, &self.posters, &self.favorites, api_configured)
                .map(Message::Movies),
            Page::Tv => self
                .tv
                .view(cs, &self.posters, &self.favorites, api_configured)
                .map(Message::Tv),
            Page::Popular => self
                .popular
                .view(cs, &self.posters, &self.favorites, api_configured)
                .map(Message::Popular),
            Page::Search => self
                .search
                .view(cs, &self.posters, &self.favorites, api_configured)
                .map(Message::Search),
            Page::MyList => self
                .my_list
                .view(cs, &self.posters, &self.favorites)
                .map(Message::MyList),
            Page::Settings => self.settings.view(cs, &self.config).map(Message::Settings),
        };

        let status_bar = container(
            text(&self.status_message)
                .size(style::TEXT_XS)
                .line_height(style::LINE_HEIGHT_LOOSE),
        )
        .style(theme::status_bar(cs))
        .width(Length::Fill)
        .height(Length::Fixed(style::STATUS_BAR_HEIGHT))
        .padding([4.0, style::SPACE_MD]);

        column![row![nav, page_content].height(Length::Fill), status_bar].into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::window_events()
    }

    pub fn theme(&self) -> Theme {
        theme::build_theme(&self.scheme)
    }

    fn nav_rail<'a>(&'a self, cs: &ColorScheme) -> Element<'a, Message> {
        let nav_item = |icon: iced::widget::Text<'static>, label: &'static str, page: Page| {
            let active = self.page == page;
            button(
                column![
                    icon.size(style::NAV_ICON_SIZE).center(),
                    text(label)
                        .size(style::NAV_LABEL_SIZE)
                        .line_height(style::LINE_HEIGHT_LOOSE)
                        .center(),
                ]
                .align_x(Alignment::Center)
                .spacing(style::SPACE_XXS)
                .width(Length::Fill),
            )
            .width(Length::Fixed(64.0))
            .padding([style::SPACE_SM, style::SPACE_XS])
            .on_press(Message::NavigateTo(page))
            .style(theme::nav_rail_item(active, cs))
        };

        use lucide_icons::iced as icons;

        let rail = column![
            column![
                nav_item(icons::icon_house(), "Home", Page::Home),
                nav_item(icons::icon_clapperboard(), "Movies", Page::Movies),
                nav_item(icons::icon_tv(), "TV", Page::Tv),
                nav_item(icons::icon_flame(), "Popular", Page::Popular),
                nav_item(icons::icon_search(), "Search", Page::Search),
                nav_item(icons::icon_heart(), "My List", Page::MyList),
            ]
            .spacing(style::SPACE_XS)
            .align_x(Alignment::Center),
            iced::widget::Space::new().height(Length::Fill),
            container(nav_item(icons::icon_settings(), "Settings", Page::Settings))
                .align_x(Alignment::Center)
                .width(Length::Fill)
                .padding(iced::Padding::new(0.0).bottom(style::SPACE_SM)),
        ]
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .height(Length::Fill);

        container(rail)
            .style(theme::nav_rail_bg(cs))
            .width(Length::Fixed(style::NAV_RAIL_WIDTH))
            .height(Length::Fill)
            .padding(iced::Padding::new(0.0).top(style::SPACE_LG))
            .into()
    }
}
