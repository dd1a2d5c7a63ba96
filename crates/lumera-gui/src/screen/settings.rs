use iced::widget::{button, column, container, pick_list, row, text, text_input, toggler};
use iced::{Alignment, Element, Length, Task};

use lumera_core::config::AppConfig;
use lumera_core::update;

use crate::app;
use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

/// Catalog languages the app distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiLanguage {
    English,
    Italian,
}

impl UiLanguage {
    pub const ALL: &[UiLanguage] = &[Self::English, Self::Italian];

    pub fn tag(self) -> &'static str {
        match self {
            Self::English => "en-US",
            Self::Italian => "it-IT",
        }
    }

    pub fn from_tag(tag: &str) -> Self {
        if tag.starts_with("it") {
            Self::Italian
        } else {
            Self::English
        }
    }
}

impl std::fmt::Display for UiLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::English => write!(f, "English"),
            Self::Italian => write!(f, "Italiano"),
        }
    }
}

/// Settings screen: language, catalog key, resolver, update check.
pub struct Settings {
    api_key_input: String,
    resolver_input: String,
    update_notice: Option<String>,
    update_url: Option<String>,
    checking_update: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    LanguageChanged(UiLanguage),
    ApiKeyChanged(String),
    ApiKeySubmitted,
    ResolverChanged(String),
    ResolverSubmitted,
    CheckOnStartupToggled(bool),
    CheckUpdates,
    /// `(tag, release page URL)` on success.
    UpdateChecked(Result<(String, String), String>),
    OpenReleasePage,
}

impl Settings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            api_key_input: config.metadata.api_key.clone(),
            resolver_input: config.playback.resolver_base.clone(),
            update_notice: None,
            update_url: None,
            checking_update: false,
        }
    }

    /// The async release lookup; also fired by the app on startup.
    pub fn check_updates_task() -> Task<app::Message> {
        Task::perform(lumera_api::release::latest_release(), |result| {
            app::Message::Settings(Message::UpdateChecked(
                result
                    .map(|rel| (rel.tag_name, rel.html_url))
                    .map_err(|e| e.to_string()),
            ))
        })
    }

    pub fn update(&mut self, msg: Message, config: &mut AppConfig) -> Action {
        match msg {
            Message::LanguageChanged(language) => {
                config.general.language = language.tag().to_string();
                save_config(config);
                Action::None
            }
            Message::ApiKeyChanged(value) => {
                self.api_key_input = value;
                Action::None
            }
            Message::ApiKeySubmitted => {
                config.metadata.api_key = self.api_key_input.trim().to_string();
                save_config(config);
                Action::SetStatus("Catalog key saved".into())
            }
            Message::ResolverChanged(value) => {
                self.resolver_input = value;
                Action::None
            }
            Message::ResolverSubmitted => {
                let base = self.resolver_input.trim().trim_end_matches('/');
                if base.is_empty() {
                    return Action::None;
                }
                config.playback.resolver_base = base.to_string();
                self.resolver_input = base.to_string();
                save_config(config);
                Action::SetStatus("Resolver saved".into())
            }
            Message::CheckOnStartupToggled(enabled) => {
                config.update.check_on_startup = enabled;
                save_config(config);
                Action::None
            }
            Message::CheckUpdates => {
                self.checking_update = true;
                self.update_notice = None;
                Action::RunTask(Self::check_updates_task())
            }
            Message::UpdateChecked(result) => {
                self.checking_update = false;
                match result {
                    Ok((tag, url)) => {
                        if update::is_newer(env!("CARGO_PKG_VERSION"), &tag) {
                            self.update_notice = Some(format!("Update {tag} available"));
                            self.update_url = Some(url);
                            return Action::SetStatus(format!(
                                "Update {tag} available — see Settings"
                            ));
                        }
                        self.update_notice = Some("You're up to date.".into());
                        self.update_url = None;
                    }
                    Err(e) => {
                        tracing::warn!("Update check failed: {e}");
                        self.update_notice = Some("Update check failed.".into());
                        self.update_url = None;
                    }
                }
                Action::None
            }
            Message::OpenReleasePage => match &self.update_url {
                Some(url) => Action::OpenUrl(url.clone()),
                None => Action::None,
            },
        }
    }

    pub fn view<'a>(&'a self, cs: &'a ColorScheme, config: &AppConfig) -> Element<'a, Message> {
        let header = text("Settings")
            .size(style::TEXT_XL)
            .line_height(style::LINE_HEIGHT_TIGHT);

        let language = form_row(
            cs,
            "Language",
            pick_list(
                UiLanguage::ALL,
                Some(UiLanguage::from_tag(&config.general.language)),
                Message::LanguageChanged,
            )
            .text_size(style::TEXT_SM)
            .padding([style::SPACE_SM, style::SPACE_MD])
            .style(theme::pick_list_style(cs))
            .menu_style(theme::pick_list_menu_style(cs))
            .into(),
        );

        let api_key = form_row(
            cs,
            "TMDB API key",
            text_input("Paste your API key and press Enter", &self.api_key_input)
                .on_input(Message::ApiKeyChanged)
                .on_submit(Message::ApiKeySubmitted)
                .secure(true)
                .size(style::TEXT_SM)
                .padding([style::SPACE_SM, style::SPACE_MD])
                .width(Length::Fixed(360.0))
                .style(theme::text_input_style(cs))
                .into(),
        );

        let resolver = form_row(
            cs,
            "Stream resolver",
            text_input("https://...", &self.resolver_input)
                .on_input(Message::ResolverChanged)
                .on_submit(Message::ResolverSubmitted)
                .size(style::TEXT_SM)
                .padding([style::SPACE_SM, style::SPACE_MD])
                .width(Length::Fixed(360.0))
                .style(theme::text_input_style(cs))
                .into(),
        );

        let startup_check = form_row(
            cs,
            "Check for updates on startup",
            toggler(config.update.check_on_startup)
                .on_toggle(Message::CheckOnStartupToggled)
                .size(style::TEXT_LG)
                .into(),
        );

        let check_label = if self.checking_update {
            "Checking..."
        } else {
            "Check for updates"
        };
        let mut update_row = row![button(
            text(check_label)
                .size(style::TEXT_SM)
                .line_height(style::LINE_HEIGHT_NORMAL)
        )
        .padding([style::SPACE_SM, style::SPACE_XL])
        .on_press(Message::CheckUpdates)
        .style(theme::ghost_button(cs))]
        .spacing(style::SPACE_MD)
        .align_y(Alignment::Center);

        if let Some(notice) = &self.update_notice {
            update_row = update_row.push(
                text(notice.as_str())
                    .size(style::TEXT_SM)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            );
        }
        if self.update_url.is_some() {
            update_row = update_row.push(
                button(
                    text("Open release page")
                        .size(style::TEXT_SM)
                        .line_height(style::LINE_HEIGHT_NORMAL),
                )
                .padding([style::SPACE_SM, style::SPACE_XL])
                .on_press(Message::OpenReleasePage)
                .style(theme::primary_button(cs)),
            );
        }

        let version_line = text(format!("Lumera {}", env!("CARGO_PKG_VERSION")))
            .size(style::TEXT_XS)
            .color(cs.outline)
            .line_height(style::LINE_HEIGHT_LOOSE);

        let form = column![
            header,
            language,
            api_key,
            resolver,
            startup_check,
            update_row,
            version_line,
        ]
        .spacing(style::SPACE_LG)
        .max_width(720.0);

        widgets::styled_scrollable(
            container(form).padding([style::SPACE_MD, style::SPACE_LG]),
            cs,
        )
        .height(Length::Fill)
        .into()
    }
}

/// Label column + control, aligned like a settings form.
fn form_row<'a>(
    cs: &ColorScheme,
    label: &'a str,
    control: Element<'a, Message>,
) -> Element<'a, Message> {
    row![
        text(label)
            .size(style::TEXT_SM)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_NORMAL)
            .width(Length::Fixed(220.0)),
        control,
    ]
    .spacing(style::SPACE_MD)
    .align_y(Alignment::Center)
    .into()
}

fn save_config(config: &AppConfig) {
    if let Err(e) = config.save() {
        tracing::warn!("Failed to save config: {e}");
    }
}
