use iced::widget::{button, column, row, rule, text};
use iced::{Alignment, Element, Length};

use lumera_core::models::{CatalogSummary, MediaKey};
use lumera_core::FavoritesStore;

use crate::poster_cache::PosterCache;
use crate::screen::Action;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

/// My List: the favorites store rendered as a grid, in insertion order.
///
/// The screen holds no item state of its own — the store is the single
/// source of truth and the view reads it directly.
pub struct MyList;

#[derive(Debug, Clone)]
pub enum Message {
    Open(CatalogSummary),
    Remove(MediaKey),
}

impl MyList {
    pub fn new() -> Self {
        Self
    }

    pub fn update(&mut self, msg: Message) -> Action {
        match msg {
            Message::Open(summary) => Action::OpenDetail(Box::new(summary)),
            Message::Remove(key) => Action::RemoveFavorite(key),
        }
    }

    pub fn poster_wants(&self, favorites: &FavoritesStore) -> Vec<(MediaKey, Option<String>)> {
        favorites
            .items()
            .iter()
            .map(|f| (f.key(), f.poster_path.clone()))
            .collect()
    }

    pub fn view<'a>(
        &'a self,
        cs: &'a ColorScheme,
        posters: &'a PosterCache,
        favorites: &'a FavoritesStore,
    ) -> Element<'a, Message> {
        let count = favorites.len();
        let count_text = format!("{count} {}", if count == 1 { "title" } else { "titles" });

        let header = row![
            text("My List")
                .size(style::TEXT_XL)
                .line_height(style::LINE_HEIGHT_TIGHT)
                .width(Length::Fill),
            text(count_text)
                .size(style::TEXT_XS)
                .color(cs.outline)
                .line_height(style::LINE_HEIGHT_LOOSE),
        ]
        .align_y(Alignment::Center)
        .padding([style::SPACE_MD, style::SPACE_LG]);

        let body: Element<'_, Message> = if favorites.is_empty() {
            widgets::empty_state(
                cs,
                lucide_icons::iced::icon_heart()
                    .size(48.0)
                    .color(cs.outline)
                    .into(),
                "Your list is still empty",
                "Add movies or series to find them here.",
            )
        } else {
            let cards: Vec<Element<'a, Message>> = favorites
                .items()
                .iter()
                .map(|item| {
                    let summary = CatalogSummary::from(item);
                    let key = item.key();
                    let card = widgets::media_card(
                        cs,
                        posters,
                        &summary,
                        true,
                        Message::Open(summary.clone()),
                    );
                    let remove = button(
                        row![
                            lucide_icons::iced::icon_x().size(style::TEXT_XS).center(),
                            text("Remove")
                                .size(style::TEXT_XS)
                                .line_height(style::LINE_HEIGHT_LOOSE),
                        ]
                        .spacing(style::SPACE_XXS)
                        .align_y(Alignment::Center),
                    )
                    .padding([style::SPACE_XXS, style::SPACE_SM])
                    .on_press(Message::Remove(key))
                    .style(theme::ghost_button(cs));

                    column![card, remove]
                        .spacing(style::SPACE_XXS)
                        .align_x(Alignment::Center)
                        .into()
                })
                .collect();

            // Favorites are already fully loaded, so no scroll paging here.
            let wrap = iced_aw::Wrap::with_elements(cards)
                .spacing(style::SPACE_SM)
                .line_spacing(style::SPACE_SM);
            widgets::styled_scrollable(
                iced::widget::container(wrap).padding([style::SPACE_SM, style::SPACE_LG]),
                cs,
            )
            .height(Length::Fill)
            .into()
        };

        column![header, rule::horizontal(1), body]
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
