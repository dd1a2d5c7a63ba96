use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};

use lumera_core::models::CatalogSummary;

use crate::format;
use crate::poster_cache::PosterCache;
use crate::style;
use crate::theme::{self, ColorScheme};
use crate::widgets;

/// Card width: poster + horizontal padding inside the card.
pub const CARD_WIDTH: f32 = style::POSTER_WIDTH + 2.0 * style::SPACE_SM;

/// A compact poster card for grids and rows: poster, truncated title, and a
/// rating/year meta line with a saved indicator.
///
/// The card owns its text so callers may pass summaries built on the fly
/// (e.g. from favorites); only the poster cache is borrowed.
pub fn media_card<'a, Message: Clone + 'static>(
    cs: &ColorScheme,
    posters: &'a PosterCache,
    summary: &CatalogSummary,
    saved: bool,
    on_press: Message,
) -> Element<'a, Message> {
    let poster = widgets::rounded_poster(
        cs,
        posters,
        summary.key(),
        style::POSTER_WIDTH,
        style::POSTER_HEIGHT,
        style::RADIUS_MD,
    );

    // Title, clipped to 2 lines via container height.
    let title_el = container(
        text(summary.title.clone())
            .size(style::TEXT_SM)
            .color(cs.on_surface)
            .line_height(style::LINE_HEIGHT_NORMAL)
            .wrapping(iced::widget::text::Wrapping::WordOrGlyph),
    )
    .height(Length::Fixed(
        style::TEXT_SM * style::LINE_HEIGHT_NORMAL * 2.0 + 2.0,
    ))
    .clip(true);

    let mut meta = row![
        lucide_icons::iced::icon_star()
            .size(style::TEXT_XS)
            .color(cs.star),
        text(format::rating(summary.vote_average))
            .size(style::TEXT_XS)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_LOOSE),
    ]
    .spacing(style::SPACE_XXS)
    .align_y(Alignment::Center);

    if let Some(year) = summary.year() {
        meta = meta.push(
            text(year.to_string())
                .size(style::TEXT_XS)
                .color(cs.outline)
                .line_height(style::LINE_HEIGHT_LOOSE),
        );
    }
    meta = meta.push(iced::widget::Space::new().width(Length::Fill));
    if saved {
        meta = meta.push(
            lucide_icons::iced::icon_heart()
                .size(style::TEXT_XS)
                .color(cs.primary),
        );
    }

    let content = column![poster, title_el, meta]
        .spacing(style::SPACE_XS)
        .padding(style::SPACE_SM)
        .width(Length::Fixed(CARD_WIDTH));

    button(content)
        .padding(0)
        .width(Length::Fixed(CARD_WIDTH))
        .on_press(on_press)
        .style(theme::card_button(cs))
        .into()
}

/// A wrapping card grid with an optional footer line, scroll-reporting so
/// the screen can request the next page near the bottom.
pub fn media_grid<'a, Message: Clone + 'a>(
    cs: &ColorScheme,
    cards: Vec<Element<'a, Message>>,
    footer: Option<String>,
    on_scroll: impl Fn(f32) -> Message + 'a,
) -> Element<'a, Message> {
    let wrap = iced_aw::Wrap::with_elements(cards)
        .spacing(style::SPACE_SM)
        .line_spacing(style::SPACE_SM);

    let mut content = column![wrap].spacing(style::SPACE_MD);
    if let Some(footer) = footer {
        content = content.push(
            container(
                text(footer)
                    .size(style::TEXT_SM)
                    .color(cs.on_surface_variant)
                    .line_height(style::LINE_HEIGHT_LOOSE),
            )
            .width(Length::Fill)
            .center_x(Length::Fill)
            .padding(style::SPACE_MD),
        );
    }

    widgets::styled_scrollable(
        container(content).padding([style::SPACE_SM, style::SPACE_LG]),
        cs,
    )
    .on_scroll(move |viewport| on_scroll(viewport.relative_offset().y))
    .height(Length::Fill)
    .into()
}

/// A horizontal card strip for the home rows.
pub fn media_row<'a, Message: Clone + 'a>(
    cs: &ColorScheme,
    cards: Vec<Element<'a, Message>>,
) -> Element<'a, Message> {
    scrollable(
        row(cards)
            .spacing(style::SPACE_SM)
            .padding([style::SPACE_XS, style::SPACE_LG]),
    )
    .direction(scrollable::Direction::Horizontal(
        scrollable::Scrollbar::new()
            .width(4)
            .scroller_width(3)
            .margin(2),
    ))
    .style(theme::overlay_scrollbar(cs))
    .into()
}
