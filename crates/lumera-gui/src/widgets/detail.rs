//! Pieces shared by the movie and TV detail views.

use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use lumera_core::models::Credits;

use crate::style;
use crate::theme::{self, ColorScheme};

/// "Watch Now" + favorites toggle.
pub fn action_row<'a, Message: Clone + 'a>(
    cs: &ColorScheme,
    saved: bool,
    on_play: Message,
    on_toggle: Message,
) -> Element<'a, Message> {
    let play = button(
        row![
            lucide_icons::iced::icon_play().size(style::TEXT_SM).center(),
            text("Watch Now")
                .size(style::TEXT_SM)
                .line_height(style::LINE_HEIGHT_NORMAL),
        ]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center),
    )
    .padding([style::SPACE_SM, style::SPACE_XL])
    .on_press(on_play)
    .style(theme::primary_button(cs));

    let (icon, label): (iced::widget::Text<'static>, _) = if saved {
        (lucide_icons::iced::icon_check(), "In My List")
    } else {
        (lucide_icons::iced::icon_plus(), "Add to My List")
    };
    let toggle = button(
        row![
            icon.size(style::TEXT_SM).center(),
            text(label)
                .size(style::TEXT_SM)
                .line_height(style::LINE_HEIGHT_NORMAL),
        ]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center),
    )
    .padding([style::SPACE_SM, style::SPACE_XL])
    .on_press(on_toggle)
    .style(if saved {
        Box::new(theme::tonal_button(cs))
            as Box<dyn Fn(&iced::Theme, button::Status) -> button::Style>
    } else {
        Box::new(theme::ghost_button(cs))
    });

    row![play, toggle]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center)
        .into()
}

/// Director (or creator) plus the top-billed cast, initials standing in for
/// portraits. `None` when there is nobody to show.
pub fn cast_section<'a, Message: 'a>(
    cs: &ColorScheme,
    credits: &'a Credits,
    lead_name: Option<&'a str>,
    lead_role: &'a str,
) -> Option<Element<'a, Message>> {
    let mut people = row![].spacing(style::SPACE_LG);
    let mut any = false;

    if let Some(name) = lead_name {
        people = people.push(person_tile(cs, name, lead_role));
        any = true;
    }
    for member in credits.cast.iter().take(6) {
        people = people.push(person_tile(cs, &member.name, &member.character));
        any = true;
    }
    if !any {
        return None;
    }

    Some(
        column![section_title(cs, "Cast & Crew"), people]
            .spacing(style::SPACE_MD)
            .into(),
    )
}

fn person_tile<'a, Message: 'a>(
    cs: &ColorScheme,
    name: &'a str,
    role: &'a str,
) -> Element<'a, Message> {
    let initial = name.chars().next().unwrap_or('?').to_uppercase().to_string();
    let badge = container(
        text(initial)
            .size(style::TEXT_XL)
            .color(cs.primary)
            .center(),
    )
    .width(Length::Fixed(style::PORTRAIT_SIZE))
    .height(Length::Fixed(style::PORTRAIT_SIZE))
    .center_x(Length::Fixed(style::PORTRAIT_SIZE))
    .center_y(Length::Fixed(style::PORTRAIT_SIZE))
    .style(theme::poster_placeholder(cs, style::PORTRAIT_SIZE / 2.0));

    column![
        badge,
        text(name)
            .size(style::TEXT_XS)
            .color(cs.on_surface)
            .line_height(style::LINE_HEIGHT_LOOSE),
        text(role)
            .size(style::TEXT_XS)
            .color(cs.outline)
            .line_height(style::LINE_HEIGHT_LOOSE),
    ]
    .spacing(style::SPACE_XXS)
    .align_x(Alignment::Center)
    .width(Length::Fixed(style::PORTRAIT_SIZE + style::SPACE_XL))
    .into()
}

pub fn section_title<'a, Message: 'a>(cs: &ColorScheme, title: &'a str) -> Element<'a, Message> {
    text(title)
        .size(style::TEXT_LG)
        .color(cs.on_surface)
        .line_height(style::LINE_HEIGHT_TIGHT)
        .into()
}

pub fn loading_placeholder<'a, Message: 'a>(cs: &ColorScheme) -> Element<'a, Message> {
    container(
        text("Loading...")
            .size(style::TEXT_SM)
            .color(cs.on_surface_variant)
            .line_height(style::LINE_HEIGHT_LOOSE),
    )
    .padding(style::SPACE_3XL)
    .width(Length::Fill)
    .center_x(Length::Fill)
    .into()
}

/// A selectable category chip with a check mark when active.
pub fn category_chip<'a, Message: Clone + 'a>(
    cs: &ColorScheme,
    label: &'a str,
    selected: bool,
    on_press: Message,
) -> Element<'a, Message> {
    let mut content = row![].spacing(style::SPACE_XXS).align_y(Alignment::Center);
    if selected {
        content = content.push(lucide_icons::iced::icon_check().size(style::TEXT_XS));
    }
    content = content.push(
        text(label)
            .size(style::TEXT_XS)
            .line_height(style::LINE_HEIGHT_LOOSE),
    );

    button(container(content).center_y(Length::Fill))
        .height(Length::Fixed(style::CHIP_HEIGHT))
        .padding([style::SPACE_XS, style::SPACE_MD])
        .on_press(on_press)
        .style(theme::filter_chip(selected, cs))
        .into()
}

/// Footer line under an incrementally loaded grid, if any.
pub fn grid_footer<Q: Clone + PartialEq>(listing: &lumera_core::Listing<Q>) -> Option<String> {
    if listing.is_loading_more() {
        Some("Loading more...".into())
    } else if !listing.has_more() && !listing.is_empty() {
        Some("That's all for now.".into())
    } else {
        None
    }
}
