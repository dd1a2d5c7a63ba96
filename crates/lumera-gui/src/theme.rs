//! Dark streaming-UI color scheme and the style closures built from it.
//!
//! One hardcoded scheme: near-black tonal surfaces with a red accent.
//! Each function returns a closure for Iced's `.style()` method, capturing
//! the needed tokens from the `ColorScheme`.

use iced::overlay::menu;
use iced::widget::{button, container, pick_list, scrollable, text_input};
use iced::{Background, Border, Color, Theme};

use crate::style;

/// Semantic color tokens, tonal-surface style.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    pub surface: Color,
    pub surface_container_lowest: Color,
    pub surface_container_low: Color,
    pub surface_container: Color,
    pub surface_container_high: Color,
    pub surface_bright: Color,
    pub on_surface: Color,
    pub on_surface_variant: Color,
    pub outline: Color,
    pub outline_variant: Color,
    pub primary: Color,
    pub on_primary: Color,
    pub primary_container: Color,
    pub on_primary_container: Color,
    pub star: Color,
    pub error: Color,
}

/// The app's single dark scheme.
pub fn dark() -> ColorScheme {
    ColorScheme {
        surface: Color::from_rgb8(0x0A, 0x0A, 0x0C),
        surface_container_lowest: Color::from_rgb8(0x05, 0x05, 0x06),
        surface_container_low: Color::from_rgb8(0x10, 0x10, 0x13),
        surface_container: Color::from_rgb8(0x17, 0x17, 0x1B),
        surface_container_high: Color::from_rgb8(0x1F, 0x1F, 0x24),
        surface_bright: Color::from_rgb8(0x2A, 0x2A, 0x31),
        on_surface: Color::from_rgb8(0xEC, 0xEC, 0xEE),
        on_surface_variant: Color::from_rgb8(0xB4, 0xB4, 0xBB),
        outline: Color::from_rgb8(0x77, 0x77, 0x80),
        outline_variant: Color::from_rgb8(0x33, 0x33, 0x3A),
        primary: Color::from_rgb8(0xE5, 0x2E, 0x3D),
        on_primary: Color::from_rgb8(0xFF, 0xFF, 0xFF),
        primary_container: Color::from_rgb8(0x55, 0x12, 0x18),
        on_primary_container: Color::from_rgb8(0xFF, 0xD9, 0xDC),
        star: Color::from_rgb8(0xF5, 0xC5, 0x18),
        error: Color::from_rgb8(0xFF, 0x6B, 0x6B),
    }
}

/// Build the iced Theme from the scheme.
pub fn build_theme(cs: &ColorScheme) -> Theme {
    use iced::theme::Palette;

    Theme::custom(
        "Lumera",
        Palette {
            background: cs.surface,
            text: cs.on_surface,
            primary: cs.primary,
            success: cs.primary,
            warning: cs.star,
            danger: cs.error,
        },
    )
}

// ── Containers ───────────────────────────────────────────────────

/// Status bar container style.
pub fn status_bar(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let text = cs.on_surface_variant;
    let bg = cs.surface_container_lowest;
    move |_theme| container::Style {
        text_color: Some(text),
        background: Some(Background::Color(bg)),
        ..Default::default()
    }
}

/// Navigation rail background.
pub fn nav_rail_bg(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container_low;
    move |_theme| container::Style {
        text_color: None,
        background: Some(Background::Color(bg)),
        ..Default::default()
    }
}

/// Rounded frame behind posters; also the placeholder when no image loaded.
pub fn poster_placeholder(cs: &ColorScheme, radius: f32) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container;
    move |_theme| container::Style {
        text_color: None,
        background: Some(Background::Color(bg)),
        border: Border {
            radius: radius.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Pill container for the search input.
pub fn search_bar(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container;
    let border_color = cs.outline_variant;
    move |_theme| container::Style {
        text_color: None,
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: style::RADIUS_XL.into(),
        },
        ..Default::default()
    }
}

// ── Buttons ──────────────────────────────────────────────────────

/// Navigation rail item — icon+label with pill indicator when active.
pub fn nav_rail_item(
    active: bool,
    cs: &ColorScheme,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    let primary_container = cs.primary_container;
    let on_primary_container = cs.on_primary_container;
    let surface_bright = cs.surface_bright;
    let on_surface = cs.on_surface;
    let on_surface_variant = cs.on_surface_variant;

    move |_theme, status| {
        let rounded = Border {
            radius: style::RADIUS_XL.into(),
            ..Border::default()
        };
        if active {
            button::Style {
                background: Some(Background::Color(primary_container)),
                text_color: on_primary_container,
                border: rounded,
                ..Default::default()
            }
        } else {
            match status {
                button::Status::Hovered => button::Style {
                    background: Some(Background::Color(surface_bright)),
                    text_color: on_surface,
                    border: rounded,
                    ..Default::default()
                },
                _ => button::Style {
                    background: None,
                    text_color: on_surface_variant,
                    border: rounded,
                    ..Default::default()
                },
            }
        }
    }
}

/// Filter chip — outlined when unselected, tonal fill when selected.
pub fn filter_chip(
    selected: bool,
    cs: &ColorScheme,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    let primary_container = cs.primary_container;
    let on_primary_container = cs.on_primary_container;
    let outline_variant = cs.outline_variant;
    let surface_bright = cs.surface_bright;
    let on_surface = cs.on_surface;
    let on_surface_variant = cs.on_surface_variant;

    move |_theme, status| {
        if selected {
            button::Style {
                background: Some(Background::Color(primary_container)),
                text_color: on_primary_container,
                border: Border {
                    radius: style::CHIP_RADIUS.into(),
                    ..Border::default()
                },
                ..Default::default()
            }
        } else {
            let (bg, tc) = match status {
                button::Status::Hovered => (Some(Background::Color(surface_bright)), on_surface),
                _ => (None, on_surface_variant),
            };
            button::Style {
                background: bg,
                text_color: tc,
                border: Border {
                    color: outline_variant,
                    width: 1.0,
                    radius: style::CHIP_RADIUS.into(),
                },
                ..Default::default()
            }
        }
    }
}

/// Borderless button that fills on hover.
pub fn ghost_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let surface_bright = cs.surface_bright;
    let on_surface = cs.on_surface;
    let on_surface_variant = cs.on_surface_variant;

    move |_theme, status| {
        let (bg, tc) = match status {
            button::Status::Hovered => (Some(Background::Color(surface_bright)), on_surface),
            _ => (None, on_surface_variant),
        };
        button::Style {
            background: bg,
            text_color: tc,
            border: Border {
                radius: style::RADIUS_MD.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

/// Filled call-to-action ("Watch Now").
pub fn primary_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let primary = cs.primary;
    let on_primary = cs.on_primary;

    move |_theme, status| {
        let bg = match status {
            button::Status::Hovered => Color {
                a: 0.85,
                ..primary
            },
            _ => primary,
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color: on_primary,
            border: Border {
                radius: style::RADIUS_XL.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

/// Tonal pill, used for the favorite toggle when the item is saved.
pub fn tonal_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let primary_container = cs.primary_container;
    let on_primary_container = cs.on_primary_container;
    let surface_bright = cs.surface_bright;

    move |_theme, status| {
        let bg = match status {
            button::Status::Hovered => surface_bright,
            _ => primary_container,
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color: on_primary_container,
            border: Border {
                radius: style::RADIUS_XL.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

/// Small square icon button.
pub fn icon_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let surface_bright = cs.surface_bright;
    let on_surface = cs.on_surface;
    let on_surface_variant = cs.on_surface_variant;

    move |_theme, status| {
        let (bg, tc) = match status {
            button::Status::Hovered => (Some(Background::Color(surface_bright)), on_surface),
            _ => (None, on_surface_variant),
        };
        button::Style {
            background: bg,
            text_color: tc,
            border: Border {
                radius: style::RADIUS_SM.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

/// Poster card button — transparent, slight lift on hover.
pub fn card_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let surface_container_high = cs.surface_container_high;
    let on_surface = cs.on_surface;

    move |_theme, status| {
        let bg = match status {
            button::Status::Hovered => Some(Background::Color(surface_container_high)),
            _ => None,
        };
        button::Style {
            background: bg,
            text_color: on_surface,
            border: Border {
                radius: style::RADIUS_LG.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

// ── Inputs ───────────────────────────────────────────────────────

/// Text input without its own border (lives inside `search_bar`).
pub fn text_input_borderless(
    cs: &ColorScheme,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    let on_surface = cs.on_surface;
    let outline = cs.outline;
    let primary = cs.primary;

    move |_theme, _status| text_input::Style {
        background: Background::Color(Color::TRANSPARENT),
        border: Border::default(),
        icon: outline,
        placeholder: outline,
        value: on_surface,
        selection: primary,
    }
}

/// Standalone form input (settings).
pub fn text_input_style(
    cs: &ColorScheme,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    let bg = cs.surface_container;
    let on_surface = cs.on_surface;
    let outline = cs.outline;
    let outline_variant = cs.outline_variant;
    let primary = cs.primary;

    move |_theme, status| {
        let border_color = match status {
            text_input::Status::Focused { .. } => primary,
            _ => outline_variant,
        };
        text_input::Style {
            background: Background::Color(bg),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: style::RADIUS_MD.into(),
            },
            icon: outline,
            placeholder: outline,
            value: on_surface,
            selection: primary,
        }
    }
}

pub fn pick_list_style(cs: &ColorScheme) -> impl Fn(&Theme, pick_list::Status) -> pick_list::Style {
    let bg = cs.surface_container;
    let on_surface = cs.on_surface;
    let outline = cs.outline;
    let outline_variant = cs.outline_variant;
    let primary = cs.primary;

    move |_theme, status| {
        let border_color = match status {
            pick_list::Status::Hovered | pick_list::Status::Opened { .. } => primary,
            _ => outline_variant,
        };
        pick_list::Style {
            text_color: on_surface,
            placeholder_color: outline,
            handle_color: outline,
            background: Background::Color(bg),
            border: Border {
                color: border_color,
                width: 1.0,
                radius: style::RADIUS_MD.into(),
            },
        }
    }
}

pub fn pick_list_menu_style(cs: &ColorScheme) -> impl Fn(&Theme) -> menu::Style {
    let bg = cs.surface_container_high;
    let on_surface = cs.on_surface;
    let outline_variant = cs.outline_variant;
    let surface_bright = cs.surface_bright;

    move |_theme| menu::Style {
        background: Background::Color(bg),
        border: Border {
            color: outline_variant,
            width: 1.0,
            radius: style::RADIUS_MD.into(),
        },
        text_color: on_surface,
        selected_text_color: on_surface,
        selected_background: Background::Color(surface_bright),
        shadow: Default::default(),
    }
}

// ── Scrollbars ───────────────────────────────────────────────────

/// Thin overlay scrollbar used by every scrollable surface.
pub fn overlay_scrollbar(
    cs: &ColorScheme,
) -> impl Fn(&Theme, scrollable::Status) -> scrollable::Style {
    let outline = cs.outline;
    let outline_variant = cs.outline_variant;

    move |theme, status| {
        let scroller_color = match status {
            scrollable::Status::Hovered { .. } | scrollable::Status::Dragged { .. } => outline,
            _ => outline_variant,
        };
        let rail = scrollable::Rail {
            background: None,
            border: Border::default(),
            scroller: scrollable::Scroller {
                background: Background::Color(scroller_color),
                border: Border {
                    radius: style::RADIUS_SM.into(),
                    ..Border::default()
                },
            },
        };
        scrollable::Style {
            container: container::Style::default(),
            vertical_rail: rail,
            horizontal_rail: rail,
            gap: None,
            auto_scroll: scrollable::default(theme, status).auto_scroll,
        }
    }
}
