pub mod detail;
pub mod empty_state;
pub mod media_card;
pub mod rounded_poster;

pub use detail::{
    action_row, cast_section, category_chip, grid_footer, loading_placeholder, section_title,
};
pub use empty_state::empty_state;
pub use media_card::{media_card, media_grid, media_row, CARD_WIDTH};
pub use rounded_poster::rounded_poster;

use iced::widget::scrollable;
use iced::Element;

use crate::theme::{self, ColorScheme};

/// The vertical scrollable every page uses, with the thin overlay
/// scrollbar.
pub fn styled_scrollable<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    cs: &ColorScheme,
) -> scrollable::Scrollable<'a, Message> {
    scrollable(content)
        .direction(scrollable::Direction::Vertical(
            scrollable::Scrollbar::new()
                .width(6)
                .scroller_width(4)
                .margin(2),
        ))
        .style(theme::overlay_scrollbar(cs))
}
