use iced::widget::container;
use iced::{ContentFit, Element, Length};

use lumera_core::models::MediaKey;

use crate::poster_cache::{PosterCache, PosterState};
use crate::style;
use crate::theme::{self, ColorScheme};

/// Render a poster with rounded corners, or a styled placeholder.
///
/// `ContentFit::Cover` fills the frame completely, cropping overflow; the
/// container keeps the placeholder background so a failed image still shows
/// a visible frame.
pub fn rounded_poster<'a, Message: 'static>(
    cs: &ColorScheme,
    posters: &'a PosterCache,
    key: MediaKey,
    width: f32,
    height: f32,
    radius: f32,
) -> Element<'a, Message> {
    if let Some(PosterState::Loaded(path)) = posters.get(key) {
        container(
            iced::widget::image(path.as_path())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Cover)
                .border_radius(radius),
        )
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .style(theme::poster_placeholder(cs, radius))
        .into()
    } else {
        container(
            lucide_icons::iced::icon_film()
                .size(style::TEXT_3XL)
                .color(cs.outline)
                .center(),
        )
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .center_x(Length::Fixed(width))
        .center_y(Length::Fixed(height))
        .style(theme::poster_placeholder(cs, radius))
        .into()
    }
}
