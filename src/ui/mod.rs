/// View components
///
/// Presentational builders only: they consume catalog data, filter results
/// and gallery state, and emit messages. No business logic lives here.

pub mod cards;
pub mod detail;
pub mod footer;
pub mod home;
pub mod navbar;
pub mod palette;
pub mod placeholder;
pub mod portfolio;

use std::collections::HashMap;

use iced::font::Weight;
use iced::widget::{canvas, container, image, text, Text};
use iced::{Border, ContentFit, Element, Font, Length};

use crate::Message;

/// Image handles for cached thumbnails, keyed by artwork file name.
pub type Thumbnails = HashMap<String, image::Handle>;

pub const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

/// Heading used at the top of every page section.
pub fn section_title(label: &str) -> Text<'_> {
    text(label).size(28).font(BOLD).color(palette::FOREST)
}

/// Small rounded label for tags and categories.
pub fn tag_pill<'a>(label: &'a str) -> Element<'a, Message> {
    container(text(label).size(12).color(palette::FOREST))
        .padding([4.0, 10.0])
        .style(|_theme| container::Style {
            background: Some(palette::WASH.into()),
            border: Border {
                color: palette::LINE,
                width: 1.0,
                radius: 999.0.into(),
            },
            ..container::Style::default()
        })
        .into()
}

/// White card surface shared by grids, rows and narrative panels.
pub fn card_style(_theme: &iced::Theme) -> container::Style {
    container::Style {
        background: Some(palette::CARD.into()),
        border: Border {
            color: palette::LINE,
            width: 1.0,
            radius: 14.0.into(),
        },
        ..container::Style::default()
    }
}

/// Render one artwork: the cached thumbnail when available, otherwise a
/// drawn placeholder so a missing asset never breaks a layout.
pub fn artwork<'a>(file_name: &str, thumbnails: &Thumbnails, height: f32) -> Element<'a, Message> {
    match thumbnails.get(file_name) {
        Some(handle) => image(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .into(),
        None => canvas(placeholder::Placeholder::new(file_name))
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .into(),
    }
}
