/// Project cards
///
/// One configurable card component serves every listing surface: the grid
/// card is shared by the home showcase and the portfolio grid, the row
/// variant renders the portfolio list mode.

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length};

use super::{artwork, card_style, palette, tag_pill, Thumbnails, BOLD};
use crate::catalog::data::ProjectRecord;
use crate::route::Route;
use crate::Message;

/// Fixed width of a grid card; the wrap layout flows them per row.
const CARD_WIDTH: f32 = 340.0;

/// How many tags a card shows before collapsing into a "+n" pill.
const CARD_TAG_LIMIT: usize = 2;

/// Grid card: cover artwork on top, meta and tags below. The whole card is
/// a button navigating to the project detail.
pub fn project_card<'a>(
    project: &'a ProjectRecord,
    thumbnails: &Thumbnails,
) -> Element<'a, Message> {
    let cover = artwork(project.cover_image().unwrap_or_default(), thumbnails, 220.0);

    let meta = row![
        text(&project.year).size(13).color(palette::MUTED),
        Space::with_width(Length::Fill),
        text(&project.category).size(13).color(palette::MUTED),
    ];

    let mut tags = row![].spacing(6);
    for tag in project.tags.iter().take(CARD_TAG_LIMIT) {
        tags = tags.push(tag_pill(tag));
    }
    if project.tags.len() > CARD_TAG_LIMIT {
        let extra = project.tags.len() - CARD_TAG_LIMIT;
        tags = tags.push(
            text(format!("+{extra}"))
                .size(12)
                .color(palette::MUTED),
        );
    }

    let body = column![
        text(&project.title).size(18).font(BOLD).color(palette::FOREST),
        text(&project.description).size(14).color(palette::MUTED),
        meta,
        tags,
    ]
    .spacing(8)
    .padding(16);

    let card = container(column![cover, body])
        .width(Length::Fixed(CARD_WIDTH))
        .style(card_style);

    button(card)
        .padding(0)
        .style(button::text)
        .on_press(Message::Navigate(Route::Detail(project.id)))
        .into()
}

/// List row: small artwork on the left, summary in the middle, a view
/// action on the right.
pub fn project_row<'a>(
    project: &'a ProjectRecord,
    thumbnails: &Thumbnails,
) -> Element<'a, Message> {
    let cover = container(artwork(
        project.cover_image().unwrap_or_default(),
        thumbnails,
        96.0,
    ))
    .width(Length::Fixed(128.0));

    let meta = row![
        text(&project.category).size(13).color(palette::MUTED),
        text("•").size(13).color(palette::MUTED),
        text(&project.year).size(13).color(palette::MUTED),
    ]
    .spacing(8);

    let summary = column![
        text(&project.title).size(17).font(BOLD).color(palette::FOREST),
        text(&project.description).size(14).color(palette::MUTED),
        meta,
    ]
    .spacing(6)
    .width(Length::Fill);

    let view_button = button(text("View").size(14))
        .padding([8.0, 16.0])
        .style(button::secondary)
        .on_press(Message::Navigate(Route::Detail(project.id)));

    container(
        row![cover, summary, view_button]
            .spacing(20)
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(16)
    .style(card_style)
    .into()
}
