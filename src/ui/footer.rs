/// Page footer

use chrono::{Datelike, Local};
use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length};

use super::palette;
use crate::route::Route;
use crate::Message;

pub fn view<'a>() -> Element<'a, Message> {
    let year = Local::now().year();

    let copyright = text(format!("© {year} Atelier — Graphic Design Studio"))
        .size(13)
        .color(palette::MUTED);

    let links = row![
        footer_link("Home", Route::Home),
        footer_link("Portfolio", Route::Portfolio),
    ]
    .spacing(16);

    let bar = row![copyright, Space::with_width(Length::Fill), links]
        .align_y(Alignment::Center);

    container(column![bar])
        .width(Length::Fill)
        .padding([24.0, 32.0])
        .style(|_theme| iced::widget::container::Style {
            background: Some(palette::CARD.into()),
            ..iced::widget::container::Style::default()
        })
        .into()
}

fn footer_link<'a>(label: &'a str, route: Route) -> Element<'a, Message> {
    button(text(label).size(13).color(palette::MUTED))
        .style(button::text)
        .on_press(Message::Navigate(route))
        .into()
}
