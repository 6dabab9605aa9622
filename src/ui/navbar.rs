/// Top navigation bar

use iced::widget::{button, container, row, text, Space};
use iced::{Alignment, Element, Length};

use super::{palette, BOLD};
use crate::route::Route;
use crate::Message;

pub fn view<'a>() -> Element<'a, Message> {
    let brand = button(text("Atelier").size(20).font(BOLD).color(palette::FOREST))
        .style(button::text)
        .on_press(Message::Navigate(Route::Home));

    let links = row![
        nav_link("Home", Route::Home),
        nav_link("Portfolio", Route::Portfolio),
    ]
    .spacing(16);

    let cta = button(text("Start a Project").size(14))
        .padding([8.0, 16.0])
        .style(button::primary)
        .on_press(Message::Navigate(Route::Home));

    let bar = row![brand, Space::with_width(Length::Fill), links, cta]
        .spacing(24)
        .align_y(Alignment::Center);

    container(bar)
        .width(Length::Fill)
        .padding([14.0, 32.0])
        .style(|_theme| iced::widget::container::Style {
            background: Some(palette::CARD.into()),
            ..iced::widget::container::Style::default()
        })
        .into()
}

fn nav_link<'a>(label: &'a str, route: Route) -> Element<'a, Message> {
    button(text(label).size(15).color(palette::FOREST))
        .style(button::text)
        .on_press(Message::Navigate(route))
        .into()
}
