/// Home screen: hero, services, featured showcase, about, contact

use iced::widget::{button, column, container, row, text, Space};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use super::cards::project_card;
use super::{artwork, card_style, palette, section_title, tag_pill, Thumbnails, BOLD};
use crate::catalog::data::ProjectRecord;
use crate::catalog::Catalog;
use crate::gallery::GalleryState;
use crate::route::Route;
use crate::Message;

pub fn view<'a>(
    catalog: &'a Catalog,
    showcase: &GalleryState,
    thumbnails: &Thumbnails,
) -> Element<'a, Message> {
    let mut page = column![hero()].spacing(56).padding([40.0, 48.0]);

    let featured = catalog.featured();
    if !featured.is_empty() {
        page = page.push(showcase_section(&featured, showcase, thumbnails));
    }

    page = page
        .push(services_section())
        .push(about_section())
        .push(contact_section());

    container(page).width(Length::Fill).into()
}

fn hero<'a>() -> Element<'a, Message> {
    let badge = tag_pill("Modern • Minimal • Impactful");

    let content = column![
        badge,
        text("Graphic Designer crafting bold, modern visuals")
            .size(44)
            .font(BOLD)
            .color(palette::FOREST),
        text("I help brands stand out with clean systems, strong typography, and purposeful color. Explore selected works below.")
            .size(18)
            .color(palette::MUTED),
        button(text("View Portfolio").size(16))
            .padding([12.0, 24.0])
            .style(button::primary)
            .on_press(Message::Navigate(Route::Portfolio)),
    ]
    .spacing(20)
    .align_x(Alignment::Center)
    .max_width(760);

    container(content)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([40.0, 0.0])
        .into()
}

/// Featured showcase: one large rotating artwork with gallery controls,
/// cycling through the featured projects.
fn showcase_section<'a>(
    featured: &[&'a ProjectRecord],
    showcase: &GalleryState,
    thumbnails: &Thumbnails,
) -> Element<'a, Message> {
    // The showcase gallery was sized to the featured list; a stale index
    // falls back to the first entry.
    let active = featured
        .get(showcase.index())
        .or_else(|| featured.first())
        .copied();

    let mut section = column![
        section_title("Selected Work"),
        text("A curated look at recent projects and explorations.")
            .size(15)
            .color(palette::MUTED),
    ]
    .spacing(20);

    if let Some(project) = active {
        let cover = artwork(project.cover_image().unwrap_or_default(), thumbnails, 380.0);

        let caption = row![
            column![
                text(&project.title).size(20).font(BOLD).color(palette::FOREST),
                text(&project.category).size(14).color(palette::MUTED),
            ]
            .spacing(4),
            Space::with_width(Length::Fill),
            text(format!("{} / {}", showcase.index() + 1, showcase.image_count()))
                .size(14)
                .color(palette::MUTED),
        ]
        .align_y(Alignment::Center);

        let controls = row![
            button(text("Prev").size(14))
                .padding([8.0, 16.0])
                .style(button::secondary)
                .on_press(Message::GalleryPrev),
            button(text("Next").size(14))
                .padding([8.0, 16.0])
                .style(button::secondary)
                .on_press(Message::GalleryNext),
            button(
                text(if showcase.autoplay() { "Pause" } else { "Autoplay" }).size(14)
            )
            .padding([8.0, 16.0])
            .style(button::text)
            .on_press(Message::ToggleAutoplay),
            Space::with_width(Length::Fill),
            button(text("View Details").size(14))
                .padding([8.0, 16.0])
                .style(button::primary)
                .on_press(Message::Navigate(Route::Detail(project.id))),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let stage = container(column![cover, column![caption, controls].spacing(12).padding(16)])
            .width(Length::Fill)
            .style(card_style);

        section = section.push(stage);
    }

    let grid = Wrap::with_elements(
        featured
            .iter()
            .map(|p| project_card(p, thumbnails))
            .collect(),
    )
    .spacing(24.0)
    .line_spacing(24.0);

    section.push(grid).into()
}

fn services_section<'a>() -> Element<'a, Message> {
    let cards = Wrap::with_elements(vec![
        service_card(
            "Brand Identity",
            "Logos, color systems, typography, and guidelines.",
        ),
        service_card(
            "Print & Posters",
            "Editorial layouts, poster series, and packaging.",
        ),
        service_card(
            "Web Visuals",
            "Landing visuals, hero graphics, and campaign assets.",
        ),
    ])
    .spacing(24.0)
    .line_spacing(24.0);

    column![
        section_title("Services"),
        text("From brand identities to campaign visuals, I deliver systems that scale and communicate clearly across touchpoints.")
            .size(15)
            .color(palette::MUTED),
        cards,
    ]
    .spacing(16)
    .into()
}

fn service_card<'a>(title: &'a str, blurb: &'a str) -> Element<'a, Message> {
    container(
        column![
            text(title).size(17).font(BOLD).color(palette::FOREST),
            text(blurb).size(14).color(palette::MUTED),
        ]
        .spacing(8),
    )
    .width(Length::Fixed(300.0))
    .padding(20)
    .style(card_style)
    .into()
}

fn about_section<'a>() -> Element<'a, Message> {
    let intro = column![
        section_title("About"),
        text("I blend Swiss precision with contemporary aesthetics, building visual systems that are as strategic as they are striking.")
            .size(15)
            .color(palette::MUTED),
    ]
    .spacing(10)
    .width(Length::FillPortion(1));

    let facts = container(
        column![
            text("• 6+ years experience in brand and visual design").size(14).color(palette::FOREST),
            text("• Cross-discipline: print, digital, motion").size(14).color(palette::FOREST),
            text("• Toolset: Figma, Adobe CC, Webflow").size(14).color(palette::FOREST),
        ]
        .spacing(8),
    )
    .padding(20)
    .width(Length::FillPortion(1))
    .style(card_style);

    row![intro, facts].spacing(32).into()
}

fn contact_section<'a>() -> Element<'a, Message> {
    let content = column![
        section_title("Let's build something bold"),
        text("Tell me about your project and timeline. I'll get back within 24 hours.")
            .size(15)
            .color(palette::MUTED),
        text("hello@atelier.design").size(16).font(BOLD).color(palette::MOSS),
        button(text("See Work").size(15))
            .padding([10.0, 20.0])
            .style(button::secondary)
            .on_press(Message::Navigate(Route::Portfolio)),
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([32.0, 0.0])
        .into()
}
