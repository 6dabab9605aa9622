/// Project detail screen
///
/// Gallery with prev/next/jump/autoplay controls, the project narrative
/// (challenge, solution, process, results, tools), and the not-found
/// screen for unknown project ids.

use iced::widget::{button, column, container, image, row, text, Space};
use iced::{Alignment, ContentFit, Element, Length};
use iced_aw::Wrap;

use super::{artwork, card_style, palette, section_title, tag_pill, Thumbnails, BOLD};
use crate::catalog::data::ProjectRecord;
use crate::gallery::GalleryState;
use crate::media;
use crate::route::Route;
use crate::Message;

/// The detail gallery opens paused; the home showcase opens playing.
pub const AUTOPLAY_ON_OPEN: bool = false;

pub fn view<'a>(
    project: &'a ProjectRecord,
    gallery: &GalleryState,
    thumbnails: &Thumbnails,
) -> Element<'a, Message> {
    let back = button(text("Back to Portfolio").size(14))
        .style(button::text)
        .on_press(Message::Navigate(Route::Portfolio));

    let meta = row![
        tag_pill(&project.category),
        text("•").size(14).color(palette::MUTED),
        text(&project.year).size(14).color(palette::MUTED),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    let facts = row![
        labeled("Client", &project.client),
        labeled("Duration", &project.duration),
    ]
    .spacing(40);

    let mut tags = row![].spacing(6);
    for tag in &project.tags {
        tags = tags.push(tag_pill(tag));
    }

    let header = column![
        back,
        meta,
        text(&project.title).size(36).font(BOLD).color(palette::FOREST),
        text(&project.description).size(17).color(palette::MUTED),
        facts,
        tags,
    ]
    .spacing(14);

    let page = column![
        header,
        gallery_section(project, gallery, thumbnails),
        narrative(project),
        cta(),
    ]
    .spacing(36)
    .padding([40.0, 48.0]);

    container(page).width(Length::Fill).into()
}

/// Not-found affordance for an id with no catalog match.
pub fn not_found<'a>(id: i64) -> Element<'a, Message> {
    let content = column![
        text("Project Not Found").size(32).font(BOLD).color(palette::FOREST),
        text(format!(
            "No project with id {id} exists in the portfolio."
        ))
        .size(15)
        .color(palette::MUTED),
        button(text("Back to Portfolio").size(15))
            .padding([10.0, 20.0])
            .style(button::primary)
            .on_press(Message::Navigate(Route::Portfolio)),
    ]
    .spacing(14)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([100.0, 0.0])
        .into()
}

fn gallery_section<'a>(
    project: &'a ProjectRecord,
    gallery: &GalleryState,
    thumbnails: &Thumbnails,
) -> Element<'a, Message> {
    // The gallery was sized to this image list; a stale index falls back
    // to the first image.
    let current = project
        .images
        .get(gallery.index())
        .or_else(|| project.images.first())
        .map(String::as_str)
        .unwrap_or_default();

    // The stage shows the full-size artwork when it exists on disk; grids
    // and the strip below stay on cached thumbnails.
    let stage_inner: Element<'a, Message> = match media::display_source(current) {
        Some(source) => image(image::Handle::from_path(source))
            .width(Length::Fill)
            .height(Length::Fixed(420.0))
            .content_fit(ContentFit::Contain)
            .into(),
        None => artwork(current, thumbnails, 420.0),
    };

    let stage = container(stage_inner)
        .width(Length::Fill)
        .style(card_style);

    let mut section = column![stage].spacing(12);

    if project.images.len() > 1 {
        let counter = text(format!(
            "{} / {}",
            gallery.index() + 1,
            gallery.image_count()
        ))
        .size(14)
        .color(palette::MUTED);

        let controls = row![
            button(text("Prev").size(14))
                .padding([8.0, 16.0])
                .style(button::secondary)
                .on_press(Message::GalleryPrev),
            button(text("Next").size(14))
                .padding([8.0, 16.0])
                .style(button::secondary)
                .on_press(Message::GalleryNext),
            counter,
            button(
                text(if gallery.autoplay() { "Pause" } else { "Autoplay" }).size(14)
            )
            .padding([8.0, 16.0])
            .style(button::text)
            .on_press(Message::ToggleAutoplay),
            Space::with_width(Length::Fill),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        let mut strip = row![].spacing(10);
        for (i, file) in project.images.iter().enumerate() {
            let thumb = container(artwork(file, thumbnails, 64.0))
                .width(Length::Fixed(96.0));
            let style = if i == gallery.index() {
                button::primary
            } else {
                button::text
            };
            strip = strip.push(
                button(thumb)
                    .padding(3)
                    .style(style)
                    .on_press(Message::GalleryJump(i)),
            );
        }

        section = section.push(controls).push(strip);
    }

    section.into()
}

fn narrative<'a>(project: &'a ProjectRecord) -> Element<'a, Message> {
    let challenge = narrative_panel("Challenge", &project.challenge);
    let solution = narrative_panel("Solution", &project.solution);

    let mut process = column![section_title("Process")].spacing(12);
    for (i, step) in project.process.iter().enumerate() {
        process = process.push(
            row![
                text(format!("{}.", i + 1)).size(15).font(BOLD).color(palette::MOSS),
                text(step).size(15).color(palette::FOREST),
            ]
            .spacing(10),
        );
    }

    let results = column![
        section_title("Results"),
        container(text(&project.results).size(16).color(palette::FOREST))
            .width(Length::Fill)
            .padding(20)
            .style(card_style),
    ]
    .spacing(12);

    let tools = Wrap::with_elements(project.tools.iter().map(|tool| tag_pill(tool)).collect())
        .spacing(8.0)
        .line_spacing(8.0);

    let tools_section = column![section_title("Tools Used"), tools].spacing(12);

    column![
        row![challenge, solution].spacing(24),
        process,
        results,
        tools_section,
    ]
    .spacing(32)
    .into()
}

fn narrative_panel<'a>(title: &'a str, body: &'a str) -> Element<'a, Message> {
    container(
        column![
            text(title).size(18).font(BOLD).color(palette::FOREST),
            text(body).size(15).color(palette::MUTED),
        ]
        .spacing(10),
    )
    .width(Length::FillPortion(1))
    .padding(20)
    .style(card_style)
    .into()
}

fn labeled<'a>(label: &'a str, value: &'a str) -> Element<'a, Message> {
    column![
        text(label).size(13).font(BOLD).color(palette::FOREST),
        text(value).size(14).color(palette::MUTED),
    ]
    .spacing(4)
    .into()
}

fn cta<'a>() -> Element<'a, Message> {
    let content = column![
        text("Ready to start your project?").size(20).font(BOLD).color(palette::FOREST),
        text("Let's discuss how we can bring your vision to life.")
            .size(15)
            .color(palette::MUTED),
        button(text("Start a Project").size(15))
            .padding([10.0, 20.0])
            .style(button::primary)
            .on_press(Message::Navigate(Route::Home)),
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(32)
        .style(card_style)
        .into()
}
