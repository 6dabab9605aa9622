/// Portfolio listing screen
///
/// Search, facet filtering, grid/list view modes, a featured section, and
/// the empty state when nothing matches.

use iced::widget::{button, column, container, pick_list, row, text, text_input, Space};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use super::cards::{project_card, project_row};
use super::{palette, section_title, Thumbnails, BOLD};
use crate::catalog::data::ProjectRecord;
use crate::catalog::filter::{filter_projects, FilterCriteria, ALL};
use crate::catalog::Catalog;
use crate::{Message, ViewMode};

pub fn view<'a>(
    catalog: &'a Catalog,
    criteria: &'a FilterCriteria,
    view_mode: ViewMode,
    show_filter_bar: bool,
    thumbnails: &Thumbnails,
) -> Element<'a, Message> {
    let filtered = filter_projects(catalog.projects(), criteria);

    let header = column![
        text("Portfolio").size(40).font(BOLD).color(palette::FOREST),
        text("Explore a diverse collection of projects showcasing strategic design thinking, technical expertise, and creative innovation.")
            .size(16)
            .color(palette::MUTED),
    ]
    .spacing(10)
    .align_x(Alignment::Center);

    let search = text_input(
        "Search projects, tags, or descriptions...",
        &criteria.query,
    )
    .on_input(Message::SearchChanged)
    .padding(12)
    .size(16);

    let count = text(format!(
        "Showing {} of {} projects",
        filtered.len(),
        catalog.len()
    ))
    .size(14)
    .color(palette::MUTED);

    let mut page = column![
        container(header).width(Length::Fill).center_x(Length::Fill),
        search,
        controls(catalog, criteria, view_mode, show_filter_bar),
        container(count).width(Length::Fill).center_x(Length::Fill),
    ]
    .spacing(20)
    .padding([40.0, 48.0]);

    if filtered.is_empty() {
        page = page.push(empty_state());
        return container(page).width(Length::Fill).into();
    }

    let featured: Vec<&ProjectRecord> = filtered.iter().copied().filter(|p| p.featured).collect();
    let regular: Vec<&ProjectRecord> = filtered.iter().copied().filter(|p| !p.featured).collect();

    if !featured.is_empty() {
        page = page
            .push(section_title("Featured Projects"))
            .push(project_collection(&featured, view_mode, thumbnails));
    }

    if !regular.is_empty() {
        page = page
            .push(section_title("All Projects"))
            .push(project_collection(&regular, view_mode, thumbnails));
    }

    container(page).width(Length::Fill).into()
}

/// Filter-bar toggle, facet selectors and view-mode switch.
fn controls<'a>(
    catalog: &Catalog,
    criteria: &'a FilterCriteria,
    view_mode: ViewMode,
    show_filter_bar: bool,
) -> Element<'a, Message> {
    let mut bar = row![
        button(text(if show_filter_bar { "Hide Filters" } else { "Filters" }).size(14))
            .padding([8.0, 16.0])
            .style(button::secondary)
            .on_press(Message::ToggleFilterBar),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    if show_filter_bar {
        let mut categories = vec![ALL.to_string()];
        categories.extend(catalog.categories());

        let mut years = vec![ALL.to_string()];
        years.extend(catalog.years());

        bar = bar
            .push(
                pick_list(
                    categories,
                    Some(criteria.category.clone()),
                    Message::CategorySelected,
                )
                .padding(8)
                .text_size(14),
            )
            .push(
                pick_list(years, Some(criteria.year.clone()), Message::YearSelected)
                    .padding(8)
                    .text_size(14),
            );

        if !criteria.is_neutral() {
            bar = bar.push(
                button(text("Clear").size(14))
                    .padding([8.0, 16.0])
                    .style(button::text)
                    .on_press(Message::ClearFilters),
            );
        }
    }

    bar = bar.push(Space::with_width(Length::Fill));
    bar = bar.push(view_mode_button("Grid", ViewMode::Grid, view_mode));
    bar = bar.push(view_mode_button("List", ViewMode::List, view_mode));

    bar.into()
}

fn view_mode_button<'a>(label: &'a str, mode: ViewMode, current: ViewMode) -> Element<'a, Message> {
    let style = if mode == current {
        button::primary
    } else {
        button::secondary
    };
    button(text(label).size(14))
        .padding([8.0, 16.0])
        .style(style)
        .on_press(Message::SetViewMode(mode))
        .into()
}

/// Render a set of projects in the active view mode.
fn project_collection<'a>(
    projects: &[&'a ProjectRecord],
    view_mode: ViewMode,
    thumbnails: &Thumbnails,
) -> Element<'a, Message> {
    match view_mode {
        ViewMode::Grid => Wrap::with_elements(
            projects
                .iter()
                .map(|p| project_card(p, thumbnails))
                .collect(),
        )
        .spacing(24.0)
        .line_spacing(24.0)
        .into(),
        ViewMode::List => {
            let mut list = column![].spacing(16);
            for project in projects {
                list = list.push(project_row(project, thumbnails));
            }
            list.into()
        }
    }
}

/// No-match affordance: message plus a clear-filters action.
fn empty_state<'a>() -> Element<'a, Message> {
    let content = column![
        text("No projects found").size(24).font(BOLD).color(palette::FOREST),
        text("Try adjusting your search terms or filters to find what you're looking for.")
            .size(15)
            .color(palette::MUTED),
        button(text("Clear all filters").size(15))
            .padding([10.0, 20.0])
            .style(button::secondary)
            .on_press(Message::ClearFilters),
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([60.0, 0.0])
        .into()
}
