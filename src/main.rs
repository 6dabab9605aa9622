use iced::theme::Palette;
use iced::widget::image::Handle;
use iced::widget::scrollable;
use iced::{Element, Length, Subscription, Task, Theme};
use std::path::PathBuf;

mod catalog;
mod gallery;
mod media;
mod route;
mod ui;

use catalog::filter::FilterCriteria;
use catalog::Catalog;
use gallery::GalleryState;
use route::Route;
use ui::Thumbnails;

/// Listing layout for the portfolio screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Grid,
    List,
}

/// The screen currently on display. Each screen owns its gallery state, so
/// navigating away tears the gallery (and its autoplay) down with it.
#[derive(Debug, Clone)]
enum Screen {
    Home { showcase: GalleryState },
    Portfolio,
    Detail { id: i64, gallery: GalleryState },
    NotFound { id: i64 },
}

/// Main application state
struct Atelier {
    /// The fixed project catalog
    catalog: Catalog,
    /// Active screen
    screen: Screen,
    /// Listing filter state, kept across navigation
    criteria: FilterCriteria,
    /// Listing layout, kept across navigation
    view_mode: ViewMode,
    /// Whether the facet selectors are expanded
    show_filter_bar: bool,
    /// Cached artwork handles, filled by the warm task
    thumbnails: Thumbnails,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Switch screens
    Navigate(Route),
    /// Search field edited
    SearchChanged(String),
    /// Category facet picked
    CategorySelected(String),
    /// Year facet picked
    YearSelected(String),
    /// Reset every filter dimension
    ClearFilters,
    /// Switch between grid and list layout
    SetViewMode(ViewMode),
    /// Expand or collapse the facet selectors
    ToggleFilterBar,
    /// Advance the active gallery
    GalleryNext,
    /// Step the active gallery back
    GalleryPrev,
    /// Jump the active gallery to an image
    GalleryJump(usize),
    /// Flip autoplay on the active gallery
    ToggleAutoplay,
    /// Autoplay timer fired
    AutoplayTick,
    /// Background thumbnail warm completed
    CacheWarmed(Vec<(String, PathBuf)>),
}

impl Atelier {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        // The catalog is load-bearing; without it the app has nothing to
        // show, so a broken bundle is a startup failure.
        let catalog = Catalog::load()
            .expect("Failed to load the bundled project catalog. The build is broken.");

        println!("🎨 Atelier initialized with {} projects", catalog.len());

        let launch_route = std::env::args()
            .nth(1)
            .map(|path| Route::parse(&path))
            .unwrap_or(Route::Home);

        let mut app = Atelier {
            catalog,
            screen: Screen::Portfolio,
            criteria: FilterCriteria::default(),
            view_mode: ViewMode::Grid,
            show_filter_bar: false,
            thumbnails: Thumbnails::new(),
        };
        app.screen = app.screen_for(launch_route);

        (
            app,
            Task::perform(media::warm_cache(), Message::CacheWarmed),
        )
    }

    /// Build the screen a route lands on. Unknown detail ids map to the
    /// not-found screen instead of failing.
    fn screen_for(&self, route: Route) -> Screen {
        match route {
            Route::Home => Screen::Home {
                showcase: GalleryState::with_autoplay(self.catalog.featured().len(), true),
            },
            Route::Portfolio => Screen::Portfolio,
            Route::Detail(id) => match self.catalog.get(id) {
                Some(project) => Screen::Detail {
                    id,
                    gallery: GalleryState::with_autoplay(
                        project.images.len(),
                        ui::detail::AUTOPLAY_ON_OPEN,
                    ),
                },
                None => Screen::NotFound { id },
            },
        }
    }

    /// The gallery owned by the active screen, if it has one.
    fn active_gallery_mut(&mut self) -> Option<&mut GalleryState> {
        match &mut self.screen {
            Screen::Home { showcase } => Some(showcase),
            Screen::Detail { gallery, .. } => Some(gallery),
            _ => None,
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(route) => {
                self.screen = self.screen_for(route);
            }
            Message::SearchChanged(query) => {
                self.criteria.query = query;
            }
            Message::CategorySelected(category) => {
                self.criteria.category = category;
            }
            Message::YearSelected(year) => {
                self.criteria.year = year;
            }
            Message::ClearFilters => {
                self.criteria.clear();
            }
            Message::SetViewMode(mode) => {
                self.view_mode = mode;
            }
            Message::ToggleFilterBar => {
                self.show_filter_bar = !self.show_filter_bar;
            }
            Message::GalleryNext => {
                if let Some(gallery) = self.active_gallery_mut() {
                    gallery.next();
                }
            }
            Message::GalleryPrev => {
                if let Some(gallery) = self.active_gallery_mut() {
                    gallery.prev();
                }
            }
            Message::GalleryJump(index) => {
                if let Some(gallery) = self.active_gallery_mut() {
                    gallery.jump_to(index);
                }
            }
            Message::ToggleAutoplay => {
                if let Some(gallery) = self.active_gallery_mut() {
                    gallery.toggle_autoplay();
                }
            }
            Message::AutoplayTick => {
                if let Some(gallery) = self.active_gallery_mut() {
                    gallery.tick();
                }
            }
            Message::CacheWarmed(entries) => {
                for (file_name, thumbnail) in entries {
                    self.thumbnails
                        .insert(file_name, Handle::from_path(thumbnail));
                }
                println!("🖼️  {} artwork thumbnails loaded", self.thumbnails.len());

                // Catalog references with no artwork on disk render as
                // drawn placeholders; report them once so broken bundles
                // are easy to spot.
                let missing = self
                    .catalog
                    .image_files()
                    .into_iter()
                    .filter(|file| !self.thumbnails.contains_key(file))
                    .count();
                if missing > 0 {
                    eprintln!("⚠️  {} referenced artwork files have no thumbnail", missing);
                }
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let page: Element<Message> = match &self.screen {
            Screen::Home { showcase } => {
                ui::home::view(&self.catalog, showcase, &self.thumbnails)
            }
            Screen::Portfolio => ui::portfolio::view(
                &self.catalog,
                &self.criteria,
                self.view_mode,
                self.show_filter_bar,
                &self.thumbnails,
            ),
            Screen::Detail { id, gallery } => match self.catalog.get(*id) {
                Some(project) => ui::detail::view(project, gallery, &self.thumbnails),
                None => ui::detail::not_found(*id),
            },
            Screen::NotFound { id } => ui::detail::not_found(*id),
        };

        let shell = iced::widget::column![ui::navbar::view(), page, ui::footer::view()];

        scrollable(shell).width(Length::Fill).into()
    }

    /// The autoplay timer exists only while the active screen's gallery is
    /// autoplaying; subscription diffing cancels it on toggle-off and on
    /// navigation, so no tick can outlive its gallery.
    fn subscription(&self) -> Subscription<Message> {
        let autoplaying = match &self.screen {
            Screen::Home { showcase } => showcase.autoplay(),
            Screen::Detail { gallery, .. } => gallery.autoplay(),
            _ => false,
        };

        if autoplaying {
            iced::time::every(gallery::AUTOPLAY_INTERVAL).map(|_| Message::AutoplayTick)
        } else {
            Subscription::none()
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::custom(
            "Atelier".to_string(),
            Palette {
                background: ui::palette::CREAM,
                text: ui::palette::FOREST,
                primary: ui::palette::MOSS,
                success: ui::palette::MOSS,
                danger: ui::palette::BRICK,
            },
        )
    }
}

fn main() -> iced::Result {
    iced::application("Atelier — Graphic Design Studio", Atelier::update, Atelier::view)
        .subscription(Atelier::subscription)
        .theme(Atelier::theme)
        .centered()
        .run_with(Atelier::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> Atelier {
        Atelier {
            catalog: Catalog::load().unwrap(),
            screen: Screen::Portfolio,
            criteria: FilterCriteria::default(),
            view_mode: ViewMode::Grid,
            show_filter_bar: false,
            thumbnails: Thumbnails::new(),
        }
    }

    #[test]
    fn known_detail_routes_build_a_gallery_sized_screen() {
        let app = app();
        let project = &app.catalog.projects()[0];
        match app.screen_for(Route::Detail(project.id)) {
            Screen::Detail { id, gallery } => {
                assert_eq!(id, project.id);
                assert_eq!(gallery.image_count(), project.images.len());
                assert!(!gallery.autoplay());
            }
            other => panic!("expected detail screen, got {other:?}"),
        }
    }

    #[test]
    fn unknown_detail_routes_land_on_not_found() {
        let app = app();
        match app.screen_for(Route::Detail(9_999)) {
            Screen::NotFound { id } => assert_eq!(id, 9_999),
            other => panic!("expected not-found screen, got {other:?}"),
        }
    }

    #[test]
    fn the_home_showcase_opens_autoplaying() {
        let app = app();
        match app.screen_for(Route::Home) {
            Screen::Home { showcase } => {
                assert!(showcase.autoplay());
                assert_eq!(showcase.image_count(), app.catalog.featured().len());
            }
            other => panic!("expected home screen, got {other:?}"),
        }
    }

    #[test]
    fn ticks_only_reach_the_active_gallery() {
        let mut app = app();
        app.screen = app.screen_for(Route::Portfolio);
        assert!(app.active_gallery_mut().is_none());

        app.screen = app.screen_for(Route::Home);
        let gallery = app.active_gallery_mut().expect("home owns a showcase");
        gallery.tick();
        assert_eq!(gallery.index(), 1);
    }
}
