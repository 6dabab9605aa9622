/// Drawn stand-in for missing artwork
///
/// Grids and galleries always render something: when no thumbnail handle
/// exists for an artwork file, this canvas draws a tinted panel with the
/// file name, keeping layouts stable without the asset.

use iced::alignment::{Horizontal, Vertical};
use iced::widget::canvas::{self, Path, Stroke};
use iced::{Point, Rectangle, Size};

use super::palette;
use crate::Message;

#[derive(Debug, Clone)]
pub struct Placeholder {
    label: String,
}

impl Placeholder {
    pub fn new(file_name: &str) -> Self {
        Placeholder {
            label: file_name.to_string(),
        }
    }
}

impl canvas::Program<Message> for Placeholder {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let size = Size::new(bounds.width, bounds.height);

        frame.fill_rectangle(Point::ORIGIN, size, palette::WASH);

        // Crossed diagonals mark the panel as a stand-in
        let diagonals = Path::new(|builder| {
            builder.move_to(Point::ORIGIN);
            builder.line_to(Point::new(bounds.width, bounds.height));
            builder.move_to(Point::new(bounds.width, 0.0));
            builder.line_to(Point::new(0.0, bounds.height));
        });
        frame.stroke(
            &diagonals,
            Stroke::default().with_color(palette::LINE).with_width(1.0),
        );

        frame.fill_text(canvas::Text {
            content: self.label.clone(),
            position: Point::new(bounds.width / 2.0, bounds.height / 2.0),
            color: palette::MUTED,
            size: 14.0.into(),
            horizontal_alignment: Horizontal::Center,
            vertical_alignment: Vertical::Center,
            ..canvas::Text::default()
        });

        vec![frame.into_geometry()]
    }
}
