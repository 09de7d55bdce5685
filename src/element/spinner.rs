// SPDX-License-Identifier: MPL-2.0
//! Activity indicator drawn with Canvas.

use iced::widget::canvas::{self, Canvas, Frame, Geometry, Stroke};
use iced::{mouse, Color, Element, Length, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Stroke width of the spinner arc.
const STROKE_WIDTH: f32 = 2.0;

/// Rotating three-quarter arc shown while a size query is outstanding.
pub struct Spinner {
    rotation: f32,
    size: f32,
    color: Color,
}

impl Spinner {
    /// Creates a spinner with the given rotation angle (radians) and diameter.
    #[must_use]
    pub fn new(rotation: f32, size: f32) -> Self {
        Self {
            rotation,
            size,
            color: Color::from_rgb(0.5, 0.5, 0.5),
        }
    }

    /// Wraps the spinner in a fixed-size canvas widget.
    pub fn into_element<Message: 'static>(self) -> Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

        let mut builder = canvas::path::Builder::new();
        builder.arc(canvas::path::Arc {
            center,
            radius,
            start_angle: Radians(self.rotation),
            end_angle: Radians(self.rotation + 1.5 * PI),
        });

        frame.stroke(
            &builder.build(),
            Stroke::default()
                .with_width(STROKE_WIDTH)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}
