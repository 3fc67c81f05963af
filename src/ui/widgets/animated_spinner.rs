// SPDX-License-Identifier: MPL-2.0
//! Loading indicator drawn on a canvas, turned by the toast tick.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};
use std::time::Duration;

/// One full turn.
const PERIOD: Duration = Duration::from_millis(1000);

/// Arc segments; enough for a smooth curve at icon size.
const SEGMENTS: u16 = 24;

/// Spinner showing a half-circle arc over a faint ring.
pub struct AnimatedSpinner {
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color) -> Self {
        Self {
            rotation: 0.0,
            color,
            size: sizing::ICON_TOAST,
        }
    }

    /// Sets the rotation from how long the spinner has been shown.
    #[must_use]
    pub fn elapsed(mut self, elapsed: Duration) -> Self {
        self.rotation = rotation_at(elapsed);
        self
    }

    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn into_element<'a, Message: 'a>(self) -> Element<'a, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Angle in radians after `elapsed`, wrapping every turn.
fn rotation_at(elapsed: Duration) -> f32 {
    let turns = elapsed.as_secs_f32() / PERIOD.as_secs_f32();
    turns.fract() * TAU
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
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
        let thickness = (self.size / 8.0).max(1.5);
        let radius = frame.width().min(frame.height()) / 2.0 - thickness;

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default().with_width(thickness).with_color(Color {
                a: self.color.a * 0.25,
                ..self.color
            }),
        );

        // Half-circle arc starting at twelve o'clock
        let start = self.rotation - PI / 2.0;
        let arc = Path::new(|builder| {
            builder.move_to(point_on(center, radius, start));
            for i in 1..=SEGMENTS {
                let angle = start + PI * f32::from(i) / f32::from(SEGMENTS);
                builder.line_to(point_on(center, radius, angle));
            }
        });
        frame.stroke(
            &arc,
            Stroke::default()
                .with_width(thickness)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}

fn point_on(center: Point, radius: f32, angle: f32) -> Point {
    Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_wraps_every_period() {
        assert_eq!(rotation_at(Duration::ZERO), 0.0);
        assert!((rotation_at(Duration::from_millis(250)) - TAU / 4.0).abs() < 1e-4);
        assert!(rotation_at(Duration::from_millis(1000)) < 1e-4);
    }

    #[test]
    fn point_on_circle() {
        let point = point_on(Point::ORIGIN, 10.0, 0.0);
        assert!((point.x - 10.0).abs() < 1e-5);
        assert!(point.y.abs() < 1e-5);
    }
}
