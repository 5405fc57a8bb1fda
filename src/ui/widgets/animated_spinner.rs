// SPDX-License-Identifier: MPL-2.0
//! Canvas spinner shown while a search or a preview download is running.
//!
//! The widget is stateless: the caller advances the rotation angle on every
//! animation tick and rebuilds the spinner.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

/// Number of line segments used to approximate the arc.
const ARC_SEGMENTS: u16 = 30;

/// Stroke width of the ring and the arc.
const STROKE_WIDTH: f32 = 3.0;

pub struct AnimatedSpinner {
    cache: Cache,
    /// Rotation angle in radians.
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a spinner with the given color and rotation angle.
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    /// Overrides the default diameter.
    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Points of a half-circle arc starting at `rotation` (0 = top).
fn arc_points(center: Point, radius: f32, rotation: f32) -> impl Iterator<Item = Point> {
    let start = rotation - PI / 2.0;
    (0..=ARC_SEGMENTS).map(move |i| {
        let angle = start + PI * f32::from(i) / f32::from(ARC_SEGMENTS);
        Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
    })
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
        let geometry = self.cache.draw(renderer, bounds.size(), |frame: &mut Frame| {
            let center = frame.center();
            let radius = frame.width().min(frame.height()) / 2.0 - 4.0;

            // Faint full ring
            frame.stroke(
                &Path::circle(center, radius),
                Stroke::default().with_width(STROKE_WIDTH).with_color(Color {
                    a: 0.25,
                    ..self.color
                }),
            );

            let mut builder = canvas::path::Builder::new();
            let mut points = arc_points(center, radius, self.rotation);
            if let Some(first) = points.next() {
                builder.move_to(first);
            }
            for point in points {
                builder.line_to(point);
            }

            frame.stroke(
                &builder.build(),
                Stroke::default()
                    .with_width(STROKE_WIDTH)
                    .with_color(self.color)
                    .with_line_cap(canvas::LineCap::Round),
            );
        });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    #[test]
    fn arc_starts_at_top_without_rotation() {
        let center = Point::new(10.0, 10.0);
        let first = arc_points(center, 5.0, 0.0).next().unwrap();
        assert!(close(first, Point::new(10.0, 5.0)), "got {first:?}");
    }

    #[test]
    fn arc_spans_half_a_circle() {
        let center = Point::new(0.0, 0.0);
        let points: Vec<Point> = arc_points(center, 1.0, 0.0).collect();
        assert_eq!(points.len(), usize::from(ARC_SEGMENTS) + 1);
        assert!(close(*points.last().unwrap(), Point::new(0.0, 1.0)));
    }

    #[test]
    fn size_overrides_default() {
        let spinner = AnimatedSpinner::new(Color::WHITE, 0.0).size(20.0);
        assert!((spinner.size - 20.0).abs() < f32::EPSILON);
    }
}
