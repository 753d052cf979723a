// SPDX-License-Identifier: MPL-2.0
//! Canvas spinner shown while a remote image is loading.

use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};
use std::time::Duration;

/// Default diameter in logical pixels.
pub const DEFAULT_SIZE: f32 = 48.0;

/// Time for one full revolution.
const REVOLUTION: Duration = Duration::from_millis(1_200);

/// Segments used to approximate the arc.
const ARC_SEGMENTS: u16 = 30;

/// Spinner whose angle is derived from the time spent loading.
#[derive(Debug, Clone, Copy)]
pub struct AnimatedSpinner {
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a spinner positioned for `elapsed` loading time.
    #[must_use]
    pub fn new(color: Color, elapsed: Duration) -> Self {
        Self {
            rotation: rotation_at(elapsed),
            color,
            size: DEFAULT_SIZE,
        }
    }

    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn into_element<'a, Message: 'a>(self) -> Element<'a, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Angle in radians, in `0..TAU`, after `elapsed` of spinning.
#[must_use]
pub fn rotation_at(elapsed: Duration) -> f32 {
    let period = REVOLUTION.as_millis();
    #[allow(clippy::cast_precision_loss)]
    // remainder < 1200, exact in f32
    let fraction = (elapsed.as_millis() % period) as f32 / period as f32;
    fraction * TAU
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
        let radius = frame.width().min(frame.height()) / 2.0 - 4.0;

        frame.stroke(
            &Path::circle(center, radius),
            Stroke::default().with_width(3.0).with_color(Color {
                a: 0.25,
                ..self.color
            }),
        );

        // Half-circle arc starting at twelve o'clock, rotated clockwise.
        let start = self.rotation - PI / 2.0;
        let arc = Path::new(|builder| {
            builder.move_to(point_on_circle(center, radius, start));
            for i in 1..=ARC_SEGMENTS {
                let t = f32::from(i) / f32::from(ARC_SEGMENTS);
                builder.line_to(point_on_circle(center, radius, start + PI * t));
            }
        });
        frame.stroke(
            &arc,
            Stroke::default()
                .with_width(3.0)
                .with_color(self.color)
                .with_line_cap(canvas::LineCap::Round),
        );

        vec![frame.into_geometry()]
    }
}

fn point_on_circle(center: Point, radius: f32, angle: f32) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_starts_at_zero() {
        assert_eq!(rotation_at(Duration::ZERO), 0.0);
    }

    #[test]
    fn rotation_wraps_each_revolution() {
        let quarter = rotation_at(REVOLUTION / 4);
        assert!((quarter - TAU / 4.0).abs() < 1e-4);

        let wrapped = rotation_at(REVOLUTION + REVOLUTION / 4);
        assert!((wrapped - quarter).abs() < 1e-4);
    }

    #[test]
    fn rotation_stays_below_full_turn() {
        let almost = rotation_at(REVOLUTION - Duration::from_millis(1));
        assert!(almost < TAU);
    }

    #[test]
    fn spinner_uses_default_size() {
        let spinner = AnimatedSpinner::new(Color::WHITE, Duration::ZERO);
        assert_eq!(spinner.size, DEFAULT_SIZE);
        assert_eq!(spinner.size(24.0).size, 24.0);
    }
}
