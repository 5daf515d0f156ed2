// SPDX-License-Identifier: MPL-2.0
//! Canvas overlays: the confetti burst and the floating background
//! decorations. Both are pure draw programs; all motion state lives in the
//! card state machines.

use crate::card::confetti::Particle;
use crate::card::decorations::Decoration;
use crate::ui::design_tokens::{opacity, palette};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme, Vector};

/// Base edge length of one confetti square before its per-particle scale.
const PARTICLE_SIZE: f32 = 10.0;

/// Draws the current confetti batch. Particle coordinates are percentages of
/// the overlay, so the burst follows window resizes.
pub struct ConfettiOverlay<'a> {
    particles: &'a [Particle],
}

impl<'a> ConfettiOverlay<'a> {
    pub fn new(particles: &'a [Particle]) -> Self {
        Self { particles }
    }

    pub fn into_element<Message: 'static>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for ConfettiOverlay<'_> {
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

        for particle in self.particles {
            let center = Point::new(
                particle.x / 100.0 * bounds.width,
                particle.y / 100.0 * bounds.height,
            );
            let edge = PARTICLE_SIZE * particle.scale;
            frame.with_save(|frame| {
                frame.translate(Vector::new(center.x, center.y));
                frame.rotate(particle.rotation_degrees.to_radians());
                let square = Path::rectangle(
                    Point::new(-edge / 2.0, -edge / 2.0),
                    Size::new(edge, edge),
                );
                frame.fill(&square, particle.color);
            });
        }

        vec![frame.into_geometry()]
    }
}

/// Draws the faint background hearts. Their horizontal spread comes from the
/// generated set; the vertical position is derived from the stagger fields so
/// the layout differs per run without extra state.
pub struct DecorationLayer<'a> {
    decorations: &'a [Decoration],
}

impl<'a> DecorationLayer<'a> {
    pub fn new(decorations: &'a [Decoration]) -> Self {
        Self { decorations }
    }

    pub fn into_element<Message: 'static>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for DecorationLayer<'_> {
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
        let tint = Color {
            a: opacity::DECORATION,
            ..palette::PRIMARY_400
        };

        for decoration in self.decorations {
            let x = decoration.x / 100.0 * bounds.width;
            // Spread vertically over the full height using the stagger
            // fields as a stable pseudo-random source.
            let y_fraction = (decoration.delay_secs / 5.0 + decoration.duration_secs / 15.0) / 2.0;
            let y = y_fraction.clamp(0.0, 1.0) * bounds.height;

            draw_heart(&mut frame, Point::new(x, y), decoration.size, tint);
        }

        vec![frame.into_geometry()]
    }
}

/// Two circles and a triangle approximate a heart well enough at this
/// opacity.
fn draw_heart(frame: &mut Frame, center: Point, size: f32, color: Color) {
    let lobe_radius = size / 4.0;
    let left = Path::circle(
        Point::new(center.x - lobe_radius, center.y - lobe_radius / 2.0),
        lobe_radius,
    );
    let right = Path::circle(
        Point::new(center.x + lobe_radius, center.y - lobe_radius / 2.0),
        lobe_radius,
    );
    let tip = {
        let mut builder = canvas::path::Builder::new();
        builder.move_to(Point::new(center.x - 2.0 * lobe_radius, center.y - lobe_radius / 2.0));
        builder.line_to(Point::new(center.x + 2.0 * lobe_radius, center.y - lobe_radius / 2.0));
        builder.line_to(Point::new(center.x, center.y + size / 2.0));
        builder.close();
        builder.build()
    };

    frame.fill(&left, color);
    frame.fill(&right, color);
    frame.fill(&tip, color);
}
