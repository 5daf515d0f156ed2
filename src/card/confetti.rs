// SPDX-License-Identifier: MPL-2.0
//! Confetti celebration trigger.
//!
//! Every trigger replaces the particle batch wholesale and restarts the
//! visibility window. A generation counter defuses the hide message of an
//! older window, so overlapping triggers keep the newest batch visible for
//! its full duration.

use super::Delayed;
use iced::Color;
use rand::Rng;
use std::time::Duration;

/// Particles per burst, regardless of trigger source.
pub const BATCH_SIZE: usize = 100;

/// How long a burst stays visible.
pub const DISPLAY_DURATION: Duration = Duration::from_secs(3);

/// Interval of the animation tick while a burst is visible.
pub const ANIMATE_INTERVAL: Duration = Duration::from_millis(16);

/// Downward pull applied to vertical velocity each animation tick.
const GRAVITY_PER_TICK: f32 = 0.5;

/// Fraction of the velocity applied to the position each animation tick.
const VELOCITY_SCALE: f32 = 0.06;

/// Fixed palette particles draw from, one color picked uniformly per particle.
pub const PALETTE: [Color; 8] = [
    Color::from_rgb(1.0, 0.42, 0.42),   // coral
    Color::from_rgb(1.0, 0.792, 0.341), // sunflower
    Color::from_rgb(0.282, 0.859, 0.984), // sky
    Color::from_rgb(1.0, 0.624, 0.953), // pink
    Color::from_rgb(0.329, 0.627, 1.0), // azure
    Color::from_rgb(0.373, 0.153, 0.804), // violet
    Color::from_rgb(0.0, 0.824, 0.827), // teal
    Color::from_rgb(1.0, 0.624, 0.263), // tangerine
];

/// One confetti particle. Positions are percentages of the overlay size so
/// the burst scales with the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub color: Color,
    pub rotation_degrees: f32,
    pub scale: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Ends the visibility window of the identified generation. Stale
    /// generations are ignored.
    Hide(u64),
    /// Advances particle motion by one tick.
    Animate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Confetti {
    particles: Vec<Particle>,
    visible: bool,
    generation: u64,
}

impl Confetti {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            visible: false,
            generation: 0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Replaces the batch with a fresh one and restarts the visibility
    /// window. Returns the delayed hide for the new generation.
    pub fn fire(&mut self, rng: &mut impl Rng) -> Vec<Delayed<Message>> {
        self.generation += 1;
        self.visible = true;
        self.particles = (0..BATCH_SIZE).map(|_| random_particle(rng)).collect();
        vec![Delayed::new(DISPLAY_DURATION, Message::Hide(self.generation))]
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Hide(generation) => {
                if generation == self.generation {
                    self.visible = false;
                    self.particles.clear();
                }
            }
            Message::Animate => {
                if !self.visible {
                    return;
                }
                for particle in &mut self.particles {
                    particle.x += particle.velocity_x * VELOCITY_SCALE;
                    particle.y += particle.velocity_y * VELOCITY_SCALE;
                    particle.velocity_y += GRAVITY_PER_TICK;
                    particle.rotation_degrees += particle.velocity_x;
                }
            }
        }
    }
}

impl Default for Confetti {
    fn default() -> Self {
        Self::new()
    }
}

fn random_particle(rng: &mut impl Rng) -> Particle {
    Particle {
        // Bursts start at the center of the overlay.
        x: 50.0,
        y: 50.0,
        color: PALETTE[rng.random_range(0..PALETTE.len())],
        rotation_degrees: rng.random_range(0.0..360.0),
        scale: 0.5 + rng.random_range(0.0..0.5),
        velocity_x: (rng.random_range(0.0..1.0f32) - 0.5) * 30.0,
        // Vertical velocity is biased upward so bursts fountain.
        velocity_y: (rng.random_range(0.0..1.0f32) - 0.5) * 30.0 - 10.0,
    }
}
