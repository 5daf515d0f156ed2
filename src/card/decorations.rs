// SPDX-License-Identifier: MPL-2.0
//! Floating background decorations.
//!
//! Generated once at startup and never regenerated; the per-decoration delay
//! and duration stagger the float animation so the background never looks
//! synchronized.

use rand::Rng;

/// How many decorations drift across the background.
pub const DECORATION_COUNT: usize = 15;

/// One drifting background glyph. `x` is a percentage of the window width;
/// timing fields are in seconds and feed the float animation directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decoration {
    pub x: f32,
    pub delay_secs: f32,
    pub duration_secs: f32,
    pub size: f32,
}

/// Generates the fixed decoration set for one card instance.
pub fn generate(rng: &mut impl Rng) -> Vec<Decoration> {
    (0..DECORATION_COUNT)
        .map(|_| Decoration {
            x: rng.random_range(0.0..100.0),
            delay_secs: rng.random_range(0.0..5.0),
            duration_secs: 8.0 + rng.random_range(0.0..7.0),
            size: 15.0 + rng.random_range(0.0..25.0),
        })
        .collect()
}
