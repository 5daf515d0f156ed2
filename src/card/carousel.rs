// SPDX-License-Identifier: MPL-2.0
//! Carousel controller: wrapping photo navigation with timed transitions.
//!
//! Automatic advances pick a random transition style, swap the photo at the
//! midpoint delay, and clear the style afterwards. Manual advances use a
//! direction-specific slide and clear the style together with the swap.
//! Photo transitions do not latch: a new trigger simply restarts the style.

use super::{Delayed, Direction};
use crate::album::PhotoAlbum;
use rand::Rng;
use std::time::Duration;

/// Period of the automatic advance subscription.
pub const AUTO_ADVANCE_PERIOD: Duration = Duration::from_secs(4);

/// Delay between setting a transition style and swapping the photo.
pub const SWAP_DELAY: Duration = Duration::from_millis(300);

/// Delay between an automatic swap and clearing its style.
pub const STYLE_CLEAR_DELAY: Duration = Duration::from_millis(600);

/// Visual styles applied while a photo changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStyle {
    ZoomRotate,
    Flip,
    SlideUp,
    Bounce,
    Swing,
    SlideLeft,
    SlideRight,
}

/// Styles eligible for the random pick on automatic advances.
pub const AUTO_STYLES: [TransitionStyle; 5] = [
    TransitionStyle::ZoomRotate,
    TransitionStyle::Flip,
    TransitionStyle::SlideUp,
    TransitionStyle::Bounce,
    TransitionStyle::Swing,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Fired by the recurring timer subscription.
    AutoAdvance,
    /// Fired by the prev/next buttons.
    ManualAdvance(Direction),
    /// Fired by the indicator dots; jumps with no transition.
    SelectIndex(usize),
    /// Midpoint of an automatic transition: swap the photo.
    AutoSwap,
    /// Midpoint of a manual transition: swap and clear the style.
    ManualSwap(Direction),
    /// End of an automatic transition: clear the style.
    StyleCleared,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    album: PhotoAlbum,
    transition: Option<TransitionStyle>,
}

impl Carousel {
    pub fn new() -> Self {
        Self {
            album: PhotoAlbum::new(),
            transition: None,
        }
    }

    /// Replaces the album, resetting to its first photo. Any in-flight
    /// transition style is dropped since it refers to the old content.
    pub fn set_album(&mut self, album: PhotoAlbum) {
        self.album = album;
        self.transition = None;
    }

    pub fn album(&self) -> &PhotoAlbum {
        &self.album
    }

    /// Style currently applied to the photo, if a transition is in flight.
    pub fn transition(&self) -> Option<TransitionStyle> {
        self.transition
    }

    pub fn update(
        &mut self,
        message: Message,
        rng: &mut impl Rng,
    ) -> Vec<Delayed<Message>> {
        match message {
            Message::AutoAdvance => {
                if self.album.is_empty() {
                    return Vec::new();
                }
                let style = AUTO_STYLES[rng.random_range(0..AUTO_STYLES.len())];
                self.transition = Some(style);
                vec![Delayed::new(SWAP_DELAY, Message::AutoSwap)]
            }
            Message::AutoSwap => {
                self.album.advance();
                vec![Delayed::new(STYLE_CLEAR_DELAY, Message::StyleCleared)]
            }
            Message::ManualAdvance(direction) => {
                if self.album.is_empty() {
                    return Vec::new();
                }
                self.transition = Some(match direction {
                    Direction::Forward => TransitionStyle::SlideRight,
                    Direction::Backward => TransitionStyle::SlideLeft,
                });
                vec![Delayed::new(SWAP_DELAY, Message::ManualSwap(direction))]
            }
            Message::ManualSwap(direction) => {
                match direction {
                    Direction::Forward => self.album.advance(),
                    Direction::Backward => self.album.retreat(),
                }
                self.transition = None;
                Vec::new()
            }
            Message::SelectIndex(index) => {
                self.album.set_current_index(index);
                Vec::new()
            }
            Message::StyleCleared => {
                self.transition = None;
                Vec::new()
            }
        }
    }
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::path::PathBuf;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn carousel_with_photos(count: usize) -> Carousel {
        let photos = (0..count)
            .map(|i| PathBuf::from(format!("photo_{i}.jpg")))
            .collect();
        let mut carousel = Carousel::new();
        carousel.set_album(PhotoAlbum::from_paths(photos));
        carousel
    }

    /// Applies a message and every delayed follow-up it produces, in order.
    fn run(carousel: &mut Carousel, message: Message, rng: &mut StdRng) {
        let mut pending = std::collections::VecDeque::from([message]);
        while let Some(message) = pending.pop_front() {
            pending.extend(carousel.update(message, rng).into_iter().map(|d| d.message));
        }
    }

    #[test]
    fn auto_advance_sets_style_then_swaps_then_clears() {
        let mut carousel = carousel_with_photos(3);
        let mut r = rng();

        let scheduled = carousel.update(Message::AutoAdvance, &mut r);
        assert!(carousel.transition().is_some());
        assert_eq!(scheduled.len(), 1);
        assert_eq!(scheduled[0].after, SWAP_DELAY);

        let scheduled = carousel.update(Message::AutoSwap, &mut r);
        assert_eq!(carousel.album().current_index(), 1);
        // Style stays on until the clear message lands.
        assert!(carousel.transition().is_some());
        assert_eq!(scheduled[0].after, STYLE_CLEAR_DELAY);

        let _ = carousel.update(Message::StyleCleared, &mut r);
        assert!(carousel.transition().is_none());
    }

    #[test]
    fn auto_advance_picks_style_from_auto_set() {
        let mut carousel = carousel_with_photos(2);
        let mut r = rng();
        for _ in 0..20 {
            let _ = carousel.update(Message::AutoAdvance, &mut r);
            let style = carousel.transition().expect("style set");
            assert!(AUTO_STYLES.contains(&style));
            run(&mut carousel, Message::AutoSwap, &mut r);
        }
    }

    #[test]
    fn manual_forward_wraps_at_end() {
        let mut carousel = carousel_with_photos(3);
        let mut r = rng();
        carousel.update(Message::SelectIndex(2), &mut r);

        run(&mut carousel, Message::ManualAdvance(Direction::Forward), &mut r);

        assert_eq!(carousel.album().current_index(), 0);
        assert!(carousel.transition().is_none());
    }

    #[test]
    fn manual_backward_wraps_at_start() {
        let mut carousel = carousel_with_photos(3);
        let mut r = rng();

        run(&mut carousel, Message::ManualAdvance(Direction::Backward), &mut r);

        assert_eq!(carousel.album().current_index(), 2);
    }

    #[test]
    fn manual_advance_uses_direction_specific_style() {
        let mut carousel = carousel_with_photos(2);
        let mut r = rng();

        let _ = carousel.update(Message::ManualAdvance(Direction::Forward), &mut r);
        assert_eq!(carousel.transition(), Some(TransitionStyle::SlideRight));

        let _ = carousel.update(Message::ManualSwap(Direction::Forward), &mut r);
        let _ = carousel.update(Message::ManualAdvance(Direction::Backward), &mut r);
        assert_eq!(carousel.transition(), Some(TransitionStyle::SlideLeft));
    }

    #[test]
    fn three_forward_advances_return_to_start() {
        let mut carousel = carousel_with_photos(3);
        let mut r = rng();

        for _ in 0..3 {
            run(&mut carousel, Message::ManualAdvance(Direction::Forward), &mut r);
        }

        assert_eq!(carousel.album().current_index(), 0);
    }

    #[test]
    fn select_index_jumps_without_transition() {
        let mut carousel = carousel_with_photos(5);
        let mut r = rng();

        let scheduled = carousel.update(Message::SelectIndex(3), &mut r);

        assert_eq!(carousel.album().current_index(), 3);
        assert!(carousel.transition().is_none());
        assert!(scheduled.is_empty());
    }

    #[test]
    fn index_stays_in_range_under_many_random_operations() {
        let mut carousel = carousel_with_photos(4);
        let mut r = rng();

        for step in 0..100 {
            let message = match step % 3 {
                0 => Message::AutoAdvance,
                1 => Message::ManualAdvance(Direction::Forward),
                _ => Message::ManualAdvance(Direction::Backward),
            };
            run(&mut carousel, message, &mut r);
            assert!(carousel.album().current_index() < 4);
        }
    }

    #[test]
    fn empty_album_ignores_advances() {
        let mut carousel = Carousel::new();
        let mut r = rng();

        assert!(carousel.update(Message::AutoAdvance, &mut r).is_empty());
        assert!(carousel
            .update(Message::ManualAdvance(Direction::Forward), &mut r)
            .is_empty());
        assert!(carousel.transition().is_none());
    }
}
