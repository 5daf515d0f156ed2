// SPDX-License-Identifier: MPL-2.0
//! Card state machines.
//!
//! Everything under `card/` is pure state: update functions mutate the state
//! and return the follow-up messages they want delivered later as
//! [`Delayed`] values. `app.rs` turns those into tokio sleeps; unit tests
//! deliver them by hand, so every timed choreography in the card is testable
//! without a running event loop.

pub mod book;
pub mod carousel;
pub mod confetti;
pub mod decorations;

use crate::album::PhotoAlbum;
use decorations::Decoration;
use rand::Rng;
use std::time::Duration;

/// Number of title clicks that reveals the hidden message.
pub const TITLE_CLICK_THRESHOLD: u32 = 5;

/// Every Nth generic tap fires a celebration.
pub const TAP_CELEBRATION_MODULUS: u32 = 10;

/// How long the title wiggles after a click.
pub const WIGGLE_DURATION: Duration = Duration::from_millis(500);

/// How long the hidden easter-egg message stays visible.
pub const EASTER_EGG_DURATION: Duration = Duration::from_secs(3);

/// A message that should be delivered back to the card after a delay.
#[derive(Debug, Clone, PartialEq)]
pub struct Delayed<M> {
    pub after: Duration,
    pub message: M,
}

impl<M> Delayed<M> {
    pub fn new(after: Duration, message: M) -> Self {
        Self { after, message }
    }

    /// Wraps the inner message, e.g. to lift a component message into
    /// [`Message`].
    pub fn map<N>(self, f: impl FnOnce(M) -> N) -> Delayed<N> {
        Delayed {
            after: self.after,
            message: f(self.message),
        }
    }
}

/// Direction of a carousel advance or a page turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Messages consumed by [`CardState::update`].
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Carousel(carousel::Message),
    Book(book::Message),
    Confetti(confetti::Message),
    TitleClicked,
    WiggleEnded,
    EasterEggExpired,
    BackgroundTapped,
    LetterRevealTapped,
    CelebrationRequested,
}

/// Side effects the card cannot perform itself; handled by `app.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A generic tap happened; the app may use it for the one-shot music
    /// fallback attempt.
    AttemptMusicStart,
}

/// Result of one card update: an effect for the app plus delayed follow-ups.
#[derive(Debug)]
pub struct Update {
    pub effect: Effect,
    pub schedules: Vec<Delayed<Message>>,
}

impl Update {
    fn none() -> Self {
        Self {
            effect: Effect::None,
            schedules: Vec::new(),
        }
    }

    fn with_schedules(schedules: Vec<Delayed<Message>>) -> Self {
        Self {
            effect: Effect::None,
            schedules,
        }
    }
}

/// All transient view state of the card.
#[derive(Debug)]
pub struct CardState {
    pub carousel: carousel::Carousel,
    pub book: book::Book,
    pub confetti: confetti::Confetti,
    pub decorations: Vec<Decoration>,
    pub tap_count: u32,
    pub title_clicks: u32,
    pub wiggling: bool,
    pub easter_egg_visible: bool,
    pub letter_revealed: bool,
}

impl CardState {
    /// Creates the card with an empty album and freshly generated
    /// decorations. `poem_line_count` fixes the book's page range.
    pub fn new(poem_line_count: usize, rng: &mut impl Rng) -> Self {
        Self {
            carousel: carousel::Carousel::new(),
            book: book::Book::new(poem_line_count),
            confetti: confetti::Confetti::new(),
            decorations: decorations::generate(rng),
            tap_count: 0,
            title_clicks: 0,
            wiggling: false,
            easter_egg_visible: false,
            letter_revealed: false,
        }
    }

    /// Installs the probed album once it is available.
    pub fn set_album(&mut self, album: PhotoAlbum) {
        self.carousel.set_album(album);
    }

    pub fn update(&mut self, message: Message, rng: &mut impl Rng) -> Update {
        match message {
            Message::Carousel(message) => {
                let schedules = self.carousel.update(message, rng);
                Update::with_schedules(
                    schedules.into_iter().map(|d| d.map(Message::Carousel)).collect(),
                )
            }
            Message::Book(message) => {
                let (event, schedules) = self.book.update(message);
                let mut schedules: Vec<_> =
                    schedules.into_iter().map(|d| d.map(Message::Book)).collect();
                if event == book::Event::Opened {
                    schedules.extend(self.fire_confetti(rng));
                }
                Update::with_schedules(schedules)
            }
            Message::Confetti(message) => {
                self.confetti.update(message);
                Update::none()
            }
            Message::TitleClicked => {
                self.title_clicks += 1;
                self.wiggling = true;
                let mut schedules = vec![Delayed::new(WIGGLE_DURATION, Message::WiggleEnded)];
                if self.title_clicks == TITLE_CLICK_THRESHOLD {
                    self.title_clicks = 0;
                    self.easter_egg_visible = true;
                    schedules.push(Delayed::new(EASTER_EGG_DURATION, Message::EasterEggExpired));
                    schedules.extend(self.fire_confetti(rng));
                }
                Update::with_schedules(schedules)
            }
            Message::WiggleEnded => {
                self.wiggling = false;
                Update::none()
            }
            Message::EasterEggExpired => {
                self.easter_egg_visible = false;
                Update::none()
            }
            Message::BackgroundTapped => {
                self.tap_count += 1;
                let schedules = if self.tap_count % TAP_CELEBRATION_MODULUS == 0 {
                    self.fire_confetti(rng)
                } else {
                    Vec::new()
                };
                Update {
                    effect: Effect::AttemptMusicStart,
                    schedules,
                }
            }
            Message::LetterRevealTapped => {
                // Idempotent: the flag never goes back to false, but every
                // tap still celebrates.
                self.letter_revealed = true;
                Update::with_schedules(self.fire_confetti(rng))
            }
            Message::CelebrationRequested => Update::with_schedules(self.fire_confetti(rng)),
        }
    }

    fn fire_confetti(&mut self, rng: &mut impl Rng) -> Vec<Delayed<Message>> {
        self.confetti
            .fire(rng)
            .into_iter()
            .map(|d| d.map(Message::Confetti))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn new_card() -> CardState {
        CardState::new(10, &mut rng())
    }

    /// Applies a message and delivers every delayed follow-up immediately,
    /// recursively. Returns the effects seen along the way.
    fn drain(card: &mut CardState, message: Message, rng: &mut StdRng) -> Vec<Effect> {
        let mut effects = Vec::new();
        let mut pending = vec![message];
        while let Some(message) = pending.pop() {
            let update = card.update(message, rng);
            if update.effect != Effect::None {
                effects.push(update.effect);
            }
            pending.extend(update.schedules.into_iter().map(|d| d.message));
        }
        effects
    }

    #[test]
    fn title_click_wiggles_and_schedules_clear() {
        let mut card = new_card();
        let update = card.update(Message::TitleClicked, &mut rng());

        assert!(card.wiggling);
        assert_eq!(card.title_clicks, 1);
        assert!(update
            .schedules
            .iter()
            .any(|d| d.message == Message::WiggleEnded && d.after == WIGGLE_DURATION));
    }

    #[test]
    fn fifth_title_click_reveals_easter_egg_and_resets_counter() {
        let mut card = new_card();
        let mut r = rng();
        for _ in 0..4 {
            let _ = card.update(Message::TitleClicked, &mut r);
            assert!(!card.easter_egg_visible);
        }

        let update = card.update(Message::TitleClicked, &mut r);

        assert!(card.easter_egg_visible);
        assert_eq!(card.title_clicks, 0);
        assert!(card.confetti.is_visible());
        assert!(update
            .schedules
            .iter()
            .any(|d| d.message == Message::EasterEggExpired));
    }

    #[test]
    fn easter_egg_expiry_hides_message() {
        let mut card = new_card();
        let mut r = rng();
        for _ in 0..5 {
            let _ = card.update(Message::TitleClicked, &mut r);
        }
        assert!(card.easter_egg_visible);

        let _ = card.update(Message::EasterEggExpired, &mut r);
        assert!(!card.easter_egg_visible);
    }

    #[test]
    fn every_tenth_tap_fires_celebration() {
        let mut card = new_card();
        let mut r = rng();

        for tap in 1..=30u32 {
            let update = card.update(Message::BackgroundTapped, &mut r);
            assert_eq!(update.effect, Effect::AttemptMusicStart);

            let fired = !update.schedules.is_empty();
            assert_eq!(
                fired,
                tap % 10 == 0,
                "tap {} should {}fire",
                tap,
                if tap % 10 == 0 { "" } else { "not " }
            );
            // Deliver hides so visibility does not leak between iterations.
            for delayed in update.schedules {
                let _ = card.update(delayed.message, &mut r);
            }
        }
        assert_eq!(card.tap_count, 30);
    }

    #[test]
    fn letter_reveal_is_idempotent_but_keeps_celebrating() {
        let mut card = new_card();
        let mut r = rng();

        let first = card.update(Message::LetterRevealTapped, &mut r);
        assert!(card.letter_revealed);
        assert!(!first.schedules.is_empty());

        let second = card.update(Message::LetterRevealTapped, &mut r);
        assert!(card.letter_revealed);
        assert!(!second.schedules.is_empty());
    }

    #[test]
    fn opening_book_fires_celebration_and_starts_at_title_page() {
        let mut card = new_card();
        let mut r = rng();

        let _ = drain(&mut card, Message::Book(book::Message::OpenRequested), &mut r);

        assert_eq!(card.book.phase(), book::Phase::OpenIdle);
        assert_eq!(card.book.page(), 0);
        // The hide message was drained, so visibility is back off but a batch
        // was generated.
        assert_eq!(card.confetti.particles().len(), confetti::BATCH_SIZE);
    }

    #[test]
    fn celebration_request_always_produces_full_batch() {
        let mut card = new_card();
        let update = card.update(Message::CelebrationRequested, &mut rng());

        assert!(card.confetti.is_visible());
        assert_eq!(card.confetti.particles().len(), confetti::BATCH_SIZE);
        assert!(!update.schedules.is_empty());
    }
}
