// SPDX-License-Identifier: MPL-2.0
//! Poem book paginator.
//!
//! The book has `page_count + 1` pages: page 0 is the title page, pages
//! `1..=page_count` each show one poem line. Page turns are latched: while a
//! turn is in flight, further turn requests are no-ops. The page number
//! changes at the turn midpoint so the new text appears while the flip
//! animation is still covering it.

use super::{Delayed, Direction};
use std::time::Duration;

/// Delay until the page number changes during a turn.
pub const TURN_MIDPOINT_DELAY: Duration = Duration::from_millis(250);

/// Delay until the turn animation finishes and the latch releases.
pub const TURN_END_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Closed,
    OpenIdle,
    OpenTurning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    OpenRequested,
    CloseRequested,
    NextRequested,
    PrevRequested,
    TurnMidpoint(Direction),
    TurnEnded,
}

/// Events the card composition root reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The book just opened; the card fires a celebration.
    Opened,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    page: usize,
    page_count: usize,
    phase: Phase,
}

impl Book {
    /// Creates a closed book over `line_count` poem lines.
    pub fn new(line_count: usize) -> Self {
        Self {
            page: 0,
            page_count: line_count,
            phase: Phase::Closed,
        }
    }

    /// Current page in `[0, page_count]`; 0 is the title page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Number of poem-line pages (the last valid page number).
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != Phase::Closed
    }

    pub fn is_turning(&self) -> bool {
        self.phase == Phase::OpenTurning
    }

    /// Whether the view should offer the close control instead of next.
    pub fn at_last_page(&self) -> bool {
        self.page == self.page_count
    }

    pub fn update(&mut self, message: Message) -> (Event, Vec<Delayed<Message>>) {
        match message {
            Message::OpenRequested => {
                if self.phase != Phase::Closed {
                    return (Event::None, Vec::new());
                }
                self.phase = Phase::OpenIdle;
                self.page = 0;
                (Event::Opened, Vec::new())
            }
            Message::CloseRequested => {
                // Closing is only reachable from the final page.
                if self.phase == Phase::OpenIdle && self.at_last_page() {
                    self.phase = Phase::Closed;
                    self.page = 0;
                }
                (Event::None, Vec::new())
            }
            Message::NextRequested => (Event::None, self.begin_turn(Direction::Forward)),
            Message::PrevRequested => (Event::None, self.begin_turn(Direction::Backward)),
            Message::TurnMidpoint(direction) => {
                if self.phase == Phase::OpenTurning {
                    match direction {
                        Direction::Forward => self.page = (self.page + 1).min(self.page_count),
                        Direction::Backward => self.page = self.page.saturating_sub(1),
                    }
                }
                (Event::None, Vec::new())
            }
            Message::TurnEnded => {
                if self.phase == Phase::OpenTurning {
                    self.phase = Phase::OpenIdle;
                }
                (Event::None, Vec::new())
            }
        }
    }

    fn begin_turn(&mut self, direction: Direction) -> Vec<Delayed<Message>> {
        if self.phase != Phase::OpenIdle {
            return Vec::new();
        }
        let in_bounds = match direction {
            Direction::Forward => self.page < self.page_count,
            Direction::Backward => self.page > 0,
        };
        if !in_bounds {
            return Vec::new();
        }

        self.phase = Phase::OpenTurning;
        vec![
            Delayed::new(TURN_MIDPOINT_DELAY, Message::TurnMidpoint(direction)),
            Delayed::new(TURN_END_DELAY, Message::TurnEnded),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINES: usize = 10;

    fn open_book() -> Book {
        let mut book = Book::new(LINES);
        let _ = book.update(Message::OpenRequested);
        book
    }

    /// Applies a message and delivers its delayed follow-ups in order.
    fn run(book: &mut Book, message: Message) {
        let mut pending = std::collections::VecDeque::from([message]);
        while let Some(message) = pending.pop_front() {
            let (_, scheduled) = book.update(message);
            pending.extend(scheduled.into_iter().map(|d| d.message));
        }
    }

    #[test]
    fn open_resets_to_title_page_and_reports_event() {
        let mut book = Book::new(LINES);
        let (event, _) = book.update(Message::OpenRequested);

        assert_eq!(event, Event::Opened);
        assert_eq!(book.phase(), Phase::OpenIdle);
        assert_eq!(book.page(), 0);
    }

    #[test]
    fn reopening_an_open_book_is_a_noop() {
        let mut book = open_book();
        run(&mut book, Message::NextRequested);
        assert_eq!(book.page(), 1);

        let (event, _) = book.update(Message::OpenRequested);
        assert_eq!(event, Event::None);
        assert_eq!(book.page(), 1);
    }

    #[test]
    fn next_schedules_midpoint_and_end() {
        let mut book = open_book();
        let (_, scheduled) = book.update(Message::NextRequested);

        assert_eq!(book.phase(), Phase::OpenTurning);
        assert_eq!(scheduled.len(), 2);
        assert_eq!(scheduled[0].after, TURN_MIDPOINT_DELAY);
        assert_eq!(scheduled[1].after, TURN_END_DELAY);
        // Page only changes at the midpoint.
        assert_eq!(book.page(), 0);
    }

    #[test]
    fn next_is_noop_while_turning() {
        let mut book = open_book();
        let _ = book.update(Message::NextRequested);
        assert!(book.is_turning());

        let (_, scheduled) = book.update(Message::NextRequested);
        assert!(scheduled.is_empty());
    }

    #[test]
    fn prev_is_noop_on_title_page() {
        let mut book = open_book();
        let (_, scheduled) = book.update(Message::PrevRequested);

        assert!(scheduled.is_empty());
        assert_eq!(book.phase(), Phase::OpenIdle);
    }

    #[test]
    fn next_is_noop_on_last_page() {
        let mut book = open_book();
        for _ in 0..LINES {
            run(&mut book, Message::NextRequested);
        }
        assert!(book.at_last_page());

        let (_, scheduled) = book.update(Message::NextRequested);
        assert!(scheduled.is_empty());
    }

    #[test]
    fn page_never_leaves_bounds() {
        let mut book = open_book();
        for _ in 0..(LINES + 5) {
            run(&mut book, Message::NextRequested);
            assert!(book.page() <= LINES);
        }
        for _ in 0..(LINES + 5) {
            run(&mut book, Message::PrevRequested);
        }
        assert_eq!(book.page(), 0);
    }

    #[test]
    fn close_only_allowed_from_last_page() {
        let mut book = open_book();
        let _ = book.update(Message::CloseRequested);
        assert!(book.is_open());

        for _ in 0..LINES {
            run(&mut book, Message::NextRequested);
        }
        let _ = book.update(Message::CloseRequested);
        assert_eq!(book.phase(), Phase::Closed);
        assert_eq!(book.page(), 0);
    }

    #[test]
    fn full_forward_and_back_walk() {
        let mut book = open_book();
        for expected in 1..=LINES {
            run(&mut book, Message::NextRequested);
            assert_eq!(book.page(), expected);
            assert_eq!(book.phase(), Phase::OpenIdle);
        }
        for expected in (0..LINES).rev() {
            run(&mut book, Message::PrevRequested);
            assert_eq!(book.page(), expected);
        }
    }

    #[test]
    fn stale_turn_end_is_ignored_when_idle() {
        let mut book = open_book();
        let (_, _) = book.update(Message::TurnEnded);
        assert_eq!(book.phase(), Phase::OpenIdle);
    }

    #[test]
    fn stale_midpoint_is_ignored_when_idle() {
        let mut book = open_book();
        let _ = book.update(Message::TurnMidpoint(Direction::Forward));
        assert_eq!(book.page(), 0);
    }
}
