// SPDX-License-Identifier: MPL-2.0
//! Static textual content of the card: poem lines, letter paragraphs, fun facts.
//!
//! This is intentionally plain data. Swapping the card's text for another
//! recipient means editing this file only; nothing else references the
//! wording.

/// Poem lines shown one per book page. Page 0 is the title page, so the book
/// has `POEM_LINES.len() + 1` pages in total.
pub const POEM_LINES: &[&str] = &[
    "words would never truly be enough,",
    "to describe what you are to me",
    "you are the world itself.",
    "like seasons, ever changing",
    "your smile, the bluest clear skies",
    "your melancholy, the deepest autumn",
    "your zest like the first spring blossoms",
    "I could keep trying and never finish",
    "so instead all I'll say is this",
    "thank you for being my world",
];

/// Body of the sealed letter, revealed on tap.
pub const LETTER_BODY: &str = "Another year, whether we like it or not. The most \
important thing is that we're growing older together and I wouldn't have it any \
other way. You have been a changing constant in my life for years now and what a \
journey it has been, through ups and downs, through trips and cafes, through \
sickness and health. So here's to another small checkpoint. Happy Birthday!";

/// Short cards in the fun-facts section: (emoji, text).
pub const FUN_FACTS: &[(&str, &str)] = &[
    ("😊", "Your smile lights up every room"),
    ("💪", "You're stronger than you know"),
    ("🦋", "You make ordinary moments magical"),
    ("🌈", "You bring color to my world"),
];

/// Signature shown at the bottom of the card.
pub const SIGNATURE: &str = "Yours truly";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn poem_has_ten_lines() {
        assert_eq!(POEM_LINES.len(), 10);
    }

    #[test]
    fn fun_facts_are_nonempty() {
        assert!(!FUN_FACTS.is_empty());
        for (emoji, text) in FUN_FACTS {
            assert!(!emoji.is_empty());
            assert!(!text.is_empty());
        }
    }
}
