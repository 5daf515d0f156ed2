// SPDX-License-Identifier: MPL-2.0
//! `iced_keepsake` is a single-window greeting card built with the Iced GUI
//! framework.
//!
//! It shows a photo carousel, a paginated poem book, a reveal-on-tap letter,
//! and confetti celebrations, with background music and internationalization
//! via Fluent.

#![doc(html_root_url = "https://docs.rs/iced_keepsake/0.1.0")]

pub mod album;
pub mod app;
pub mod audio;
pub mod card;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod ui;
