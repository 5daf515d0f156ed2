// SPDX-License-Identifier: MPL-2.0
//! Card views and styling.
//!
//! - [`design_tokens`]: palette, spacing, typography and friends
//! - [`styles`]: centralized widget styles
//! - [`title`]: banner with the click easter egg
//! - [`gallery`]: photo carousel section
//! - [`book`]: poem book section
//! - [`letter`]: sealed/revealed letter section
//! - [`quirky`]: fun facts, celebrate button, footer
//! - [`effects`]: confetti and decoration canvas overlays

pub mod book;
pub mod design_tokens;
pub mod effects;
pub mod gallery;
pub mod letter;
pub mod quirky;
pub mod styles;
pub mod title;
