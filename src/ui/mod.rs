//! Terminal output: width measurement, padded/wrapped lines, banners.
//!
//! This module provides:
//! - [`visible_width`] for ANSI-aware string measurement
//! - [`Printer`] for padded lines, word wrapping, boxed banners, and
//!   per-item status lines
//! - [`Theme`] for color styling, with a plain variant for non-TTY use

pub mod printer;
pub mod text;
pub mod theme;

pub use printer::{BannerKind, Printer, StatusKind, MAX_BANNER_WIDTH};
pub use text::visible_width;
pub use theme::{should_use_colors, Theme};
