//! Visible string width measurement.
//!
//! Padding and wrapping math operates on what the user actually sees, so
//! ANSI escape sequences must not count toward a string's width.

/// Number of visible characters in a string.
///
/// Strips ANSI escape sequences and counts the remaining Unicode code
/// points (not bytes).
///
/// # Example
///
/// ```
/// use devcheck::ui::visible_width;
///
/// assert_eq!(visible_width("hello"), 5);
/// assert_eq!(visible_width("\x1b[31mhello\x1b[0m"), 5);
/// ```
pub fn visible_width(text: &str) -> usize {
    console::strip_ansi_codes(text).chars().count()
}
