//! Padded and wrapped line rendering, boxed banners, and status lines.
//!
//! All width math uses [`visible_width`] so styled text pads correctly.
//! Output goes through an injectable writer, which keeps rendering
//! testable without a terminal.

use std::io::Write;

use super::text::visible_width;
use super::theme::Theme;

/// Banners never grow wider than this, regardless of terminal size.
pub const MAX_BANNER_WIDTH: usize = 100;

/// Category of a boxed banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Error,
    Warning,
    Success,
    Info,
}

impl BannerKind {
    /// Glyph prefixed to the banner title, if any.
    fn glyph(&self) -> Option<&'static str> {
        match self {
            Self::Error | Self::Warning => Some("⚠"),
            Self::Success => Some("✓"),
            Self::Info => None,
        }
    }

    fn style<'a>(&self, theme: &'a Theme) -> &'a console::Style {
        match self {
            Self::Error => &theme.error,
            Self::Warning => &theme.warning,
            Self::Success => &theme.success,
            Self::Info => &theme.info,
        }
    }
}

/// Category of a one-line status entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Error,
    Warning,
    Success,
}

impl StatusKind {
    fn glyph(&self) -> &'static str {
        match self {
            Self::Error => "✕",
            Self::Warning => "?",
            Self::Success => "✓",
        }
    }

    fn style<'a>(&self, theme: &'a Theme) -> &'a console::Style {
        match self {
            Self::Error => &theme.error,
            Self::Warning => &theme.warning,
            Self::Success => &theme.success,
        }
    }
}

/// Renders padded lines, word-wrapped lines, and boxed banners.
pub struct Printer {
    width: usize,
    theme: Theme,
    out: Box<dyn Write>,
}

impl Printer {
    /// Create a printer writing to stdout at the terminal's width.
    pub fn stdout(theme: Theme) -> Self {
        Self {
            width: terminal_width(),
            theme,
            out: Box::new(std::io::stdout()),
        }
    }

    /// Create a printer with a fixed width and custom writer.
    pub fn with_writer(width: usize, theme: Theme, out: Box<dyn Write>) -> Self {
        Self { width, theme, out }
    }

    /// The column budget this printer renders into.
    pub fn width(&self) -> usize {
        self.width
    }

    fn emit(&mut self, line: &str) {
        let _ = writeln!(self.out, "{}", line);
    }

    /// Write a plain line.
    pub fn println(&mut self, text: &str) {
        self.emit(text);
    }

    /// Write an empty line.
    pub fn blank(&mut self) {
        self.emit("");
    }

    /// Write `before`, then `fill` repeated until the line's visible width
    /// reaches the printer width, then `after`.
    ///
    /// The fill count clamps at zero when the affixes already exceed the
    /// width.
    pub fn print_padded(&mut self, before: &str, after: &str, fill: char) {
        let line = padded_line(self.width, before, after, fill);
        self.emit(&line);
    }

    /// Word-wrap `text` between the `before` and `after` affixes.
    ///
    /// Words pack greedily; the final partial line is padded with spaces so
    /// every emitted line has the same visible width.
    pub fn print_wrapped(&mut self, before: &str, after: &str, text: &str) {
        let inner = self
            .width
            .saturating_sub(visible_width(before) + visible_width(after));
        for chunk in wrap_words(text, inner) {
            let pad = " ".repeat(inner.saturating_sub(visible_width(&chunk)));
            self.emit(&format!("{}{}{}{}", before, chunk, pad, after));
        }
    }

    /// Render a boxed banner: top border, wrapped title, blank separator,
    /// wrapped body lines, bottom border.
    ///
    /// An empty body line renders as a blank padded line inside the box.
    pub fn banner(&mut self, kind: BannerKind, title: &str, body_lines: &[&str]) {
        let style = kind.style(&self.theme).clone();
        let inner = self.width.saturating_sub(4);

        let title_text = match kind.glyph() {
            Some(glyph) => format!("{} {}", glyph, title),
            None => title.to_string(),
        };

        self.emit_styled(&style, &padded_line(self.width, "╭", "╮", '─'));
        self.boxed_lines(&style, inner, &title_text);
        self.boxed_lines(&style, inner, "");
        for line in body_lines {
            self.boxed_lines(&style, inner, line);
        }
        self.emit_styled(&style, &padded_line(self.width, "╰", "╯", '─'));
    }

    /// Write a one-line `[<glyph>] text` status entry.
    pub fn status(&mut self, kind: StatusKind, text: &str) {
        let glyph = kind.style(&self.theme).apply_to(kind.glyph());
        self.emit(&format!("[{}] {}", glyph, text));
    }

    fn boxed_lines(&mut self, style: &console::Style, inner: usize, text: &str) {
        for chunk in wrap_words(text, inner) {
            let pad = " ".repeat(inner.saturating_sub(visible_width(&chunk)));
            let line = format!("│ {}{} │", chunk, pad);
            self.emit_styled(style, &line);
        }
    }

    fn emit_styled(&mut self, style: &console::Style, line: &str) {
        let styled = style.apply_to(line).to_string();
        self.emit(&styled);
    }
}

/// Build a single padded line of exactly `width` visible columns.
fn padded_line(width: usize, before: &str, after: &str, fill: char) -> String {
    let used = visible_width(before) + visible_width(after);
    let fill_count = width.saturating_sub(used);
    let mut line = String::with_capacity(width + before.len() + after.len());
    line.push_str(before);
    for _ in 0..fill_count {
        line.push(fill);
    }
    line.push_str(after);
    line
}

/// Greedily pack whitespace-separated words into lines of at most `max`
/// visible columns.
///
/// An empty input yields a single empty line. A word longer than `max`
/// occupies its own (overflowing) line rather than being split.
fn wrap_words(text: &str, max: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        if visible_width(&current) + 1 + visible_width(word) <= max {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    lines.push(current);
    lines
}

/// Terminal width, capped at [`MAX_BANNER_WIDTH`].
fn terminal_width() -> usize {
    let (_, cols) = console::Term::stdout().size();
    (cols as usize).min(MAX_BANNER_WIDTH)
}
