//! Cell-based text styling rendered to ANSI strings.
//!
//! A [`Style`] is a small immutable value: colors, bold/underline, padding
//! in cells, and an optional border. Builders return a modified copy, so
//! theme styles can be shared and specialized freely. [`Style::render`]
//! lays the text out as a padded block of equal-width lines and emits the
//! escape sequences through crossterm.

use crossterm::style::{Color as TermColor, ContentStyle, Stylize};
use ratatui::style::{Color, Modifier};
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::color::hex_color;

// ============================================================================
// BUILDING BLOCKS
// ============================================================================

/// Per-side cell counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Edges {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Edges {
    pub const ZERO: Edges = Edges::all(0);

    pub const fn all(n: u16) -> Self {
        Edges {
            top: n,
            right: n,
            bottom: n,
            left: n,
        }
    }

    /// Vertical and horizontal amounts, like CSS `padding: v h`.
    pub const fn symmetric(vertical: u16, horizontal: u16) -> Self {
        Edges {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

/// Border line set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderKind {
    Square,
    Rounded,
}

impl BorderKind {
    /// top-left, top-right, bottom-left, bottom-right, horizontal, vertical
    fn glyphs(self) -> [&'static str; 6] {
        match self {
            BorderKind::Square => ["┌", "┐", "└", "┘", "─", "│"],
            BorderKind::Rounded => ["╭", "╮", "╰", "╯", "─", "│"],
        }
    }
}

// ============================================================================
// STYLE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    fg: Option<Color>,
    bg: Option<Color>,
    border_fg: Option<Color>,
    border: Option<BorderKind>,
    padding: Edges,
    bold: bool,
    underline: bool,
}

impl Style {
    pub const fn new() -> Self {
        Style {
            fg: None,
            bg: None,
            border_fg: None,
            border: None,
            padding: Edges::ZERO,
            bold: false,
            underline: false,
        }
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Foreground from a hex string; malformed input is black.
    pub fn fg_hex(self, hex: &str) -> Self {
        self.fg(hex_color(hex))
    }

    /// Background from a hex string; malformed input is black.
    pub fn bg_hex(self, hex: &str) -> Self {
        self.bg(hex_color(hex))
    }

    pub fn border_fg_hex(mut self, hex: &str) -> Self {
        self.border_fg = Some(hex_color(hex));
        self
    }

    pub fn border(mut self, kind: BorderKind) -> Self {
        self.border = Some(kind);
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    /// Shorthand for `padding(Edges::symmetric(vertical, horizontal))`.
    pub fn pad(self, vertical: u16, horizontal: u16) -> Self {
        self.padding(Edges::symmetric(vertical, horizontal))
    }

    pub fn bold(mut self, on: bool) -> Self {
        self.bold = on;
        self
    }

    pub fn underline(mut self, on: bool) -> Self {
        self.underline = on;
        self
    }

    pub fn get_fg(&self) -> Option<Color> {
        self.fg
    }

    pub fn get_bg(&self) -> Option<Color> {
        self.bg
    }

    pub fn get_border_fg(&self) -> Option<Color> {
        self.border_fg
    }

    pub fn get_border(&self) -> Option<BorderKind> {
        self.border
    }

    pub fn get_padding(&self) -> Edges {
        self.padding
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }

    pub fn is_underline(&self) -> bool {
        self.underline
    }

    /// Equivalent ratatui style (colors and modifiers only).
    pub fn to_ratatui(&self) -> ratatui::style::Style {
        let mut style = ratatui::style::Style::new();
        if let Some(fg) = self.fg {
            style = style.fg(fg);
        }
        if let Some(bg) = self.bg {
            style = style.bg(bg);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.underline {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        style
    }

    // ------------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------------

    /// Lay out `text` as a padded (and optionally bordered) block.
    ///
    /// Lines are right-filled to the widest line so the background covers
    /// a clean rectangle. Output lines are joined with `\n`, no trailing
    /// newline.
    pub fn render(&self, text: &str) -> String {
        let lines: Vec<&str> = text.split('\n').collect();
        let content_width = lines.iter().map(|l| visible_width(l)).max().unwrap_or(0);
        let inner_width =
            content_width + usize::from(self.padding.left) + usize::from(self.padding.right);

        let blank = " ".repeat(inner_width);
        let mut block: Vec<String> = Vec::with_capacity(lines.len() + 2);
        block.extend((0..self.padding.top).map(|_| blank.clone()));
        for line in &lines {
            block.push(format!(
                "{}{}{}{}",
                " ".repeat(usize::from(self.padding.left)),
                line,
                " ".repeat(content_width - visible_width(line)),
                " ".repeat(usize::from(self.padding.right)),
            ));
        }
        block.extend((0..self.padding.bottom).map(|_| blank.clone()));

        let body = self.content_style();
        let mut out: Vec<String> = block.iter().map(|l| paint(body, l)).collect();

        if let Some(kind) = self.border {
            let [tl, tr, bl, br, h, v] = kind.glyphs();
            let edge = border_style(self.border_fg);
            let horizontal = h.repeat(inner_width);
            out = std::iter::once(paint(edge, &format!("{tl}{horizontal}{tr}")))
                .chain(
                    out.into_iter()
                        .map(|l| format!("{}{}{}", paint(edge, v), l, paint(edge, v))),
                )
                .chain(std::iter::once(paint(edge, &format!("{bl}{horizontal}{br}"))))
                .collect();
        }

        out.join("\n")
    }

    fn content_style(&self) -> Option<ContentStyle> {
        if self.fg.is_none() && self.bg.is_none() && !self.bold && !self.underline {
            return None;
        }
        let mut style = ContentStyle::new();
        if let Some(fg) = self.fg {
            style = style.with(term_color(fg));
        }
        if let Some(bg) = self.bg {
            style = style.on(term_color(bg));
        }
        if self.bold {
            style = style.bold();
        }
        if self.underline {
            style = style.underlined();
        }
        Some(style)
    }
}

fn border_style(fg: Option<Color>) -> Option<ContentStyle> {
    fg.map(|c| ContentStyle::new().with(term_color(c)))
}

fn paint(style: Option<ContentStyle>, text: &str) -> String {
    match style {
        Some(style) => style.apply(text).to_string(),
        None => text.to_string(),
    }
}

/// Map a ratatui color onto crossterm's palette.
///
/// ratatui names the dim ANSI colors plainly (`Red` is SGR 31) where
/// crossterm calls them `Dark*`.
fn term_color(color: Color) -> TermColor {
    match color {
        Color::Reset => TermColor::Reset,
        Color::Black => TermColor::Black,
        Color::Red => TermColor::DarkRed,
        Color::Green => TermColor::DarkGreen,
        Color::Yellow => TermColor::DarkYellow,
        Color::Blue => TermColor::DarkBlue,
        Color::Magenta => TermColor::DarkMagenta,
        Color::Cyan => TermColor::DarkCyan,
        Color::Gray => TermColor::Grey,
        Color::DarkGray => TermColor::DarkGrey,
        Color::LightRed => TermColor::Red,
        Color::LightGreen => TermColor::Green,
        Color::LightYellow => TermColor::Yellow,
        Color::LightBlue => TermColor::Blue,
        Color::LightMagenta => TermColor::Magenta,
        Color::LightCyan => TermColor::Cyan,
        Color::White => TermColor::White,
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
        Color::Indexed(i) => TermColor::AnsiValue(i),
    }
}

/// Terminal cells taken by `s`, ignoring escape sequences.
pub fn visible_width(s: &str) -> usize {
    if s.contains('\x1b') {
        strip_ansi(s).width()
    } else {
        s.width()
    }
}

/// Remove ANSI escape sequences, leaving the printable text.
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            if chars.peek() == Some(&'[') {
                chars.next();
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) {
                        break;
                    }
                }
            }
            continue;
        }
        out.push(c);
    }
    out
}
