//! Pre-composed styles derived from tokens.

use super::tokens::Tokens;
use crate::style::{BorderKind, Edges, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStyles {
    pub base: Style,
    pub primary: Style,
    pub ghost: Style,
    pub focused: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelStyles {
    pub base: Style,
    pub header: Style,
}

/// Every role a widget may ask the theme for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Styles {
    pub button: ButtonStyles,
    pub panel: PanelStyles,
    /// Highlight fill used by the highlight row.
    pub highlighter: Style,
    /// Resting list row.
    pub item: Style,
    /// Fully settled selected list row.
    pub item_selected: Style,
}

impl Styles {
    pub fn build(t: &Tokens) -> Self {
        let c = &t.colors;

        let button_base = Style::new()
            .pad(0, 2)
            .fg_hex(&c.text)
            .bg_hex(&c.surface)
            .border(BorderKind::Rounded)
            .border_fg_hex(&t.border.normal);

        let button = ButtonStyles {
            base: button_base,
            primary: button_base.bg_hex(&c.primary).fg_hex(&c.primary_fg),
            ghost: Style::new().pad(0, 2).fg_hex(&c.text),
            focused: button_base.border_fg_hex(&t.border.focused),
        };

        let panel_base = Style::new()
            .bg_hex(&c.surface)
            .fg_hex(&c.text)
            .padding(Edges::all(t.spacing(2)));

        let panel = PanelStyles {
            base: panel_base,
            header: Style::new().bold(true).fg_hex(&c.bg),
        };

        let highlighter = Style::new().bg_hex(&c.primary).fg_hex(&c.primary_fg);

        Styles {
            button,
            panel,
            highlighter,
            item: panel_base.pad(0, 1),
            item_selected: highlighter.pad(0, 1).bold(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn primary_button_swaps_colors() {
        let s = Styles::build(&Tokens::default());
        assert_eq!(s.button.primary.get_bg(), Some(Color::Rgb(0x3b, 0x82, 0xf6)));
        assert_eq!(s.button.primary.get_fg(), Some(Color::Rgb(0x0b, 0x0c, 0x0f)));
        assert_eq!(s.button.primary.get_border(), Some(BorderKind::Rounded));
    }

    #[test]
    fn focused_button_highlights_border() {
        let s = Styles::build(&Tokens::default());
        assert_eq!(s.button.focused.get_border_fg(), Some(Color::Rgb(0x3b, 0x82, 0xf6)));
        assert_eq!(s.button.base.get_border_fg(), Some(Color::Rgb(0x2a, 0x2f, 0x3a)));
    }

    #[test]
    fn ghost_button_has_no_chrome() {
        let s = Styles::build(&Tokens::default());
        assert_eq!(s.button.ghost.get_bg(), None);
        assert_eq!(s.button.ghost.get_border(), None);
    }

    #[test]
    fn panel_padding_comes_from_spacing_scale() {
        let tokens = Tokens {
            space: vec![0, 1, 5],
            ..Tokens::default()
        };
        let s = Styles::build(&tokens);
        assert_eq!(s.panel.base.get_padding(), Edges::all(5));
        assert!(s.panel.header.is_bold());
    }

    #[test]
    fn list_rows_use_single_cell_gutter() {
        let s = Styles::build(&Tokens::default());
        assert_eq!(s.item.get_padding(), Edges::symmetric(0, 1));
        assert_eq!(s.item_selected.get_padding(), Edges::symmetric(0, 1));
        assert!(s.item_selected.is_bold());
    }
}
