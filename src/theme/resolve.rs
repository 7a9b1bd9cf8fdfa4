//! Turning a [`StyleSpec`] into concrete styling.
//!
//! Two outputs share one set of rules:
//! - [`ResolvedStyle`], a plain record for retained-mode consumers
//!   (see [`crate::ui`]);
//! - [`apply`], which layers the spec onto a live [`Style`].
//!
//! Rules: token colors go through [`Tokens::color`], an explicit hex beats
//! a token for the same slot, padding narrows `p < px/py < pt/pr/pb/pl`,
//! bold/underline only apply when set, an explicit radius beats a key.

use serde::Serialize;

use super::classes::StyleSpec;
use super::tokens::Tokens;
use crate::color::normalize_hex;
use crate::style::{BorderKind, Edges, Style};

/// A spec with token names replaced by normalized `#rrggbb` values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ResolvedStyle {
    pub fg: Option<String>,
    pub bg: Option<String>,
    pub border: Option<String>,
    pub bold: Option<bool>,
    pub underline: Option<bool>,
    /// `None` when the spec names no padding at all.
    pub padding: Option<Edges>,
    pub radius: Option<u16>,
}

/// Resolve every field of `spec` against `tokens`.
pub fn resolve(spec: &StyleSpec, tokens: &Tokens) -> ResolvedStyle {
    ResolvedStyle {
        fg: resolve_color(spec.fg_hex.as_deref(), spec.fg_token.as_deref(), tokens),
        bg: resolve_color(spec.bg_hex.as_deref(), spec.bg_token.as_deref(), tokens),
        border: resolve_color(spec.border_hex.as_deref(), spec.border_token.as_deref(), tokens),
        bold: spec.bold,
        underline: spec.underline,
        padding: has_padding(spec).then(|| resolve_padding(spec, Edges::ZERO)),
        radius: resolve_radius(spec, tokens),
    }
}

/// Layer `spec` onto `base`.
///
/// A radius turns the border on: rounded above zero, square at zero.
pub fn apply(spec: &StyleSpec, tokens: &Tokens, base: Style) -> Style {
    let resolved = resolve(spec, tokens);
    let mut style = base;

    if let Some(fg) = &resolved.fg {
        style = style.fg_hex(fg);
    }
    if let Some(bg) = &resolved.bg {
        style = style.bg_hex(bg);
    }
    if let Some(border) = &resolved.border {
        style = style.border_fg_hex(border);
    }
    if let Some(bold) = resolved.bold {
        style = style.bold(bold);
    }
    if let Some(underline) = resolved.underline {
        style = style.underline(underline);
    }
    if has_padding(spec) {
        style = style.padding(resolve_padding(spec, base.get_padding()));
    }
    match resolved.radius {
        Some(0) => style = style.border(BorderKind::Square),
        Some(_) => style = style.border(BorderKind::Rounded),
        None => {}
    }

    style
}

fn resolve_color(hex: Option<&str>, token: Option<&str>, tokens: &Tokens) -> Option<String> {
    hex.map(str::to_string)
        .or_else(|| token.map(|name| tokens.color(name)))
        .map(|value| normalize_hex(&value))
}

fn has_padding(spec: &StyleSpec) -> bool {
    [spec.p, spec.px, spec.py, spec.pt, spec.pr, spec.pb, spec.pl]
        .iter()
        .any(Option::is_some)
}

/// Apply the padding fields broadest-first over `base`.
pub fn resolve_padding(spec: &StyleSpec, base: Edges) -> Edges {
    let mut e = base;
    if let Some(p) = spec.p {
        e = Edges::all(p);
    }
    if let Some(px) = spec.px {
        e.left = px;
        e.right = px;
    }
    if let Some(py) = spec.py {
        e.top = py;
        e.bottom = py;
    }
    if let Some(pt) = spec.pt {
        e.top = pt;
    }
    if let Some(pr) = spec.pr {
        e.right = pr;
    }
    if let Some(pb) = spec.pb {
        e.bottom = pb;
    }
    if let Some(pl) = spec.pl {
        e.left = pl;
    }
    e
}

fn resolve_radius(spec: &StyleSpec, tokens: &Tokens) -> Option<u16> {
    spec.radius
        .or_else(|| spec.radius_key.as_deref().and_then(|k| tokens.radius_for(k)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::classes::parse_class;
    use ratatui::style::Color;

    fn tokens() -> Tokens {
        Tokens::default()
    }

    #[test]
    fn token_colors_become_normalized_hex() {
        let r = resolve(&parse_class("bg-pink-50 fg-#222"), &tokens());
        assert_eq!(r.bg.as_deref(), Some("#fdf2f8"));
        assert_eq!(r.fg.as_deref(), Some("#222222"));
    }

    #[test]
    fn unknown_token_passes_through_as_hex() {
        let r = resolve(&parse_class("fg-ff0066"), &tokens());
        assert_eq!(r.fg.as_deref(), Some("#ff0066"));
    }

    #[test]
    fn explicit_hex_beats_token() {
        let r = resolve(&parse_class("bg-#010101 bg-primary"), &tokens());
        assert_eq!(r.bg.as_deref(), Some("#010101"));
    }

    #[test]
    fn padding_precedence() {
        let spec = parse_class("pt-5 p-1 px-2 py-3");
        assert_eq!(
            resolve_padding(&spec, Edges::ZERO),
            Edges {
                top: 5,
                right: 2,
                bottom: 3,
                left: 2
            }
        );
    }

    #[test]
    fn partial_padding_keeps_base_sides() {
        let spec = parse_class("pl-4");
        let base = Edges::symmetric(1, 2);
        assert_eq!(
            resolve_padding(&spec, base),
            Edges {
                top: 1,
                right: 2,
                bottom: 1,
                left: 4
            }
        );
    }

    #[test]
    fn no_padding_fields_means_inherit() {
        assert_eq!(resolve(&parse_class("bold"), &tokens()).padding, None);
        let base = Style::new().pad(1, 1);
        assert_eq!(apply(&parse_class("bold"), &tokens(), base).get_padding(), Edges::all(1));
    }

    #[test]
    fn explicit_radius_beats_key() {
        let mut spec = parse_class("rounded-lg");
        assert_eq!(resolve(&spec, &tokens()).radius, Some(3));
        spec.radius = Some(1);
        assert_eq!(resolve(&spec, &tokens()).radius, Some(1));
    }

    #[test]
    fn unknown_radius_key_is_unset() {
        assert_eq!(resolve(&parse_class("rounded-huge"), &tokens()).radius, None);
    }

    #[test]
    fn tri_state_flags_only_apply_when_set() {
        let base = Style::new().bold(true);
        let untouched = apply(&parse_class("px-1"), &tokens(), base);
        assert!(untouched.is_bold());

        let spec = StyleSpec {
            bold: Some(false),
            ..StyleSpec::default()
        };
        assert!(!apply(&spec, &tokens(), base).is_bold());
    }

    #[test]
    fn apply_sets_live_style() {
        let style = apply(
            &parse_class("bg-primary fg-text border-border-focused rounded px-3 underline"),
            &tokens(),
            Style::new(),
        );
        assert_eq!(style.get_bg(), Some(Color::Rgb(0x3b, 0x82, 0xf6)));
        assert_eq!(style.get_fg(), Some(Color::Rgb(0xe6, 0xe8, 0xeb)));
        assert_eq!(style.get_border_fg(), Some(Color::Rgb(0x3b, 0x82, 0xf6)));
        assert_eq!(style.get_border(), Some(BorderKind::Rounded));
        assert_eq!(style.get_padding(), Edges::symmetric(0, 3));
        assert!(style.is_underline());
    }

    #[test]
    fn zero_radius_is_square() {
        let style = apply(&parse_class("rounded-none"), &tokens(), Style::new());
        assert_eq!(style.get_border(), Some(BorderKind::Square));
    }
}
