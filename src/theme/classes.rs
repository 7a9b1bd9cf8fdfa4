//! Utility-class strings such as `"bg-pink-50 px-2 rounded-md bold"`.
//!
//! [`parse_class`] is total: unknown tokens are skipped, malformed
//! numbers read as 0, and later tokens overwrite earlier ones.

use serde::{Deserialize, Serialize};

/// A style delta. Unset fields inherit from whatever the spec is applied to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fg_hex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_hex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_hex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fg_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub p: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub px: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub py: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pt: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pr: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pb: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pl: Option<u16>,

    /// `none`, `sm`, `md` or `lg`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius_key: Option<String>,
    /// Explicit radius; beats `radius_key`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub radius: Option<u16>,
}

/// Which color slot a `bg-`/`fg-`/`border-` token targets.
enum ColorSlot {
    Fg,
    Bg,
    Border,
}

impl StyleSpec {
    fn set_color(&mut self, slot: ColorSlot, value: &str) {
        let (token, hex) = match slot {
            ColorSlot::Fg => (&mut self.fg_token, &mut self.fg_hex),
            ColorSlot::Bg => (&mut self.bg_token, &mut self.bg_hex),
            ColorSlot::Border => (&mut self.border_token, &mut self.border_hex),
        };
        if value.starts_with('#') {
            *hex = Some(value.to_string());
        } else {
            *token = Some(value.to_string());
        }
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == StyleSpec::default()
    }
}

/// Parse a whitespace-separated utility-class string.
pub fn parse_class(s: &str) -> StyleSpec {
    let mut spec = StyleSpec::default();

    for tok in s.split_whitespace() {
        if let Some(v) = tok.strip_prefix("bg-") {
            spec.set_color(ColorSlot::Bg, v);
        } else if let Some(v) = tok.strip_prefix("fg-") {
            spec.set_color(ColorSlot::Fg, v);
        } else if let Some(v) = tok.strip_prefix("border-") {
            spec.set_color(ColorSlot::Border, v);
        } else if tok == "bold" {
            spec.bold = Some(true);
        } else if tok == "underline" {
            spec.underline = Some(true);
        } else if let Some(v) = tok.strip_prefix("px-") {
            spec.px = Some(cells(v));
        } else if let Some(v) = tok.strip_prefix("py-") {
            spec.py = Some(cells(v));
        } else if let Some(v) = tok.strip_prefix("pt-") {
            spec.pt = Some(cells(v));
        } else if let Some(v) = tok.strip_prefix("pr-") {
            spec.pr = Some(cells(v));
        } else if let Some(v) = tok.strip_prefix("pb-") {
            spec.pb = Some(cells(v));
        } else if let Some(v) = tok.strip_prefix("pl-") {
            spec.pl = Some(cells(v));
        } else if let Some(v) = tok.strip_prefix("p-") {
            spec.p = Some(cells(v));
        } else if tok == "rounded" {
            spec.radius_key = Some("md".into());
        } else if let Some(k) = tok.strip_prefix("rounded-") {
            spec.radius_key = Some(k.to_string());
        }
    }

    spec
}

fn cells(v: &str) -> u16 {
    v.parse().unwrap_or(0)
}
