//! Raw design tokens. Colors are `#RRGGBB` strings; sizes are terminal cells.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::motion::Motion;

/// Semantic color roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Colors {
    pub bg: String,
    pub surface: String,
    pub text: String,
    pub muted: String,
    pub primary: String,
    pub primary_fg: String,
    pub warning: String,
    pub success: String,
}

impl Default for Colors {
    fn default() -> Self {
        Colors {
            bg: "#0B0C0F".into(),
            surface: "#111317".into(),
            text: "#E6E8EB".into(),
            muted: "#9BA3AF".into(),
            primary: "#3B82F6".into(),
            primary_fg: "#0B0C0F".into(),
            warning: "#F59E0B".into(),
            success: "#10B981".into(),
        }
    }
}

/// Border colors for the resting and focused states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderColors {
    pub normal: String,
    pub focused: String,
}

impl Default for BorderColors {
    fn default() -> Self {
        BorderColors {
            normal: "#2A2F3A".into(),
            focused: "#3B82F6".into(),
        }
    }
}

/// Immutable design values from which every style is derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tokens {
    /// Spacing scale, indexed.
    pub space: Vec<u16>,
    /// Corner radius scale: none, sm, md, lg.
    pub radius: Vec<u16>,
    pub colors: Colors,
    /// Extra named colors (`pink-50`, `gray-700`, ...).
    pub palette: BTreeMap<String, String>,
    pub border: BorderColors,
    pub motion: Motion,
}

impl Default for Tokens {
    fn default() -> Self {
        Tokens {
            colors: Colors::default(),
            palette: default_palette(),
            space: vec![0, 1, 2, 3, 4, 6, 8],
            radius: vec![0, 1, 2, 3],
            border: BorderColors::default(),
            motion: Motion::default(),
        }
    }
}

impl Tokens {
    /// Hex value for a color token name.
    ///
    /// Semantic roles win over the palette. Unknown names come back
    /// unchanged, which lets a hex literal stand in for a token name.
    pub fn color(&self, name: &str) -> String {
        let c = &self.colors;
        let semantic = match name {
            "bg" => Some(&c.bg),
            "surface" => Some(&c.surface),
            "text" => Some(&c.text),
            "muted" => Some(&c.muted),
            "primary" => Some(&c.primary),
            "primary-fg" => Some(&c.primary_fg),
            "warning" => Some(&c.warning),
            "success" => Some(&c.success),
            "border" => Some(&self.border.normal),
            "border-focused" => Some(&self.border.focused),
            _ => None,
        };
        semantic
            .or_else(|| self.palette.get(name))
            .cloned()
            .unwrap_or_else(|| name.to_string())
    }

    /// Spacing step `index`, saturating at the largest step.
    pub fn spacing(&self, index: usize) -> u16 {
        self.space
            .get(index)
            .or_else(|| self.space.last())
            .copied()
            .unwrap_or(0)
    }

    /// Radius for a named step (`none`, `sm`, `md`, `lg`).
    pub fn radius_for(&self, key: &str) -> Option<u16> {
        let index = match key {
            "none" => 0,
            "sm" => 1,
            "md" => 2,
            "lg" => 3,
            _ => return None,
        };
        self.radius.get(index).copied()
    }
}

fn default_palette() -> BTreeMap<String, String> {
    const PINK: [&str; 10] = [
        "#FDF2F8", "#FCE7F3", "#FBCFE8", "#F9A8D4", "#F472B6", "#EC4899", "#DB2777", "#BE185D",
        "#9D174D", "#831843",
    ];
    const GRAY: [&str; 10] = [
        "#F9FAFB", "#F3F4F6", "#E5E7EB", "#D1D5DB", "#9CA3AF", "#6B7280", "#4B5563", "#374151",
        "#1F2937", "#111827",
    ];
    const STEPS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

    let mut palette = BTreeMap::new();
    for (family, hexes) in [("pink", PINK), ("gray", GRAY)] {
        for (step, hex) in STEPS.iter().zip(hexes) {
            palette.insert(format!("{family}-{step}"), hex.to_string());
        }
    }
    palette.insert("strawberry".into(), "#FFCAD4".into());
    palette
}
