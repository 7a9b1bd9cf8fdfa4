//! Design tokens, the styles derived from them, and utility classes.
//!
//! A [`Theme`] is built once and never mutated. Widgets keep a shared
//! handle to it; re-theming means building new widgets.

pub mod classes;
pub mod motion;
pub mod resolve;
pub mod styles;
pub mod tokens;

use std::fs;
use std::path::Path;
use std::sync::Arc;

pub use classes::{StyleSpec, parse_class};
pub use motion::Motion;
pub use resolve::{ResolvedStyle, apply, resolve};
pub use styles::Styles;
pub use tokens::Tokens;

use crate::error::{Error, Result};
use crate::style::Style;

/// Tokens plus the styles derived from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    pub tokens: Tokens,
    pub styles: Styles,
}

impl Theme {
    pub fn new(name: impl Into<String>, tokens: Tokens) -> Self {
        let styles = Styles::build(&tokens);
        Theme {
            name: name.into(),
            tokens,
            styles,
        }
    }

    /// The built-in theme, wrapped for sharing between widgets.
    pub fn shared_default() -> Arc<Theme> {
        Arc::new(Theme::default())
    }

    /// Load tokens from a TOML file; missing keys take the default values.
    ///
    /// The theme is named after the file stem.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let tokens: Tokens = toml::from_str(&content).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("custom");
        Ok(Theme::new(name, tokens))
    }

    /// Tokens as a TOML document (the format [`Theme::from_file`] reads).
    pub fn tokens_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(&self.tokens)?)
    }

    /// Style for a utility-class string layered over `base`.
    pub fn class(&self, classes: &str, base: Style) -> Style {
        apply(&parse_class(classes), &self.tokens, base)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::new("light", Tokens::default())
    }
}
