//! Program configuration, read from TOML.
//!
//! Lookup order: an explicit `--config` path (must exist), then
//! `<config_dir>/strawberry-tui/config.toml` if present, then defaults.
//! CLI flags override whatever is loaded.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::anim::DEFAULT_FPS;
use crate::error::{Error, Result};
use crate::theme::Theme;

const APP_DIR: &str = "strawberry-tui";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Animation frame rate.
    pub fps: u32,
    /// Theme TOML to load instead of the built-in tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<PathBuf>,
    /// Log file for the interactive programs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Default log filter; `RUST_LOG` wins when set.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            fps: DEFAULT_FPS,
            theme: None,
            log_file: None,
            log_level: "info".into(),
        }
    }
}

impl Config {
    /// `<config_dir>/strawberry-tui/config.toml`, when the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Load from `explicit`, or the default location, or fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Configured log file, else `<data_dir>/strawberry-tui/strawberry.log`.
    pub fn log_file_path(&self) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join(APP_DIR)
                .join("strawberry.log")
        })
    }

    /// The configured theme, or the built-in one when none is set.
    pub fn try_load_theme(&self) -> Result<Arc<Theme>> {
        match &self.theme {
            None => Ok(Theme::shared_default()),
            Some(path) => Ok(Arc::new(Theme::from_file(path)?)),
        }
    }

    /// Like [`Config::try_load_theme`], but an unreadable theme file is
    /// logged and replaced by the default.
    pub fn load_theme(&self) -> Arc<Theme> {
        self.try_load_theme().unwrap_or_else(|e| {
            warn!(error = %e, "falling back to default theme");
            Theme::shared_default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.fps, 30);
        assert_eq!(config.log_level, "info");
        assert!(config.log_file_path().ends_with("strawberry-tui/strawberry.log"));
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "fps = 60\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.fps, 60);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.theme, None);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
    }

    #[test]
    fn bad_toml_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "fps = \"fast\"\n").unwrap();
        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn round_trips_through_toml() {
        let config = Config {
            fps: 24,
            theme: Some(PathBuf::from("theme/theme.toml")),
            log_file: Some(PathBuf::from("/tmp/s.log")),
            log_level: "debug".into(),
        };
        let back: Config = toml::from_str(&config.to_toml().unwrap()).unwrap();
        assert_eq!(back, config);
        assert_eq!(back.log_file_path(), PathBuf::from("/tmp/s.log"));
    }

    #[test]
    fn unreadable_theme_falls_back() {
        let config = Config {
            theme: Some(PathBuf::from("/no/such/theme.toml")),
            ..Config::default()
        };
        assert_eq!(config.load_theme().name, "light");
    }

    #[test]
    fn strict_theme_load_reports_missing_file() {
        let config = Config {
            theme: Some(PathBuf::from("/no/such/theme.toml")),
            ..Config::default()
        };
        let err = config.try_load_theme().unwrap_err();
        assert!(matches!(err, Error::Read { ref path, .. } if path.ends_with("theme.toml")));
        assert_eq!(Config::default().try_load_theme().unwrap().name, "light");
    }

    #[test]
    fn theme_file_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dusk.toml");
        fs::write(&path, "[colors]\nbg = \"#000000\"\n").unwrap();
        let config = Config {
            theme: Some(path),
            ..Config::default()
        };
        let theme = config.load_theme();
        assert_eq!(theme.name, "dusk");
        assert_eq!(theme.tokens.colors.bg, "#000000");
    }
}
