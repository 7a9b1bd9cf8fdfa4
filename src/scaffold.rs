//! Project scaffolding: theme skeletons and component templates.
//!
//! Files are never overwritten unless the caller passes `force`.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Error, Result};
use crate::theme::Theme;

const THEME_README: &str = include_str!("../templates/theme-readme.md.tmpl");

/// Component name, output file name, template body.
const TEMPLATES: [(&str, &str, &str); 4] = [
    ("button", "button.rs", include_str!("../templates/button.rs.tmpl")),
    ("select-list", "select_list.rs", include_str!("../templates/select_list.rs.tmpl")),
    ("highlight-row", "highlight_row.rs", include_str!("../templates/highlight_row.rs.tmpl")),
    ("panel", "panel.rs", include_str!("../templates/panel.rs.tmpl")),
];

/// Names accepted by [`add`].
pub fn components() -> Vec<&'static str> {
    TEMPLATES.iter().map(|(name, _, _)| *name).collect()
}

/// Write `<dir>/theme/theme.toml` (the default tokens) and a README.
pub fn init(dir: &Path, force: bool) -> Result<Vec<PathBuf>> {
    let theme_dir = dir.join("theme");
    let tokens = Theme::default().tokens_toml()?;

    let files = [
        (theme_dir.join("theme.toml"), tokens.as_str()),
        (theme_dir.join("README.md"), THEME_README),
    ];
    // Check everything first so a refused init writes nothing.
    let existing = files.iter().find(|(path, _)| path.exists());
    if let (false, Some((path, _))) = (force, existing) {
        return Err(Error::AlreadyExists(path.clone()));
    }
    for (path, content) in &files {
        write_file(path, content, true)?;
    }

    info!(dir = %theme_dir.display(), "initialized theme");
    Ok(files.into_iter().map(|(path, _)| path).collect())
}

/// Write the template for `component` into `dir`.
///
/// `select_list` and `selectlist` are accepted for `select-list`, and
/// likewise for `highlight-row`.
pub fn add(component: &str, dir: &Path, force: bool) -> Result<PathBuf> {
    let wanted = canonical_name(component);
    let (_, file_name, body) = TEMPLATES
        .iter()
        .find(|(name, _, _)| canonical_name(name) == wanted)
        .ok_or_else(|| Error::UnknownComponent(component.to_string(), components().join(", ")))?;

    let path = dir.join(file_name);
    write_file(&path, body, force)?;
    info!(component, path = %path.display(), "added component");
    Ok(path)
}

fn canonical_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

fn write_file(path: &Path, content: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::AlreadyExists(path.to_path_buf()));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
