//! A titled container. Stateless.

use std::sync::Arc;

use crate::theme::Theme;

#[derive(Debug, Clone)]
pub struct Panel {
    title: String,
    theme: Arc<Theme>,
}

impl Panel {
    pub fn new(title: impl Into<String>, theme: Arc<Theme>) -> Self {
        Panel {
            title: title.into(),
            theme,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Header line followed by `content` in the panel body style.
    pub fn render(&self, content: &str) -> String {
        let styles = &self.theme.styles.panel;
        let header = styles.header.render(&format!(" {} ", self.title));
        let body = styles.base.render(content);
        format!("{header}\n{body}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::strip_ansi;
    use pretty_assertions::assert_eq;

    #[test]
    fn header_then_padded_body() {
        let panel = Panel::new("Demo", Theme::shared_default());
        let out = strip_ansi(&panel.render("hi"));
        let lines: Vec<&str> = out.split('\n').collect();

        assert_eq!(lines[0], " Demo ");
        // spacing step 2 is two cells on every side
        assert_eq!(lines.len(), 1 + 5);
        assert_eq!(lines[3], "  hi  ");
        assert!(lines[1].trim().is_empty());
    }

    #[test]
    fn header_is_bold() {
        let theme = Theme::default();
        assert!(theme.styles.panel.header.is_bold());
    }
}
