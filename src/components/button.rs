//! A pressable label.

use std::fmt;
use std::sync::Arc;

use crate::message::{Cmd, Msg};
use crate::style::Style;
use crate::theme::Theme;

use super::Widget;

/// Callback run when a focused button receives `enter`.
pub type OnPress = Arc<dyn Fn() -> Option<Cmd> + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Base,
    Primary,
    Ghost,
}

#[derive(Clone, Default)]
pub struct ButtonProps {
    pub label: String,
    pub variant: Variant,
    pub focused: bool,
    pub on_press: Option<OnPress>,
}

impl fmt::Debug for ButtonProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonProps")
            .field("label", &self.label)
            .field("variant", &self.variant)
            .field("focused", &self.focused)
            .field("on_press", &self.on_press.as_ref().map(|_| "Fn"))
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct Button {
    props: ButtonProps,
    theme: Arc<Theme>,
}

impl Button {
    pub fn new(props: ButtonProps, theme: Arc<Theme>) -> Self {
        Button { props, theme }
    }

    pub fn label(&self) -> &str {
        &self.props.label
    }

    pub fn is_focused(&self) -> bool {
        self.props.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.props.focused = focused;
    }

    /// Style the button currently renders with.
    pub fn current_style(&self) -> Style {
        let styles = &self.theme.styles.button;
        if self.props.focused {
            return styles.focused;
        }
        match self.props.variant {
            Variant::Base => styles.base,
            Variant::Primary => styles.primary,
            Variant::Ghost => styles.ghost,
        }
    }
}

impl Widget for Button {
    fn update(self, msg: &Msg) -> (Self, Option<Cmd>) {
        let cmd = match msg {
            Msg::Key(key) if key.as_str() == "enter" && self.props.focused => {
                self.props.on_press.as_ref().and_then(|press| press())
            }
            _ => None,
        };
        (self, cmd)
    }

    fn view(&self) -> String {
        self.current_style().render(&self.props.label)
    }
}
