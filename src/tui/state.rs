//! Playground models: pure data, zero effects.
//!
//! Two programs share the runtime: the full [`Playground`] and the
//! stand-alone [`ListDemo`]. Both are widgets themselves, so the event
//! loop only ever talks to one value through the widget protocol.

use std::io;
use std::sync::Arc;
use std::time::Instant;

use crossterm::event::KeyEvent;

use crate::anim::{AnimConfig, Animator, Clock, Easing, SystemClock};
use crate::components::{
    Button, ButtonProps, HighlightRow, HighlightRowProps, Panel, SelectList, SelectListProps,
    Variant,
};
use crate::message::Cmd;
use crate::theme::Theme;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// The key reader thread sends `Key`, or `InputClosed` when reading
/// fails; tick timer threads send `Tick`.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Tick(Instant),
    InputClosed(io::Error),
}

// ============================================================================
// PLAYGROUND
// ============================================================================

pub const FRUITS: [&str; 5] = ["Strawberry", "Blueberry", "Mango", "Dragonfruit", "Kiwi"];

pub const SAVE_LABEL: &str = "Save (Enter)";
pub const SAVED_STATUS: &str = "Saved!";
pub const HIGHLIGHT_TEXT: &str = "Toggle highlight with 'h' (variable opacity)";

/// Opacity `h` switches the highlight row to when it is off.
pub const HIGHLIGHT_ON: f64 = 0.6;

/// Panel with a button, the fruit list and a highlight row.
///
/// `tab` moves focus in and out of the panel; the border glows toward the
/// focused border color and back.
#[derive(Debug, Clone)]
pub struct Playground {
    pub theme: Arc<Theme>,
    pub panel: Panel,
    pub button: Button,
    pub list: SelectList,
    pub row: HighlightRow,
    pub focused: bool,
    pub glow: Animator,
}

impl Playground {
    pub fn new(theme: Arc<Theme>, fps: u32) -> Self {
        Self::with_clock(theme, fps, Arc::new(SystemClock))
    }

    pub fn with_clock(theme: Arc<Theme>, fps: u32, clock: Arc<dyn Clock>) -> Self {
        let motion = theme.tokens.motion;
        let colors = &theme.tokens.colors;

        let button = Button::new(
            ButtonProps {
                label: SAVE_LABEL.into(),
                variant: Variant::Primary,
                focused: true,
                on_press: Some(Arc::new(|| Some(Cmd::Print(SAVED_STATUS.into())))),
            },
            Arc::clone(&theme),
        );
        let list = SelectList::with_clock(
            SelectListProps {
                items: FRUITS.iter().map(|s| s.to_string()).collect(),
                selected: 0,
                duration: Some(motion.normal),
                fps,
            },
            Arc::clone(&theme),
            Arc::clone(&clock),
        );
        let row = HighlightRow::with_clock(
            HighlightRowProps {
                text: HIGHLIGHT_TEXT.into(),
                base_bg: colors.surface.clone(),
                hi_color: colors.primary.clone(),
                opacity: 0.0,
                duration: Some(motion.fast),
                fps,
            },
            Arc::clone(&theme),
            Arc::clone(&clock),
        );

        // Settled on the focused color until the first tab.
        let glow_config = AnimConfig::new(motion.normal, fps, Easing::OutCubic);
        let mut glow = Animator::with_clock(glow_config, clock);
        glow.jump_to_end();

        Playground {
            panel: Panel::new("strawberry-tui", Arc::clone(&theme)),
            theme,
            button,
            list,
            row,
            focused: true,
            glow,
        }
    }
}

// ============================================================================
// LIST DEMO
// ============================================================================

/// The fruit list on its own.
#[derive(Debug, Clone)]
pub struct ListDemo {
    pub theme: Arc<Theme>,
    pub list: SelectList,
}

impl ListDemo {
    pub fn new(theme: Arc<Theme>, fps: u32) -> Self {
        Self::with_clock(theme, fps, Arc::new(SystemClock))
    }

    pub fn with_clock(theme: Arc<Theme>, fps: u32, clock: Arc<dyn Clock>) -> Self {
        let list = SelectList::with_clock(
            SelectListProps {
                items: FRUITS.iter().map(|s| s.to_string()).collect(),
                selected: 0,
                duration: None,
                fps,
            },
            Arc::clone(&theme),
            clock,
        );
        ListDemo { theme, list }
    }
}
