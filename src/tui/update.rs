//! Pure state transitions for the playground programs.
//!
//! Fully testable without a terminal: messages in, new model and an
//! optional command out. The runtime interprets the commands.

use tracing::debug;

use crate::components::Widget;
use crate::message::{Cmd, Msg};

use super::state::{HIGHLIGHT_ON, ListDemo, Playground};
use super::view;

const QUIT_KEYS: [&str; 3] = ["q", "esc", "ctrl+c"];

impl Widget for Playground {
    fn init(&self) -> Option<Cmd> {
        Cmd::batch([Some(self.glow.tick()), self.list.init(), self.row.init()])
    }

    fn update(mut self, msg: &Msg) -> (Self, Option<Cmd>) {
        match msg {
            Msg::Key(key) if key.is_any(&QUIT_KEYS) => (self, Some(Cmd::Quit)),
            Msg::Key(key) if key.as_str() == "tab" => {
                self.focused = !self.focused;
                self.button.set_focused(self.focused);
                self.glow.restart();
                debug!(focused = self.focused, "focus toggled");
                let tick = self.glow.tick();
                (self, Some(tick))
            }
            Msg::Key(key) if key.as_str() == "h" => {
                let target = if self.row.opacity() > 0.0 { 0.0 } else { HIGHLIGHT_ON };
                self.row.set_opacity(target);
                let tick = self.row.animator().tick();
                (self, Some(tick))
            }
            Msg::Tick(_) => {
                self.glow.advance();
                // Children re-arm on every tick; one shared tick drives them all.
                let (list, _) = self.list.update(msg);
                let (row, _) = self.row.update(msg);
                self.list = list;
                self.row = row;
                let tick = self.glow.tick();
                (self, Some(tick))
            }
            Msg::Key(_) => {
                let (button, button_cmd) = self.button.update(msg);
                let (list, list_cmd) = self.list.update(msg);
                let (row, row_cmd) = self.row.update(msg);
                self.button = button;
                self.list = list;
                self.row = row;
                (self, Cmd::batch([button_cmd, list_cmd, row_cmd]))
            }
        }
    }

    fn view(&self) -> String {
        view::playground(self)
    }
}

impl Widget for ListDemo {
    fn init(&self) -> Option<Cmd> {
        self.list.init()
    }

    fn update(mut self, msg: &Msg) -> (Self, Option<Cmd>) {
        match msg {
            Msg::Key(key) if key.is_any(&QUIT_KEYS) => (self, Some(Cmd::Quit)),
            _ => {
                let (list, cmd) = self.list.update(msg);
                self.list = list;
                (self, cmd)
            }
        }
    }

    fn view(&self) -> String {
        view::list_demo(self)
    }
}

// ============================================================================
// TESTS
// ============================================================================
