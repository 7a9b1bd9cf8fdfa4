//! The message protocol between widgets and the event loop.
//!
//! Widgets never perform effects. They receive [`Msg`] values and return
//! [`Cmd`] descriptions; the runtime interprets the commands (schedules
//! ticks, prints, quits) and feeds the results back as new messages.

use std::fmt;
use std::time::{Duration, Instant};

// ============================================================================
// MESSAGES
// ============================================================================

/// Normalized key name: `"up"`, `"j"`, `"enter"`, `"ctrl+c"`, ...
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key(String);

impl Key {
    pub fn new(name: impl Into<String>) -> Self {
        Key(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if this key is any of `names`.
    pub fn is_any(&self, names: &[&str]) -> bool {
        names.contains(&self.0.as_str())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::new(name)
    }
}

/// Everything a widget can receive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A key press.
    Key(Key),
    /// A frame tick, stamped with the time it was delivered.
    Tick(Instant),
}

impl Msg {
    /// Shorthand for a key message.
    pub fn key(name: &str) -> Self {
        Msg::Key(Key::new(name))
    }
}

// ============================================================================
// COMMANDS
// ============================================================================

/// Effect requested by an update. Pure code only describes these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Deliver a [`Msg::Tick`] after the interval.
    Tick(Duration),
    /// Show a line of text outside the frame.
    Print(String),
    /// Stop the program.
    Quit,
    /// Several commands at once.
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Combine optional commands, dropping the empty ones.
    ///
    /// Returns `None` when nothing remains and unwraps a single survivor.
    pub fn batch(cmds: impl IntoIterator<Item = Option<Cmd>>) -> Option<Cmd> {
        let mut cmds: Vec<Cmd> = cmds.into_iter().flatten().collect();
        match cmds.len() {
            0 => None,
            1 => cmds.pop(),
            _ => Some(Cmd::Batch(cmds)),
        }
    }

    /// Flatten nested batches into a plain list.
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_displays_its_name() {
        assert_eq!(Key::from("ctrl+c").to_string(), "ctrl+c");
        assert!(Key::from("k").is_any(&["up", "k"]));
        assert!(!Key::from("x").is_any(&["up", "k"]));
    }

    #[test]
    fn batch_drops_empty_commands() {
        assert_eq!(Cmd::batch([None, None]), None);
        assert_eq!(Cmd::batch([None, Some(Cmd::Quit)]), Some(Cmd::Quit));
        assert_eq!(
            Cmd::batch([Some(Cmd::Quit), Some(Cmd::Print("hi".into()))]),
            Some(Cmd::Batch(vec![Cmd::Quit, Cmd::Print("hi".into())]))
        );
    }

    #[test]
    fn flatten_unnests_batches() {
        let nested = Cmd::Batch(vec![
            Cmd::Quit,
            Cmd::Batch(vec![Cmd::Tick(Duration::from_millis(5)), Cmd::Print("x".into())]),
        ]);
        assert_eq!(
            nested.flatten(),
            vec![Cmd::Quit, Cmd::Tick(Duration::from_millis(5)), Cmd::Print("x".into())]
        );
    }
}
