//! strawberry-tui: design tokens, time-based animation and animated
//! widgets for terminal UIs.
//!
//! Widgets follow a message protocol (see [`components::Widget`]): they
//! take key and tick messages, return new values plus commands, and
//! render to styled strings. [`tui::run`] drives any widget full-screen.

pub mod anim;
pub mod color;
pub mod components;
pub mod config;
pub mod error;
pub mod message;
pub mod scaffold;
pub mod style;
pub mod theme;
pub mod tui;
pub mod ui;

pub use error::{Error, Result};
