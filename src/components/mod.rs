//! Message-driven widgets.
//!
//! Widgets are plain values. [`Widget::update`] consumes the old value and
//! returns the new one together with an optional [`Cmd`]; [`Widget::view`]
//! is a pure function of the current value. Time only enters through
//! animator steps taken inside `update`.

pub mod button;
pub mod highlight_row;
pub mod panel;
pub mod select_list;

pub use button::{Button, ButtonProps, OnPress, Variant};
pub use highlight_row::{HighlightRow, HighlightRowProps};
pub use panel::Panel;
pub use select_list::{SelectList, SelectListProps};

use crate::message::{Cmd, Msg};

/// The init / update / view protocol shared by every widget.
pub trait Widget: Sized {
    /// Command to run when the widget is first mounted.
    fn init(&self) -> Option<Cmd> {
        None
    }

    fn update(self, msg: &Msg) -> (Self, Option<Cmd>);

    fn view(&self) -> String;
}
