//! Contract for a future retained-mode renderer.
//!
//! Only the data types exist. Nothing here lays out or draws; an
//! [`Engine`] implementation would diff two [`Node`] trees into a
//! [`RenderPlan`] and turn the plan into terminal output.

mod node;

pub use node::{Attr, Layout, Node};
pub use ratatui::layout::Rect;

/// Write one glyph at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellOp {
    pub x: u16,
    pub y: u16,
    pub ch: char,
    pub attr: Attr,
}

/// Cell writes produced by one reconcile pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderPlan {
    pub ops: Vec<CellOp>,
}

impl RenderPlan {
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

pub trait Engine {
    /// Cell writes turning `prev` into `next` inside `bounds`.
    fn reconcile(&mut self, prev: Option<&Node>, next: &Node, bounds: Rect) -> RenderPlan;

    /// Terminal output for a plan.
    fn commit(&mut self, plan: &RenderPlan) -> String;
}
