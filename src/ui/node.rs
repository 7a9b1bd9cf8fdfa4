//! Declarative node tree.

use ratatui::style::{Color, Modifier};

use crate::color::hex_color;
use crate::style::Edges;
use crate::theme::ResolvedStyle;

/// Cell attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Attr {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub modifier: Modifier,
}

impl Attr {
    pub fn from_resolved(style: &ResolvedStyle) -> Self {
        let mut modifier = Modifier::empty();
        if style.bold == Some(true) {
            modifier |= Modifier::BOLD;
        }
        if style.underline == Some(true) {
            modifier |= Modifier::UNDERLINED;
        }
        Attr {
            fg: style.fg.as_deref().map(hex_color),
            bg: style.bg.as_deref().map(hex_color),
            modifier,
        }
    }
}

/// Box-model and flex properties shared by every node kind.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Layout {
    pub padding: Edges,
    pub radius: u16,
    pub width: Option<u16>,
    pub height: Option<u16>,
    pub grow: f32,
    pub shrink: f32,
    pub basis: Option<u16>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Text {
        id: String,
        text: String,
        attr: Attr,
        layout: Layout,
    },
    Box {
        id: String,
        attr: Attr,
        layout: Layout,
        children: Vec<Node>,
    },
}

impl Node {
    pub fn text(id: impl Into<String>, text: impl Into<String>) -> Self {
        Node::Text {
            id: id.into(),
            text: text.into(),
            attr: Attr::default(),
            layout: Layout::default(),
        }
    }

    pub fn container(id: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Box {
            id: id.into(),
            attr: Attr::default(),
            layout: Layout::default(),
            children,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Node::Text { id, .. } | Node::Box { id, .. } => id,
        }
    }

    pub fn attr(&self) -> Attr {
        match self {
            Node::Text { attr, .. } | Node::Box { attr, .. } => *attr,
        }
    }

    pub fn layout(&self) -> &Layout {
        match self {
            Node::Text { layout, .. } | Node::Box { layout, .. } => layout,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Text { .. } => &[],
            Node::Box { children, .. } => children,
        }
    }

    pub fn with_attr(mut self, new: Attr) -> Self {
        match &mut self {
            Node::Text { attr, .. } | Node::Box { attr, .. } => *attr = new,
        }
        self
    }

    pub fn with_layout(mut self, new: Layout) -> Self {
        match &mut self {
            Node::Text { layout, .. } | Node::Box { layout, .. } => *layout = new,
        }
        self
    }

    /// Apply a resolved class style: colors and flags to the attr,
    /// padding and radius to the layout when present.
    pub fn styled(self, style: &ResolvedStyle) -> Self {
        let mut layout = *self.layout();
        if let Some(padding) = style.padding {
            layout.padding = padding;
        }
        if let Some(radius) = style.radius {
            layout.radius = radius;
        }
        self.with_attr(Attr::from_resolved(style)).with_layout(layout)
    }

    /// Depth-first walk, parents before children.
    pub fn walk(&self) -> Vec<&Node> {
        let mut out = vec![self];
        for child in self.children() {
            out.extend(child.walk());
        }
        out
    }
}
