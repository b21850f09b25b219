//! View descriptors: the node tree a resume document decodes into.
//!
//! A document is a tree of [`Node`]s. Containers ([`Node::Stack`]) hold an
//! ordered list of children; every other kind is a leaf. The tree is plain
//! data: it is built once per successful decode, never mutated, and replaced
//! wholesale when a new document arrives.
//!
//! ```
//! use resume::descriptor::{decode_str, Axis, Node};
//!
//! let node = decode_str(r#"{"stack": {"axis": "verticle", "subviews": []}}"#).unwrap();
//! match node {
//!     Node::Stack(stack) => {
//!         assert_eq!(stack.axis, Axis::Vertical);
//!         assert!(stack.children.is_empty());
//!     }
//!     _ => unreachable!(),
//! }
//! ```

mod decode;

pub use decode::{decode, decode_str, decode_value, MAX_NODE_DEPTH};

use std::fmt;

/// Which variant a node is. Themes key their styling on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Stack,
    Title,
    Heading,
    Subheading,
    Body,
    Bullet,
    Space,
}

impl NodeKind {
    /// Every node kind, in wire-grammar order.
    pub const ALL: [NodeKind; 7] = [
        NodeKind::Stack,
        NodeKind::Title,
        NodeKind::Heading,
        NodeKind::Subheading,
        NodeKind::Body,
        NodeKind::Bullet,
        NodeKind::Space,
    ];

    /// The top-level JSON key that selects this kind.
    pub fn key(&self) -> &'static str {
        match self {
            NodeKind::Stack => "stack",
            NodeKind::Title => "title",
            NodeKind::Heading => "heading",
            NodeKind::Subheading => "subheading",
            NodeKind::Body => "body",
            NodeKind::Bullet => "bullet",
            NodeKind::Space => "space",
        }
    }

    /// Exact, case-sensitive lookup of a wire key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "stack" => Some(NodeKind::Stack),
            "title" => Some(NodeKind::Title),
            "heading" => Some(NodeKind::Heading),
            "subheading" => Some(NodeKind::Subheading),
            "body" => Some(NodeKind::Body),
            "bullet" => Some(NodeKind::Bullet),
            "space" => Some(NodeKind::Space),
            _ => None,
        }
    }

    /// True for the kinds that carry text.
    pub fn is_text(&self) -> bool {
        !matches!(self, NodeKind::Stack | NodeKind::Space)
    }

    /// Body and bullet text wraps; the other text kinds stay on one line.
    pub fn wraps_words(&self) -> bool {
        matches!(self, NodeKind::Body | NodeKind::Bullet)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Main axis of a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Parse the wire value.
    ///
    /// The vertical axis is spelled `"verticle"` on the wire. `"vertical"` is
    /// rejected so documents written against the protocol stay portable.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "horizontal" => Some(Axis::Horizontal),
            "verticle" => Some(Axis::Vertical),
            _ => None,
        }
    }
}

/// Horizontal alignment of a text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlignment {
    Left,
    Center,
    Right,
    Justified,
    /// Follows the reading direction of the text.
    #[default]
    Natural,
}

impl TextAlignment {
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "left" => Some(TextAlignment::Left),
            "center" => Some(TextAlignment::Center),
            "right" => Some(TextAlignment::Right),
            "justified" => Some(TextAlignment::Justified),
            "natural" => Some(TextAlignment::Natural),
            _ => None,
        }
    }
}

/// Payload shared by every text node kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextContent {
    pub text: String,
    /// `None` when the document omitted the field; renders as
    /// [`TextAlignment::Natural`].
    pub alignment: Option<TextAlignment>,
}

impl TextContent {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            alignment: None,
        }
    }

    pub fn with_alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// The alignment to render with.
    pub fn resolved_alignment(&self) -> TextAlignment {
        self.alignment.unwrap_or_default()
    }
}

/// A linear container.
#[derive(Debug, Clone, PartialEq)]
pub struct Stack {
    pub axis: Axis,
    /// Rendered in this order.
    pub children: Vec<Node>,
}

/// Size of a spacer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpaceValue {
    /// Reserves at least this many points on both axes. Never negative.
    Fixed(f64),
    /// Absorbs whatever room the enclosing stack has left.
    Flexible,
}

/// The decoded view tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Stack(Stack),
    Title(TextContent),
    Heading(TextContent),
    Subheading(TextContent),
    Body(TextContent),
    Bullet(TextContent),
    Space(SpaceValue),
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Stack(_) => NodeKind::Stack,
            Node::Title(_) => NodeKind::Title,
            Node::Heading(_) => NodeKind::Heading,
            Node::Subheading(_) => NodeKind::Subheading,
            Node::Body(_) => NodeKind::Body,
            Node::Bullet(_) => NodeKind::Bullet,
            Node::Space(_) => NodeKind::Space,
        }
    }

    /// Text payload for the text kinds.
    pub fn text_content(&self) -> Option<&TextContent> {
        match self {
            Node::Title(content)
            | Node::Heading(content)
            | Node::Subheading(content)
            | Node::Body(content)
            | Node::Bullet(content) => Some(content),
            Node::Stack(_) | Node::Space(_) => None,
        }
    }

    /// Children of a stack; empty for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Stack(stack) => &stack.children,
            _ => &[],
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Node::node_count).sum::<usize>()
    }

    /// Depth of this subtree; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(Node::depth).max().unwrap_or(0)
    }
}
