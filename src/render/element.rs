//! The rendered element tree.
//!
//! Elements are the host-toolkit objects the renderer produces: labels,
//! linear stacks and spacers, each carrying the layout hints a host needs
//! (size constraints, hugging/compression priorities, line breaking, text
//! alignment). They are plain values, so a host may keep, diff or redraw
//! them freely.

use ratatui::style::Color;

use crate::descriptor::{Axis, NodeKind, TextAlignment};
use crate::theme::FontToken;

/// Layout priority, on the 1..=1000 scale used by constraint-based hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Priority(pub u16);

impl Priority {
    pub const REQUIRED: Priority = Priority(1000);
    pub const DEFAULT_HIGH: Priority = Priority(750);
    pub const DEFAULT_LOW: Priority = Priority(250);
    pub const FITTING_SIZE: Priority = Priority(50);
    pub const LOWEST: Priority = Priority(1);
}

/// A priority per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisPriorities {
    pub horizontal: Priority,
    pub vertical: Priority,
}

impl AxisPriorities {
    pub const fn uniform(priority: Priority) -> Self {
        Self {
            horizontal: priority,
            vertical: priority,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineBreakMode {
    /// Multi-line; breaks between words.
    WordWrap,
    /// Single line; overflow is replaced by an ellipsis at the end.
    TruncateTail,
}

/// Text with paragraph attributes, used where plain text plus an alignment
/// is not enough.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledRun {
    pub text: String,
    pub alignment: TextAlignment,
    /// Indent of every line after the first, in points.
    pub head_indent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub kind: NodeKind,
    pub text: String,
    /// Takes precedence over `text`/`alignment` when present.
    pub styled: Option<StyledRun>,
    pub font: Option<FontToken>,
    pub foreground: Color,
    pub background: Color,
    pub alignment: TextAlignment,
    /// 0 means unlimited.
    pub max_lines: usize,
    pub line_break: LineBreakMode,
    pub hugging: AxisPriorities,
    pub compression: AxisPriorities,
    pub minimum_scale_factor: f32,
}

impl Label {
    /// Text as displayed, after any render-time transform.
    pub fn display_text(&self) -> &str {
        match &self.styled {
            Some(run) => &run.text,
            None => &self.text,
        }
    }

    pub fn display_alignment(&self) -> TextAlignment {
        match &self.styled {
            Some(run) => run.alignment,
            None => self.alignment,
        }
    }

    pub fn head_indent(&self) -> f64 {
        self.styled.as_ref().map_or(0.0, |run| run.head_indent)
    }

    pub fn is_multiline(&self) -> bool {
        self.max_lines == 0
    }
}

/// Gap between arranged children.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Spacing {
    /// Let the host pick its standard gap.
    System,
    Points(f64),
}

/// How extra main-axis room is shared out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Distribution {
    /// Children stretch to fill.
    Fill,
    /// Children keep their size; the gaps between them grow evenly.
    EqualSpacing,
}

/// Cross-axis placement of children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrossAlignment {
    Fill,
    Leading,
    Center,
    Trailing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StackView {
    pub axis: Axis,
    pub spacing: Spacing,
    pub distribution: Distribution,
    pub alignment: CrossAlignment,
    pub background: Color,
    pub children: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Spacer {
    pub background: Color,
    /// Minimum extent on both axes, in points. `None` for flexible spacers.
    pub min_size: Option<f64>,
    pub hugging: AxisPriorities,
    pub compression: AxisPriorities,
}

impl Spacer {
    /// A flexible spacer gives way to everything else in its container.
    pub fn is_flexible(&self) -> bool {
        self.min_size.is_none() && self.hugging == AxisPriorities::uniform(Priority::LOWEST)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Label(Label),
    Stack(StackView),
    Spacer(Spacer),
}

impl Element {
    /// The node kind this element was rendered from.
    pub fn kind(&self) -> NodeKind {
        match self {
            Element::Label(label) => label.kind,
            Element::Stack(_) => NodeKind::Stack,
            Element::Spacer(_) => NodeKind::Space,
        }
    }

    pub fn children(&self) -> &[Element] {
        match self {
            Element::Stack(stack) => &stack.children,
            _ => &[],
        }
    }

    /// Displayed text of a label.
    pub fn text(&self) -> Option<&str> {
        match self {
            Element::Label(label) => Some(label.display_text()),
            _ => None,
        }
    }

    pub fn background(&self) -> Color {
        match self {
            Element::Label(label) => label.background,
            Element::Stack(stack) => stack.background,
            Element::Spacer(spacer) => spacer.background,
        }
    }

    pub fn is_flexible_spacer(&self) -> bool {
        matches!(self, Element::Spacer(spacer) if spacer.is_flexible())
    }

    /// Number of elements in this subtree, including `self`.
    pub fn element_count(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(Element::element_count)
            .sum::<usize>()
    }

    /// Depth-first walk over the subtree.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Element)) {
        visit(self);
        for child in self.children() {
            child.walk(visit);
        }
    }
}
