//! Node tree + theme -> element tree.
//!
//! [`render`] is pure and total: every node kind has exactly one rule, it
//! keeps no state between calls, and it cannot fail on a decoded tree. All
//! visual properties come from the [`Theme`], keyed by node kind.

pub mod draw;
mod element;

pub use draw::{measure_height, ElementWidget};
pub use element::{
    AxisPriorities, CrossAlignment, Distribution, Element, Label, LineBreakMode, Priority,
    Spacer, Spacing, StackView, StyledRun,
};

use crate::descriptor::{Node, NodeKind, SpaceValue, Stack, TextContent};
use crate::theme::Theme;

/// Prepended to bullet text at render time.
pub const BULLET_GLYPH: &str = "• ";

/// Indent of wrapped bullet lines, in points.
pub const BULLET_HEAD_INDENT: f64 = 10.0;

/// Fraction a label's font may shrink to before it truncates.
pub const MINIMUM_SCALE_FACTOR: f32 = 0.5;

/// Build the element tree for `node`.
pub fn render(node: &Node, theme: &dyn Theme) -> Element {
    match node {
        Node::Stack(stack) => Element::Stack(render_stack(stack, theme)),
        Node::Space(value) => Element::Spacer(render_space(*value, theme)),
        Node::Title(content)
        | Node::Heading(content)
        | Node::Subheading(content)
        | Node::Body(content)
        | Node::Bullet(content) => Element::Label(render_label(node.kind(), content, theme)),
    }
}

fn render_label(kind: NodeKind, content: &TextContent, theme: &dyn Theme) -> Label {
    let alignment = content.resolved_alignment();
    let wraps = kind.wraps_words();

    let styled = (kind == NodeKind::Bullet).then(|| StyledRun {
        text: format!("{}{}", BULLET_GLYPH, content.text),
        alignment,
        head_indent: BULLET_HEAD_INDENT,
    });
    let text = match &styled {
        Some(run) => run.text.clone(),
        None => content.text.clone(),
    };

    Label {
        kind,
        text,
        styled,
        font: theme.font(kind),
        foreground: theme.foreground(kind),
        background: theme.background(kind),
        alignment,
        max_lines: if wraps { 0 } else { 1 },
        line_break: if wraps {
            LineBreakMode::WordWrap
        } else {
            LineBreakMode::TruncateTail
        },
        hugging: AxisPriorities {
            horizontal: Priority::REQUIRED,
            vertical: Priority::FITTING_SIZE,
        },
        compression: AxisPriorities::uniform(Priority::REQUIRED),
        minimum_scale_factor: MINIMUM_SCALE_FACTOR,
    }
}

fn render_stack(stack: &Stack, theme: &dyn Theme) -> StackView {
    StackView {
        axis: stack.axis,
        spacing: Spacing::System,
        distribution: Distribution::EqualSpacing,
        alignment: CrossAlignment::Fill,
        background: theme.background(NodeKind::Stack),
        children: stack
            .children
            .iter()
            .map(|child| render(child, theme))
            .collect(),
    }
}

fn render_space(value: SpaceValue, theme: &dyn Theme) -> Spacer {
    let background = theme.background(NodeKind::Space);
    match value {
        SpaceValue::Fixed(points) => Spacer {
            background,
            min_size: Some(points),
            hugging: AxisPriorities::uniform(Priority::DEFAULT_LOW),
            compression: AxisPriorities::uniform(Priority::DEFAULT_HIGH),
        },
        SpaceValue::Flexible => Spacer {
            background,
            min_size: None,
            hugging: AxisPriorities::uniform(Priority::LOWEST),
            compression: AxisPriorities::uniform(Priority::LOWEST),
        },
    }
}
