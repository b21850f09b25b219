//! Realising an element tree on a terminal cell grid.
//!
//! Points map to cells at [`POINTS_PER_COLUMN`] horizontally and
//! [`POINTS_PER_ROW`] vertically. Stacks lay their children out along the
//! main axis with the system gap, stretch them across the cross axis, and
//! hand any spare main-axis room to flexible spacers or, when there are
//! none, to the gaps between children.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::element::{Element, Label, LineBreakMode, Spacer, StackView};
use crate::descriptor::{Axis, TextAlignment};

pub const POINTS_PER_COLUMN: f64 = 10.0;
pub const POINTS_PER_ROW: f64 = 20.0;

/// System gap between children of a horizontal stack, in columns.
/// Vertical stacks use no gap.
pub const HORIZONTAL_SYSTEM_SPACING: u16 = 1;

/// Largest extent a single fixed spacer occupies, in cells.
pub const MAX_SPACER_CELLS: u16 = 256;

const ELLIPSIS: char = '…';

/// Draws an [`Element`] into whatever area it is given.
#[derive(Debug, Clone, Copy)]
pub struct ElementWidget<'a> {
    element: &'a Element,
}

impl<'a> ElementWidget<'a> {
    pub fn new(element: &'a Element) -> Self {
        Self { element }
    }

    /// Rows needed to show the whole element at `width` columns.
    pub fn height(&self, width: u16) -> u16 {
        measure_height(self.element, width)
    }
}

impl Widget for ElementWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        draw(self.element, area, buf);
    }
}

/// Rows `element` occupies when given `width` columns.
pub fn measure_height(element: &Element, width: u16) -> u16 {
    match element {
        Element::Label(label) => label_lines(label, width).len().min(u16::MAX as usize) as u16,
        Element::Spacer(spacer) => spacer.min_size.map_or(0, points_to_rows),
        Element::Stack(stack) => match stack.axis {
            Axis::Vertical => stack
                .children
                .iter()
                .fold(0u16, |total, child| total.saturating_add(measure_height(child, width))),
            Axis::Horizontal => stack
                .children
                .iter()
                .zip(horizontal_slots(stack, width))
                .map(|(child, (_, length))| measure_height(child, length))
                .max()
                .unwrap_or(0),
        },
    }
}

/// Columns `element` would like on a single line.
pub fn natural_width(element: &Element) -> u16 {
    match element {
        Element::Label(label) => label
            .display_text()
            .split('\n')
            .map(UnicodeWidthStr::width)
            .max()
            .unwrap_or(0)
            .min(u16::MAX as usize) as u16,
        Element::Spacer(spacer) => spacer.min_size.map_or(0, points_to_columns),
        Element::Stack(stack) => match stack.axis {
            Axis::Horizontal => {
                let gaps = HORIZONTAL_SYSTEM_SPACING
                    .saturating_mul(stack.children.len().saturating_sub(1) as u16);
                stack
                    .children
                    .iter()
                    .fold(gaps, |total, child| total.saturating_add(natural_width(child)))
            }
            Axis::Vertical => stack.children.iter().map(natural_width).max().unwrap_or(0),
        },
    }
}

/// The lines a label shows at `width` columns.
pub fn label_lines(label: &Label, width: u16) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    let text = label.display_text();
    match label.line_break {
        LineBreakMode::WordWrap => wrap_text(
            text,
            width as usize,
            points_to_columns(label.head_indent()) as usize,
        ),
        LineBreakMode::TruncateTail => {
            let first = text.split('\n').next().unwrap_or("");
            vec![truncate_tail(first, width as usize)]
        }
    }
}

fn draw(element: &Element, area: Rect, buf: &mut Buffer) {
    if area.is_empty() {
        return;
    }
    fill(area, element.background(), buf);
    match element {
        Element::Label(label) => draw_label(label, area, buf),
        Element::Spacer(Spacer { .. }) => {}
        Element::Stack(stack) => {
            for (child, rect) in stack.children.iter().zip(arrange(stack, area)) {
                draw(child, area.intersection(rect), buf);
            }
        }
    }
}

fn draw_label(label: &Label, area: Rect, buf: &mut Buffer) {
    let mut style = Style::default();
    if label.foreground != Color::Reset {
        style = style.fg(label.foreground);
    }
    if label.background != Color::Reset {
        style = style.bg(label.background);
    }
    if let Some(font) = label.font {
        style = style.add_modifier(font.modifier());
    }

    let lines: Vec<Line> = label_lines(label, area.width)
        .into_iter()
        .map(Line::from)
        .collect();

    Paragraph::new(lines)
        .style(style)
        .alignment(horizontal_alignment(label.display_alignment()))
        .render(area, buf);
}

fn fill(area: Rect, color: Color, buf: &mut Buffer) {
    if color != Color::Reset {
        buf.set_style(area, Style::default().bg(color));
    }
}

fn horizontal_alignment(alignment: TextAlignment) -> Alignment {
    match alignment {
        TextAlignment::Center => Alignment::Center,
        TextAlignment::Right => Alignment::Right,
        // Cells cannot stretch inter-word space; justified reads as left.
        TextAlignment::Left | TextAlignment::Justified | TextAlignment::Natural => {
            Alignment::Left
        }
    }
}

/// Child rectangles of a stack drawn into `area`.
fn arrange(stack: &StackView, area: Rect) -> Vec<Rect> {
    match stack.axis {
        Axis::Vertical => {
            let naturals: Vec<u16> = stack
                .children
                .iter()
                .map(|child| measure_height(child, area.width))
                .collect();
            let flexible: Vec<bool> = stack.children.iter().map(Element::is_flexible_spacer).collect();
            distribute(&naturals, &flexible, area.height, 0)
                .into_iter()
                .map(|(offset, length)| {
                    Rect::new(area.x, area.y.saturating_add(offset), area.width, length)
                })
                .collect()
        }
        Axis::Horizontal => horizontal_slots(stack, area.width)
            .into_iter()
            .map(|(offset, length)| {
                Rect::new(area.x.saturating_add(offset), area.y, length, area.height)
            })
            .collect(),
    }
}

fn horizontal_slots(stack: &StackView, width: u16) -> Vec<(u16, u16)> {
    let naturals: Vec<u16> = stack.children.iter().map(natural_width).collect();
    let flexible: Vec<bool> = stack.children.iter().map(Element::is_flexible_spacer).collect();
    distribute(&naturals, &flexible, width, HORIZONTAL_SYSTEM_SPACING)
}

/// Place items of `naturals` length along `available` cells.
///
/// Returns `(offset, length)` per item. Spare room goes to flexible items,
/// or to the gaps when there are none; a shortfall shrinks the largest
/// items first.
fn distribute(naturals: &[u16], flexible: &[bool], available: u16, gap: u16) -> Vec<(u16, u16)> {
    let count = naturals.len();
    if count == 0 {
        return Vec::new();
    }
    let gap_count = (count - 1) as u32;
    let room = (available as u32).saturating_sub(gap as u32 * gap_count);
    let wanted: u32 = naturals.iter().map(|&n| n as u32).sum();

    let mut lengths: Vec<u32> = naturals.iter().map(|&n| n as u32).collect();
    let mut extra_gaps = vec![0u32; count - 1];

    if wanted <= room {
        let spare = room - wanted;
        let flex_indices: Vec<usize> = (0..count).filter(|&i| flexible[i]).collect();
        if !flex_indices.is_empty() {
            for (slot, share) in flex_indices.iter().zip(split_evenly(spare, flex_indices.len())) {
                lengths[*slot] += share;
            }
        } else if !extra_gaps.is_empty() {
            let shares = split_evenly(spare, extra_gaps.len());
            extra_gaps.copy_from_slice(&shares);
        }
    } else {
        lengths = shrink_to_fit(naturals, room);
    }

    let mut slots = Vec::with_capacity(count);
    let mut offset = 0u32;
    for (index, length) in lengths.iter().enumerate() {
        slots.push((clamp_u16(offset), clamp_u16(*length)));
        offset += length;
        if index < count - 1 {
            offset += gap as u32 + extra_gaps[index];
        }
    }
    slots
}

fn split_evenly(total: u32, parts: usize) -> Vec<u32> {
    let parts_u32 = parts as u32;
    let base = total / parts_u32;
    let remainder = (total % parts_u32) as usize;
    (0..parts)
        .map(|i| base + u32::from(i < remainder))
        .collect()
}

fn shrink_to_fit(naturals: &[u16], room: u32) -> Vec<u32> {
    let mut order: Vec<usize> = (0..naturals.len()).collect();
    order.sort_by_key(|&i| naturals[i]);

    let mut lengths = vec![0u32; naturals.len()];
    let mut remaining = room;
    let mut left = naturals.len() as u32;
    for index in order {
        let share = remaining / left;
        let length = (naturals[index] as u32).min(share);
        lengths[index] = length;
        remaining -= length;
        left -= 1;
    }
    lengths
}

fn clamp_u16(value: u32) -> u16 {
    value.min(u16::MAX as u32) as u16
}

fn points_to_columns(points: f64) -> u16 {
    points_to_cells(points, POINTS_PER_COLUMN)
}

fn points_to_rows(points: f64) -> u16 {
    points_to_cells(points, POINTS_PER_ROW)
}

fn points_to_cells(points: f64, per_cell: f64) -> u16 {
    if points <= 0.0 {
        0
    } else {
        (points / per_cell).ceil().min(MAX_SPACER_CELLS as f64) as u16
    }
}

/// Greedy word wrap. Lines after the first of each paragraph are indented
/// by `indent` columns; words longer than a line are split.
fn wrap_text(text: &str, width: usize, indent: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_width = 0usize;
        let mut first = true;

        for word in paragraph.split_whitespace() {
            let mut word = word;
            loop {
                let limit = line_limit(width, indent, first);
                let word_width = word.width();
                let needed = if current.is_empty() {
                    word_width
                } else {
                    current_width + 1 + word_width
                };

                if needed <= limit {
                    if !current.is_empty() {
                        current.push(' ');
                        current_width += 1;
                    }
                    current.push_str(word);
                    current_width += word_width;
                    break;
                }

                if !current.is_empty() {
                    lines.push(indented(std::mem::take(&mut current), indent, first));
                    current_width = 0;
                    first = false;
                    continue;
                }

                let (head, tail) = split_at_width(word, limit);
                lines.push(indented(head.to_string(), indent, first));
                first = false;
                word = tail;
                if word.is_empty() {
                    break;
                }
            }
        }

        lines.push(indented(current, indent, first));
    }

    lines
}

fn line_limit(width: usize, indent: usize, first: bool) -> usize {
    if first {
        width.max(1)
    } else {
        width.saturating_sub(indent).max(1)
    }
}

fn indented(line: String, indent: usize, first: bool) -> String {
    if first || indent == 0 {
        line
    } else {
        format!("{}{}", " ".repeat(indent), line)
    }
}

/// Split so the head fits in `limit` columns; the head always takes at
/// least one character.
fn split_at_width(word: &str, limit: usize) -> (&str, &str) {
    let mut used = 0usize;
    for (index, ch) in word.char_indices() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > limit && index > 0 {
            return word.split_at(index);
        }
        used += ch_width;
    }
    (word, "")
}

fn truncate_tail(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let budget = width.saturating_sub(1);
    let mut used = 0usize;
    let mut out = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.push(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::decode_str;
    use crate::render::render;
    use crate::theme::DefaultTheme;

    fn element(document: &str) -> Element {
        render(&decode_str(document).unwrap(), &DefaultTheme)
    }

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect::<String>()
    }

    #[test]
    fn test_wrap_text_breaks_between_words() {
        assert_eq!(
            wrap_text("alpha beta gamma", 11, 0),
            vec!["alpha beta".to_string(), "gamma".to_string()]
        );
    }

    #[test]
    fn test_wrap_text_indents_continuation_lines() {
        assert_eq!(
            wrap_text("• one two three", 9, 1),
            vec!["• one two".to_string(), " three".to_string()]
        );
    }

    #[test]
    fn test_wrap_text_splits_long_words() {
        assert_eq!(
            wrap_text("abcdefgh", 3, 0),
            vec!["abc".to_string(), "def".to_string(), "gh".to_string()]
        );
    }

    #[test]
    fn test_wrap_text_keeps_explicit_newlines() {
        assert_eq!(
            wrap_text("a\nb", 10, 0),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn test_truncate_tail() {
        assert_eq!(truncate_tail("Terrence", 20), "Terrence");
        assert_eq!(truncate_tail("Terrence", 5), "Terr…");
        assert_eq!(truncate_tail("Terrence", 1), "…");
    }

    #[test]
    fn test_distribute_gives_spare_room_to_flexible() {
        let slots = distribute(&[3, 0, 3], &[false, true, false], 12, 1);
        assert_eq!(slots, vec![(0, 3), (4, 4), (9, 3)]);
    }

    #[test]
    fn test_distribute_equal_spacing_without_flexible() {
        let slots = distribute(&[2, 2, 2], &[false, false, false], 12, 1);
        // 4 spare cells spread over two gaps.
        assert_eq!(slots, vec![(0, 2), (5, 2), (10, 2)]);
    }

    #[test]
    fn test_distribute_shrinks_largest_first() {
        let slots = distribute(&[2, 20], &[false, false], 11, 1);
        assert_eq!(slots, vec![(0, 2), (3, 8)]);
    }

    #[test]
    fn test_fixed_spacer_measures_in_rows() {
        assert_eq!(measure_height(&element(r#"{"space": {"value": 20}}"#), 10), 1);
        assert_eq!(measure_height(&element(r#"{"space": {"value": 50}}"#), 10), 3);
        assert_eq!(measure_height(&element(r#"{"space": {"value": "flex"}}"#), 10), 0);
    }

    #[test]
    fn test_huge_fixed_spacer_is_capped() {
        let stack = element(
            r#"{"stack": {"axis": "verticle", "subviews": [
                {"space": {"value": 1e300}},
                {"body": {"text": "x"}}
            ]}}"#,
        );
        assert_eq!(measure_height(&stack, 10), MAX_SPACER_CELLS + 1);

        let row = element(r#"{"stack": {"axis": "horizontal", "subviews": [{"space": {"value": 1e300}}]}}"#);
        assert_eq!(natural_width(&row), MAX_SPACER_CELLS);
    }

    #[test]
    fn test_vertical_stack_height_sums_children() {
        let stack = element(
            r#"{"stack": {"axis": "verticle", "subviews": [
                {"title": {"text": "Name"}},
                {"space": {"value": 20}},
                {"body": {"text": "one two three four"}}
            ]}}"#,
        );
        // title 1 + space 1 + body wrapped to 2 lines at width 10
        assert_eq!(measure_height(&stack, 10), 4);
    }

    #[test]
    fn test_horizontal_stack_height_is_tallest_child() {
        let stack = element(
            r#"{"stack": {"axis": "horizontal", "subviews": [
                {"body": {"text": "a b c d"}},
                {"body": {"text": "x"}}
            ]}}"#,
        );
        assert_eq!(measure_height(&stack, 3), 4);
    }

    #[test]
    fn test_draw_bullet_into_buffer() {
        let bullet = element(r#"{"bullet": {"text": "Body"}}"#);
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        ElementWidget::new(&bullet).render(area, &mut buf);
        assert!(row(&buf, 0).starts_with("• Body"));
        assert_eq!(buf[(0, 0)].bg, Color::White);
        assert_eq!(buf[(0, 0)].fg, Color::Black);
    }

    #[test]
    fn test_draw_centered_heading() {
        let heading = element(r#"{"heading": {"text": "ab", "alignment": "center"}}"#);
        let area = Rect::new(0, 0, 6, 1);
        let mut buf = Buffer::empty(area);
        ElementWidget::new(&heading).render(area, &mut buf);
        assert_eq!(row(&buf, 0), "  ab  ");
    }

    #[test]
    fn test_draw_horizontal_stack_with_flexible_spacer() {
        let stack = element(
            r#"{"stack": {"axis": "horizontal", "subviews": [
                {"subheading": {"text": "Left"}},
                {"space": {"value": "flex"}},
                {"subheading": {"text": "Right"}}
            ]}}"#,
        );
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        ElementWidget::new(&stack).render(area, &mut buf);
        let line = row(&buf, 0);
        assert!(line.starts_with("Left"));
        assert!(line.ends_with("Right"));
    }

    #[test]
    fn test_draw_zero_area_is_noop() {
        let title = element(r#"{"title": {"text": "x"}}"#);
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 1));
        ElementWidget::new(&title).render(Rect::new(0, 0, 0, 0), &mut buf);
        assert_eq!(row(&buf, 0), "    ");
    }
}
