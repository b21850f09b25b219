//! Terminal screen hosting the rendered resume.
//!
//! Layout:
//! - Title bar: app name, theme name, and the key hints (accent colour)
//! - Body: the rendered element inside a vertical scroll view, or a
//!   loading / error message until a document arrives

pub mod keys;
mod screen;

pub use keys::{action_for_key, action_for_mouse, ScreenAction};
pub use screen::ResumeScreen;

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect, Size},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Wrap},
    Frame,
};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::render::{measure_height, Element, ElementWidget};
use crate::theme::Theme;

const TITLE: &str = " Resume ";
const KEY_HINTS: &str = "t theme · ↑↓ scroll · q quit ";

/// Render the whole screen.
pub fn render(frame: &mut Frame, screen: &mut ResumeScreen) {
    let area = frame.area();
    let theme = screen.theme.clone();

    frame.render_widget(Block::default().style(chrome_style(theme.as_ref())), area);

    let [title_area, body_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

    render_title_bar(frame, title_area, theme.as_ref());

    match &screen.content {
        Some(element) => {
            render_content(frame, body_area, element, theme.as_ref(), &mut screen.scroll)
        }
        None => render_placeholder(frame, body_area, theme.as_ref(), screen.load_error.as_deref()),
    }
}

fn chrome_style(theme: &dyn Theme) -> Style {
    Style::default()
        .fg(theme.container_foreground())
        .bg(theme.container_background())
}

fn render_title_bar(frame: &mut Frame, area: Rect, theme: &dyn Theme) {
    let left = Line::from(vec![
        Span::styled(TITLE, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!("· {} ", theme.name())),
    ]);
    frame.render_widget(Paragraph::new(left).style(chrome_style(theme)), area);

    let hints = Line::from(Span::styled(KEY_HINTS, Style::default().fg(theme.accent())));
    frame.render_widget(Paragraph::new(hints).alignment(Alignment::Right), area);
}

fn render_placeholder(frame: &mut Frame, area: Rect, theme: &dyn Theme, error: Option<&str>) {
    let text = match error {
        Some(message) => message.to_string(),
        None => "Loading…".to_string(),
    };
    let paragraph = Paragraph::new(text)
        .style(chrome_style(theme))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Content height is capped at this many viewports; anything below is clipped.
const MAX_CONTENT_SCREENS: u16 = 32;

/// Content width follows the viewport; one column is given up to the
/// scrollbar when the content is taller than the viewport.
fn content_size(element: &Element, viewport: Rect) -> Size {
    let mut width = viewport.width;
    let mut height = measure_height(element, width);
    if height > viewport.height && width > 1 {
        width -= 1;
        height = measure_height(element, width);
    }
    let max_height = viewport.height.max(1).saturating_mul(MAX_CONTENT_SCREENS);
    Size::new(width, height.min(max_height))
}

fn render_content(
    frame: &mut Frame,
    area: Rect,
    element: &Element,
    theme: &dyn Theme,
    scroll: &mut ScrollViewState,
) {
    if area.is_empty() {
        return;
    }

    let size = content_size(element, area);
    let mut scroll_view = ScrollView::new(size)
        .horizontal_scrollbar_visibility(ScrollbarVisibility::Never)
        .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic);

    let content_area = Rect::new(0, 0, size.width, size.height);
    scroll_view.render_widget(Block::default().style(chrome_style(theme)), content_area);
    scroll_view.render_widget(ElementWidget::new(element), content_area);

    frame.render_stateful_widget(scroll_view, area, scroll);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::decode_str;
    use crate::render::render as render_element;
    use crate::theme::DefaultTheme;

    #[test]
    fn test_content_size_follows_viewport() {
        let node = decode_str(r#"{"body":{"text":"short"}}"#).unwrap();
        let element = render_element(&node, &DefaultTheme);
        let size = content_size(&element, Rect::new(0, 0, 40, 10));
        assert_eq!(size, Size::new(40, 1));
    }

    #[test]
    fn test_content_size_reserves_scrollbar_column() {
        let node = decode_str(r#"{"space":{"value":400}}"#).unwrap();
        let element = render_element(&node, &DefaultTheme);
        let size = content_size(&element, Rect::new(0, 0, 40, 10));
        assert_eq!(size, Size::new(39, 20));
    }

    #[test]
    fn test_content_size_is_bounded_by_viewport() {
        let node = decode_str(
            r#"{"stack":{"axis":"verticle","subviews":[
                {"space":{"value":1e300}},
                {"space":{"value":1e300}},
                {"body":{"text":"x"}}
            ]}}"#,
        )
        .unwrap();
        let element = render_element(&node, &DefaultTheme);
        let size = content_size(&element, Rect::new(0, 0, 300, 10));
        assert_eq!(size, Size::new(299, 10 * MAX_CONTENT_SCREENS));
    }
}
