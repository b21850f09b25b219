//! State of the resume screen.

use std::sync::Arc;

use tui_scrollview::ScrollViewState;

use crate::render::Element;
use crate::theme::Theme;

/// Everything the screen needs to draw itself.
///
/// The view model bindings write into it; the event loop reads it.
#[derive(Debug)]
pub struct ResumeScreen {
    /// Latest rendered document, if one has arrived
    pub content: Option<Element>,
    /// Theme used for the chrome around the content
    pub theme: Arc<dyn Theme>,
    /// Why the document could not be shown, if loading failed
    pub load_error: Option<String>,
    pub scroll: ScrollViewState,
    pub needs_redraw: bool,
    pub should_quit: bool,
}

impl ResumeScreen {
    pub fn new(theme: Arc<dyn Theme>) -> Self {
        Self {
            content: None,
            theme,
            load_error: None,
            scroll: ScrollViewState::default(),
            needs_redraw: true,
            should_quit: false,
        }
    }

    /// Replace the scrolled content wholesale.
    pub fn set_content(&mut self, element: Element) {
        self.content = Some(element);
        self.load_error = None;
        self.mark_dirty();
    }

    /// Recolour the chrome.
    pub fn set_theme(&mut self, theme: Arc<dyn Theme>) {
        self.theme = theme;
        self.mark_dirty();
    }

    pub fn set_load_error(&mut self, message: impl Into<String>) {
        self.load_error = Some(message.into());
        self.mark_dirty();
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn scroll_down(&mut self) {
        self.scroll.scroll_down();
        self.mark_dirty();
    }

    pub fn scroll_up(&mut self) {
        self.scroll.scroll_up();
        self.mark_dirty();
    }

    pub fn page_down(&mut self) {
        self.scroll.scroll_page_down();
        self.mark_dirty();
    }

    pub fn page_up(&mut self) {
        self.scroll.scroll_page_up();
        self.mark_dirty();
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll.scroll_to_top();
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::decode_str;
    use crate::render::render;
    use crate::theme::{AlternativeTheme, DefaultTheme};

    #[test]
    fn test_new_screen_is_dirty_and_empty() {
        let screen = ResumeScreen::new(Arc::new(DefaultTheme));
        assert!(screen.needs_redraw);
        assert!(screen.content.is_none());
        assert!(!screen.should_quit);
    }

    #[test]
    fn test_set_content_clears_error() {
        let mut screen = ResumeScreen::new(Arc::new(DefaultTheme));
        screen.set_load_error("boom");
        screen.needs_redraw = false;

        let node = decode_str(r#"{"title":{"text":"Jane"}}"#).unwrap();
        screen.set_content(render(&node, &DefaultTheme));

        assert!(screen.content.is_some());
        assert!(screen.load_error.is_none());
        assert!(screen.needs_redraw);
    }

    #[test]
    fn test_set_theme_marks_dirty() {
        let mut screen = ResumeScreen::new(Arc::new(DefaultTheme));
        screen.needs_redraw = false;
        screen.set_theme(Arc::new(AlternativeTheme));
        assert_eq!(screen.theme.name(), "Alternative");
        assert!(screen.needs_redraw);
    }
}
