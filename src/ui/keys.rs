//! Key bindings for the resume screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

/// What a key press asks the screen to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    Quit,
    ToggleTheme,
    ScrollDown,
    ScrollUp,
    PageDown,
    PageUp,
    ScrollToTop,
}

pub fn action_for_key(key: KeyEvent) -> Option<ScreenAction> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(ScreenAction::Quit)
        }
        KeyCode::Char('q') | KeyCode::Esc => Some(ScreenAction::Quit),
        KeyCode::Char('t') => Some(ScreenAction::ToggleTheme),
        KeyCode::Down | KeyCode::Char('j') => Some(ScreenAction::ScrollDown),
        KeyCode::Up | KeyCode::Char('k') => Some(ScreenAction::ScrollUp),
        KeyCode::PageDown => Some(ScreenAction::PageDown),
        KeyCode::PageUp => Some(ScreenAction::PageUp),
        KeyCode::Home => Some(ScreenAction::ScrollToTop),
        _ => None,
    }
}

/// Scroll wheel maps to line scrolling; clicks are ignored.
pub fn action_for_mouse(mouse: MouseEvent) -> Option<ScreenAction> {
    match mouse.kind {
        MouseEventKind::ScrollDown => Some(ScreenAction::ScrollDown),
        MouseEventKind::ScrollUp => Some(ScreenAction::ScrollUp),
        _ => None,
    }
}
