//! Themes: per-node-kind styling plus the colors of the hosting screen.
//!
//! A [`Theme`] answers three questions for every [`NodeKind`]: which font
//! token (text kinds only), which foreground and which background color.
//! It also names the chrome colors the host paints outside the rendered
//! tree. Colors are ratatui [`Color`]s; [`Color::Reset`] plays the role of
//! "clear" and lets the enclosing background show through.

mod alternative;
mod default;

pub use alternative::AlternativeTheme;
pub use default::DefaultTheme;

use std::fmt;
use std::sync::Arc;

use ratatui::style::{Color, Modifier};

use crate::descriptor::NodeKind;

/// Named text styles, mirroring the dynamic-type scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontToken {
    LargeTitle,
    Title1,
    Title2,
    Title3,
    Headline,
    Subheadline,
    Body,
    Callout,
    Footnote,
    Caption1,
    Caption2,
}

impl FontToken {
    /// How the token is realised on a terminal cell grid.
    pub fn modifier(&self) -> Modifier {
        match self {
            FontToken::LargeTitle => Modifier::BOLD | Modifier::UNDERLINED,
            FontToken::Title1 | FontToken::Title2 | FontToken::Headline => Modifier::BOLD,
            FontToken::Title3 => Modifier::BOLD | Modifier::ITALIC,
            FontToken::Subheadline | FontToken::Caption1 | FontToken::Caption2 => {
                Modifier::ITALIC
            }
            FontToken::Footnote => Modifier::DIM,
            FontToken::Body | FontToken::Callout => Modifier::empty(),
        }
    }
}

/// Styling contract the renderer consults for every visual property.
///
/// Implementations must answer `foreground`/`background` for every kind and
/// must return `None` from `font` for [`NodeKind::Stack`] and
/// [`NodeKind::Space`].
pub trait Theme: fmt::Debug + Send + Sync {
    /// Display name, also used to identify the theme when toggling.
    fn name(&self) -> &'static str;

    fn font(&self, kind: NodeKind) -> Option<FontToken>;

    fn foreground(&self, kind: NodeKind) -> Color;

    fn background(&self, kind: NodeKind) -> Color;

    /// Background of the hosting screen.
    fn container_background(&self) -> Color;

    /// Foreground of the hosting screen's chrome (title bar text).
    fn container_foreground(&self) -> Color;

    /// Color for buttons and other action callouts.
    fn accent(&self) -> Color;
}

/// The built-in themes, selectable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeChoice {
    #[default]
    Default,
    Alternative,
}

impl ThemeChoice {
    /// Parse a theme name as given on the command line or in the environment.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "default" | "light" => Some(ThemeChoice::Default),
            "alternative" | "alt" | "dark" => Some(ThemeChoice::Alternative),
            _ => None,
        }
    }

    /// Identify which built-in a theme object is, by name.
    pub fn of(theme: &dyn Theme) -> Option<Self> {
        match theme.name() {
            DefaultTheme::NAME => Some(ThemeChoice::Default),
            AlternativeTheme::NAME => Some(ThemeChoice::Alternative),
            _ => None,
        }
    }

    /// The other built-in theme.
    pub fn toggled(self) -> Self {
        match self {
            ThemeChoice::Default => ThemeChoice::Alternative,
            ThemeChoice::Alternative => ThemeChoice::Default,
        }
    }

    pub fn theme(self) -> Arc<dyn Theme> {
        match self {
            ThemeChoice::Default => Arc::new(DefaultTheme),
            ThemeChoice::Alternative => Arc::new(AlternativeTheme),
        }
    }
}

/// Theme to switch to from `current`: non-default themes (including custom
/// ones) go back to Default, Default goes to Alternative.
pub fn toggle(current: &dyn Theme) -> Arc<dyn Theme> {
    match ThemeChoice::of(current) {
        Some(ThemeChoice::Default) => ThemeChoice::Alternative.theme(),
        _ => ThemeChoice::Default.theme(),
    }
}
