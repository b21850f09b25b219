//! Light theme: dark text on white.

use ratatui::style::Color;

use super::{FontToken, Theme};
use crate::descriptor::NodeKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultTheme;

impl DefaultTheme {
    pub const NAME: &'static str = "Default";
}

impl Theme for DefaultTheme {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn font(&self, kind: NodeKind) -> Option<FontToken> {
        match kind {
            NodeKind::Body => Some(FontToken::Footnote),
            NodeKind::Bullet => Some(FontToken::Caption1),
            NodeKind::Heading => Some(FontToken::Subheadline),
            NodeKind::Subheading => Some(FontToken::Body),
            NodeKind::Title => Some(FontToken::LargeTitle),
            NodeKind::Stack | NodeKind::Space => None,
        }
    }

    fn foreground(&self, kind: NodeKind) -> Color {
        match kind {
            NodeKind::Body | NodeKind::Bullet | NodeKind::Heading | NodeKind::Title => {
                Color::Black
            }
            NodeKind::Subheading => Color::DarkGray,
            NodeKind::Stack | NodeKind::Space => Color::Reset,
        }
    }

    fn background(&self, kind: NodeKind) -> Color {
        match kind {
            NodeKind::Stack | NodeKind::Space => Color::Reset,
            _ => Color::White,
        }
    }

    fn container_background(&self) -> Color {
        Color::White
    }

    fn container_foreground(&self) -> Color {
        Color::DarkGray
    }

    fn accent(&self) -> Color {
        Color::Blue
    }
}
