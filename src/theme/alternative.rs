//! Dark theme: light gray text on dark gray, larger type.

use ratatui::style::Color;

use super::{FontToken, Theme};
use crate::descriptor::NodeKind;

/// Mid gray; ratatui's named `Gray` is the light one.
const GRAY: Color = Color::Rgb(128, 128, 128);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlternativeTheme;

impl AlternativeTheme {
    pub const NAME: &'static str = "Alternative";
}

impl Theme for AlternativeTheme {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn font(&self, kind: NodeKind) -> Option<FontToken> {
        match kind {
            NodeKind::Body => Some(FontToken::Body),
            NodeKind::Bullet => Some(FontToken::Caption1),
            NodeKind::Heading => Some(FontToken::Title2),
            NodeKind::Subheading => Some(FontToken::Title3),
            NodeKind::Title => Some(FontToken::Title1),
            NodeKind::Stack | NodeKind::Space => None,
        }
    }

    fn foreground(&self, kind: NodeKind) -> Color {
        match kind {
            NodeKind::Body | NodeKind::Bullet | NodeKind::Heading | NodeKind::Title => {
                Color::Gray
            }
            NodeKind::Subheading => GRAY,
            NodeKind::Stack | NodeKind::Space => Color::Reset,
        }
    }

    fn background(&self, kind: NodeKind) -> Color {
        match kind {
            NodeKind::Stack | NodeKind::Space => Color::Reset,
            _ => Color::DarkGray,
        }
    }

    fn container_background(&self) -> Color {
        Color::DarkGray
    }

    fn container_foreground(&self) -> Color {
        Color::Gray
    }

    fn accent(&self) -> Color {
        Color::Yellow
    }
}
