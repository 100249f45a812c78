//! Color themes for the TUI

use ratatui::style::{Color, Modifier, Style};

use crate::config::settings::ThemeKind;

/// Resolved colors used by every view and dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub highlight: Color,
    pub warning: Color,
    pub error: Color,
    pub success: Color,
    pub muted: Color,
}

impl Theme {
    /// Build the palette for a theme setting
    pub fn from_kind(kind: ThemeKind) -> Self {
        match kind {
            ThemeKind::Classic => Self {
                background: Color::Rgb(0, 0, 96),
                foreground: Color::Green,
                accent: Color::LightGreen,
                highlight: Color::Blue,
                warning: Color::Yellow,
                error: Color::LightRed,
                success: Color::LightGreen,
                muted: Color::Gray,
            },
            ThemeKind::Default => Self {
                background: Color::Reset,
                foreground: Color::Reset,
                accent: Color::Cyan,
                highlight: Color::DarkGray,
                warning: Color::Yellow,
                error: Color::Red,
                success: Color::Green,
                muted: Color::DarkGray,
            },
        }
    }

    /// Base style for text on the theme background
    pub fn base(&self) -> Style {
        Style::default().fg(self.foreground).bg(self.background)
    }

    /// Style for titles and focused labels
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the selected row of a list or table
    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key hints such as `[Enter]`
    pub fn key(&self) -> Style {
        Style::default().fg(self.accent)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_kind(ThemeKind::default())
    }
}
