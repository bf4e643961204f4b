//! Color palettes, one per form theme.

use ratatui::style::{Color, Modifier, Style};

use crate::models::Theme;

/// Validation and submit failures, in every theme.
pub const COLOR_ERROR: Color = Color::Red;

/// Required-field marker.
pub const COLOR_REQUIRED: Color = Color::Red;

/// Palette for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeStyle {
    /// Titles, labels and focus markers
    pub accent: Color,
    /// Body text
    pub text: Color,
    /// Hints, placeholders and secondary text
    pub dim: Color,
    /// Panel borders
    pub border: Color,
    /// Progress bar fill and selected options
    pub progress: Color,
    /// Extra modifier for headings
    pub heading: Modifier,
}

impl ThemeStyle {
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD | self.heading)
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn dim_style(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.progress)
            .add_modifier(Modifier::BOLD)
    }
}

/// Palette for `theme`.
pub fn style_for(theme: Theme) -> ThemeStyle {
    match theme {
        Theme::Cyberpunk => ThemeStyle {
            accent: Color::Cyan,
            text: Color::White,
            dim: Color::DarkGray,
            border: Color::Rgb(0, 95, 110),
            progress: Color::Cyan,
            heading: Modifier::empty(),
        },
        Theme::Minimal => ThemeStyle {
            accent: Color::Gray,
            text: Color::White,
            dim: Color::DarkGray,
            border: Color::DarkGray,
            progress: Color::White,
            heading: Modifier::empty(),
        },
        Theme::Industrial => ThemeStyle {
            accent: Color::Rgb(255, 165, 0),
            text: Color::Gray,
            dim: Color::DarkGray,
            border: Color::Rgb(90, 90, 90),
            progress: Color::Rgb(255, 165, 0),
            heading: Modifier::empty(),
        },
        Theme::Academic => ThemeStyle {
            accent: Color::Rgb(30, 64, 175),
            text: Color::Rgb(226, 232, 240),
            dim: Color::Rgb(100, 116, 139),
            border: Color::Rgb(51, 65, 85),
            progress: Color::Rgb(59, 130, 246),
            heading: Modifier::ITALIC,
        },
        Theme::Solaris => ThemeStyle {
            accent: Color::Rgb(251, 191, 36),
            text: Color::Rgb(255, 247, 237),
            dim: Color::Rgb(180, 130, 90),
            border: Color::Rgb(234, 88, 12),
            progress: Color::Rgb(249, 115, 22),
            heading: Modifier::empty(),
        },
        Theme::Midnight => ThemeStyle {
            accent: Color::Rgb(129, 140, 248),
            text: Color::Rgb(224, 231, 255),
            dim: Color::Rgb(99, 102, 141),
            border: Color::Rgb(55, 48, 163),
            progress: Color::Rgb(99, 102, 241),
            heading: Modifier::empty(),
        },
    }
}
