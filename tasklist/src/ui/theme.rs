//! Theme and styling for the TUI.
//!
//! Two palettes, light and dark, share one set of style helpers so the
//! widgets never hard-code colours.

use std::fmt;

use ratatui::style::{Color, Modifier, Style};

/// Colour theme selected by config, CLI, or the toggle key.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark text on a light background.
    #[default]
    Light,
    /// Light text on a dark background.
    Dark,
}

impl Theme {
    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Colours for this theme.
    #[must_use]
    pub const fn palette(self) -> &'static Palette {
        match self {
            Self::Light => &LIGHT,
            Self::Dark => &DARK,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// Colours used by every widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Primary foreground.
    pub fg: Color,
    /// Secondary foreground (metadata, hints).
    pub fg_dim: Color,
    /// Background.
    pub bg: Color,
    /// Focused borders and selection.
    pub highlight: Color,
    /// Completed checkboxes.
    pub success: Color,
    /// Validation and failure messages.
    pub error: Color,
    /// Status bar background.
    pub bar_bg: Color,
}

const LIGHT: Palette = Palette {
    fg: Color::Black,
    fg_dim: Color::DarkGray,
    bg: Color::White,
    highlight: Color::Blue,
    success: Color::Green,
    error: Color::Red,
    bar_bg: Color::Rgb(220, 220, 235),
};

const DARK: Palette = Palette {
    fg: Color::White,
    fg_dim: Color::Gray,
    bg: Color::Black,
    highlight: Color::Cyan,
    success: Color::LightGreen,
    error: Color::LightRed,
    bar_bg: Color::Rgb(30, 30, 50),
};

impl Palette {
    /// Normal text style.
    #[must_use]
    pub fn normal(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Dimmed text style (timestamps, hints).
    #[must_use]
    pub fn dimmed(&self) -> Style {
        Style::default().fg(self.fg_dim).bg(self.bg)
    }

    /// Bold text style.
    #[must_use]
    pub fn bold(&self) -> Style {
        self.normal().add_modifier(Modifier::BOLD)
    }

    /// Highlighted text style (focused panel borders, active buttons).
    #[must_use]
    pub fn highlighted(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .bg(self.bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Selected item style (in lists).
    #[must_use]
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.bg)
            .bg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Completed task title.
    #[must_use]
    pub fn done(&self) -> Style {
        self.dimmed().add_modifier(Modifier::CROSSED_OUT)
    }

    /// Checkbox of a completed task.
    #[must_use]
    pub fn success(&self) -> Style {
        Style::default().fg(self.success).bg(self.bg)
    }

    /// Error messages.
    #[must_use]
    pub fn error(&self) -> Style {
        Style::default().fg(self.error).bg(self.bg)
    }

    /// Status bar background.
    #[must_use]
    pub fn status_bar(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bar_bg)
    }

    /// Border style depending on focus.
    #[must_use]
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.highlighted()
        } else {
            self.normal()
        }
    }
}
