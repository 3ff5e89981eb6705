//! Theme and style system for lingodeck
//!
//! Provides the light and dark palettes and the `ThemeStore` that screens
//! read the current theme from.

use crate::observable::{Observable, Subscription};
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// List selection indicator shown next to the selected item
pub const LIST_HIGHLIGHT_SYMBOL: &str = "» ";

/// Off-white used for icons and text on dark backgrounds
pub const MILK: Color = Color::Rgb(245, 242, 232);

/// Theme type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeType {
    Light,
    #[default]
    Dark,
}

impl ThemeType {
    /// The other theme
    pub fn toggled(self) -> Self {
        match self {
            ThemeType::Light => ThemeType::Dark,
            ThemeType::Dark => ThemeType::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ThemeType::Light => "light",
            ThemeType::Dark => "dark",
        }
    }
}

impl FromStr for ThemeType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "light" => ThemeType::Light,
            _ => ThemeType::Dark,
        })
    }
}

/// Color palette for the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Theme type
    pub theme_type: ThemeType,

    // === Accents ===
    /// Main accent color (titles, focused borders)
    pub primary: Color,
    /// Secondary accent (set names, categories)
    pub secondary: Color,

    // === Semantic Colors ===
    /// Items due for review
    pub due: Color,
    /// Items never studied
    pub new: Color,
    /// Failures
    pub error: Color,

    // === Text Colors ===
    /// Main text color
    pub text: Color,
    /// Muted/secondary text
    pub text_muted: Color,
    /// Key hints and highlights
    pub text_emphasis: Color,

    // === UI Colors ===
    /// Default border color
    pub border: Color,
    /// Selection highlight background
    pub highlight_bg: Color,
    /// Screen background
    pub background: Color,
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
        }
    }

    /// Dark theme - for dark terminal backgrounds
    pub fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,
            primary: Color::Cyan,
            secondary: Color::Magenta,
            due: Color::Yellow,
            new: Color::Green,
            error: Color::Red,
            text: MILK,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Yellow,
            border: Color::DarkGray,
            highlight_bg: Color::DarkGray,
            background: Color::Reset,
        }
    }

    /// Light theme - for light terminal backgrounds
    pub fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,
            primary: Color::Blue,
            secondary: Color::Magenta,
            due: Color::Rgb(180, 120, 0), // Darker yellow/orange
            new: Color::Rgb(0, 130, 60),
            error: Color::Red,
            text: Color::Black,
            text_muted: Color::DarkGray,
            text_emphasis: Color::Blue,
            border: Color::Gray,
            highlight_bg: Color::Gray,
            background: Color::Reset,
        }
    }

    // === Style Helpers ===

    /// Style for primary/title text
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for regular text
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Style for muted/secondary text
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Style for emphasized text (key hints)
    pub fn emphasis_style(&self) -> Style {
        Style::default()
            .fg(self.text_emphasis)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for error messages
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Style for unfocused borders
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Style for list item highlight (selected row)
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.text_emphasis)
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Background style
    pub fn background_style(&self) -> Style {
        Style::default().bg(self.background)
    }
}

/// Read-mostly source of the current theme, shared by every screen.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    theme: Observable<ThemeType>,
}

impl ThemeStore {
    pub fn new(theme_type: ThemeType) -> Self {
        Self {
            theme: Observable::new(theme_type),
        }
    }

    pub fn theme_type(&self) -> ThemeType {
        *self.theme.get()
    }

    /// The palette for the current theme
    pub fn theme(&self) -> Theme {
        Theme::new(self.theme_type())
    }

    /// Change the theme, notifying subscribers only when it actually changes.
    pub fn set_theme(&self, theme_type: ThemeType) -> bool {
        if self.theme_type() == theme_type {
            return false;
        }
        self.theme.set(theme_type);
        true
    }

    pub fn subscribe(&self, listener: impl Fn(&ThemeType) + 'static) -> Subscription {
        self.theme.subscribe(listener)
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(ThemeType::default())
    }
}
