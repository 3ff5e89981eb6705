//! Icon provider system for the application.
//!
//! Supports multiple icon sets: NerdFonts, Unicode emojis, and ASCII fallback.
//! Auto-detects terminal capabilities and allows user override via environment variable.

use ratatui::style::Color;
use std::env;

use crate::styles::MILK;

/// Environment variable forcing an icon set ("nerd", "unicode", "ascii")
pub const ICONS_ENV: &str = "LINGODECK_ICONS";

/// Available icon sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSet {
    /// NerdFonts icons (requires NerdFont-patched font)
    NerdFonts,
    /// Unicode emoji icons (works in most modern terminals)
    Unicode,
    /// ASCII-only fallback (maximum compatibility)
    Ascii,
}

impl IconSet {
    /// Detect the best icon set for the current terminal
    pub fn detect() -> Self {
        if let Ok(icons) = env::var(ICONS_ENV) {
            return Self::parse(&icons);
        }

        if Self::likely_supports_nerd_fonts() {
            IconSet::NerdFonts
        } else {
            IconSet::Unicode
        }
    }

    /// Parse a user-supplied icon set name, defaulting to Unicode
    pub fn parse(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "nerd" | "nerdfont" | "nerdfonts" => IconSet::NerdFonts,
            "ascii" | "plain" => IconSet::Ascii,
            _ => IconSet::Unicode,
        }
    }

    /// Heuristic to detect if terminal likely supports NerdFonts
    fn likely_supports_nerd_fonts() -> bool {
        if let Ok(term_program) = env::var("TERM_PROGRAM") {
            matches!(
                term_program.as_str(),
                "iTerm.app" | "WezTerm" | "Alacritty" | "kitty" | "Ghostty"
            )
        } else {
            false
        }
    }
}

/// A glyph with an optional fixed color, the terminal stand-in for an image asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub glyph: String,
    /// `None` means "use the surrounding text color"
    pub color: Option<Color>,
}

impl Image {
    pub fn new(glyph: impl Into<String>, color: Option<Color>) -> Self {
        Self {
            glyph: glyph.into(),
            color,
        }
    }
}

/// Icon provider that returns appropriate icons based on the selected icon set
#[derive(Debug, Clone, Copy)]
pub struct Icons {
    icon_set: IconSet,
}

impl Icons {
    /// Create a new icon provider with auto-detection
    pub fn new() -> Self {
        Self {
            icon_set: IconSet::detect(),
        }
    }

    /// Create an icon provider with a specific icon set
    pub fn with_icon_set(icon_set: IconSet) -> Self {
        Self { icon_set }
    }

    pub fn icon_set(&self) -> IconSet {
        self.icon_set
    }

    pub fn arrow_left(&self) -> &'static str {
        match self.icon_set {
            IconSet::NerdFonts => "\u{f060}",
            IconSet::Unicode => "\u{2190}", // ←
            IconSet::Ascii => "<-",
        }
    }

    /// Back arrow for light backgrounds
    pub fn arrow_left_black(&self) -> Image {
        Image::new(self.arrow_left(), Some(Color::Black))
    }

    /// Back arrow for dark backgrounds
    pub fn arrow_left_milk(&self) -> Image {
        Image::new(self.arrow_left(), Some(MILK))
    }

    pub fn due(&self) -> &'static str {
        match self.icon_set {
            IconSet::NerdFonts => "\u{f017}",
            IconSet::Unicode => "\u{23f0}", // ⏰
            IconSet::Ascii => "[DUE]",
        }
    }

    pub fn new_item(&self) -> &'static str {
        match self.icon_set {
            IconSet::NerdFonts => "\u{f005}",
            IconSet::Unicode => "\u{2728}", // ✨
            IconSet::Ascii => "[NEW]",
        }
    }

    pub fn category(&self) -> &'static str {
        match self.icon_set {
            IconSet::NerdFonts => "\u{f02b}",
            IconSet::Unicode => "\u{1f3f7}", // 🏷
            IconSet::Ascii => "#",
        }
    }

    pub fn loading(&self) -> &'static str {
        match self.icon_set {
            IconSet::NerdFonts => "\u{f021}",
            IconSet::Unicode => "\u{23f3}", // ⏳
            IconSet::Ascii => "...",
        }
    }

    pub fn error(&self) -> &'static str {
        match self.icon_set {
            IconSet::NerdFonts => "\u{ebfb}",
            IconSet::Unicode => "\u{274c}", // ❌
            IconSet::Ascii => "[X]",
        }
    }

    pub fn active_set(&self) -> &'static str {
        match self.icon_set {
            IconSet::NerdFonts => "\u{f00c}",
            IconSet::Unicode => "\u{2713}", // ✓
            IconSet::Ascii => "[*]",
        }
    }

    /// Flag for a learning language, e.g. "es" -> 🇪🇸
    ///
    /// ASCII mode (and languages without a known country) fall back to the
    /// bracketed language code.
    pub fn flag(&self, language_code: &str) -> Image {
        let code = language_code.trim().to_lowercase();
        let glyph = match (self.icon_set, country_for_language(&code)) {
            (IconSet::Ascii, _) | (_, None) => format!("[{}]", code.to_uppercase()),
            (_, Some(country)) => regional_indicator_flag(country),
        };
        Image::new(glyph, None)
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::new()
    }
}

/// Country whose flag represents a language
fn country_for_language(code: &str) -> Option<&'static str> {
    Some(match code {
        "en" => "GB",
        "es" => "ES",
        "fr" => "FR",
        "de" => "DE",
        "it" => "IT",
        "pt" => "PT",
        "nl" => "NL",
        "sv" => "SE",
        "ru" => "RU",
        "ja" => "JP",
        "ko" => "KR",
        "zh" => "CN",
        "vi" => "VN",
        "th" => "TH",
        "tr" => "TR",
        "pl" => "PL",
        "el" => "GR",
        "ar" => "SA",
        "hi" => "IN",
        _ => return None,
    })
}

fn regional_indicator_flag(country: &str) -> String {
    country
        .chars()
        .filter_map(|c| char::from_u32(0x1F1E6 + (c as u32 - 'A' as u32)))
        .collect()
}
