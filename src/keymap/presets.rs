//! Preset keymaps: Standard, Vim, Emacs

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};

/// Available keymap presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Arrows, Enter, Esc
    #[default]
    Standard,
    /// hjkl-style navigation
    Vim,
    /// Ctrl+N/P navigation
    Emacs,
}

impl KeymapPreset {
    /// Get all key bindings for this preset
    pub fn bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = match self {
            KeymapPreset::Standard => vec![
                KeyBinding::new("up", Action::MoveUp),
                KeyBinding::new("down", Action::MoveDown),
                KeyBinding::new("home", Action::GoToTop),
                KeyBinding::new("end", Action::GoToEnd),
                KeyBinding::new("esc", Action::Cancel),
                KeyBinding::new("s", Action::SelectSet),
                KeyBinding::new("r", Action::Refresh),
            ],
            KeymapPreset::Vim => vec![
                KeyBinding::new("k", Action::MoveUp),
                KeyBinding::new("up", Action::MoveUp),
                KeyBinding::new("j", Action::MoveDown),
                KeyBinding::new("down", Action::MoveDown),
                KeyBinding::new("g", Action::GoToTop),
                KeyBinding::new("shift+g", Action::GoToEnd),
                KeyBinding::new("esc", Action::Cancel),
                KeyBinding::new("h", Action::Cancel),
                KeyBinding::new("s", Action::SelectSet),
                KeyBinding::new("r", Action::Refresh),
            ],
            KeymapPreset::Emacs => vec![
                KeyBinding::new("ctrl+p", Action::MoveUp),
                KeyBinding::new("up", Action::MoveUp),
                KeyBinding::new("ctrl+n", Action::MoveDown),
                KeyBinding::new("down", Action::MoveDown),
                KeyBinding::new("alt+shift+,", Action::GoToTop), // M-<
                KeyBinding::new("alt+shift+.", Action::GoToEnd), // M->
                KeyBinding::new("ctrl+g", Action::Cancel),
                KeyBinding::new("esc", Action::Cancel),
                KeyBinding::new("ctrl+x", Action::SelectSet),
                KeyBinding::new("ctrl+r", Action::Refresh),
            ],
        };

        // Shared by every preset
        bindings.extend([
            KeyBinding::new("enter", Action::Confirm),
            KeyBinding::new("q", Action::Quit),
            KeyBinding::new("ctrl+c", Action::Quit),
            KeyBinding::new("t", Action::ToggleTheme),
        ]);
        bindings
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Vim => "Vim",
            KeymapPreset::Emacs => "Emacs",
        }
    }
}
