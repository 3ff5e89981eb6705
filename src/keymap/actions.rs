//! Semantic actions triggered by keyboard shortcuts.

use serde::{Deserialize, Serialize};

/// All user actions the screens understand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Navigation ============
    /// Move selection up in a list
    MoveUp,
    /// Move selection down in a list
    MoveDown,
    /// Go to the first item
    GoToTop,
    /// Go to the last item
    GoToEnd,

    // ============ Selection ============
    /// Confirm selection (Enter)
    Confirm,
    /// Cancel / go back (Esc)
    Cancel,

    // ============ Global ============
    /// Quit the application
    Quit,
    /// Switch between light and dark themes
    ToggleTheme,

    // ============ Spaced repetition ============
    /// Open the set selection menu
    SelectSet,
    /// Recount due and new items
    Refresh,
}

impl Action {
    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::GoToTop => "Go to top",
            Action::GoToEnd => "Go to end",
            Action::Confirm => "Confirm",
            Action::Cancel => "Cancel / Go back",
            Action::Quit => "Quit",
            Action::ToggleTheme => "Toggle theme",
            Action::SelectSet => "Select set",
            Action::Refresh => "Refresh counts",
        }
    }

    /// Get action category for grouping in help display
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp | Action::MoveDown | Action::GoToTop | Action::GoToEnd => "Navigation",
            Action::Confirm | Action::Cancel => "Selection",
            Action::Quit | Action::ToggleTheme => "Global",
            Action::SelectSet | Action::Refresh => "Spaced Repetition",
        }
    }
}
