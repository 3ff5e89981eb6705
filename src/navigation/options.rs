//! Per-screen presentation options owned by the navigation host.

use ratatui::style::Color;

/// Top bar presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TopBarOptions {
    pub visible: bool,
    pub background: Color,
    pub title_color: Color,
    pub button_color: Color,
}

/// Live options of a mounted screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenOptions {
    pub top_bar: TopBarOptions,
    /// Screen body background
    pub background: Color,
    /// Whether Esc / the back button may dismiss the screen
    pub dismissable: bool,
}

/// A partial update to [`ScreenOptions`]. `None` fields are left untouched by
/// [`ScreenOptions::merge`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OptionsPatch {
    pub top_bar_visible: Option<bool>,
    pub top_bar_background: Option<Color>,
    pub top_bar_title_color: Option<Color>,
    pub top_bar_button_color: Option<Color>,
    pub background: Option<Color>,
    pub dismissable: Option<bool>,
}

impl OptionsPatch {
    /// A patch that changes nothing
    pub const EMPTY: Self = Self {
        top_bar_visible: None,
        top_bar_background: None,
        top_bar_title_color: None,
        top_bar_button_color: None,
        background: None,
        dismissable: None,
    };

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

impl ScreenOptions {
    /// Overwrite every field the patch sets.
    pub fn merge(&mut self, patch: &OptionsPatch) {
        if let Some(visible) = patch.top_bar_visible {
            self.top_bar.visible = visible;
        }
        if let Some(color) = patch.top_bar_background {
            self.top_bar.background = color;
        }
        if let Some(color) = patch.top_bar_title_color {
            self.top_bar.title_color = color;
        }
        if let Some(color) = patch.top_bar_button_color {
            self.top_bar.button_color = color;
        }
        if let Some(color) = patch.background {
            self.background = color;
        }
        if let Some(dismissable) = patch.dismissable {
            self.dismissable = dismissable;
        }
    }

    /// Copy of `self` with `patch` merged in
    pub fn merged(mut self, patch: &OptionsPatch) -> Self {
        self.merge(patch);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ScreenOptions {
        ScreenOptions {
            top_bar: TopBarOptions {
                visible: true,
                background: Color::Black,
                title_color: Color::White,
                button_color: Color::White,
            },
            background: Color::Reset,
            dismissable: true,
        }
    }

    #[test]
    fn test_merge_only_touches_set_fields() {
        let patch = OptionsPatch {
            top_bar_background: Some(Color::Blue),
            ..OptionsPatch::EMPTY
        };
        let merged = base().merged(&patch);

        assert_eq!(merged.top_bar.background, Color::Blue);
        assert_eq!(merged.top_bar.title_color, Color::White);
        assert!(merged.top_bar.visible);
        assert!(merged.dismissable);
    }

    #[test]
    fn test_empty_patch_is_identity() {
        assert!(OptionsPatch::default().is_empty());
        assert_eq!(base().merged(&OptionsPatch::EMPTY), base());
    }
}
