//! Navigation-bar descriptors.

use crate::icons::Image;
use crate::styles::ThemeType;

pub const SHOW_SET_SELECTION_MENU_BTN: &str = "show-set-selection-menu-btn";
pub const BACK_BTN: &str = "back-btn";

/// What pressing a top-bar element does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopBarAction {
    DismissScreen,
    ShowSetSelectionMenu,
}

/// An icon with a variant for each theme.
///
/// There is no way to build one without both images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemedIcon {
    light: Image,
    dark: Image,
}

impl ThemedIcon {
    pub fn new(light: Image, dark: Image) -> Self {
        Self { light, dark }
    }

    pub fn for_theme(&self, theme: ThemeType) -> &Image {
        match theme {
            ThemeType::Light => &self.light,
            ThemeType::Dark => &self.dark,
        }
    }
}

/// A button at either end of the top bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopBarButton {
    pub test_id: String,
    pub text: Option<String>,
    pub icon: ThemedIcon,
    pub on_press: TopBarAction,
}

/// Top bar whose title is itself a touch target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TouchableTopBar {
    pub test_id: String,
    pub title: String,
    pub icon: Option<Image>,
    pub on_press: TopBarAction,
    pub left_button: TopBarButton,
    pub right_button: Option<TopBarButton>,
}
