//! Screen stack, screen options and top-bar descriptors.

pub mod host;
pub mod options;
pub mod top_bar;

pub use host::{CommandQueue, ComponentId, NavigationCommand, NavigationHost};
pub use options::{OptionsPatch, ScreenOptions, TopBarOptions};
pub use top_bar::{
    ThemedIcon, TopBarAction, TopBarButton, TouchableTopBar, BACK_BTN,
    SHOW_SET_SELECTION_MENU_BTN,
};
