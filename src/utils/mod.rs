pub mod layout;
pub mod list_navigation;
pub mod path;

pub use layout::{center_popup, create_standard_layout, rect_contains};
pub use list_navigation::ListStateExt;
pub use path::{
    expand_path, get_config_dir, get_config_path, get_data_dir, get_log_dir, CONFIG_DIR_ENV,
};
