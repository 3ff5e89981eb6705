// Presentational components shared by the screens

pub mod footer;
pub mod spaced_repetition_view;
pub mod top_bar;

pub use spaced_repetition_view::SpacedRepetitionView;
pub use top_bar::{TopBar, TopBarHitAreas};
