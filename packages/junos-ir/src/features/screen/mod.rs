//! Security screens lowered to deny-first packet filters

pub mod domain;
pub mod infrastructure;

pub use domain::{Screen, ScreenAction, ScreenOption};
pub use infrastructure::lower_screen;
