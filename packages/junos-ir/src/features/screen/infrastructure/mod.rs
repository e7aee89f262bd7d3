pub mod lowering;

pub use lowering::{lower_screen, option_header_space};
