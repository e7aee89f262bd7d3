pub mod expander;

pub use expander::{ApplicationExpander, ExpandedLeaf};
