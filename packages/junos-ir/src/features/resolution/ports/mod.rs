//! Resolution Ports

pub mod registry;

pub use registry::Registry;
