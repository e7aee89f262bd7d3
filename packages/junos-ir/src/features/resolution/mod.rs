//! Named-reference resolution
//!
//! # Architecture (Hexagonal)
//!
//! ```text
//! lowering passes
//!       ↓
//! domain/ (typed references, Resolve)
//!       ↓
//! ports/ (Registry)
//!       ↑
//! infrastructure/ (ConfigurationRegistry, RegistryBuilder)
//! ```

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::{ReferenceKind, Resolve};
pub use infrastructure::{ConfigurationRegistry, RegistryBuilder};
pub use ports::Registry;
