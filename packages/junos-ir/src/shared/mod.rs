//! Shared module - Common types and utilities
//!
//! Leaf value types and the diagnostics sink used by every lowering slice.

pub mod diagnostics;
pub mod models;

// Re-exports for convenience
pub use diagnostics::{Diagnostic, Severity, Warnings};
pub use models::*;
