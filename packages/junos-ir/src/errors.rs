//! Error types for junos-ir
//!
//! Only fatal, per-device conversion failures live here. Recoverable gaps
//! (undefined references, unsupported constructs) go to the diagnostics
//! sink and never surface as errors.

use crate::config::ConfigError;
use thiserror::Error;

/// Fatal lowering failure for one device
#[derive(Debug, Error)]
pub enum LoweringError {
    /// `from family` names a family with no lowering
    #[error("policy-statement '{policy}', term '{term}': no lowering for family '{family}'")]
    UnsupportedFamily {
        policy: String,
        term: String,
        family: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internally inconsistent configuration state
    #[error("Conversion error: {0}")]
    Conversion(String),
}

impl LoweringError {
    pub fn conversion(msg: impl Into<String>) -> Self {
        LoweringError::Conversion(msg.into())
    }
}

/// Result type alias for lowering operations
pub type Result<T> = std::result::Result<T, LoweringError>;
