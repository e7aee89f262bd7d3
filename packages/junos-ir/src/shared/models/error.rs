//! Error types for leaf payload construction
//!
//! The parser hands over already-validated payloads; these errors only
//! surface when leaf values are built from text (tests, JSON snapshots).

use thiserror::Error;

/// Leaf value construction error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Text is not `a.b.c.d/len`
    #[error("Invalid prefix '{0}'")]
    InvalidPrefix(String),

    /// Prefix length above 32
    #[error("Invalid prefix length {0}: must be at most 32")]
    PrefixLength(u8),

    /// Text is not an IPv4 address
    #[error("Invalid IPv4 address '{0}'")]
    InvalidAddress(String),

    /// Text is not `asn:value` or a well-known community name
    #[error("Invalid community '{0}'")]
    InvalidCommunity(String),

    /// Range with start above end
    #[error("Invalid range {start}-{end}: start exceeds end")]
    InvertedRange { start: u32, end: u32 },

    /// Name outside the vendor-predefined application table
    #[error("Unknown predefined application '{0}'")]
    UnknownBuiltin(String),
}

/// Result type alias for leaf construction
pub type ModelResult<T> = Result<T, ModelError>;
