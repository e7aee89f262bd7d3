//! Append-only diagnostics channel
//!
//! Recoverable semantic gaps (undefined references, unsupported constructs,
//! empty expansions worth flagging) are recorded here and lowering moves on.
//! Nothing in the lowering passes reads the sink back.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Configuration is suspicious or references something that is not there
    RedFlag,
    /// Parseable construct with no lowering
    Unimplemented,
    /// Stylistic or informational
    Pedantic,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::RedFlag => "red_flag",
            Severity::Unimplemented => "unimplemented",
            Severity::Pedantic => "pedantic",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

/// Per-device diagnostics sink
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Warnings {
    entries: Vec<Diagnostic>,
    #[serde(skip)]
    pedantic: bool,
}

impl Warnings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink that also records pedantic diagnostics
    pub fn with_pedantic(pedantic: bool) -> Self {
        Self {
            entries: Vec::new(),
            pedantic,
        }
    }

    /// Record a diagnostic (fire-and-forget)
    pub fn emit(&mut self, severity: Severity, message: impl Into<String>) {
        let message = message.into();
        match severity {
            Severity::RedFlag => tracing::warn!(target: "junos_ir::diagnostics", "{}", message),
            Severity::Unimplemented => {
                tracing::debug!(target: "junos_ir::diagnostics", "unimplemented: {}", message)
            }
            Severity::Pedantic => {
                if !self.pedantic {
                    return;
                }
                tracing::trace!(target: "junos_ir::diagnostics", "pedantic: {}", message)
            }
        }
        self.entries.push(Diagnostic { severity, message });
    }

    pub fn red_flag(&mut self, message: impl Into<String>) {
        self.emit(Severity::RedFlag, message);
    }

    pub fn unimplemented(&mut self, message: impl Into<String>) {
        self.emit(Severity::Unimplemented, message);
    }

    pub fn pedantic(&mut self, message: impl Into<String>) {
        self.emit(Severity::Pedantic, message);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.entries
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(|d| d.message.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_records_in_order() {
        let mut warnings = Warnings::new();
        warnings.red_flag("first");
        warnings.unimplemented("second");
        assert_eq!(warnings.messages(), vec!["first", "second"]);
        assert_eq!(warnings.count(Severity::RedFlag), 1);
        assert_eq!(warnings.count(Severity::Unimplemented), 1);
    }

    #[test]
    fn test_pedantic_dropped_unless_enabled() {
        let mut quiet = Warnings::new();
        quiet.pedantic("noise");
        assert!(quiet.is_empty());

        let mut loud = Warnings::with_pedantic(true);
        loud.pedantic("noise");
        assert_eq!(loud.len(), 1);
    }
}
