//! Per-pass configuration sections
//!
//! Each section carries the knobs of one lowering pass and validates its own
//! ranges. Sections start from a preset and are adjusted with the chained
//! setters.

use super::error::{ConfigError, ConfigResult};
use super::preset::Preset;
use crate::shared::models::SubRange;
use serde::{Deserialize, Serialize};

// ============================================================================
// Firewall
// ============================================================================

/// Firewall-filter lowering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirewallConfig {
    /// Maximum application-set nesting depth (1..=256)
    pub max_application_depth: usize,

    /// Treat a term whose only action is `nop` as accepting
    pub nop_implies_accept: bool,

    /// Treat a term without any action as denying
    pub missing_action_is_deny: bool,
}

impl FirewallConfig {
    pub const MAX_DEPTH_LIMIT: usize = 256;

    pub fn from_preset(preset: Preset) -> Self {
        let max_application_depth = match preset {
            Preset::Default => 32,
            Preset::Strict => 16,
            Preset::Permissive => 64,
        };
        Self {
            max_application_depth,
            nop_implies_accept: true,
            missing_action_is_deny: true,
        }
    }

    pub fn max_application_depth(mut self, depth: usize) -> Self {
        self.max_application_depth = depth;
        self
    }

    pub fn nop_implies_accept(mut self, enabled: bool) -> Self {
        self.nop_implies_accept = enabled;
        self
    }

    pub fn missing_action_is_deny(mut self, enabled: bool) -> Self {
        self.missing_action_is_deny = enabled;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_application_depth == 0 || self.max_application_depth > Self::MAX_DEPTH_LIMIT {
            return Err(ConfigError::range_with_hint(
                "max_application_depth",
                self.max_application_depth,
                1,
                Self::MAX_DEPTH_LIMIT,
                "Application-set expansion needs at least one level",
            ));
        }
        Ok(())
    }
}

impl Default for FirewallConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Default)
    }
}

// ============================================================================
// Policy
// ============================================================================

/// Policy-statement lowering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Append the end-of-policy return used when a policy is called
    pub emit_end_of_policy: bool,
}

impl PolicyConfig {
    pub fn from_preset(_preset: Preset) -> Self {
        Self {
            emit_end_of_policy: true,
        }
    }

    pub fn emit_end_of_policy(mut self, enabled: bool) -> Self {
        self.emit_end_of_policy = enabled;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Default)
    }
}

// ============================================================================
// NAT
// ============================================================================

/// NAT lowering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NatConfig {
    /// Port range for source pools with port translation (within 1..=65535)
    pub source_pat_range: SubRange,
}

impl NatConfig {
    pub const DEFAULT_PAT_RANGE: SubRange = SubRange {
        start: 1024,
        end: 63487,
    };

    pub fn from_preset(_preset: Preset) -> Self {
        Self {
            source_pat_range: Self::DEFAULT_PAT_RANGE,
        }
    }

    pub fn source_pat_range(mut self, range: SubRange) -> Self {
        self.source_pat_range = range;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let range = self.source_pat_range;
        if range.start == 0 || range.start > 65535 {
            return Err(ConfigError::range_with_hint(
                "source_pat_range.start",
                range.start,
                1,
                65535,
                "Port 0 cannot be assigned",
            ));
        }
        if range.end < range.start || range.end > 65535 {
            return Err(ConfigError::range_with_hint(
                "source_pat_range.end",
                range.end,
                range.start,
                65535,
                "End port must not precede the start port",
            ));
        }
        Ok(())
    }
}

impl Default for NatConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Default)
    }
}

// ============================================================================
// Diagnostics
// ============================================================================

/// Diagnostics recording
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Record pedantic diagnostics
    pub pedantic: bool,
}

impl DiagnosticsConfig {
    pub fn from_preset(preset: Preset) -> Self {
        Self {
            pedantic: matches!(preset, Preset::Strict),
        }
    }

    pub fn pedantic(mut self, enabled: bool) -> Self {
        self.pedantic = enabled;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self::from_preset(Preset::Default)
    }
}
