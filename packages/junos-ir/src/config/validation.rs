//! Configuration validation

use super::error::ConfigResult;
use super::sections::{DiagnosticsConfig, FirewallConfig, NatConfig, PolicyConfig};

/// Trait for validatable configuration objects
///
/// # Example
/// ```rust,ignore
/// use junos_ir::config::Validatable;
///
/// fn checked<C: Validatable>(config: C) -> ConfigResult<C> {
///     config.validate()?;
///     Ok(config)
/// }
/// ```
pub trait Validatable {
    /// Validate the configuration
    ///
    /// Returns `Ok(())` if valid, `Err(ConfigError)` with details if invalid.
    fn validate(&self) -> ConfigResult<()>;

    /// Get the configuration name for error messages
    fn config_name(&self) -> &'static str {
        "Config"
    }
}

impl Validatable for FirewallConfig {
    fn validate(&self) -> ConfigResult<()> {
        FirewallConfig::validate(self)
    }

    fn config_name(&self) -> &'static str {
        "FirewallConfig"
    }
}

impl Validatable for PolicyConfig {
    fn validate(&self) -> ConfigResult<()> {
        PolicyConfig::validate(self)
    }

    fn config_name(&self) -> &'static str {
        "PolicyConfig"
    }
}

impl Validatable for NatConfig {
    fn validate(&self) -> ConfigResult<()> {
        NatConfig::validate(self)
    }

    fn config_name(&self) -> &'static str {
        "NatConfig"
    }
}

impl Validatable for DiagnosticsConfig {
    fn validate(&self) -> ConfigResult<()> {
        DiagnosticsConfig::validate(self)
    }

    fn config_name(&self) -> &'static str {
        "DiagnosticsConfig"
    }
}
