//! Layered lowering configuration
//!
//! Level 1 picks a preset, level 2 overrides single sections through
//! closures, level 3 loads everything from a versioned YAML file.

use super::error::{ConfigError, ConfigResult};
use super::io::{ConfigExportV1, ConfigOverrides, SUPPORTED_VERSIONS};
use super::preset::Preset;
use super::sections::{DiagnosticsConfig, FirewallConfig, NatConfig, PolicyConfig};
use super::validation::Validatable;
use std::path::Path;

/// Complete configuration for one lowering run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoweringConfig {
    preset: Preset,
    pub firewall: FirewallConfig,
    pub policy: PolicyConfig,
    pub nat: NatConfig,
    pub diagnostics: DiagnosticsConfig,
}

impl LoweringConfig {
    /// Level 1: complete defaults from a preset
    pub fn preset(preset: Preset) -> Self {
        Self {
            preset,
            firewall: FirewallConfig::from_preset(preset),
            policy: PolicyConfig::from_preset(preset),
            nat: NatConfig::from_preset(preset),
            diagnostics: DiagnosticsConfig::from_preset(preset),
        }
    }

    /// Level 2: override the firewall section
    pub fn firewall<F>(mut self, f: F) -> Self
    where
        F: FnOnce(FirewallConfig) -> FirewallConfig,
    {
        self.firewall = f(self.firewall);
        self
    }

    /// Level 2: override the policy section
    pub fn policy<F>(mut self, f: F) -> Self
    where
        F: FnOnce(PolicyConfig) -> PolicyConfig,
    {
        self.policy = f(self.policy);
        self
    }

    /// Level 2: override the NAT section
    pub fn nat<F>(mut self, f: F) -> Self
    where
        F: FnOnce(NatConfig) -> NatConfig,
    {
        self.nat = f(self.nat);
        self
    }

    /// Level 2: override the diagnostics section
    pub fn diagnostics<F>(mut self, f: F) -> Self
    where
        F: FnOnce(DiagnosticsConfig) -> DiagnosticsConfig,
    {
        self.diagnostics = f(self.diagnostics);
        self
    }

    pub fn get_preset(&self) -> Preset {
        self.preset
    }

    /// Validate every section
    pub fn validate(&self) -> ConfigResult<()> {
        let sections: [&dyn Validatable; 4] =
            [&self.firewall, &self.policy, &self.nat, &self.diagnostics];
        for section in sections {
            section.validate()?;
        }
        Ok(())
    }

    /// Level 3: load from a YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loading lowering config");
        Self::from_yaml_str(&content)
    }

    /// Level 3: load from YAML text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let preset = Preset::from_str(&export.preset)
            .map_err(|_| ConfigError::UnknownPreset(export.preset.clone()))?;

        let mut config = Self::preset(preset);
        if let Some(overrides) = export.overrides {
            if let Some(firewall) = overrides.firewall {
                config.firewall = firewall;
            }
            if let Some(policy) = overrides.policy {
                config.policy = policy;
            }
            if let Some(nat) = overrides.nat {
                config.nat = nat;
            }
            if let Some(diagnostics) = overrides.diagnostics {
                config.diagnostics = diagnostics;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Export as YAML v1 with every section spelled out
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(1),
            preset: self.preset.to_string(),
            overrides: Some(ConfigOverrides {
                firewall: Some(self.firewall.clone()),
                policy: Some(self.policy.clone()),
                nat: Some(self.nat.clone()),
                diagnostics: Some(self.diagnostics.clone()),
            }),
        };

        serde_yaml::to_string(&export).map_err(ConfigError::Yaml)
    }
}

impl Default for LoweringConfig {
    fn default() -> Self {
        Self::preset(Preset::Default)
    }
}
