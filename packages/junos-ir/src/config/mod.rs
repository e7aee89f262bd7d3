//! Lowering configuration
//!
//! Three levels of control:
//! - Level 1: `Preset` for complete defaults
//! - Level 2: per-section closures on `LoweringConfig`
//! - Level 3: versioned YAML (`version: 1`)
//!
//! # Examples
//!
//! ```rust,ignore
//! use junos_ir::config::{LoweringConfig, Preset};
//!
//! let config = LoweringConfig::preset(Preset::Strict)
//!     .firewall(|c| c.max_application_depth(8));
//!
//! let config = LoweringConfig::from_yaml("lowering.yaml")?;
//! ```

pub mod error;
pub mod io;
pub mod lowering_config;
pub mod preset;
pub mod sections;
pub mod validation;

pub use error::{ConfigError, ConfigResult};
pub use io::{ConfigExportV1, ConfigOverrides};
pub use lowering_config::LoweringConfig;
pub use preset::Preset;
pub use sections::{DiagnosticsConfig, FirewallConfig, NatConfig, PolicyConfig};
pub use validation::Validatable;
