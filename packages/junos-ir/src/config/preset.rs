//! Preset configurations
//!
//! Presets provide complete default configurations for common use cases.

use serde::{Deserialize, Serialize};

/// Configuration preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Everyday snapshot lowering
    ///
    /// - Application nesting depth 32
    /// - Pedantic diagnostics off
    #[default]
    Default,

    /// Audit runs
    ///
    /// - Application nesting depth 16
    /// - Pedantic diagnostics on
    Strict,

    /// Deeply nested vendor configurations
    ///
    /// - Application nesting depth 64
    /// - Pedantic diagnostics off
    Permissive,
}

impl Preset {
    /// Parse preset from string
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "strict" => Ok(Self::Strict),
            "permissive" => Ok(Self::Permissive),
            _ => Err(format!(
                "Unknown preset '{}'. Valid presets: default, strict, permissive",
                s
            )),
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Strict => "strict",
            Self::Permissive => "permissive",
        }
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_parsing() {
        assert_eq!(Preset::from_str("default").unwrap(), Preset::Default);
        assert_eq!(Preset::from_str("STRICT").unwrap(), Preset::Strict);
        assert_eq!(Preset::from_str("permissive").unwrap(), Preset::Permissive);
        assert!(Preset::from_str("thorough").is_err());
    }

    #[test]
    fn test_preset_display() {
        assert_eq!(Preset::Default.to_string(), "default");
        assert_eq!(Preset::Strict.to_string(), "strict");
        assert_eq!(Preset::Permissive.to_string(), "permissive");
    }

    #[test]
    fn test_default_preset() {
        assert_eq!(Preset::default(), Preset::Default);
    }
}
