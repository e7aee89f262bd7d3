//! BGP standard communities

use super::error::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 32-bit standard community, written `asn:value`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StandardCommunity(u32);

impl StandardCommunity {
    pub const NO_EXPORT: StandardCommunity = StandardCommunity(0xFFFF_FF01);
    pub const NO_ADVERTISE: StandardCommunity = StandardCommunity(0xFFFF_FF02);
    pub const NO_EXPORT_SUBCONFED: StandardCommunity = StandardCommunity(0xFFFF_FF03);

    pub fn new(asn: u16, value: u16) -> Self {
        Self((u32::from(asn) << 16) | u32::from(value))
    }

    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> u32 {
        self.0
    }

    pub fn asn(&self) -> u16 {
        (self.0 >> 16) as u16
    }

    pub fn value(&self) -> u16 {
        (self.0 & 0xFFFF) as u16
    }

    /// Parse `asn:value` or a well-known name
    pub fn parse(text: &str) -> ModelResult<Self> {
        let text = text.trim();
        match text {
            "no-export" => return Ok(Self::NO_EXPORT),
            "no-advertise" => return Ok(Self::NO_ADVERTISE),
            "no-export-subconfed" => return Ok(Self::NO_EXPORT_SUBCONFED),
            _ => {}
        }
        let (asn, value) = text
            .split_once(':')
            .ok_or_else(|| ModelError::InvalidCommunity(text.to_string()))?;
        let asn: u16 = asn
            .parse()
            .map_err(|_| ModelError::InvalidCommunity(text.to_string()))?;
        let value: u16 = value
            .parse()
            .map_err(|_| ModelError::InvalidCommunity(text.to_string()))?;
        Ok(Self::new(asn, value))
    }
}

impl fmt::Display for StandardCommunity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.asn(), self.value())
    }
}

impl FromStr for StandardCommunity {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for StandardCommunity {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<StandardCommunity> for String {
    fn from(community: StandardCommunity) -> Self {
        community.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_literal() {
        let community = StandardCommunity::parse("65000:100").unwrap();
        assert_eq!(community.asn(), 65000);
        assert_eq!(community.value(), 100);
        assert_eq!(community.to_string(), "65000:100");
    }

    #[test]
    fn test_parse_well_known() {
        assert_eq!(
            StandardCommunity::parse("no-export").unwrap(),
            StandardCommunity::NO_EXPORT
        );
        assert_eq!(StandardCommunity::NO_EXPORT.to_string(), "65535:65281");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(StandardCommunity::parse("65000").is_err());
        assert!(StandardCommunity::parse("70000:1").is_err());
    }
}
