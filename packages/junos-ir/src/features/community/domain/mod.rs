//! Community and AS-path definitions

use crate::shared::models::StandardCommunity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommunityMember {
    Literal(StandardCommunity),
    /// Vendor regex over `asn:value` text
    Regex(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityDefinition {
    pub name: String,
    #[serde(default)]
    pub members: Vec<CommunityMember>,
    #[serde(default)]
    pub invert_match: bool,
}

impl CommunityDefinition {
    pub fn new(name: impl Into<String>, members: Vec<CommunityMember>) -> Self {
        Self {
            name: name.into(),
            members,
            invert_match: false,
        }
    }
}

/// `as-path <name> <regex>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsPath {
    pub name: String,
    pub regex: String,
}

impl AsPath {
    pub fn new(name: impl Into<String>, regex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            regex: regex.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsPathGroup {
    pub name: String,
    #[serde(default)]
    pub entries: Vec<AsPath>,
}
