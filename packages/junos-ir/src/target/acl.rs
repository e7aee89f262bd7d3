//! Ordered packet filters

use super::header_space::HeaderSpace;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineAction {
    Permit,
    Deny,
}

impl fmt::Display for LineAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineAction::Permit => f.write_str("permit"),
            LineAction::Deny => f.write_str("deny"),
        }
    }
}

/// One (header-space predicate, action) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AclLine {
    pub name: String,
    pub header_space: HeaderSpace,
    pub action: LineAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policer: Option<String>,
}

impl AclLine {
    pub fn new(name: impl Into<String>, header_space: HeaderSpace, action: LineAction) -> Self {
        Self {
            name: name.into(),
            header_space,
            action,
            policer: None,
        }
    }
}

/// First-match list of lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpAccessList {
    pub name: String,
    pub lines: Vec<AclLine>,
}

impl IpAccessList {
    pub fn new(name: impl Into<String>, lines: Vec<AclLine>) -> Self {
        Self {
            name: name.into(),
            lines,
        }
    }
}
