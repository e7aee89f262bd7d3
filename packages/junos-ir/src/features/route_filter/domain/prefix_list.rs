use crate::shared::models::Prefix;
use serde::{Deserialize, Serialize};

/// Named list of IPv4 prefixes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixList {
    pub name: String,
    #[serde(default)]
    pub prefixes: Vec<Prefix>,
}

impl PrefixList {
    pub fn new(name: impl Into<String>, prefixes: Vec<Prefix>) -> Self {
        Self {
            name: name.into(),
            prefixes,
        }
    }
}
