//! NAT pools and address-book entries

use crate::shared::models::{Prefix, SubRange};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

fn default_port_translation() -> bool {
    true
}

/// Address range (and optional port range) a rule translates into
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NatPool {
    pub name: String,
    pub first: Ipv4Addr,
    pub last: Ipv4Addr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<SubRange>,
    /// `port no-translation` clears this
    #[serde(default = "default_port_translation")]
    pub port_translation: bool,
}

impl NatPool {
    pub fn new(name: impl Into<String>, first: Ipv4Addr, last: Ipv4Addr) -> Self {
        Self {
            name: name.into(),
            first,
            last,
            port: None,
            port_translation: true,
        }
    }

    /// Pool covering every address of `prefix`
    pub fn from_prefix(name: impl Into<String>, prefix: Prefix) -> Self {
        Self::new(name, prefix.first_address(), prefix.last_address())
    }

    pub fn with_port(mut self, port: SubRange) -> Self {
        self.port = Some(port);
        self
    }

    pub fn without_port_translation(mut self) -> Self {
        self.port_translation = false;
        self
    }
}

/// Named address-book entry referenced by rule matches
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBookEntry {
    pub name: String,
    #[serde(default)]
    pub prefixes: Vec<Prefix>,
}

impl AddressBookEntry {
    pub fn new(name: impl Into<String>, prefixes: Vec<Prefix>) -> Self {
        Self {
            name: name.into(),
            prefixes,
        }
    }
}
