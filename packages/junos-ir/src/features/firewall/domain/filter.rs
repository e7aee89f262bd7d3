//! Firewall filters and terms

use super::from::FirewallFrom;
use super::then::FirewallThen;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirewallTerm {
    pub name: String,
    pub froms: Vec<FirewallFrom>,
    pub thens: Vec<FirewallThen>,
    /// Term belongs to an `inet6` filter
    pub ipv6: bool,
}

impl FirewallTerm {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_from(mut self, from: FirewallFrom) -> Self {
        self.froms.push(from);
        self
    }

    pub fn with_then(mut self, then: FirewallThen) -> Self {
        self.thens.push(then);
        self
    }

    /// True if any condition is an application match
    pub fn has_applications(&self) -> bool {
        self.froms
            .iter()
            .any(|from| matches!(from, FirewallFrom::Application(_)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirewallFilter {
    pub name: String,
    #[serde(default)]
    pub terms: Vec<FirewallTerm>,
}

impl FirewallFilter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            terms: Vec::new(),
        }
    }

    pub fn with_term(mut self, term: FirewallTerm) -> Self {
        self.terms.push(term);
        self
    }
}
