//! Policy-statements and their terms

use super::from::{PolicyFrom, PolicyTo};
use super::then::PolicyThen;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyTerm {
    pub name: String,
    pub froms: Vec<PolicyFrom>,
    pub tos: Vec<PolicyTo>,
    pub thens: Vec<PolicyThen>,
}

impl PolicyTerm {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_from(mut self, from: PolicyFrom) -> Self {
        self.froms.push(from);
        self
    }

    pub fn with_to(mut self, to: PolicyTo) -> Self {
        self.tos.push(to);
        self
    }

    pub fn with_then(mut self, then: PolicyThen) -> Self {
        self.thens.push(then);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.froms.is_empty() && self.tos.is_empty() && self.thens.is_empty()
    }

    /// A term without conditions applies its actions unconditionally
    pub fn is_unconditional(&self) -> bool {
        self.froms.is_empty() && self.tos.is_empty()
    }
}

/// Named policy with ordered terms plus the synthetic default term that
/// collects statements written outside any term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyStatement {
    pub name: String,
    #[serde(default)]
    pub terms: Vec<PolicyTerm>,
    #[serde(default = "default_term")]
    pub default_term: PolicyTerm,
}

fn default_term() -> PolicyTerm {
    PolicyTerm::new(PolicyStatement::DEFAULT_TERM_NAME)
}

impl PolicyStatement {
    pub const DEFAULT_TERM_NAME: &'static str = "__default__";

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            terms: Vec::new(),
            default_term: default_term(),
        }
    }

    pub fn with_term(mut self, term: PolicyTerm) -> Self {
        self.terms.push(term);
        self
    }

    pub fn with_default_term(mut self, term: PolicyTerm) -> Self {
        self.default_term = term;
        self
    }

    /// Named terms in order, then the default term when it has content
    pub fn effective_terms(&self) -> impl Iterator<Item = &PolicyTerm> {
        let default = (!self.default_term.is_empty()).then_some(&self.default_term);
        self.terms.iter().chain(default)
    }
}
