//! NAT rule-sets, rules and their conditions

use crate::features::resolution::domain::{AddressReference, PoolReference};
use crate::shared::models::{IpProtocol, Prefix, SubRange};
use crate::target::TransformationType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NatKind {
    Source,
    Destination,
    Static,
}

impl NatKind {
    pub fn transformation_type(&self) -> TransformationType {
        match self {
            NatKind::Source => TransformationType::SourceNat,
            NatKind::Destination => TransformationType::DestNat,
            NatKind::Static => TransformationType::StaticNat,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NatRuleMatch {
    DestinationAddress(Prefix),
    DestinationAddressName(AddressReference),
    DestinationPort(SubRange),
    SourceAddress(Prefix),
    SourceAddressName(AddressReference),
    SourcePort(SubRange),
    Protocol(IpProtocol),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NatRuleThen {
    Pool(PoolReference),
    /// Explicit no-translation
    Off,
    /// Translate to the egress interface address
    Interface,
    /// `static-nat prefix`
    Prefix(Prefix),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NatRule {
    pub name: String,
    #[serde(default)]
    pub matches: Vec<NatRuleMatch>,
    pub then: NatRuleThen,
}

impl NatRule {
    pub fn new(name: impl Into<String>, then: NatRuleThen) -> Self {
        Self {
            name: name.into(),
            matches: Vec::new(),
            then,
        }
    }

    pub fn with_match(mut self, condition: NatRuleMatch) -> Self {
        self.matches.push(condition);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NatRuleSet {
    pub name: String,
    pub kind: NatKind,
    /// Interface whose address `then interface` uses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,
    #[serde(default)]
    pub rules: Vec<NatRule>,
}

impl NatRuleSet {
    pub fn new(name: impl Into<String>, kind: NatKind) -> Self {
        Self {
            name: name.into(),
            kind,
            interface: None,
            rules: Vec::new(),
        }
    }

    pub fn with_rule(mut self, rule: NatRule) -> Self {
        self.rules.push(rule);
        self
    }
}
