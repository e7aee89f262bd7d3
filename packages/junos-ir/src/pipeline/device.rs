//! Per-device input snapshot

use crate::errors::Result;
use crate::features::firewall::domain::FirewallFilter;
use crate::features::nat::domain::NatRuleSet;
use crate::features::resolution::infrastructure::ConfigurationRegistry;
use crate::features::screen::domain::Screen;
use crate::features::vlan::domain::{BridgeDomain, VlanMember};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::net::Ipv4Addr;

/// Everything lowering needs for one device
///
/// Each device owns its registry; nothing is shared between devices.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfiguration {
    pub hostname: String,
    pub registry: ConfigurationRegistry,
    pub firewall_filters: Vec<FirewallFilter>,
    pub nat_rule_sets: Vec<NatRuleSet>,
    /// Interface name -> address used by `then interface` translation
    pub interface_nat_ips: BTreeMap<String, Ipv4Addr>,
    pub screens: Vec<Screen>,
    pub interface_vlans: BTreeMap<String, Vec<VlanMember>>,
    pub bridge_domains: Vec<BridgeDomain>,
}

impl DeviceConfiguration {
    pub fn new(hostname: impl Into<String>, registry: ConfigurationRegistry) -> Self {
        Self {
            hostname: hostname.into(),
            registry,
            ..Self::default()
        }
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
