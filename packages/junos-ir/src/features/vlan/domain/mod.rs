//! VLANs, interface VLAN membership and bridge domains

use crate::features::resolution::domain::VlanReference;
use crate::shared::models::SubRange;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vlan {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vlan_id: Option<u32>,
}

impl Vlan {
    pub fn new(name: impl Into<String>, vlan_id: Option<u32>) -> Self {
        Self {
            name: name.into(),
            vlan_id,
        }
    }
}

/// One `vlan members` entry of an interface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VlanMember {
    Id(u32),
    Range(SubRange),
    Named(VlanReference),
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BridgeDomainVlanId {
    Number(u32),
    None,
    All,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeDomain {
    pub name: String,
    pub vlan_id: BridgeDomainVlanId,
}
