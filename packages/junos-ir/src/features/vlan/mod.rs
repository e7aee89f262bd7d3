//! VLAN membership and bridge domains

pub mod domain;
pub mod infrastructure;

pub use domain::{BridgeDomain, BridgeDomainVlanId, Vlan, VlanMember};
pub use infrastructure::{lower_bridge_domain_vlan_id, lower_vlan_members};
