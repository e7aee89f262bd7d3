pub mod lowering;

pub use lowering::{lower_bridge_domain_vlan_id, lower_vlan_members, ALL_VLANS};
