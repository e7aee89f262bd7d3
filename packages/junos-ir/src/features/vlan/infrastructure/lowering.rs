//! VLAN membership lowering to integer spaces

use crate::features::resolution::domain::Resolve;
use crate::features::resolution::ports::Registry;
use crate::features::vlan::domain::{BridgeDomainVlanId, VlanMember};
use crate::shared::diagnostics::Warnings;
use crate::shared::models::SubRange;
use crate::target::IntegerSpace;

/// Usable 802.1Q ids
pub const ALL_VLANS: SubRange = SubRange { start: 1, end: 4094 };

/// Union of every member; named VLANs resolve through `registry`
pub fn lower_vlan_members(
    members: &[VlanMember],
    registry: &dyn Registry,
    site: &str,
    warnings: &mut Warnings,
) -> IntegerSpace {
    let mut space = IntegerSpace::empty();
    for member in members {
        match member {
            VlanMember::Id(id) => space.add(SubRange::single(*id)),
            VlanMember::Range(range) => space.add(*range),
            VlanMember::All => space.add(ALL_VLANS),
            VlanMember::Named(reference) => {
                let Some(vlan) = reference.resolve_or_report(registry, site, warnings) else {
                    continue;
                };
                match vlan.vlan_id {
                    Some(id) => space.add(SubRange::single(id)),
                    None => warnings.red_flag(format!("vlan '{}' has no vlan-id ({})", vlan.name, site)),
                }
            }
        }
    }
    space
}

pub fn lower_bridge_domain_vlan_id(vlan_id: BridgeDomainVlanId) -> IntegerSpace {
    match vlan_id {
        BridgeDomainVlanId::Number(id) => IntegerSpace::single(id),
        BridgeDomainVlanId::None => IntegerSpace::empty(),
        BridgeDomainVlanId::All => IntegerSpace::of(ALL_VLANS),
    }
}
