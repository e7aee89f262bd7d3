//! Packet header-space predicate
//!
//! Every field is a set; an empty set leaves that field unconstrained and a
//! non-empty set matches any of its members. Adding to a field therefore
//! widens it (set union), which is how repeated conditions of the same kind
//! in one term combine.

use crate::shared::models::{IpProtocol, IpWildcard, SubRange, TcpFlagsMatch};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderSpace {
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub src_ips: BTreeSet<IpWildcard>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub not_src_ips: BTreeSet<IpWildcard>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub dst_ips: BTreeSet<IpWildcard>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub not_dst_ips: BTreeSet<IpWildcard>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub src_or_dst_ips: BTreeSet<IpWildcard>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub ip_protocols: BTreeSet<IpProtocol>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub src_ports: BTreeSet<SubRange>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub dst_ports: BTreeSet<SubRange>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub src_or_dst_ports: BTreeSet<SubRange>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub icmp_types: BTreeSet<SubRange>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub icmp_codes: BTreeSet<SubRange>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub tcp_flags: BTreeSet<TcpFlagsMatch>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub packet_lengths: BTreeSet<SubRange>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub not_packet_lengths: BTreeSet<SubRange>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub fragment_offsets: BTreeSet<SubRange>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub not_fragment_offsets: BTreeSet<SubRange>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub fragments_only: bool,
}

impl HeaderSpace {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no field constrains the packet
    pub fn is_unconstrained(&self) -> bool {
        *self == HeaderSpace::default()
    }

    /// Overlay a leaf predicate (an application term) onto this descriptor.
    ///
    /// Fields the leaf specifies replace the corresponding shared fields;
    /// everything else is inherited.
    pub fn refine(&self, leaf: &HeaderSpace) -> HeaderSpace {
        fn pick<T: Clone + Ord>(shared: &BTreeSet<T>, leaf: &BTreeSet<T>) -> BTreeSet<T> {
            if leaf.is_empty() {
                shared.clone()
            } else {
                leaf.clone()
            }
        }

        HeaderSpace {
            src_ips: pick(&self.src_ips, &leaf.src_ips),
            not_src_ips: pick(&self.not_src_ips, &leaf.not_src_ips),
            dst_ips: pick(&self.dst_ips, &leaf.dst_ips),
            not_dst_ips: pick(&self.not_dst_ips, &leaf.not_dst_ips),
            src_or_dst_ips: pick(&self.src_or_dst_ips, &leaf.src_or_dst_ips),
            ip_protocols: pick(&self.ip_protocols, &leaf.ip_protocols),
            src_ports: pick(&self.src_ports, &leaf.src_ports),
            dst_ports: pick(&self.dst_ports, &leaf.dst_ports),
            src_or_dst_ports: pick(&self.src_or_dst_ports, &leaf.src_or_dst_ports),
            icmp_types: pick(&self.icmp_types, &leaf.icmp_types),
            icmp_codes: pick(&self.icmp_codes, &leaf.icmp_codes),
            tcp_flags: pick(&self.tcp_flags, &leaf.tcp_flags),
            packet_lengths: pick(&self.packet_lengths, &leaf.packet_lengths),
            not_packet_lengths: pick(&self.not_packet_lengths, &leaf.not_packet_lengths),
            fragment_offsets: pick(&self.fragment_offsets, &leaf.fragment_offsets),
            not_fragment_offsets: pick(&self.not_fragment_offsets, &leaf.not_fragment_offsets),
            fragments_only: self.fragments_only || leaf.fragments_only,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::Prefix;

    #[test]
    fn test_default_is_unconstrained() {
        assert!(HeaderSpace::new().is_unconstrained());
    }

    #[test]
    fn test_refine_keeps_shared_fields_and_overrides_leaf_fields() {
        let mut shared = HeaderSpace::new();
        shared
            .dst_ips
            .insert(Prefix::parse("10.0.0.0/8").unwrap().into());
        shared.dst_ports.insert(SubRange::single(22));

        let mut leaf = HeaderSpace::new();
        leaf.ip_protocols.insert(IpProtocol::Tcp);
        leaf.dst_ports.insert(SubRange::single(80));

        let refined = shared.refine(&leaf);
        assert_eq!(refined.dst_ips, shared.dst_ips);
        assert_eq!(refined.ip_protocols, leaf.ip_protocols);
        assert_eq!(refined.dst_ports, leaf.dst_ports);
    }
}
