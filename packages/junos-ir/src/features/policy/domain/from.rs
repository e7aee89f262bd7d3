//! Policy-statement match conditions

use crate::features::resolution::domain::{
    AsPathGroupReference, AsPathReference, CommunityReference, PolicyStatementReference,
    PrefixListReference, RouteFilterReference,
};
use crate::features::route_filter::domain::RouteFilterLineKind;
use crate::shared::models::RoutingProtocol;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;

/// Address family named by `from family`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AddressFamily {
    Inet,
    Inet6,
    InetVpn,
    Inet6Vpn,
    Evpn,
    Iso,
    Mpls,
    Other(String),
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressFamily::Inet => f.write_str("inet"),
            AddressFamily::Inet6 => f.write_str("inet6"),
            AddressFamily::InetVpn => f.write_str("inet-vpn"),
            AddressFamily::Inet6Vpn => f.write_str("inet6-vpn"),
            AddressFamily::Evpn => f.write_str("evpn"),
            AddressFamily::Iso => f.write_str("iso"),
            AddressFamily::Mpls => f.write_str("mpls"),
            AddressFamily::Other(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyFrom {
    AsPath(AsPathReference),
    AsPathGroup(AsPathGroupReference),
    Color(u32),
    Community(CommunityReference),
    Family(AddressFamily),
    Interface(String),
    LocalPreference(u32),
    Metric(u32),
    Neighbor(Ipv4Addr),
    /// Call another policy-statement
    Policy(PolicyStatementReference),
    /// `(a && b && ...)`: every named policy must accept
    PolicyConjunction(Vec<PolicyStatementReference>),
    PrefixList(PrefixListReference),
    PrefixListFilter {
        list: PrefixListReference,
        kind: RouteFilterLineKind,
    },
    Protocol(RoutingProtocol),
    RouteFilter(RouteFilterReference),
    Tag(u32),
    Unsupported(String),
}

impl PolicyFrom {
    /// Policy calls are chained after the plain conditions
    pub fn is_call(&self) -> bool {
        matches!(self, PolicyFrom::Policy(_) | PolicyFrom::PolicyConjunction(_))
    }
}

/// Export-side match conditions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyTo {
    Neighbor(Ipv4Addr),
    Protocol(RoutingProtocol),
    Rib(String),
    Unsupported(String),
}
