//! IP protocols and routing protocols

use serde::{Deserialize, Serialize};
use std::fmt;

/// IP protocol carried in the packet header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IpProtocol {
    Icmp,
    Tcp,
    Udp,
    Gre,
    Esp,
    Ah,
    Ipv6Icmp,
    Ospf,
    Sctp,
    Other(u8),
}

impl IpProtocol {
    pub fn number(&self) -> u8 {
        match self {
            IpProtocol::Icmp => 1,
            IpProtocol::Tcp => 6,
            IpProtocol::Udp => 17,
            IpProtocol::Gre => 47,
            IpProtocol::Esp => 50,
            IpProtocol::Ah => 51,
            IpProtocol::Ipv6Icmp => 58,
            IpProtocol::Ospf => 89,
            IpProtocol::Sctp => 132,
            IpProtocol::Other(number) => *number,
        }
    }

    pub fn from_number(number: u8) -> Self {
        match number {
            1 => IpProtocol::Icmp,
            6 => IpProtocol::Tcp,
            17 => IpProtocol::Udp,
            47 => IpProtocol::Gre,
            50 => IpProtocol::Esp,
            51 => IpProtocol::Ah,
            58 => IpProtocol::Ipv6Icmp,
            89 => IpProtocol::Ospf,
            132 => IpProtocol::Sctp,
            other => IpProtocol::Other(other),
        }
    }

    /// Protocols whose headers carry ports
    pub fn has_ports(&self) -> bool {
        matches!(self, IpProtocol::Tcp | IpProtocol::Udp | IpProtocol::Sctp)
    }
}

impl fmt::Display for IpProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpProtocol::Icmp => write!(f, "icmp"),
            IpProtocol::Tcp => write!(f, "tcp"),
            IpProtocol::Udp => write!(f, "udp"),
            IpProtocol::Gre => write!(f, "gre"),
            IpProtocol::Esp => write!(f, "esp"),
            IpProtocol::Ah => write!(f, "ah"),
            IpProtocol::Ipv6Icmp => write!(f, "icmp6"),
            IpProtocol::Ospf => write!(f, "ospf"),
            IpProtocol::Sctp => write!(f, "sctp"),
            IpProtocol::Other(number) => write!(f, "{}", number),
        }
    }
}

/// Vendor-independent routing protocol of a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoutingProtocol {
    Bgp,
    Ibgp,
    Static,
    Connected,
    Local,
    Aggregate,
    Ospf,
    OspfIa,
    OspfE1,
    OspfE2,
    IsisL1,
    IsisL2,
    Rip,
}

impl RoutingProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoutingProtocol::Bgp => "bgp",
            RoutingProtocol::Ibgp => "ibgp",
            RoutingProtocol::Static => "static",
            RoutingProtocol::Connected => "connected",
            RoutingProtocol::Local => "local",
            RoutingProtocol::Aggregate => "aggregate",
            RoutingProtocol::Ospf => "ospf",
            RoutingProtocol::OspfIa => "ospfIA",
            RoutingProtocol::OspfE1 => "ospfE1",
            RoutingProtocol::OspfE2 => "ospfE2",
            RoutingProtocol::IsisL1 => "isisL1",
            RoutingProtocol::IsisL2 => "isisL2",
            RoutingProtocol::Rip => "rip",
        }
    }
}

impl fmt::Display for RoutingProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
