//! Vendor-predefined applications (`junos-*`)
//!
//! Definitions are built once on first use. Names the vendor ships but that
//! have no definition here resolve to `None` and are reported as
//! unimplemented by the expander.

use super::application::{Application, ApplicationSetMember, ApplicationTerm};
use crate::shared::models::{IpProtocol, ModelError, SubRange};
use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BuiltinApplication {
    Aol,
    Bgp,
    Biff,
    Bootpc,
    Bootps,
    Chargen,
    Cvspserver,
    DhcpClient,
    DhcpRelay,
    DhcpServer,
    Discard,
    DnsTcp,
    DnsUdp,
    Echo,
    Finger,
    Ftp,
    FtpData,
    Gnutella,
    Gopher,
    GprsGtpC,
    GprsGtpU,
    GprsGtpV0,
    GprsSctp,
    Gre,
    Gtp,
    H323,
    Http,
    HttpExt,
    Https,
    IcmpAll,
    IcmpPing,
    Icmp6All,
    Ike,
    Ldap,
    MsRpcTcp,
    MsRpcUdp,
    Nntp,
    Ntp,
    Ospf,
    Pptp,
    Printer,
    Rip,
    Sip,
    Smb,
    Ssh,
    Telnet,
}

const BUILTIN_NAMES: &[(BuiltinApplication, &str)] = &[
    (BuiltinApplication::Aol, "junos-aol"),
    (BuiltinApplication::Bgp, "junos-bgp"),
    (BuiltinApplication::Biff, "junos-biff"),
    (BuiltinApplication::Bootpc, "junos-bootpc"),
    (BuiltinApplication::Bootps, "junos-bootps"),
    (BuiltinApplication::Chargen, "junos-chargen"),
    (BuiltinApplication::Cvspserver, "junos-cvspserver"),
    (BuiltinApplication::DhcpClient, "junos-dhcp-client"),
    (BuiltinApplication::DhcpRelay, "junos-dhcp-relay"),
    (BuiltinApplication::DhcpServer, "junos-dhcp-server"),
    (BuiltinApplication::Discard, "junos-discard"),
    (BuiltinApplication::DnsTcp, "junos-dns-tcp"),
    (BuiltinApplication::DnsUdp, "junos-dns-udp"),
    (BuiltinApplication::Echo, "junos-echo"),
    (BuiltinApplication::Finger, "junos-finger"),
    (BuiltinApplication::Ftp, "junos-ftp"),
    (BuiltinApplication::FtpData, "junos-ftp-data"),
    (BuiltinApplication::Gnutella, "junos-gnutella"),
    (BuiltinApplication::Gopher, "junos-gopher"),
    (BuiltinApplication::GprsGtpC, "junos-gprs-gtp-c"),
    (BuiltinApplication::GprsGtpU, "junos-gprs-gtp-u"),
    (BuiltinApplication::GprsGtpV0, "junos-gprs-gtp-v0"),
    (BuiltinApplication::GprsSctp, "junos-gprs-sctp"),
    (BuiltinApplication::Gre, "junos-gre"),
    (BuiltinApplication::Gtp, "junos-gtp"),
    (BuiltinApplication::H323, "junos-h323"),
    (BuiltinApplication::Http, "junos-http"),
    (BuiltinApplication::HttpExt, "junos-http-ext"),
    (BuiltinApplication::Https, "junos-https"),
    (BuiltinApplication::IcmpAll, "junos-icmp-all"),
    (BuiltinApplication::IcmpPing, "junos-icmp-ping"),
    (BuiltinApplication::Icmp6All, "junos-icmp6-all"),
    (BuiltinApplication::Ike, "junos-ike"),
    (BuiltinApplication::Ldap, "junos-ldap"),
    (BuiltinApplication::MsRpcTcp, "junos-ms-rpc-tcp"),
    (BuiltinApplication::MsRpcUdp, "junos-ms-rpc-udp"),
    (BuiltinApplication::Nntp, "junos-nntp"),
    (BuiltinApplication::Ntp, "junos-ntp"),
    (BuiltinApplication::Ospf, "junos-ospf"),
    (BuiltinApplication::Pptp, "junos-pptp"),
    (BuiltinApplication::Printer, "junos-printer"),
    (BuiltinApplication::Rip, "junos-rip"),
    (BuiltinApplication::Sip, "junos-sip"),
    (BuiltinApplication::Smb, "junos-smb"),
    (BuiltinApplication::Ssh, "junos-ssh"),
    (BuiltinApplication::Telnet, "junos-telnet"),
];

fn ports(protocol: IpProtocol, start: u32, end: u32) -> ApplicationTerm {
    ApplicationTerm {
        name: String::new(),
        protocol: Some(protocol),
        destination_ports: vec![SubRange { start, end }],
        ..ApplicationTerm::default()
    }
}

fn port(protocol: IpProtocol, number: u32) -> ApplicationTerm {
    ports(protocol, number, number)
}

fn bare(protocol: IpProtocol) -> ApplicationTerm {
    ApplicationTerm {
        protocol: Some(protocol),
        ..ApplicationTerm::default()
    }
}

/// Terms are renamed t1..tN in declaration order
fn define(builtin: BuiltinApplication, terms: Vec<ApplicationTerm>) -> Application {
    let terms = terms
        .into_iter()
        .enumerate()
        .map(|(i, mut term)| {
            term.name = format!("t{}", i + 1);
            term
        })
        .collect();
    Application::new(builtin.name(), terms)
}

static BUILTIN_DEFINITIONS: Lazy<FxHashMap<BuiltinApplication, Application>> = Lazy::new(|| {
    use BuiltinApplication as B;
    use IpProtocol::{Gre, Icmp, Ipv6Icmp, Sctp, Tcp, Udp};

    let mut m = FxHashMap::default();
    let mut add = |b: BuiltinApplication, terms: Vec<ApplicationTerm>| {
        m.insert(b, define(b, terms));
    };

    // ═══════════════════════════════════════════════════════════
    // Single-port TCP/UDP services
    // ═══════════════════════════════════════════════════════════
    add(B::Aol, vec![ports(Tcp, 5190, 5193)]);
    add(B::Bgp, vec![port(Tcp, 179)]);
    add(B::Biff, vec![port(Udp, 512)]);
    add(B::Bootpc, vec![port(Udp, 68)]);
    add(B::Bootps, vec![port(Udp, 67)]);
    add(B::Chargen, vec![port(Udp, 19)]);
    add(B::Cvspserver, vec![port(Tcp, 2401)]);
    add(B::DhcpClient, vec![port(Udp, 68)]);
    add(B::DhcpRelay, vec![port(Udp, 67)]);
    add(B::DhcpServer, vec![port(Udp, 67)]);
    add(B::Discard, vec![port(Udp, 9)]);
    add(B::DnsTcp, vec![port(Tcp, 53)]);
    add(B::DnsUdp, vec![port(Udp, 53)]);
    add(B::Echo, vec![port(Udp, 7)]);
    add(B::Finger, vec![port(Tcp, 79)]);
    add(B::Ftp, vec![port(Tcp, 21)]);
    add(B::FtpData, vec![port(Tcp, 20)]);
    add(B::Gnutella, vec![ports(Udp, 6346, 6347)]);
    add(B::Gopher, vec![port(Tcp, 70)]);
    add(B::GprsGtpC, vec![port(Udp, 2123)]);
    add(B::GprsGtpU, vec![port(Udp, 2152)]);
    add(B::GprsGtpV0, vec![port(Udp, 3386)]);
    add(B::GprsSctp, vec![port(Sctp, 3868)]);
    add(B::Gtp, vec![port(Udp, 2123)]);
    add(B::Http, vec![port(Tcp, 80)]);
    add(B::HttpExt, vec![port(Tcp, 7001)]);
    add(B::Https, vec![port(Tcp, 443)]);
    add(B::MsRpcTcp, vec![port(Tcp, 135)]);
    add(B::MsRpcUdp, vec![port(Udp, 135)]);
    add(B::Nntp, vec![port(Tcp, 119)]);
    add(B::Ntp, vec![port(Udp, 123)]);
    add(B::Pptp, vec![port(Tcp, 1723)]);
    add(B::Printer, vec![port(Tcp, 515)]);
    add(B::Ssh, vec![port(Tcp, 22)]);

    // ═══════════════════════════════════════════════════════════
    // Multi-term services
    // ═══════════════════════════════════════════════════════════
    add(
        B::H323,
        vec![
            port(Tcp, 1720),
            port(Udp, 1719),
            port(Tcp, 1503),
            port(Tcp, 389),
            port(Tcp, 522),
            port(Tcp, 1731),
        ],
    );
    add(B::Smb, vec![port(Tcp, 139), port(Tcp, 445)]);

    // ═══════════════════════════════════════════════════════════
    // Portless protocols
    // ═══════════════════════════════════════════════════════════
    add(B::Gre, vec![bare(Gre)]);
    add(B::IcmpAll, vec![bare(Icmp)]);
    add(B::IcmpPing, vec![bare(Icmp).icmp_type(8)]);

    let mut icmp6 = define(B::Icmp6All, vec![bare(Ipv6Icmp)]);
    icmp6.ipv6 = true;
    m.insert(B::Icmp6All, icmp6);

    m
});

impl BuiltinApplication {
    pub fn name(&self) -> &'static str {
        BUILTIN_NAMES
            .iter()
            .find(|(b, _)| b == self)
            .map(|(_, name)| *name)
            .unwrap_or("junos-unknown")
    }

    pub fn from_name(name: &str) -> Option<Self> {
        BUILTIN_NAMES
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(b, _)| *b)
    }

    /// Concrete definition, `None` for known-but-undefined names
    pub fn definition(&self) -> Option<&'static Application> {
        BUILTIN_DEFINITIONS.get(self)
    }

    pub fn has_definition(&self) -> bool {
        self.definition().is_some()
    }
}

impl fmt::Display for BuiltinApplication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for BuiltinApplication {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_name(&value).ok_or(ModelError::UnknownBuiltin(value))
    }
}

impl From<BuiltinApplication> for String {
    fn from(builtin: BuiltinApplication) -> Self {
        builtin.name().to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Predefined application-sets
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BuiltinApplicationSet {
    MsRpc,
    RoutingInbound,
}

static MS_RPC_MEMBERS: Lazy<Vec<ApplicationSetMember>> = Lazy::new(|| {
    vec![
        ApplicationSetMember::Builtin(BuiltinApplication::MsRpcTcp),
        ApplicationSetMember::Builtin(BuiltinApplication::MsRpcUdp),
    ]
});

static ROUTING_INBOUND_MEMBERS: Lazy<Vec<ApplicationSetMember>> = Lazy::new(|| {
    vec![
        ApplicationSetMember::Builtin(BuiltinApplication::Bgp),
        ApplicationSetMember::Builtin(BuiltinApplication::Ospf),
        ApplicationSetMember::Builtin(BuiltinApplication::Rip),
    ]
});

impl BuiltinApplicationSet {
    pub fn name(&self) -> &'static str {
        match self {
            BuiltinApplicationSet::MsRpc => "junos-ms-rpc",
            BuiltinApplicationSet::RoutingInbound => "junos-routing-inbound",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "junos-ms-rpc" => Some(BuiltinApplicationSet::MsRpc),
            "junos-routing-inbound" => Some(BuiltinApplicationSet::RoutingInbound),
            _ => None,
        }
    }

    pub fn members(&self) -> &'static [ApplicationSetMember] {
        match self {
            BuiltinApplicationSet::MsRpc => &MS_RPC_MEMBERS,
            BuiltinApplicationSet::RoutingInbound => &ROUTING_INBOUND_MEMBERS,
        }
    }
}

impl TryFrom<String> for BuiltinApplicationSet {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_name(&value).ok_or(ModelError::UnknownBuiltin(value))
    }
}

impl From<BuiltinApplicationSet> for String {
    fn from(builtin: BuiltinApplicationSet) -> Self {
        builtin.name().to_string()
    }
}
