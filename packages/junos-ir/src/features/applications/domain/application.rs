//! User-defined applications and application-sets

use crate::features::resolution::domain::{
    ApplicationOrSetReference, ApplicationReference, ApplicationSetReference,
};
use crate::shared::models::{IpProtocol, SubRange};
use crate::target::HeaderSpace;
use serde::{Deserialize, Serialize};

use super::builtin::{BuiltinApplication, BuiltinApplicationSet};

/// One protocol/port clause of an application
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationTerm {
    pub name: String,
    pub protocol: Option<IpProtocol>,
    pub source_ports: Vec<SubRange>,
    pub destination_ports: Vec<SubRange>,
    pub icmp_type: Option<u8>,
    pub icmp_code: Option<u8>,
}

impl ApplicationTerm {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn protocol(mut self, protocol: IpProtocol) -> Self {
        self.protocol = Some(protocol);
        self
    }

    pub fn destination_port(mut self, range: SubRange) -> Self {
        self.destination_ports.push(range);
        self
    }

    pub fn source_port(mut self, range: SubRange) -> Self {
        self.source_ports.push(range);
        self
    }

    pub fn icmp_type(mut self, icmp_type: u8) -> Self {
        self.icmp_type = Some(icmp_type);
        self
    }

    /// The packet predicate this term contributes
    pub fn header_space(&self) -> HeaderSpace {
        let mut hs = HeaderSpace::new();
        hs.ip_protocols.extend(self.protocol);
        hs.src_ports.extend(self.source_ports.iter().copied());
        hs.dst_ports.extend(self.destination_ports.iter().copied());
        hs.icmp_types
            .extend(self.icmp_type.map(|t| SubRange::single(u32::from(t))));
        hs.icmp_codes
            .extend(self.icmp_code.map(|c| SubRange::single(u32::from(c))));
        hs
    }
}

/// Named protocol+port definition with ordered terms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub name: String,
    #[serde(default)]
    pub terms: Vec<ApplicationTerm>,
    /// IPv6-only applications never match IPv4 filters
    #[serde(default)]
    pub ipv6: bool,
}

impl Application {
    pub fn new(name: impl Into<String>, terms: Vec<ApplicationTerm>) -> Self {
        Self {
            name: name.into(),
            terms,
            ipv6: false,
        }
    }
}

/// Entry of an application-set (or a firewall `application` match)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationSetMember {
    Application(ApplicationReference),
    ApplicationSet(ApplicationSetReference),
    /// Name that may denote either kind
    ApplicationOrSet(ApplicationOrSetReference),
    Builtin(BuiltinApplication),
    BuiltinSet(BuiltinApplicationSet),
}

impl ApplicationSetMember {
    pub fn name(&self) -> &str {
        match self {
            ApplicationSetMember::Application(r) => r.name(),
            ApplicationSetMember::ApplicationSet(r) => r.name(),
            ApplicationSetMember::ApplicationOrSet(r) => r.name(),
            ApplicationSetMember::Builtin(b) => b.name(),
            ApplicationSetMember::BuiltinSet(b) => b.name(),
        }
    }
}

/// Named ordered collection of members
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationSet {
    pub name: String,
    #[serde(default)]
    pub members: Vec<ApplicationSetMember>,
}

impl ApplicationSet {
    pub fn new(name: impl Into<String>, members: Vec<ApplicationSetMember>) -> Self {
        Self {
            name: name.into(),
            members,
        }
    }
}
