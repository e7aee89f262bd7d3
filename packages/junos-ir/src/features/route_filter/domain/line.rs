//! Route-filter line variants and their structural identity

use crate::features::policy::domain::PolicyThen;
use crate::shared::models::Prefix;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;

/// How a route-filter line constrains prefix length (and address bits)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteFilterLineKind {
    Exact,
    Longer,
    OrLonger,
    Upto(u8),
    LengthRange { min: u8, max: u8 },
    Through(Prefix),
    AddressMask(Ipv4Addr),
}

impl fmt::Display for RouteFilterLineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteFilterLineKind::Exact => f.write_str("exact"),
            RouteFilterLineKind::Longer => f.write_str("longer"),
            RouteFilterLineKind::OrLonger => f.write_str("orlonger"),
            RouteFilterLineKind::Upto(n) => write!(f, "upto /{}", n),
            RouteFilterLineKind::LengthRange { min, max } => {
                write!(f, "prefix-length-range /{}-/{}", min, max)
            }
            RouteFilterLineKind::Through(p) => write!(f, "through {}", p),
            RouteFilterLineKind::AddressMask(m) => write!(f, "address-mask {}", m),
        }
    }
}

/// Structural identity of a route-filter line
///
/// Equality, ordering and hashing come from these fields only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RouteFilterLineKey {
    pub prefix: Prefix,
    pub kind: RouteFilterLineKind,
}

impl RouteFilterLineKey {
    pub fn new(prefix: Prefix, kind: RouteFilterLineKind) -> Self {
        Self { prefix, kind }
    }
}

impl fmt::Display for RouteFilterLineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.prefix, self.kind)
    }
}

/// Canonical line plus the then-actions accumulated on it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteFilterLine {
    pub key: RouteFilterLineKey,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub thens: Vec<PolicyThen>,
}

impl RouteFilterLine {
    pub fn new(key: RouteFilterLineKey) -> Self {
        Self {
            key,
            thens: Vec::new(),
        }
    }
}
