//! Packet-rewrite IR produced by NAT lowering

use super::header_space::HeaderSpace;
use crate::shared::models::SubRange;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformationType {
    SourceNat,
    DestNat,
    StaticNat,
}

/// What happens to the transport port of a translated flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortTranslation {
    Unchanged,
    Range(SubRange),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransformationStep {
    /// Rewrite the address (and maybe port) from a pool
    AssignIpFromPool {
        kind: TransformationType,
        first: Ipv4Addr,
        last: Ipv4Addr,
        port: PortTranslation,
    },
    /// Matching traffic is explicitly left untranslated
    Noop { kind: TransformationType },
}

/// One guarded rewrite; evaluation is first-match in emission order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NatTransformation {
    pub rule_set: String,
    pub rule: String,
    pub guard: HeaderSpace,
    pub step: TransformationStep,
}
