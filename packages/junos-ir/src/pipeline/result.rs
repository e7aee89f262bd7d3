//! Per-device lowering output

use crate::errors::Result;
use crate::shared::diagnostics::Warnings;
use crate::target::{IntegerSpace, IpAccessList, NatTransformation, RouteFilterList, RoutingPolicy};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Vendor-independent view of one device
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoweredDevice {
    pub hostname: String,
    pub ip_access_lists: Vec<IpAccessList>,
    pub screens: Vec<IpAccessList>,
    pub routing_policies: Vec<RoutingPolicy>,
    /// Prefix lists, route filters, then per-line lists in policy order
    pub route_filter_lists: Vec<RouteFilterList>,
    pub nat_transformations: Vec<NatTransformation>,
    pub interface_vlans: BTreeMap<String, IntegerSpace>,
    pub bridge_domains: BTreeMap<String, IntegerSpace>,
    pub warnings: Warnings,
}

/// Outcome of one device in a batch
#[derive(Debug)]
pub struct DeviceOutcome {
    pub hostname: String,
    pub result: Result<LoweredDevice>,
}

impl DeviceOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}
