//! Policy-statement actions

use crate::features::resolution::domain::CommunityReference;
use crate::target::Origin;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyThen {
    Accept,
    Reject,
    DefaultActionAccept,
    DefaultActionReject,
    NextPolicy,
    NextTerm,
    LocalPreference(u32),
    Metric(u32),
    MetricAdd(u32),
    NextHop(Ipv4Addr),
    NextHopSelf,
    Tag(u32),
    Preference(u32),
    Origin(Origin),
    CommunityAdd(CommunityReference),
    CommunitySet(CommunityReference),
    CommunityDelete(CommunityReference),
    AsPathPrepend(Vec<u32>),
    Unsupported(String),
}

impl PolicyThen {
    /// Actions emitted after every non-terminal action of the same term
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PolicyThen::Accept
                | PolicyThen::Reject
                | PolicyThen::DefaultActionAccept
                | PolicyThen::DefaultActionReject
                | PolicyThen::NextPolicy
        )
    }
}
