//! Firewall term actions

use crate::shared::models::Prefix;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FirewallThen {
    Accept,
    Discard,
    Reject,
    NextTerm,
    Nop,
    Policer(String),
    Count(String),
    Log,
    Syslog,
    RoutingInstance(String),
    NextIp(Prefix),
    Unsupported(String),
}
