//! Firewall filters
//!
//! Terms lower to ordered ACL lines. Application matches are expanded
//! through the applications slice.

pub mod domain;
pub mod infrastructure;

pub use domain::{FirewallFilter, FirewallFrom, FirewallTerm, FirewallThen};
pub use infrastructure::{lower_firewall_filter, FirewallLowering};
