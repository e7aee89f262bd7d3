//! Reusable device fixtures

use super::builders::*;
use junos_ir::features::firewall::{FirewallFilter, FirewallFrom, FirewallTerm, FirewallThen};
use junos_ir::features::policy::{PolicyFrom, PolicyStatement, PolicyTerm, PolicyThen};
use junos_ir::features::resolution::domain::PrefixListReference;
use junos_ir::shared::models::RoutingProtocol;
use junos_ir::DeviceConfiguration;

/// Application `A` (tcp/80) and `B` (tcp/443); set `S = {A, T}`, `T = {B}`
pub fn nested_sets_builder(hostname: &str) -> DeviceBuilder {
    DeviceBuilder::new(hostname)
        .with_application(tcp_application("A", 80))
        .with_application(tcp_application("B", 443))
        .with_application_set(set("S", vec![app("A"), app_set("T")]))
        .with_application_set(set("T", vec![app("B")]))
}

/// Filter `F`: destination 10.0.0.0/8 and application-set `S`, accept
pub fn nested_sets_filter() -> FirewallFilter {
    FirewallFilter::new("F").with_term(
        FirewallTerm::new("t1")
            .with_from(FirewallFrom::DestinationAddress(wildcard("10.0.0.0/8")))
            .with_from(FirewallFrom::Application(app_set("S")))
            .with_then(FirewallThen::Accept),
    )
}

/// Policy `EXPORT`: prefix-list `P` and protocol static, set
/// local-preference 100 and accept
pub fn export_policy() -> PolicyStatement {
    PolicyStatement::new("EXPORT").with_term(
        PolicyTerm::new("t1")
            .with_from(PolicyFrom::PrefixList(PrefixListReference::new("P")))
            .with_from(PolicyFrom::Protocol(RoutingProtocol::Static))
            .with_then(PolicyThen::LocalPreference(100))
            .with_then(PolicyThen::Accept),
    )
}

/// A device exercising filters and policies together
pub fn edge_router(hostname: &str) -> DeviceConfiguration {
    nested_sets_builder(hostname)
        .with_prefix_list("P", &["192.0.2.0/24"])
        .with_policy(export_policy())
        .with_filter(nested_sets_filter())
        .build()
}
