//! Firewall filter lowering against application-set definitions

mod common;

use common::*;
use junos_ir::config::FirewallConfig;
use junos_ir::features::applications::{ApplicationSetMember, BuiltinApplicationSet};
use junos_ir::features::firewall::{lower_firewall_filter, FirewallFilter, FirewallFrom, FirewallTerm, FirewallThen};
use junos_ir::features::resolution::domain::PrefixListReference;
use junos_ir::shared::models::IpProtocol;
use junos_ir::target::LineAction;
use junos_ir::Severity;
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;

#[test]
fn test_nested_sets_expand_in_member_order() {
    let registry = nested_sets_builder("r1").registry();
    let mut warnings = pedantic_warnings();

    let acl = lower_firewall_filter(&nested_sets_filter(), &registry, &FirewallConfig::default(), &mut warnings);

    assert_line_count(&acl, 2);
    assert_port_line(&acl.lines[0], IpProtocol::Tcp, 80, LineAction::Permit);
    assert_port_line(&acl.lines[1], IpProtocol::Tcp, 443, LineAction::Permit);
    for line in &acl.lines {
        assert_eq!(line.name, "t1");
        assert_eq!(
            line.header_space.dst_ips.iter().copied().collect::<BTreeSet<_>>(),
            BTreeSet::from([wildcard("10.0.0.0/8")])
        );
    }
    assert!(warnings.is_empty(), "unexpected diagnostics: {:?}", warnings.messages());
}

#[test]
fn test_unresolved_set_reports_once() {
    let registry = DeviceBuilder::new("r1").registry();
    let mut warnings = pedantic_warnings();

    let acl = lower_firewall_filter(
        &accept_application_filter("F", app_set("MISSING")),
        &registry,
        &FirewallConfig::default(),
        &mut warnings,
    );

    assert_line_count(&acl, 0);
    assert_eq!(warnings.len(), 1);
    assert_warning_mentions(&warnings, &["undefined reference", "application-set", "MISSING"]);
}

#[test]
fn test_empty_set_is_silent() {
    let registry = DeviceBuilder::new("r1")
        .with_application_set(set("EMPTY", Vec::new()))
        .registry();
    let mut warnings = pedantic_warnings();

    let acl = lower_firewall_filter(
        &accept_application_filter("F", app_set("EMPTY")),
        &registry,
        &FirewallConfig::default(),
        &mut warnings,
    );

    assert_line_count(&acl, 0);
    assert!(warnings.is_empty());
}

#[test]
fn test_dual_kind_name_prefers_application() {
    let registry = DeviceBuilder::new("r1")
        .with_application(tcp_application("X", 22))
        .with_application(tcp_application("B", 443))
        .with_application_set(set("X", vec![app("B")]))
        .registry();
    let mut warnings = pedantic_warnings();

    let acl = lower_firewall_filter(
        &accept_application_filter("F", app_or_set("X")),
        &registry,
        &FirewallConfig::default(),
        &mut warnings,
    );

    assert_line_count(&acl, 1);
    assert_port_line(&acl.lines[0], IpProtocol::Tcp, 22, LineAction::Permit);
    assert_no_red_flags(&warnings);
}

#[test]
fn test_dual_kind_name_falls_back_to_set() {
    let registry = DeviceBuilder::new("r1")
        .with_application(tcp_application("B", 443))
        .with_application_set(set("WEB", vec![app("B")]))
        .registry();
    let mut warnings = pedantic_warnings();

    let acl = lower_firewall_filter(
        &accept_application_filter("F", app_or_set("WEB")),
        &registry,
        &FirewallConfig::default(),
        &mut warnings,
    );

    assert_line_count(&acl, 1);
    assert_port_line(&acl.lines[0], IpProtocol::Tcp, 443, LineAction::Permit);
}

#[test]
fn test_self_referencing_set_terminates() {
    let registry = DeviceBuilder::new("r1")
        .with_application(tcp_application("A", 80))
        .with_application_set(set("LOOP", vec![app("A"), app_set("LOOP")]))
        .registry();
    let mut warnings = pedantic_warnings();

    let acl = lower_firewall_filter(
        &accept_application_filter("F", app_set("LOOP")),
        &registry,
        &FirewallConfig::default(),
        &mut warnings,
    );

    assert_line_count(&acl, 1);
    assert_port_line(&acl.lines[0], IpProtocol::Tcp, 80, LineAction::Permit);
    assert_warning_count(&warnings, Severity::RedFlag, 1);
    assert_warning_mentions(&warnings, &["LOOP"]);
}

#[test]
fn test_depth_limit_cuts_deep_chains() {
    // L0 -> L1 -> ... -> L5 -> A
    let mut builder = DeviceBuilder::new("r1").with_application(tcp_application("A", 80));
    for level in 0..6 {
        let member = if level == 5 { app("A") } else { app_set(&format!("L{}", level + 1)) };
        builder = builder.with_application_set(set(&format!("L{}", level), vec![member]));
    }
    let registry = builder.registry();
    let filter = accept_application_filter("F", app_set("L0"));

    let mut shallow = pedantic_warnings();
    let cut = lower_firewall_filter(&filter, &registry, &FirewallConfig::default().max_application_depth(3), &mut shallow);
    assert_line_count(&cut, 0);
    assert_warning_mentions(&shallow, &["depth 3"]);

    let mut deep = pedantic_warnings();
    let full = lower_firewall_filter(&filter, &registry, &FirewallConfig::default(), &mut deep);
    assert_line_count(&full, 1);
    assert!(deep.is_empty());
}

#[test]
fn test_builtin_set_expands_members() {
    let registry = DeviceBuilder::new("r1").registry();
    let mut warnings = pedantic_warnings();

    let acl = lower_firewall_filter(
        &accept_application_filter("F", ApplicationSetMember::BuiltinSet(BuiltinApplicationSet::RoutingInbound)),
        &registry,
        &FirewallConfig::default(),
        &mut warnings,
    );

    assert!(!acl.lines.is_empty());
    assert!(acl.lines.iter().all(|line| line.action == LineAction::Permit));
    assert_no_red_flags(&warnings);
}

#[test]
fn test_terms_keep_order_and_actions() {
    let registry = DeviceBuilder::new("r1")
        .with_prefix_list("MGMT", &["192.0.2.0/24", "198.51.100.0/24"])
        .registry();
    let filter = FirewallFilter::new("PROTECT-RE")
        .with_term(
            FirewallTerm::new("allow-mgmt")
                .with_from(FirewallFrom::SourcePrefixList(PrefixListReference::new("MGMT")))
                .with_from(FirewallFrom::Protocol(IpProtocol::Tcp))
                .with_then(FirewallThen::Accept),
        )
        .with_term(FirewallTerm::new("skip").with_then(FirewallThen::NextTerm))
        .with_term(FirewallTerm::new("deny-rest").with_then(FirewallThen::Discard));
    let mut warnings = pedantic_warnings();

    let acl = lower_firewall_filter(&filter, &registry, &FirewallConfig::default(), &mut warnings);

    let names: Vec<_> = acl.lines.iter().map(|line| line.name.as_str()).collect();
    assert_eq!(names, vec!["allow-mgmt", "deny-rest"]);
    assert_eq!(acl.lines[0].header_space.src_ips.len(), 2);
    assert_eq!(acl.lines[1].action, LineAction::Deny);
    assert!(acl.lines[1].header_space.is_unconstrained());
    assert_no_red_flags(&warnings);
}

#[test]
fn test_empty_prefix_list_matches_nothing() {
    let registry = DeviceBuilder::new("r1").with_prefix_list("NONE", &[]).registry();
    let filter = FirewallFilter::new("F").with_term(
        FirewallTerm::new("t1")
            .with_from(FirewallFrom::DestinationPrefixList(PrefixListReference::new("NONE")))
            .with_then(FirewallThen::Accept),
    );
    let mut warnings = pedantic_warnings();

    let acl = lower_firewall_filter(&filter, &registry, &FirewallConfig::default(), &mut warnings);

    assert_line_count(&acl, 0);
    assert!(warnings.is_empty());
}
