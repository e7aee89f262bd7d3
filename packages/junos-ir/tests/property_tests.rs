//! Property-based tests for the dedup store and application expansion

mod common;

use common::*;
use junos_ir::features::applications::{ApplicationExpander, ApplicationSetMember};
use junos_ir::features::policy::PolicyThen;
use junos_ir::features::route_filter::{lower_route_filter, RouteFilter, RouteFilterLineKey, RouteFilterLineKind};
use junos_ir::Warnings;
use proptest::prelude::*;

const PREFIXES: &[&str] = &["10.0.0.0/8", "10.1.0.0/16", "192.0.2.0/24", "0.0.0.0/0"];

fn kind_strategy() -> impl Strategy<Value = RouteFilterLineKind> {
    prop_oneof![
        Just(RouteFilterLineKind::Exact),
        Just(RouteFilterLineKind::OrLonger),
        Just(RouteFilterLineKind::Longer),
        Just(RouteFilterLineKind::Upto(24)),
    ]
}

fn key_strategy() -> impl Strategy<Value = RouteFilterLineKey> {
    (0..PREFIXES.len(), kind_strategy())
        .prop_map(|(index, kind)| RouteFilterLineKey::new(prefix(PREFIXES[index]), kind))
}

/// Set `S{i}` may only reference sets with a larger index, so the graph is
/// acyclic and at most `count` levels deep
fn set_graph_strategy(count: usize) -> impl Strategy<Value = Vec<Vec<(bool, usize)>>> {
    (0..count)
        .map(|i| prop::collection::vec((any::<bool>(), 0..count.max(1)), 0..4).prop_map(move |members| {
            members
                .into_iter()
                .map(|(is_set, target)| (is_set && target > i, target))
                .collect::<Vec<_>>()
        }))
        .collect::<Vec<_>>()
}

fn flatten(graph: &[Vec<(bool, usize)>], set: usize, out: &mut Vec<String>) {
    for &(is_set, target) in &graph[set] {
        if is_set {
            flatten(graph, target, out);
        } else {
            out.push(format!("A{}", target));
        }
    }
}

proptest! {
    #[test]
    fn prop_insert_dedups_and_keeps_first_occurrence(keys in prop::collection::vec(key_strategy(), 0..40)) {
        let mut filter = RouteFilter::new("RF");
        for (position, key) in keys.iter().enumerate() {
            filter.canonical_line(key.clone()).thens.push(PolicyThen::Tag(position as u32));
        }

        let mut first_seen: Vec<&RouteFilterLineKey> = Vec::new();
        for key in &keys {
            if !first_seen.contains(&key) {
                first_seen.push(key);
            }
        }
        prop_assert_eq!(filter.len(), first_seen.len());

        for (line, key) in filter.lines().zip(first_seen) {
            prop_assert_eq!(&line.key, key);
            let expected: Vec<_> = keys
                .iter()
                .enumerate()
                .filter(|(_, k)| *k == key)
                .map(|(position, _)| PolicyThen::Tag(position as u32))
                .collect();
            prop_assert_eq!(&line.thens, &expected);
        }
    }

    #[test]
    fn prop_dedup_survives_serialization(keys in prop::collection::vec(key_strategy(), 1..20)) {
        let mut filter = RouteFilter::new("RF");
        for key in &keys {
            filter.insert_line(key.clone());
        }
        let restored: RouteFilter = serde_json::from_str(&serde_json::to_string(&filter).unwrap()).unwrap();
        let mut reinserted = restored.clone();
        for key in &keys {
            reinserted.insert_line(key.clone());
        }
        prop_assert_eq!(&reinserted, &filter);
        prop_assert_eq!(
            lower_route_filter(&restored, &mut Warnings::new()),
            lower_route_filter(&filter, &mut Warnings::new())
        );
    }

    #[test]
    fn prop_expansion_is_deterministic(graph in set_graph_strategy(6)) {
        let mut builder = DeviceBuilder::new("r1");
        for index in 0..graph.len() {
            builder = builder.with_application(tcp_application(&format!("A{}", index), 1000 + index as u32));
        }
        for (index, members) in graph.iter().enumerate() {
            let members: Vec<ApplicationSetMember> = members
                .iter()
                .map(|&(is_set, target)| {
                    if is_set {
                        app_set(&format!("S{}", target))
                    } else {
                        app(&format!("A{}", target))
                    }
                })
                .collect();
            builder = builder.with_application_set(set(&format!("S{}", index), members));
        }
        let registry = builder.registry();
        let expander = ApplicationExpander::new(&registry, 32);

        let mut warnings = Warnings::new();
        let first: Vec<_> = expander
            .expand(&app_set("S0"), "test", &mut warnings)
            .iter()
            .map(|leaf| leaf.application.name.clone())
            .collect();
        let second: Vec<_> = expander
            .expand(&app_set("S0"), "test", &mut warnings)
            .iter()
            .map(|leaf| leaf.application.name.clone())
            .collect();

        let mut expected = Vec::new();
        flatten(&graph, 0, &mut expected);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first, expected);
        prop_assert!(warnings.is_empty());
    }
}
