//! In-memory configuration registry
//!
//! `RegistryBuilder` collects definitions (deduplicating route-filter lines
//! as they arrive); `build()` freezes the result into a read-only
//! `ConfigurationRegistry`. Tables are ordered by name so that iteration,
//! and with it the lowered output, is deterministic.

use crate::features::applications::domain::{Application, ApplicationSet};
use crate::features::community::domain::{AsPath, AsPathGroup, CommunityDefinition};
use crate::features::nat::domain::{AddressBookEntry, NatPool};
use crate::features::policy::domain::PolicyStatement;
use crate::features::resolution::ports::Registry;
use crate::features::route_filter::domain::{
    PrefixList, RouteFilter, RouteFilterLine, RouteFilterLineKey,
};
use crate::features::vlan::domain::Vlan;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Frozen, read-only set of named definitions for one device
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "RegistrySnapshot", into = "RegistrySnapshot")]
pub struct ConfigurationRegistry {
    applications: BTreeMap<String, Application>,
    application_sets: BTreeMap<String, ApplicationSet>,
    policy_statements: BTreeMap<String, PolicyStatement>,
    pools: BTreeMap<String, NatPool>,
    prefix_lists: BTreeMap<String, PrefixList>,
    route_filters: BTreeMap<String, RouteFilter>,
    communities: BTreeMap<String, CommunityDefinition>,
    as_paths: BTreeMap<String, AsPath>,
    as_path_groups: BTreeMap<String, AsPathGroup>,
    vlans: BTreeMap<String, Vlan>,
    addresses: BTreeMap<String, AddressBookEntry>,
}

impl ConfigurationRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub fn policy_statements(&self) -> impl Iterator<Item = &PolicyStatement> {
        self.policy_statements.values()
    }

    pub fn prefix_lists(&self) -> impl Iterator<Item = &PrefixList> {
        self.prefix_lists.values()
    }

    pub fn route_filters(&self) -> impl Iterator<Item = &RouteFilter> {
        self.route_filters.values()
    }

    pub fn applications(&self) -> impl Iterator<Item = &Application> {
        self.applications.values()
    }

    pub fn application_sets(&self) -> impl Iterator<Item = &ApplicationSet> {
        self.application_sets.values()
    }
}

impl Registry for ConfigurationRegistry {
    fn lookup_application(&self, name: &str) -> Option<&Application> {
        self.applications.get(name)
    }

    fn lookup_application_set(&self, name: &str) -> Option<&ApplicationSet> {
        self.application_sets.get(name)
    }

    fn lookup_policy_statement(&self, name: &str) -> Option<&PolicyStatement> {
        self.policy_statements.get(name)
    }

    fn lookup_pool(&self, name: &str) -> Option<&NatPool> {
        self.pools.get(name)
    }

    fn lookup_prefix_list(&self, name: &str) -> Option<&PrefixList> {
        self.prefix_lists.get(name)
    }

    fn lookup_route_filter(&self, name: &str) -> Option<&RouteFilter> {
        self.route_filters.get(name)
    }

    fn lookup_community(&self, name: &str) -> Option<&CommunityDefinition> {
        self.communities.get(name)
    }

    fn lookup_as_path(&self, name: &str) -> Option<&AsPath> {
        self.as_paths.get(name)
    }

    fn lookup_as_path_group(&self, name: &str) -> Option<&AsPathGroup> {
        self.as_path_groups.get(name)
    }

    fn lookup_vlan(&self, name: &str) -> Option<&Vlan> {
        self.vlans.get(name)
    }

    fn lookup_address(&self, name: &str) -> Option<&AddressBookEntry> {
        self.addresses.get(name)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Builder
// ═══════════════════════════════════════════════════════════════════════════

/// Mutable staging area; the only place definitions are added
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    inner: ConfigurationRegistry,
}

fn insert_named<T>(table: &mut BTreeMap<String, T>, kind: &str, name: String, value: T) {
    if table.insert(name.clone(), value).is_some() {
        tracing::debug!(kind, name = %name, "redefinition replaces earlier definition");
    }
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_application(&mut self, application: Application) -> &mut Self {
        let name = application.name.clone();
        insert_named(&mut self.inner.applications, "application", name, application);
        self
    }

    pub fn add_application_set(&mut self, set: ApplicationSet) -> &mut Self {
        let name = set.name.clone();
        insert_named(&mut self.inner.application_sets, "application-set", name, set);
        self
    }

    pub fn add_policy_statement(&mut self, statement: PolicyStatement) -> &mut Self {
        let name = statement.name.clone();
        insert_named(&mut self.inner.policy_statements, "policy-statement", name, statement);
        self
    }

    pub fn add_pool(&mut self, pool: NatPool) -> &mut Self {
        let name = pool.name.clone();
        insert_named(&mut self.inner.pools, "pool", name, pool);
        self
    }

    pub fn add_prefix_list(&mut self, list: PrefixList) -> &mut Self {
        let name = list.name.clone();
        insert_named(&mut self.inner.prefix_lists, "prefix-list", name, list);
        self
    }

    /// Get or create the named route filter
    pub fn route_filter(&mut self, name: &str) -> &mut RouteFilter {
        self.inner
            .route_filters
            .entry(name.to_string())
            .or_insert_with(|| RouteFilter::new(name))
    }

    /// Insert a line into the named route filter and return its canonical
    /// instance; structurally equal lines share one instance
    pub fn route_filter_line(&mut self, filter: &str, key: RouteFilterLineKey) -> &mut RouteFilterLine {
        self.route_filter(filter).canonical_line(key)
    }

    pub fn add_community(&mut self, community: CommunityDefinition) -> &mut Self {
        let name = community.name.clone();
        insert_named(&mut self.inner.communities, "community", name, community);
        self
    }

    pub fn add_as_path(&mut self, as_path: AsPath) -> &mut Self {
        let name = as_path.name.clone();
        insert_named(&mut self.inner.as_paths, "as-path", name, as_path);
        self
    }

    pub fn add_as_path_group(&mut self, group: AsPathGroup) -> &mut Self {
        let name = group.name.clone();
        insert_named(&mut self.inner.as_path_groups, "as-path-group", name, group);
        self
    }

    pub fn add_vlan(&mut self, vlan: Vlan) -> &mut Self {
        let name = vlan.name.clone();
        insert_named(&mut self.inner.vlans, "vlan", name, vlan);
        self
    }

    pub fn add_address(&mut self, entry: AddressBookEntry) -> &mut Self {
        let name = entry.name.clone();
        insert_named(&mut self.inner.addresses, "address", name, entry);
        self
    }

    /// Freeze into a read-only registry
    pub fn build(self) -> ConfigurationRegistry {
        self.inner
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Snapshot form
// ═══════════════════════════════════════════════════════════════════════════

/// Serialized shape: plain definition lists, rebuilt through the builder
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct RegistrySnapshot {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    applications: Vec<Application>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    application_sets: Vec<ApplicationSet>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    policy_statements: Vec<PolicyStatement>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pools: Vec<NatPool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    prefix_lists: Vec<PrefixList>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    route_filters: Vec<RouteFilter>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    communities: Vec<CommunityDefinition>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    as_paths: Vec<AsPath>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    as_path_groups: Vec<AsPathGroup>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    vlans: Vec<Vlan>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    addresses: Vec<AddressBookEntry>,
}

impl From<RegistrySnapshot> for ConfigurationRegistry {
    fn from(snapshot: RegistrySnapshot) -> Self {
        let mut builder = RegistryBuilder::new();
        snapshot.applications.into_iter().for_each(|a| {
            builder.add_application(a);
        });
        snapshot.application_sets.into_iter().for_each(|s| {
            builder.add_application_set(s);
        });
        snapshot.policy_statements.into_iter().for_each(|p| {
            builder.add_policy_statement(p);
        });
        snapshot.pools.into_iter().for_each(|p| {
            builder.add_pool(p);
        });
        snapshot.prefix_lists.into_iter().for_each(|p| {
            builder.add_prefix_list(p);
        });
        for filter in snapshot.route_filters {
            let target = builder.route_filter(&filter.name);
            for line in filter.into_lines() {
                target.canonical_line(line.key).thens.extend(line.thens);
            }
        }
        snapshot.communities.into_iter().for_each(|c| {
            builder.add_community(c);
        });
        snapshot.as_paths.into_iter().for_each(|a| {
            builder.add_as_path(a);
        });
        snapshot.as_path_groups.into_iter().for_each(|g| {
            builder.add_as_path_group(g);
        });
        snapshot.vlans.into_iter().for_each(|v| {
            builder.add_vlan(v);
        });
        snapshot.addresses.into_iter().for_each(|a| {
            builder.add_address(a);
        });
        builder.build()
    }
}

impl From<ConfigurationRegistry> for RegistrySnapshot {
    fn from(registry: ConfigurationRegistry) -> Self {
        RegistrySnapshot {
            applications: registry.applications.into_values().collect(),
            application_sets: registry.application_sets.into_values().collect(),
            policy_statements: registry.policy_statements.into_values().collect(),
            pools: registry.pools.into_values().collect(),
            prefix_lists: registry.prefix_lists.into_values().collect(),
            route_filters: registry.route_filters.into_values().collect(),
            communities: registry.communities.into_values().collect(),
            as_paths: registry.as_paths.into_values().collect(),
            as_path_groups: registry.as_path_groups.into_values().collect(),
            vlans: registry.vlans.into_values().collect(),
            addresses: registry.addresses.into_values().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::applications::domain::{ApplicationSetMember, ApplicationTerm};
    use crate::features::resolution::domain::{
        ApplicationOrSet, ApplicationOrSetReference, ApplicationReference, Resolve,
    };
    use crate::features::route_filter::domain::RouteFilterLineKind;
    use crate::shared::diagnostics::Warnings;
    use crate::shared::models::Prefix;

    fn registry_with_collision() -> ConfigurationRegistry {
        let mut builder = RegistryBuilder::new();
        builder
            .add_application(Application::new("web", vec![ApplicationTerm::new("t1")]))
            .add_application_set(ApplicationSet::new(
                "web",
                vec![ApplicationSetMember::Application(ApplicationReference::new("x"))],
            ));
        builder.build()
    }

    #[test]
    fn test_dual_kind_prefers_application() {
        let registry = registry_with_collision();
        let resolved = ApplicationOrSetReference::new("web").resolve(&registry);
        assert!(matches!(resolved, Some(ApplicationOrSet::Application(a)) if a.name == "web"));
    }

    #[test]
    fn test_dual_kind_falls_back_to_set() {
        let mut builder = RegistryBuilder::new();
        builder.add_application_set(ApplicationSet::new("only-set", vec![]));
        let registry = builder.build();
        let resolved = ApplicationOrSetReference::new("only-set").resolve(&registry);
        assert!(matches!(resolved, Some(ApplicationOrSet::ApplicationSet(_))));
    }

    #[test]
    fn test_resolve_or_report_emits_once() {
        let registry = RegistryBuilder::new().build();
        let mut warnings = Warnings::new();
        let resolved = ApplicationReference::new("missing").resolve_or_report(
            &registry,
            "firewall filter 'f' term 't'",
            &mut warnings,
        );
        assert!(resolved.is_none());
        assert_eq!(
            warnings.messages(),
            vec!["undefined reference to application 'missing' (firewall filter 'f' term 't')"]
        );
    }

    #[test]
    fn test_builder_dedups_route_filter_lines() {
        let mut builder = RegistryBuilder::new();
        let key = RouteFilterLineKey::new(
            Prefix::parse("10.0.0.0/8").unwrap(),
            RouteFilterLineKind::OrLonger,
        );
        builder.route_filter_line("rf", key.clone());
        builder.route_filter_line("rf", key);
        let registry = builder.build();
        assert_eq!(registry.lookup_route_filter("rf").unwrap().len(), 1);
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let registry = registry_with_collision();
        let json = serde_json::to_string(&registry).unwrap();
        let restored: ConfigurationRegistry = serde_json::from_str(&json).unwrap();
        assert!(restored.lookup_application("web").is_some());
        assert!(restored.lookup_application_set("web").is_some());
    }
}
