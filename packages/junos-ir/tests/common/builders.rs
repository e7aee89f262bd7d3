//! Builders for registries, filters and devices

use junos_ir::config::LoweringConfig;
use junos_ir::features::applications::{Application, ApplicationSet, ApplicationSetMember, ApplicationTerm};
use junos_ir::features::firewall::{FirewallFilter, FirewallFrom, FirewallTerm, FirewallThen};
use junos_ir::features::nat::{AddressBookEntry, NatPool, NatRuleSet};
use junos_ir::features::policy::PolicyStatement;
use junos_ir::features::resolution::domain::{
    ApplicationOrSetReference, ApplicationReference, ApplicationSetReference,
};
use junos_ir::features::route_filter::PrefixList;
use junos_ir::shared::models::{IpProtocol, IpWildcard, Prefix, SubRange};
use junos_ir::{ConfigurationRegistry, DeviceConfiguration, RegistryBuilder, Warnings};
use std::net::Ipv4Addr;

pub fn prefix(text: &str) -> Prefix {
    Prefix::parse(text).unwrap()
}

pub fn wildcard(text: &str) -> IpWildcard {
    IpWildcard::from(prefix(text))
}

pub fn addr(text: &str) -> Ipv4Addr {
    text.parse().unwrap()
}

/// Single-term application matching one protocol and destination port
pub fn port_application(name: &str, protocol: IpProtocol, port: u32) -> Application {
    Application::new(
        name,
        vec![ApplicationTerm::new(name)
            .protocol(protocol)
            .destination_port(SubRange::single(port))],
    )
}

pub fn tcp_application(name: &str, port: u32) -> Application {
    port_application(name, IpProtocol::Tcp, port)
}

pub fn app(name: &str) -> ApplicationSetMember {
    ApplicationSetMember::Application(ApplicationReference::new(name))
}

pub fn app_set(name: &str) -> ApplicationSetMember {
    ApplicationSetMember::ApplicationSet(ApplicationSetReference::new(name))
}

pub fn app_or_set(name: &str) -> ApplicationSetMember {
    ApplicationSetMember::ApplicationOrSet(ApplicationOrSetReference::new(name))
}

pub fn set(name: &str, members: Vec<ApplicationSetMember>) -> ApplicationSet {
    ApplicationSet::new(name, members)
}

/// Filter with one accepting term matching `member`
pub fn accept_application_filter(name: &str, member: ApplicationSetMember) -> FirewallFilter {
    FirewallFilter::new(name).with_term(
        FirewallTerm::new("t1")
            .with_from(FirewallFrom::Application(member))
            .with_then(FirewallThen::Accept),
    )
}

/// Sink that records every severity
pub fn pedantic_warnings() -> Warnings {
    Warnings::with_pedantic(true)
}

/// Device builder
///
/// Collects definitions and top-level constructs, then freezes the
/// registry into a `DeviceConfiguration`.
pub struct DeviceBuilder {
    hostname: String,
    registry: RegistryBuilder,
    filters: Vec<FirewallFilter>,
    nat_rule_sets: Vec<NatRuleSet>,
    interface_nat_ips: Vec<(String, Ipv4Addr)>,
}

impl DeviceBuilder {
    pub fn new(hostname: &str) -> Self {
        Self {
            hostname: hostname.to_string(),
            registry: RegistryBuilder::new(),
            filters: Vec::new(),
            nat_rule_sets: Vec::new(),
            interface_nat_ips: Vec::new(),
        }
    }

    pub fn with_application(mut self, application: Application) -> Self {
        self.registry.add_application(application);
        self
    }

    pub fn with_application_set(mut self, set: ApplicationSet) -> Self {
        self.registry.add_application_set(set);
        self
    }

    pub fn with_prefix_list(mut self, name: &str, prefixes: &[&str]) -> Self {
        self.registry
            .add_prefix_list(PrefixList::new(name, prefixes.iter().map(|p| prefix(p)).collect()));
        self
    }

    pub fn with_policy(mut self, statement: PolicyStatement) -> Self {
        self.registry.add_policy_statement(statement);
        self
    }

    pub fn with_pool(mut self, pool: NatPool) -> Self {
        self.registry.add_pool(pool);
        self
    }

    pub fn with_address(mut self, name: &str, prefixes: &[&str]) -> Self {
        self.registry
            .add_address(AddressBookEntry::new(name, prefixes.iter().map(|p| prefix(p)).collect()));
        self
    }

    pub fn with_filter(mut self, filter: FirewallFilter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn with_nat_rule_set(mut self, rule_set: NatRuleSet) -> Self {
        self.nat_rule_sets.push(rule_set);
        self
    }

    pub fn with_interface_ip(mut self, interface: &str, ip: &str) -> Self {
        self.interface_nat_ips.push((interface.to_string(), addr(ip)));
        self
    }

    pub fn registry(self) -> ConfigurationRegistry {
        self.registry.build()
    }

    pub fn build(self) -> DeviceConfiguration {
        let mut device = DeviceConfiguration::new(self.hostname, self.registry.build());
        device.firewall_filters = self.filters;
        device.nat_rule_sets = self.nat_rule_sets;
        device.interface_nat_ips = self.interface_nat_ips.into_iter().collect();
        device
    }
}

/// Default config with pedantic diagnostics on
pub fn pedantic_config() -> LoweringConfig {
    LoweringConfig::default().diagnostics(|c| c.pedantic(true))
}
