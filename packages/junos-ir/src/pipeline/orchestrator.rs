//! Device lowering orchestration
//!
//! ```text
//! DeviceConfiguration
//!   ├── prefix lists / route filters  → RouteFilterList
//!   ├── policy-statements             → RoutingPolicy (+ per-line lists)
//!   ├── firewall filters              → IpAccessList
//!   ├── screens                       → IpAccessList
//!   ├── NAT rule-sets                 → NatTransformation
//!   └── VLAN bindings, bridge domains → IntegerSpace
//! ```
//!
//! A fatal error aborts only its own device; batches fan out one device per
//! rayon task.

use super::device::DeviceConfiguration;
use super::result::{DeviceOutcome, LoweredDevice};
use crate::config::LoweringConfig;
use crate::errors::Result;
use crate::features::firewall::infrastructure::FirewallLowering;
use crate::features::nat::infrastructure::NatLowering;
use crate::features::policy::infrastructure::PolicyLowering;
use crate::features::route_filter::infrastructure::{lower_prefix_list, lower_route_filter};
use crate::features::screen::infrastructure::lower_screen;
use crate::features::vlan::infrastructure::{lower_bridge_domain_vlan_id, lower_vlan_members};
use crate::shared::diagnostics::Warnings;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::time::Instant;

/// Lowers devices with one validated configuration
#[derive(Debug, Clone)]
pub struct LoweringPipeline {
    config: LoweringConfig,
}

impl LoweringPipeline {
    /// # Errors
    /// The configuration fails validation.
    pub fn new(config: LoweringConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &LoweringConfig {
        &self.config
    }

    pub fn lower_device(&self, device: &DeviceConfiguration) -> Result<LoweredDevice> {
        let start = Instant::now();
        let config = &self.config;
        let registry = &device.registry;
        let mut warnings = Warnings::with_pedantic(config.diagnostics.pedantic);
        let mut lowered = LoweredDevice {
            hostname: device.hostname.clone(),
            ..LoweredDevice::default()
        };

        for list in registry.prefix_lists() {
            if list.prefixes.is_empty() {
                warnings.red_flag(format!("prefix-list '{}' is empty", list.name));
            }
            lowered.route_filter_lists.push(lower_prefix_list(list));
        }
        for filter in registry.route_filters() {
            lowered
                .route_filter_lists
                .push(lower_route_filter(filter, &mut warnings));
        }

        let policies = PolicyLowering::new(registry, &config.policy);
        for statement in registry.policy_statements() {
            let policy = policies.lower_policy_statement(statement, &mut warnings)?;
            lowered.routing_policies.push(policy.policy);
            lowered.route_filter_lists.extend(policy.route_filter_lists);
        }

        let firewall = FirewallLowering::new(registry, &config.firewall);
        for filter in &device.firewall_filters {
            lowered
                .ip_access_lists
                .push(firewall.lower_filter(filter, &mut warnings));
        }

        for screen in &device.screens {
            lowered.screens.push(lower_screen(screen, &mut warnings));
        }

        let nat = NatLowering::new(registry, &config.nat);
        for rule_set in &device.nat_rule_sets {
            let interface_ip = rule_set
                .interface
                .as_ref()
                .and_then(|name| device.interface_nat_ips.get(name))
                .copied();
            lowered
                .nat_transformations
                .extend(nat.lower_rule_set(rule_set, interface_ip, &mut warnings));
        }

        for (interface, members) in &device.interface_vlans {
            let site = format!("interface '{}'", interface);
            let space = lower_vlan_members(members, registry, &site, &mut warnings);
            lowered.interface_vlans.insert(interface.clone(), space);
        }
        for domain in &device.bridge_domains {
            lowered
                .bridge_domains
                .insert(domain.name.clone(), lower_bridge_domain_vlan_id(domain.vlan_id));
        }

        tracing::info!(
            hostname = %device.hostname,
            acls = lowered.ip_access_lists.len(),
            policies = lowered.routing_policies.len(),
            nat = lowered.nat_transformations.len(),
            warnings = warnings.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "lowered device"
        );
        lowered.warnings = warnings;
        Ok(lowered)
    }

    /// Lower every device independently; output order follows input order
    pub fn lower_batch(&self, devices: &[DeviceConfiguration]) -> Vec<DeviceOutcome> {
        let lower = |device: &DeviceConfiguration| {
            let result = self.lower_device(device);
            if let Err(err) = &result {
                tracing::error!(hostname = %device.hostname, error = %err, "device lowering failed");
            }
            DeviceOutcome {
                hostname: device.hostname.clone(),
                result,
            }
        };

        #[cfg(feature = "parallel")]
        let outcomes = devices.par_iter().map(lower).collect();
        #[cfg(not(feature = "parallel"))]
        let outcomes = devices.iter().map(lower).collect();
        outcomes
    }
}

/// Lower one device
pub fn lower_device(device: &DeviceConfiguration, config: &LoweringConfig) -> Result<LoweredDevice> {
    LoweringPipeline::new(config.clone())?.lower_device(device)
}

/// Lower independent devices, in parallel when the `parallel` feature is on
pub fn lower_batch(devices: &[DeviceConfiguration], config: &LoweringConfig) -> Result<Vec<DeviceOutcome>> {
    Ok(LoweringPipeline::new(config.clone())?.lower_batch(devices))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::firewall::domain::{FirewallFilter, FirewallTerm, FirewallThen};
    use crate::features::policy::domain::{AddressFamily, PolicyFrom, PolicyStatement, PolicyTerm, PolicyThen};
    use crate::features::resolution::infrastructure::RegistryBuilder;
    use crate::features::route_filter::domain::PrefixList;
    use crate::shared::diagnostics::Severity;

    fn bad_family_device(hostname: &str) -> DeviceConfiguration {
        let mut builder = RegistryBuilder::new();
        builder.add_policy_statement(
            PolicyStatement::new("p").with_term(
                PolicyTerm::new("t")
                    .with_from(PolicyFrom::Family(AddressFamily::Evpn))
                    .with_then(PolicyThen::Accept),
            ),
        );
        DeviceConfiguration::new(hostname, builder.build())
    }

    #[test]
    fn test_empty_prefix_list_is_flagged() {
        let mut builder = RegistryBuilder::new();
        builder.add_prefix_list(PrefixList::new("empty", vec![]));
        let device = DeviceConfiguration::new("r1", builder.build());
        let lowered = lower_device(&device, &LoweringConfig::default()).unwrap();
        assert_eq!(lowered.route_filter_lists.len(), 1);
        assert_eq!(lowered.warnings.count(Severity::RedFlag), 1);
    }

    #[test]
    fn test_fatal_error_is_isolated_to_its_device() {
        let mut good = DeviceConfiguration::new("good", RegistryBuilder::new().build());
        good.firewall_filters.push(
            FirewallFilter::new("f").with_term(FirewallTerm::new("t").with_then(FirewallThen::Accept)),
        );
        let devices = vec![bad_family_device("bad"), good];

        let outcomes = lower_batch(&devices, &LoweringConfig::default()).unwrap();
        assert_eq!(outcomes.len(), 2);
        assert!(!outcomes[0].is_ok());
        assert_eq!(outcomes[1].hostname, "good");
        let lowered = outcomes[1].result.as_ref().unwrap();
        assert_eq!(lowered.ip_access_lists[0].lines.len(), 1);
    }

    #[test]
    fn test_invalid_config_rejected_up_front() {
        let config = LoweringConfig::default().firewall(|c| c.max_application_depth(0));
        assert!(LoweringPipeline::new(config).is_err());
    }
}
