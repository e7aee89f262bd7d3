//! NAT rule lowering
//!
//! Each rule yields at most one guarded transformation. Address and port
//! translation are decided independently.

use crate::config::NatConfig;
use crate::features::nat::domain::{NatKind, NatPool, NatRule, NatRuleMatch, NatRuleSet, NatRuleThen};
use crate::features::resolution::domain::{AddressReference, Resolve};
use crate::features::resolution::ports::Registry;
use crate::shared::diagnostics::Warnings;
use crate::shared::models::IpWildcard;
use crate::target::{HeaderSpace, NatTransformation, PortTranslation, TransformationStep};
use std::collections::BTreeSet;
use std::net::Ipv4Addr;

pub struct NatLowering<'r> {
    registry: &'r dyn Registry,
    config: &'r NatConfig,
}

impl<'r> NatLowering<'r> {
    pub fn new(registry: &'r dyn Registry, config: &'r NatConfig) -> Self {
        Self { registry, config }
    }

    /// Rules in declaration order; rules without a step are skipped
    pub fn lower_rule_set(
        &self,
        rule_set: &NatRuleSet,
        interface_ip: Option<Ipv4Addr>,
        warnings: &mut Warnings,
    ) -> Vec<NatTransformation> {
        let transformations: Vec<_> = rule_set
            .rules
            .iter()
            .filter_map(|rule| self.lower_rule(&rule_set.name, rule, rule_set.kind, interface_ip, warnings))
            .collect();
        tracing::debug!(
            rule_set = %rule_set.name,
            rules = rule_set.rules.len(),
            transformations = transformations.len(),
            "lowered NAT rule-set"
        );
        transformations
    }

    pub fn lower_rule(
        &self,
        rule_set: &str,
        rule: &NatRule,
        kind: NatKind,
        interface_ip: Option<Ipv4Addr>,
        warnings: &mut Warnings,
    ) -> Option<NatTransformation> {
        let site = format!("nat rule-set '{}' rule '{}'", rule_set, rule.name);
        let guard = self.guard(&rule.matches, &site, warnings)?;
        let step = self.step(&rule.then, kind, interface_ip, &site, warnings)?;
        Some(NatTransformation {
            rule_set: rule_set.to_string(),
            rule: rule.name.clone(),
            guard,
            step,
        })
    }

    fn guard(&self, matches: &[NatRuleMatch], site: &str, warnings: &mut Warnings) -> Option<HeaderSpace> {
        let mut hs = HeaderSpace::new();
        for condition in matches {
            match condition {
                NatRuleMatch::DestinationAddress(prefix) => {
                    hs.dst_ips.insert(IpWildcard::from(*prefix));
                }
                NatRuleMatch::DestinationAddressName(reference) => {
                    self.add_address(&mut hs.dst_ips, reference, site, warnings)?
                }
                NatRuleMatch::DestinationPort(range) => {
                    hs.dst_ports.insert(*range);
                }
                NatRuleMatch::SourceAddress(prefix) => {
                    hs.src_ips.insert(IpWildcard::from(*prefix));
                }
                NatRuleMatch::SourceAddressName(reference) => {
                    self.add_address(&mut hs.src_ips, reference, site, warnings)?
                }
                NatRuleMatch::SourcePort(range) => {
                    hs.src_ports.insert(*range);
                }
                NatRuleMatch::Protocol(protocol) => {
                    hs.ip_protocols.insert(*protocol);
                }
            }
        }
        Some(hs)
    }

    fn add_address(
        &self,
        field: &mut BTreeSet<IpWildcard>,
        reference: &AddressReference,
        site: &str,
        warnings: &mut Warnings,
    ) -> Option<()> {
        let entry = reference.resolve_or_report(self.registry, site, warnings)?;
        // An empty field means any address, so an empty entry must not leave one behind
        if entry.prefixes.is_empty() {
            warnings.red_flag(format!(
                "address-book entry '{}' has no addresses ({})",
                entry.name, site
            ));
            return None;
        }
        field.extend(entry.prefixes.iter().copied().map(IpWildcard::from));
        Some(())
    }

    fn step(
        &self,
        then: &NatRuleThen,
        kind: NatKind,
        interface_ip: Option<Ipv4Addr>,
        site: &str,
        warnings: &mut Warnings,
    ) -> Option<TransformationStep> {
        let kind_type = kind.transformation_type();
        let step = match then {
            NatRuleThen::Off => TransformationStep::Noop { kind: kind_type },
            NatRuleThen::Pool(reference) => {
                let pool = reference.resolve_or_report(self.registry, site, warnings)?;
                TransformationStep::AssignIpFromPool {
                    kind: kind_type,
                    first: pool.first,
                    last: pool.last,
                    port: self.pool_ports(pool, kind),
                }
            }
            NatRuleThen::Interface => {
                let Some(address) = interface_ip else {
                    warnings.red_flag(format!("interface translation without an interface address ({})", site));
                    return None;
                };
                TransformationStep::AssignIpFromPool {
                    kind: kind_type,
                    first: address,
                    last: address,
                    port: self.default_ports(kind),
                }
            }
            NatRuleThen::Prefix(prefix) => TransformationStep::AssignIpFromPool {
                kind: kind_type,
                first: prefix.first_address(),
                last: prefix.last_address(),
                port: PortTranslation::Unchanged,
            },
        };
        Some(step)
    }

    fn pool_ports(&self, pool: &NatPool, kind: NatKind) -> PortTranslation {
        match pool.port {
            Some(range) => PortTranslation::Range(range),
            None if pool.port_translation => self.default_ports(kind),
            None => PortTranslation::Unchanged,
        }
    }

    fn default_ports(&self, kind: NatKind) -> PortTranslation {
        match kind {
            NatKind::Source => PortTranslation::Range(self.config.source_pat_range),
            NatKind::Destination | NatKind::Static => PortTranslation::Unchanged,
        }
    }
}

pub fn lower_nat_rule(
    rule_set: &str,
    rule: &NatRule,
    kind: NatKind,
    registry: &dyn Registry,
    config: &NatConfig,
    interface_ip: Option<Ipv4Addr>,
    warnings: &mut Warnings,
) -> Option<NatTransformation> {
    NatLowering::new(registry, config).lower_rule(rule_set, rule, kind, interface_ip, warnings)
}

pub fn lower_nat_rule_set(
    rule_set: &NatRuleSet,
    registry: &dyn Registry,
    config: &NatConfig,
    interface_ip: Option<Ipv4Addr>,
    warnings: &mut Warnings,
) -> Vec<NatTransformation> {
    NatLowering::new(registry, config).lower_rule_set(rule_set, interface_ip, warnings)
}
