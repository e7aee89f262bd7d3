//! Firewall-filter lowering
//!
//! Non-application conditions of a term accumulate into one shared header
//! space. Each application condition is expanded into concrete clauses and
//! every clause becomes its own line, refined by the shared header space.

use crate::config::FirewallConfig;
use crate::features::applications::infrastructure::ApplicationExpander;
use crate::features::firewall::domain::{FirewallFilter, FirewallFrom, FirewallTerm, FirewallThen};
use crate::features::resolution::domain::{PrefixListReference, Resolve};
use crate::features::resolution::ports::Registry;
use crate::shared::diagnostics::Warnings;
use crate::shared::models::{IpProtocol, IpWildcard, TcpFlagsMatch};
use crate::target::{AclLine, HeaderSpace, IpAccessList, LineAction};
use std::collections::BTreeSet;

/// What a term does with matching packets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermAction {
    pub action: LineAction,
    pub policer: Option<String>,
}

/// Firewall lowering against one frozen registry
pub struct FirewallLowering<'r> {
    registry: &'r dyn Registry,
    config: &'r FirewallConfig,
}

impl<'r> FirewallLowering<'r> {
    pub fn new(registry: &'r dyn Registry, config: &'r FirewallConfig) -> Self {
        Self { registry, config }
    }

    pub fn lower_filter(&self, filter: &FirewallFilter, warnings: &mut Warnings) -> IpAccessList {
        let mut lines = Vec::new();
        for term in &filter.terms {
            lines.extend(self.lower_term(&filter.name, term, warnings));
        }
        tracing::debug!(filter = %filter.name, lines = lines.len(), "lowered firewall filter");
        IpAccessList::new(filter.name.clone(), lines)
    }

    /// Lines for one term, in application-member then leaf order
    pub fn lower_term(&self, filter: &str, term: &FirewallTerm, warnings: &mut Warnings) -> Vec<AclLine> {
        let site = format!("firewall filter '{}' term '{}'", filter, term.name);
        if term.ipv6 {
            warnings.pedantic(format!("IPv6 term ignored ({})", site));
            return Vec::new();
        }
        let Some(action) = self.select_action(&term.thens, &site, warnings) else {
            return Vec::new();
        };

        let mut shared = HeaderSpace::new();
        let mut expressible = true;
        for from in &term.froms {
            expressible &= self.accumulate(&mut shared, from, &site, warnings);
        }
        if !expressible {
            return Vec::new();
        }

        let line = |header_space: HeaderSpace| AclLine {
            name: term.name.clone(),
            header_space,
            action: action.action,
            policer: action.policer.clone(),
        };

        if !term.has_applications() {
            return vec![line(shared)];
        }

        let expander = ApplicationExpander::new(self.registry, self.config.max_application_depth);
        let mut lines = Vec::new();
        for from in &term.froms {
            if let FirewallFrom::Application(member) = from {
                for leaf in expander.expand(member, &site, warnings) {
                    lines.push(line(shared.refine(&leaf.header_space())));
                }
            }
        }
        lines
    }

    /// First matching rule wins: accept, then discard/reject, then
    /// next-term (no lines), then nop, else a missing action
    pub fn select_action(
        &self,
        thens: &[FirewallThen],
        site: &str,
        warnings: &mut Warnings,
    ) -> Option<TermAction> {
        let mut policer = None;
        for then in thens {
            match then {
                FirewallThen::Policer(name) => policer = Some(name.clone()),
                FirewallThen::RoutingInstance(name) => {
                    warnings.unimplemented(format!("routing-instance '{}' action ({})", name, site))
                }
                FirewallThen::NextIp(prefix) => {
                    warnings.unimplemented(format!("next-ip {} action ({})", prefix, site))
                }
                FirewallThen::Unsupported(text) => {
                    warnings.unimplemented(format!("action '{}' ({})", text, site))
                }
                _ => {}
            }
        }

        let has = |wanted: fn(&FirewallThen) -> bool| thens.iter().any(wanted);
        let action = if has(|t| matches!(t, FirewallThen::Accept)) {
            LineAction::Permit
        } else if has(|t| matches!(t, FirewallThen::Discard | FirewallThen::Reject)) {
            LineAction::Deny
        } else if has(|t| matches!(t, FirewallThen::NextTerm)) {
            return None;
        } else if self.config.nop_implies_accept && has(|t| matches!(t, FirewallThen::Nop)) {
            LineAction::Permit
        } else {
            warnings.red_flag(format!("missing action ({})", site));
            if self.config.missing_action_is_deny {
                LineAction::Deny
            } else {
                LineAction::Permit
            }
        };
        Some(TermAction { action, policer })
    }

    /// Apply one condition to the shared header space
    ///
    /// Returns false when the condition cannot be expressed, in which case
    /// the term contributes no lines.
    fn accumulate(
        &self,
        hs: &mut HeaderSpace,
        from: &FirewallFrom,
        site: &str,
        warnings: &mut Warnings,
    ) -> bool {
        match from {
            FirewallFrom::SourceAddress(wc) => {
                hs.src_ips.insert(*wc);
            }
            FirewallFrom::DestinationAddress(wc) => {
                hs.dst_ips.insert(*wc);
            }
            FirewallFrom::Address(wc) => {
                hs.src_or_dst_ips.insert(*wc);
            }
            FirewallFrom::SourceAddressExcept(wc) => {
                hs.not_src_ips.insert(*wc);
            }
            FirewallFrom::DestinationAddressExcept(wc) => {
                hs.not_dst_ips.insert(*wc);
            }
            FirewallFrom::SourcePrefixList(reference) => {
                return self.add_prefix_list(&mut hs.src_ips, reference, site, warnings);
            }
            FirewallFrom::DestinationPrefixList(reference) => {
                return self.add_prefix_list(&mut hs.dst_ips, reference, site, warnings);
            }
            FirewallFrom::PrefixList(reference) => {
                return self.add_prefix_list(&mut hs.src_or_dst_ips, reference, site, warnings);
            }
            FirewallFrom::SourcePort(range) => {
                hs.src_ports.insert(*range);
            }
            FirewallFrom::DestinationPort(range) => {
                hs.dst_ports.insert(*range);
            }
            FirewallFrom::Port(range) => {
                hs.src_or_dst_ports.insert(*range);
            }
            FirewallFrom::Protocol(protocol) => {
                hs.ip_protocols.insert(*protocol);
            }
            FirewallFrom::IcmpType(range) => {
                hs.icmp_types.insert(*range);
            }
            FirewallFrom::IcmpCode(range) => {
                hs.icmp_codes.insert(*range);
            }
            FirewallFrom::TcpFlags(flags) => {
                hs.tcp_flags.insert(*flags);
            }
            FirewallFrom::TcpEstablished => {
                hs.ip_protocols.insert(IpProtocol::Tcp);
                hs.tcp_flags.insert(TcpFlagsMatch::ack());
                hs.tcp_flags.insert(TcpFlagsMatch::rst());
            }
            FirewallFrom::TcpInitial => {
                hs.ip_protocols.insert(IpProtocol::Tcp);
                hs.tcp_flags.insert(TcpFlagsMatch::initial());
            }
            FirewallFrom::PacketLength { range, except } => {
                if *except {
                    hs.not_packet_lengths.insert(*range);
                } else {
                    hs.packet_lengths.insert(*range);
                }
            }
            FirewallFrom::FragmentOffset { range, except } => {
                if *except {
                    hs.not_fragment_offsets.insert(*range);
                } else {
                    hs.fragment_offsets.insert(*range);
                }
            }
            FirewallFrom::IsFragment => hs.fragments_only = true,
            // Expanded per leaf by the caller
            FirewallFrom::Application(_) => {}
            FirewallFrom::Unsupported(text) => {
                warnings.unimplemented(format!("match condition '{}' ({}); term dropped", text, site));
                return false;
            }
        }
        true
    }

    fn add_prefix_list(
        &self,
        field: &mut BTreeSet<IpWildcard>,
        reference: &PrefixListReference,
        site: &str,
        warnings: &mut Warnings,
    ) -> bool {
        let Some(list) = reference.resolve_or_report(self.registry, site, warnings) else {
            return false;
        };
        // An empty list matches nothing
        if list.prefixes.is_empty() {
            return false;
        }
        field.extend(list.prefixes.iter().copied().map(IpWildcard::from));
        true
    }
}

/// Lower one filter against `registry`
pub fn lower_firewall_filter(
    filter: &FirewallFilter,
    registry: &dyn Registry,
    config: &FirewallConfig,
    warnings: &mut Warnings,
) -> IpAccessList {
    FirewallLowering::new(registry, config).lower_filter(filter, warnings)
}
