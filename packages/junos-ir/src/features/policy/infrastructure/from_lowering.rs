//! From/to condition lowering
//!
//! Each condition lowers to one boolean expression on its own; the caller
//! conjoins them. Unresolvable or unsupported conditions lower to `False`
//! so the term stays visible as an always-false guard.

use crate::errors::{LoweringError, Result};
use crate::features::community::infrastructure::{as_path_regexes, community_matches};
use crate::features::policy::domain::{AddressFamily, PolicyFrom, PolicyTo};
use crate::features::resolution::domain::{PolicyStatementReference, Resolve};
use crate::features::resolution::ports::Registry;
use crate::features::route_filter::infrastructure::prefix_ranges_for;
use crate::shared::diagnostics::Warnings;
use crate::shared::models::{Prefix, RoutingProtocol};
use crate::target::BooleanExpr;

/// Where a condition sits, for diagnostics and fatal errors
#[derive(Debug, Clone, Copy)]
pub struct TermSite<'a> {
    pub policy: &'a str,
    pub term: &'a str,
}

impl TermSite<'_> {
    pub fn describe(&self) -> String {
        format!("policy-statement '{}' term '{}'", self.policy, self.term)
    }
}

/// `protocol bgp` covers internal BGP as well
pub fn lower_protocol(protocol: RoutingProtocol) -> BooleanExpr {
    match protocol {
        RoutingProtocol::Bgp => BooleanExpr::Disjunction(vec![
            BooleanExpr::MatchProtocol(RoutingProtocol::Bgp),
            BooleanExpr::MatchProtocol(RoutingProtocol::Ibgp),
        ]),
        other => BooleanExpr::MatchProtocol(other),
    }
}

fn lower_family(family: &AddressFamily, site: TermSite<'_>) -> Result<BooleanExpr> {
    match family {
        AddressFamily::Inet => Ok(BooleanExpr::MatchIpv4),
        AddressFamily::Inet6 => Ok(BooleanExpr::MatchIpv6),
        other => Err(LoweringError::UnsupportedFamily {
            policy: site.policy.to_string(),
            term: site.term.to_string(),
            family: other.to_string(),
        }),
    }
}

/// Lower one non-call from-condition
pub fn lower_from(
    from: &PolicyFrom,
    site: TermSite<'_>,
    registry: &dyn Registry,
    warnings: &mut Warnings,
) -> Result<BooleanExpr> {
    let at = site.describe();
    let expr = match from {
        PolicyFrom::AsPath(reference) => match reference.resolve_or_report(registry, &at, warnings) {
            Some(as_path) => {
                let regexes = as_path_regexes([as_path], &at, warnings);
                if regexes.is_empty() {
                    BooleanExpr::False
                } else {
                    BooleanExpr::MatchAsPath(regexes)
                }
            }
            None => BooleanExpr::False,
        },
        PolicyFrom::AsPathGroup(reference) => {
            match reference.resolve_or_report(registry, &at, warnings) {
                Some(group) => {
                    let regexes = as_path_regexes(&group.entries, &at, warnings);
                    if regexes.is_empty() {
                        BooleanExpr::False
                    } else {
                        BooleanExpr::MatchAsPath(regexes)
                    }
                }
                None => BooleanExpr::False,
            }
        }
        PolicyFrom::Color(color) => BooleanExpr::MatchColor(*color),
        PolicyFrom::Community(reference) => {
            match reference.resolve_or_report(registry, &at, warnings) {
                Some(community) => {
                    let matches = community_matches(community, &at, warnings);
                    // Nothing left to match, inverted or not
                    if matches.is_empty() {
                        BooleanExpr::False
                    } else {
                        BooleanExpr::MatchCommunities {
                            matches,
                            invert: community.invert_match,
                        }
                    }
                }
                None => BooleanExpr::False,
            }
        }
        PolicyFrom::Family(family) => lower_family(family, site)?,
        PolicyFrom::Interface(name) => BooleanExpr::MatchInterface(vec![name.clone()]),
        PolicyFrom::LocalPreference(value) => BooleanExpr::MatchLocalPreference(*value),
        PolicyFrom::Metric(value) => BooleanExpr::MatchMetric(*value),
        PolicyFrom::Neighbor(address) => BooleanExpr::MatchNeighbor(vec![Prefix::host(*address)]),
        PolicyFrom::Policy(_) | PolicyFrom::PolicyConjunction(_) => {
            return Err(LoweringError::conversion(format!(
                "policy call in {} must be lowered as part of the call chain",
                at
            )));
        }
        PolicyFrom::PrefixList(reference) => {
            match reference.resolve_or_report(registry, &at, warnings) {
                Some(list) => BooleanExpr::MatchPrefixList(list.name.clone()),
                None => BooleanExpr::False,
            }
        }
        PolicyFrom::PrefixListFilter { list, kind } => {
            match list.resolve_or_report(registry, &at, warnings) {
                Some(list) => BooleanExpr::MatchPrefixRanges(prefix_ranges_for(list, *kind, &at, warnings)),
                None => BooleanExpr::False,
            }
        }
        PolicyFrom::Protocol(protocol) => lower_protocol(*protocol),
        PolicyFrom::RouteFilter(reference) => {
            match reference.resolve_or_report(registry, &at, warnings) {
                Some(filter) => BooleanExpr::MatchRouteFilter(filter.name.clone()),
                None => BooleanExpr::False,
            }
        }
        PolicyFrom::Tag(tag) => BooleanExpr::MatchTag(*tag),
        PolicyFrom::Unsupported(text) => {
            warnings.unimplemented(format!("from condition '{}' in {}", text, at));
            BooleanExpr::False
        }
    };
    Ok(expr)
}

fn lower_call_target(
    reference: &PolicyStatementReference,
    at: &str,
    registry: &dyn Registry,
    warnings: &mut Warnings,
) -> BooleanExpr {
    match reference.resolve_or_report(registry, at, warnings) {
        Some(statement) => BooleanExpr::CallExpr(statement.name.clone()),
        None => BooleanExpr::False,
    }
}

/// Lower a policy call; `None` for anything that is not a call
pub fn lower_call(
    from: &PolicyFrom,
    site: TermSite<'_>,
    registry: &dyn Registry,
    warnings: &mut Warnings,
) -> Option<BooleanExpr> {
    let at = site.describe();
    match from {
        PolicyFrom::Policy(reference) => Some(lower_call_target(reference, &at, registry, warnings)),
        PolicyFrom::PolicyConjunction(references) => Some(BooleanExpr::Conjunction(
            references
                .iter()
                .map(|r| lower_call_target(r, &at, registry, warnings))
                .collect(),
        )),
        _ => None,
    }
}

pub fn lower_to(to: &PolicyTo, site: TermSite<'_>, warnings: &mut Warnings) -> BooleanExpr {
    match to {
        PolicyTo::Neighbor(address) => BooleanExpr::MatchNeighbor(vec![Prefix::host(*address)]),
        PolicyTo::Protocol(protocol) => BooleanExpr::MatchExportProtocol(*protocol),
        PolicyTo::Rib(rib) => BooleanExpr::MatchRib(rib.clone()),
        PolicyTo::Unsupported(text) => {
            warnings.unimplemented(format!("to condition '{}' in {}", text, site.describe()));
            BooleanExpr::False
        }
    }
}
