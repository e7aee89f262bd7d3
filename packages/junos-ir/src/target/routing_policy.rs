//! Routing-policy IR: boolean guards and statement lists
//!
//! A policy is a statement list evaluated against one route. Guards are
//! boolean expressions; `ConjunctionChain` evaluates a sequence of policy
//! calls and stays distinct from a plain conjunction since each call may
//! set its own default action.

use crate::shared::models::{Prefix, RoutingProtocol, StandardCommunity, SubRange};
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// BGP origin attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Igp,
    Egp,
    Incomplete,
}

/// Prefix plus an admissible length interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrefixRange {
    pub prefix: Prefix,
    pub length_range: SubRange,
}

impl PrefixRange {
    pub fn exact(prefix: Prefix) -> Self {
        let length = u32::from(prefix.length());
        Self {
            prefix,
            length_range: SubRange::single(length),
        }
    }
}

/// One community condition inside a community match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommunityMatch {
    Literal(StandardCommunity),
    Regex(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BooleanExpr {
    True,
    False,
    Not(Box<BooleanExpr>),
    Conjunction(Vec<BooleanExpr>),
    Disjunction(Vec<BooleanExpr>),
    /// Evaluate policy calls in order; the chain's value is that of the
    /// first call reaching a terminal action
    ConjunctionChain(Vec<BooleanExpr>),
    /// Evaluate a named routing policy as a sub-routine
    CallExpr(String),
    /// True when evaluation is inside a `CallExpr`
    CallExprContext,
    MatchProtocol(RoutingProtocol),
    MatchPrefixList(String),
    MatchRouteFilter(String),
    MatchPrefixRanges(Vec<PrefixRange>),
    MatchCommunities {
        matches: Vec<CommunityMatch>,
        invert: bool,
    },
    /// Any of the AS-path regexes matches
    MatchAsPath(Vec<String>),
    MatchMetric(u32),
    MatchLocalPreference(u32),
    MatchTag(u32),
    MatchColor(u32),
    MatchInterface(Vec<String>),
    MatchIpv4,
    MatchIpv6,
    MatchNeighbor(Vec<Prefix>),
    MatchRib(String),
    MatchExportProtocol(RoutingProtocol),
}

impl BooleanExpr {
    /// Flatten nested conjunctions, drop `True` conjuncts, unwrap singleton
    /// conjunctions and do the dual for disjunctions.
    ///
    /// `False` conjuncts are kept so an unresolvable condition stays visible
    /// in the output.
    pub fn simplify(self) -> BooleanExpr {
        match self {
            BooleanExpr::Conjunction(conjuncts) => {
                let mut flat = Vec::with_capacity(conjuncts.len());
                for conjunct in conjuncts {
                    match conjunct.simplify() {
                        BooleanExpr::True => {}
                        BooleanExpr::Conjunction(inner) => flat.extend(inner),
                        other => flat.push(other),
                    }
                }
                collapse(flat, BooleanExpr::True, BooleanExpr::Conjunction)
            }
            BooleanExpr::Disjunction(disjuncts) => {
                let mut flat = Vec::with_capacity(disjuncts.len());
                for disjunct in disjuncts {
                    match disjunct.simplify() {
                        BooleanExpr::False => {}
                        BooleanExpr::Disjunction(inner) => flat.extend(inner),
                        other => flat.push(other),
                    }
                }
                collapse(flat, BooleanExpr::False, BooleanExpr::Disjunction)
            }
            BooleanExpr::Not(inner) => BooleanExpr::Not(Box::new(inner.simplify())),
            BooleanExpr::ConjunctionChain(calls) => {
                BooleanExpr::ConjunctionChain(calls.into_iter().map(BooleanExpr::simplify).collect())
            }
            other => other,
        }
    }
}

fn collapse(
    mut items: Vec<BooleanExpr>,
    identity: BooleanExpr,
    build: fn(Vec<BooleanExpr>) -> BooleanExpr,
) -> BooleanExpr {
    match items.len() {
        0 => identity,
        1 => items.swap_remove(0),
        _ => build(items),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Statement {
    If {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        comment: Option<String>,
        guard: BooleanExpr,
        true_statements: Vec<Statement>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        false_statements: Vec<Statement>,
    },
    ExitAccept,
    ExitReject,
    ReturnTrue,
    ReturnFalse,
    /// Return whatever the local default action currently is
    ReturnLocalDefaultAction,
    /// Leave the current policy and let the caller continue with the next one
    FallThrough,
    SetDefaultActionAccept,
    SetDefaultActionReject,
    SetLocalPreference(u32),
    SetMetric(u32),
    IncrementMetric(u32),
    SetNextHop(Ipv4Addr),
    SetNextHopSelf,
    SetTag(u32),
    SetAdministrativeCost(u32),
    SetOrigin(Origin),
    AddCommunities(Vec<StandardCommunity>),
    SetCommunities(Vec<StandardCommunity>),
    DeleteCommunities(Vec<CommunityMatch>),
    PrependAsPath(Vec<u32>),
}

impl Statement {
    pub fn if_then(comment: Option<String>, guard: BooleanExpr, then: Vec<Statement>) -> Self {
        Statement::If {
            comment,
            guard,
            true_statements: then,
            false_statements: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingPolicy {
    pub name: String,
    pub statements: Vec<Statement>,
}
