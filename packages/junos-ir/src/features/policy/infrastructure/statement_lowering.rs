//! Policy-statement lowering
//!
//! Each term lowers to one guard and one statement list; the statement
//! assembles them into the term chain. Route-filter lines that carry their
//! own actions get a single-line list and an `If` ahead of the term.

use super::from_lowering::{lower_call, lower_from, lower_to, TermSite};
use super::then_lowering::lower_thens;
use crate::config::PolicyConfig;
use crate::errors::Result;
use crate::features::policy::domain::{PolicyFrom, PolicyStatement, PolicyTerm};
use crate::features::resolution::domain::Resolve;
use crate::features::resolution::ports::Registry;
use crate::features::route_filter::infrastructure::{lower_route_filter_line, per_line_list_name};
use crate::shared::diagnostics::Warnings;
use crate::target::{BooleanExpr, RouteFilterList, RoutingPolicy, Statement};
use std::collections::BTreeSet;

/// One term after lowering, before it joins the chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoweredTerm {
    pub name: String,
    /// `True` when the term has no conditions
    pub guard: BooleanExpr,
    pub statements: Vec<Statement>,
    /// Guarded actions of route-filter lines, evaluated before the term
    pub line_statements: Vec<Statement>,
    pub route_filter_lists: Vec<RouteFilterList>,
}

impl LoweredTerm {
    fn append_to(self, chain: &mut Vec<Statement>, lists: &mut Vec<RouteFilterList>) {
        chain.extend(self.line_statements);
        lists.extend(self.route_filter_lists);
        if self.guard == BooleanExpr::True {
            chain.extend(self.statements);
        } else {
            chain.push(Statement::if_then(Some(self.name), self.guard, self.statements));
        }
    }
}

/// A lowered policy plus the per-line route-filter lists it references
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoweredPolicy {
    pub policy: RoutingPolicy,
    pub route_filter_lists: Vec<RouteFilterList>,
}

/// Policy lowering against one frozen registry
pub struct PolicyLowering<'r> {
    registry: &'r dyn Registry,
    config: &'r PolicyConfig,
}

impl<'r> PolicyLowering<'r> {
    pub fn new(registry: &'r dyn Registry, config: &'r PolicyConfig) -> Self {
        Self { registry, config }
    }

    /// Lower the whole statement
    ///
    /// # Errors
    /// `LoweringError::UnsupportedFamily` when a term matches a family with
    /// no lowering; nothing else is fatal.
    pub fn lower_policy_statement(
        &self,
        statement: &PolicyStatement,
        warnings: &mut Warnings,
    ) -> Result<LoweredPolicy> {
        let mut chain = Vec::new();
        let mut route_filter_lists = Vec::new();
        for term in statement.effective_terms() {
            self.lower_term(&statement.name, term, warnings)?
                .append_to(&mut chain, &mut route_filter_lists);
        }
        if self.config.emit_end_of_policy {
            chain.push(Statement::If {
                comment: None,
                guard: BooleanExpr::CallExprContext,
                true_statements: Vec::new(),
                false_statements: vec![Statement::ReturnLocalDefaultAction],
            });
        }

        tracing::debug!(
            policy = %statement.name,
            statements = chain.len(),
            line_lists = route_filter_lists.len(),
            "lowered policy-statement"
        );
        Ok(LoweredPolicy {
            policy: RoutingPolicy {
                name: statement.name.clone(),
                statements: chain,
            },
            route_filter_lists,
        })
    }

    /// Lower a single term to its guard and statements
    pub fn lower_term(
        &self,
        policy: &str,
        term: &PolicyTerm,
        warnings: &mut Warnings,
    ) -> Result<LoweredTerm> {
        let site = TermSite {
            policy,
            term: &term.name,
        };
        let at = site.describe();

        let mut conjuncts = Vec::with_capacity(term.froms.len() + term.tos.len());
        let mut calls = Vec::new();
        for from in &term.froms {
            match lower_call(from, site, self.registry, warnings) {
                Some(call) => calls.push(call),
                None => conjuncts.push(lower_from(from, site, self.registry, warnings)?),
            }
        }
        conjuncts.extend(term.tos.iter().map(|to| lower_to(to, site, warnings)));
        if !calls.is_empty() {
            conjuncts.push(BooleanExpr::ConjunctionChain(calls));
        }
        let guard = if term.is_unconditional() {
            BooleanExpr::True
        } else {
            BooleanExpr::Conjunction(conjuncts).simplify()
        };

        let (line_statements, route_filter_lists) = self.lower_line_actions(site, term, warnings);

        Ok(LoweredTerm {
            name: term.name.clone(),
            guard,
            statements: lower_thens(&term.thens, &at, self.registry, warnings),
            line_statements,
            route_filter_lists,
        })
    }

    fn lower_line_actions(
        &self,
        site: TermSite<'_>,
        term: &PolicyTerm,
        warnings: &mut Warnings,
    ) -> (Vec<Statement>, Vec<RouteFilterList>) {
        let at = site.describe();
        let mut statements = Vec::new();
        let mut lists = Vec::new();
        let mut emitted = BTreeSet::new();
        for from in &term.froms {
            let PolicyFrom::RouteFilter(reference) = from else {
                continue;
            };
            // The missing reference is already reported by the guard
            let Some(filter) = reference.resolve(self.registry) else {
                continue;
            };
            for line in filter.lines().filter(|l| !l.thens.is_empty()) {
                let name = per_line_list_name(site.policy, site.term, &filter.name, &line.key);
                // Same filter named twice in one term
                if !emitted.insert(name.clone()) {
                    continue;
                }
                let mut list = RouteFilterList::new(name.clone());
                for lowered in lower_route_filter_line(&line.key, &at, warnings) {
                    list.add_line(lowered);
                }
                statements.push(Statement::if_then(
                    Some(format!("{} {}", site.term, line.key)),
                    BooleanExpr::MatchRouteFilter(name),
                    lower_thens(&line.thens, &at, self.registry, warnings),
                ));
                lists.push(list);
            }
        }
        (statements, lists)
    }
}

/// Lower one policy-statement against `registry`
pub fn lower_policy_statement(
    statement: &PolicyStatement,
    registry: &dyn Registry,
    config: &PolicyConfig,
    warnings: &mut Warnings,
) -> Result<LoweredPolicy> {
    PolicyLowering::new(registry, config).lower_policy_statement(statement, warnings)
}
