//! Then-action lowering

use crate::features::community::infrastructure::{community_matches, literal_communities};
use crate::features::policy::domain::PolicyThen;
use crate::features::resolution::domain::Resolve;
use crate::features::resolution::ports::Registry;
use crate::shared::diagnostics::Warnings;
use crate::target::{BooleanExpr, Statement};

/// `reject` returns false from a nested call and rejects outright at the
/// top level
pub fn reject_statement() -> Statement {
    Statement::If {
        comment: None,
        guard: BooleanExpr::CallExprContext,
        true_statements: vec![Statement::ReturnFalse],
        false_statements: vec![Statement::ExitReject],
    }
}

/// Lower a term's actions: non-terminal actions first, then terminal ones,
/// each group in declaration order
pub fn lower_thens(
    thens: &[PolicyThen],
    site: &str,
    registry: &dyn Registry,
    warnings: &mut Warnings,
) -> Vec<Statement> {
    let (terminal, non_terminal): (Vec<&PolicyThen>, Vec<&PolicyThen>) =
        thens.iter().partition(|then| then.is_terminal());
    let mut statements = Vec::with_capacity(thens.len());
    for then in non_terminal.into_iter().chain(terminal) {
        statements.extend(lower_then(then, site, registry, warnings));
    }
    statements
}

/// Lower one action; unresolvable or unsupported actions emit nothing
pub fn lower_then(
    then: &PolicyThen,
    site: &str,
    registry: &dyn Registry,
    warnings: &mut Warnings,
) -> Option<Statement> {
    let statement = match then {
        PolicyThen::Accept => Statement::ExitAccept,
        PolicyThen::Reject => reject_statement(),
        PolicyThen::DefaultActionAccept => Statement::SetDefaultActionAccept,
        PolicyThen::DefaultActionReject => Statement::SetDefaultActionReject,
        PolicyThen::NextPolicy => Statement::FallThrough,
        // Evaluation simply continues with the next term
        PolicyThen::NextTerm => return None,
        PolicyThen::LocalPreference(value) => Statement::SetLocalPreference(*value),
        PolicyThen::Metric(value) => Statement::SetMetric(*value),
        PolicyThen::MetricAdd(value) => Statement::IncrementMetric(*value),
        PolicyThen::NextHop(address) => Statement::SetNextHop(*address),
        PolicyThen::NextHopSelf => Statement::SetNextHopSelf,
        PolicyThen::Tag(tag) => Statement::SetTag(*tag),
        PolicyThen::Preference(value) => Statement::SetAdministrativeCost(*value),
        PolicyThen::Origin(origin) => Statement::SetOrigin(*origin),
        PolicyThen::CommunityAdd(reference) => {
            let community = reference.resolve_or_report(registry, site, warnings)?;
            Statement::AddCommunities(literal_communities(community, site, warnings))
        }
        PolicyThen::CommunitySet(reference) => {
            let community = reference.resolve_or_report(registry, site, warnings)?;
            Statement::SetCommunities(literal_communities(community, site, warnings))
        }
        PolicyThen::CommunityDelete(reference) => {
            let community = reference.resolve_or_report(registry, site, warnings)?;
            Statement::DeleteCommunities(community_matches(community, site, warnings))
        }
        PolicyThen::AsPathPrepend(asns) => Statement::PrependAsPath(asns.clone()),
        PolicyThen::Unsupported(text) => {
            warnings.unimplemented(format!("then action '{}' in {}", text, site));
            return None;
        }
    };
    Some(statement)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::community::domain::{CommunityDefinition, CommunityMember};
    use crate::features::resolution::domain::CommunityReference;
    use crate::features::resolution::infrastructure::RegistryBuilder;
    use crate::shared::models::StandardCommunity;
    use pretty_assertions::assert_eq;

    const SITE: &str = "policy-statement 'p' term 't'";

    #[test]
    fn test_terminal_actions_come_last() {
        let registry = RegistryBuilder::new().build();
        let thens = [
            PolicyThen::Accept,
            PolicyThen::LocalPreference(100),
            PolicyThen::Tag(7),
        ];
        let statements = lower_thens(&thens, SITE, &registry, &mut Warnings::new());
        assert_eq!(
            statements,
            vec![
                Statement::SetLocalPreference(100),
                Statement::SetTag(7),
                Statement::ExitAccept,
            ]
        );
    }

    #[test]
    fn test_reject_has_both_branches() {
        let registry = RegistryBuilder::new().build();
        let statements = lower_thens(&[PolicyThen::Reject], SITE, &registry, &mut Warnings::new());
        match &statements[..] {
            [Statement::If {
                guard,
                true_statements,
                false_statements,
                ..
            }] => {
                assert_eq!(guard, &BooleanExpr::CallExprContext);
                assert_eq!(true_statements, &vec![Statement::ReturnFalse]);
                assert_eq!(false_statements, &vec![Statement::ExitReject]);
            }
            other => panic!("unexpected lowering: {:?}", other),
        }
    }

    #[test]
    fn test_next_policy_falls_through_and_next_term_is_silent() {
        let registry = RegistryBuilder::new().build();
        let statements = lower_thens(
            &[PolicyThen::NextTerm, PolicyThen::NextPolicy],
            SITE,
            &registry,
            &mut Warnings::new(),
        );
        assert_eq!(statements, vec![Statement::FallThrough]);
    }

    #[test]
    fn test_community_add_uses_literals() {
        let mut builder = RegistryBuilder::new();
        builder.add_community(CommunityDefinition::new(
            "c",
            vec![
                CommunityMember::Literal(StandardCommunity::new(65000, 10)),
                CommunityMember::Regex("65000:.*".to_string()),
            ],
        ));
        let registry = builder.build();
        let mut warnings = Warnings::new();
        let statement = lower_then(
            &PolicyThen::CommunityAdd(CommunityReference::new("c")),
            SITE,
            &registry,
            &mut warnings,
        );
        assert_eq!(
            statement,
            Some(Statement::AddCommunities(vec![StandardCommunity::new(65000, 10)]))
        );
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_undefined_community_emits_nothing() {
        let registry = RegistryBuilder::new().build();
        let mut warnings = Warnings::new();
        let statement = lower_then(
            &PolicyThen::CommunityDelete(CommunityReference::new("gone")),
            SITE,
            &registry,
            &mut warnings,
        );
        assert_eq!(statement, None);
        assert_eq!(
            warnings.messages(),
            vec!["undefined reference to community 'gone' (policy-statement 'p' term 't')"]
        );
    }
}
