//! Application and application-set expansion
//!
//! Expands one application-set member into the ordered list of concrete
//! protocol/port clauses it denotes. Order is member declaration order,
//! depth first, then term order inside each application.

use crate::features::applications::domain::{Application, ApplicationSetMember, ApplicationTerm};
use crate::features::resolution::domain::{ApplicationOrSet, Resolve};
use crate::features::resolution::ports::Registry;
use crate::shared::diagnostics::Warnings;
use crate::target::HeaderSpace;

/// A concrete clause reached by expansion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandedLeaf<'r> {
    pub application: &'r Application,
    pub term: &'r ApplicationTerm,
}

impl ExpandedLeaf<'_> {
    pub fn header_space(&self) -> HeaderSpace {
        self.term.header_space()
    }
}

/// Walks member references against a frozen registry
pub struct ApplicationExpander<'r> {
    registry: &'r dyn Registry,
    max_depth: usize,
}

impl<'r> ApplicationExpander<'r> {
    pub fn new(registry: &'r dyn Registry, max_depth: usize) -> Self {
        Self { registry, max_depth }
    }

    /// Expand `member` referenced at `site`
    ///
    /// Unresolved references, undefined built-ins, nesting beyond the depth
    /// limit and cycles each report one diagnostic and contribute nothing.
    /// Existing but empty definitions contribute nothing silently.
    pub fn expand(
        &self,
        member: &ApplicationSetMember,
        site: &str,
        warnings: &mut Warnings,
    ) -> Vec<ExpandedLeaf<'r>> {
        let mut leaves = Vec::new();
        let mut path = Vec::new();
        self.expand_member(member, 0, &mut path, site, &mut leaves, warnings);
        leaves
    }

    fn expand_member(
        &self,
        member: &ApplicationSetMember,
        depth: usize,
        path: &mut Vec<String>,
        site: &str,
        leaves: &mut Vec<ExpandedLeaf<'r>>,
        warnings: &mut Warnings,
    ) {
        if depth > self.max_depth {
            warnings.red_flag(format!(
                "application-set nesting exceeds depth {} at '{}' ({})",
                self.max_depth,
                member.name(),
                site
            ));
            return;
        }
        tracing::trace!(member = member.name(), depth, "expanding application member");

        match member {
            ApplicationSetMember::Application(reference) => {
                if let Some(application) = reference.resolve_or_report(self.registry, site, warnings) {
                    self.push_application(application, site, leaves, warnings);
                }
            }
            ApplicationSetMember::ApplicationSet(reference) => {
                if let Some(set) = reference.resolve_or_report(self.registry, site, warnings) {
                    self.expand_set(&set.name, &set.members, depth, path, site, leaves, warnings);
                }
            }
            ApplicationSetMember::ApplicationOrSet(reference) => {
                match reference.resolve_or_report(self.registry, site, warnings) {
                    Some(ApplicationOrSet::Application(application)) => {
                        self.push_application(application, site, leaves, warnings)
                    }
                    Some(ApplicationOrSet::ApplicationSet(set)) => {
                        self.expand_set(&set.name, &set.members, depth, path, site, leaves, warnings)
                    }
                    None => {}
                }
            }
            ApplicationSetMember::Builtin(builtin) => match builtin.definition() {
                Some(application) => self.push_application(application, site, leaves, warnings),
                None => warnings.unimplemented(format!(
                    "built-in application '{}' has no definition ({})",
                    builtin, site
                )),
            },
            ApplicationSetMember::BuiltinSet(builtin) => {
                self.expand_set(builtin.name(), builtin.members(), depth, path, site, leaves, warnings)
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn expand_set(
        &self,
        name: &str,
        members: &[ApplicationSetMember],
        depth: usize,
        path: &mut Vec<String>,
        site: &str,
        leaves: &mut Vec<ExpandedLeaf<'r>>,
        warnings: &mut Warnings,
    ) {
        if path.iter().any(|seen| seen == name) {
            warnings.red_flag(format!(
                "application-set '{}' contains itself ({})",
                name, site
            ));
            return;
        }
        path.push(name.to_string());
        for member in members {
            self.expand_member(member, depth + 1, path, site, leaves, warnings);
        }
        path.pop();
    }

    fn push_application(
        &self,
        application: &'r Application,
        site: &str,
        leaves: &mut Vec<ExpandedLeaf<'r>>,
        warnings: &mut Warnings,
    ) {
        if application.ipv6 {
            warnings.pedantic(format!(
                "IPv6 application '{}' ignored in IPv4 filter ({})",
                application.name, site
            ));
            return;
        }
        leaves.extend(
            application
                .terms
                .iter()
                .map(|term| ExpandedLeaf { application, term }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::applications::domain::{ApplicationSet, BuiltinApplication, BuiltinApplicationSet};
    use crate::features::resolution::domain::{
        ApplicationOrSetReference, ApplicationReference, ApplicationSetReference,
    };
    use crate::features::resolution::infrastructure::RegistryBuilder;
    use crate::shared::diagnostics::Severity;
    use crate::shared::models::{IpProtocol, SubRange};
    use pretty_assertions::assert_eq;

    const SITE: &str = "firewall filter 'f' term 't'";

    fn tcp_app(name: &str, port: u32) -> Application {
        Application::new(
            name,
            vec![ApplicationTerm::new("t1")
                .protocol(IpProtocol::Tcp)
                .destination_port(SubRange::single(port))],
        )
    }

    fn set_of(name: &str, members: Vec<ApplicationSetMember>) -> ApplicationSet {
        ApplicationSet::new(name, members)
    }

    fn app_member(name: &str) -> ApplicationSetMember {
        ApplicationSetMember::Application(ApplicationReference::new(name))
    }

    fn set_member(name: &str) -> ApplicationSetMember {
        ApplicationSetMember::ApplicationSet(ApplicationSetReference::new(name))
    }

    fn leaf_names(leaves: &[ExpandedLeaf<'_>]) -> Vec<String> {
        leaves.iter().map(|l| l.application.name.clone()).collect()
    }

    #[test]
    fn test_nested_sets_expand_in_declaration_order() {
        let mut builder = RegistryBuilder::new();
        builder
            .add_application(tcp_app("A", 80))
            .add_application(tcp_app("B", 443))
            .add_application(tcp_app("C", 22))
            .add_application_set(set_of("T", vec![app_member("B")]))
            .add_application_set(set_of("S", vec![app_member("A"), set_member("T"), app_member("C")]));
        let registry = builder.build();

        let expander = ApplicationExpander::new(&registry, 32);
        let mut warnings = Warnings::new();
        let leaves = expander.expand(&set_member("S"), SITE, &mut warnings);
        assert_eq!(leaf_names(&leaves), vec!["A", "B", "C"]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_unresolved_member_reports_once() {
        let registry = RegistryBuilder::new().build();
        let expander = ApplicationExpander::new(&registry, 32);
        let mut warnings = Warnings::new();
        assert!(expander.expand(&set_member("missing"), SITE, &mut warnings).is_empty());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_empty_set_is_silent() {
        let mut builder = RegistryBuilder::new();
        builder.add_application_set(set_of("E", vec![]));
        let registry = builder.build();
        let expander = ApplicationExpander::new(&registry, 32);
        let mut warnings = Warnings::new();
        assert!(expander.expand(&set_member("E"), SITE, &mut warnings).is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_dual_kind_prefers_application() {
        let mut builder = RegistryBuilder::new();
        builder
            .add_application(tcp_app("X", 80))
            .add_application(tcp_app("Y", 443))
            .add_application_set(set_of("X", vec![app_member("Y")]));
        let registry = builder.build();
        let expander = ApplicationExpander::new(&registry, 32);
        let member = ApplicationSetMember::ApplicationOrSet(ApplicationOrSetReference::new("X"));
        let leaves = expander.expand(&member, SITE, &mut Warnings::new());
        assert_eq!(leaf_names(&leaves), vec!["X"]);
    }

    #[test]
    fn test_depth_limit_cuts_branch() {
        let mut builder = RegistryBuilder::new();
        builder
            .add_application(tcp_app("B", 443))
            .add_application_set(set_of("T", vec![app_member("B")]))
            .add_application_set(set_of("S", vec![set_member("T")]));
        let registry = builder.build();
        let mut warnings = Warnings::new();
        let leaves = ApplicationExpander::new(&registry, 1).expand(&set_member("S"), SITE, &mut warnings);
        assert!(leaves.is_empty());
        assert_eq!(warnings.count(Severity::RedFlag), 1);
    }

    #[test]
    fn test_cycle_terminates_with_one_flag() {
        let mut builder = RegistryBuilder::new();
        builder
            .add_application_set(set_of("S", vec![set_member("T"), set_member("T")]))
            .add_application_set(set_of("T", vec![set_member("S")]));
        let registry = builder.build();
        let mut warnings = Warnings::new();
        let leaves = ApplicationExpander::new(&registry, 32).expand(&set_member("S"), SITE, &mut warnings);
        assert!(leaves.is_empty());
        assert_eq!(warnings.count(Severity::RedFlag), 2);
    }

    #[test]
    fn test_builtins() {
        let registry = RegistryBuilder::new().build();
        let expander = ApplicationExpander::new(&registry, 32);
        let mut warnings = Warnings::new();

        let ssh = expander.expand(&ApplicationSetMember::Builtin(BuiltinApplication::Ssh), SITE, &mut warnings);
        assert_eq!(ssh.len(), 1);
        assert!(ssh[0].header_space().dst_ports.contains(&SubRange::single(22)));

        let ike = expander.expand(&ApplicationSetMember::Builtin(BuiltinApplication::Ike), SITE, &mut warnings);
        assert!(ike.is_empty());
        assert_eq!(warnings.count(Severity::Unimplemented), 1);

        let ms_rpc = expander.expand(
            &ApplicationSetMember::BuiltinSet(BuiltinApplicationSet::MsRpc),
            SITE,
            &mut warnings,
        );
        assert_eq!(leaf_names(&ms_rpc), vec!["junos-ms-rpc-tcp", "junos-ms-rpc-udp"]);
    }

    #[test]
    fn test_ipv6_application_skipped() {
        let registry = RegistryBuilder::new().build();
        let mut warnings = Warnings::with_pedantic(true);
        let leaves = ApplicationExpander::new(&registry, 32).expand(
            &ApplicationSetMember::Builtin(BuiltinApplication::Icmp6All),
            SITE,
            &mut warnings,
        );
        assert!(leaves.is_empty());
        assert_eq!(warnings.count(Severity::Pedantic), 1);
    }
}
