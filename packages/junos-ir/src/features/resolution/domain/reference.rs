//! Typed named references
//!
//! A reference holds only a name. Resolution goes through the read-only
//! `Registry` port; a miss is recoverable and is reported once per
//! reference site.

use crate::features::applications::domain::{Application, ApplicationSet};
use crate::features::community::domain::{AsPath, AsPathGroup, CommunityDefinition};
use crate::features::nat::domain::{AddressBookEntry, NatPool};
use crate::features::policy::domain::PolicyStatement;
use crate::features::resolution::ports::Registry;
use crate::features::route_filter::domain::{PrefixList, RouteFilter};
use crate::features::vlan::domain::Vlan;
use crate::shared::diagnostics::Warnings;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of definition a reference points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    Application,
    ApplicationSet,
    ApplicationOrSet,
    PolicyStatement,
    NatPool,
    PrefixList,
    RouteFilter,
    Community,
    AsPath,
    AsPathGroup,
    Vlan,
    Address,
}

impl ReferenceKind {
    pub fn description(&self) -> &'static str {
        match self {
            ReferenceKind::Application => "application",
            ReferenceKind::ApplicationSet => "application-set",
            ReferenceKind::ApplicationOrSet => "application or application-set",
            ReferenceKind::PolicyStatement => "policy-statement",
            ReferenceKind::NatPool => "nat pool",
            ReferenceKind::PrefixList => "prefix-list",
            ReferenceKind::RouteFilter => "route-filter",
            ReferenceKind::Community => "community",
            ReferenceKind::AsPath => "as-path",
            ReferenceKind::AsPathGroup => "as-path-group",
            ReferenceKind::Vlan => "vlan",
            ReferenceKind::Address => "address-book entry",
        }
    }
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Something that can be looked up in the registry by name
pub trait Resolve {
    /// What a successful lookup yields, borrowed from the registry
    type Target<'r>;

    const KIND: ReferenceKind;

    fn name(&self) -> &str;

    fn resolve<'r>(&self, registry: &'r dyn Registry) -> Option<Self::Target<'r>>;

    /// Resolve, emitting one red flag naming the reference site on a miss
    fn resolve_or_report<'r>(
        &self,
        registry: &'r dyn Registry,
        site: &str,
        warnings: &mut Warnings,
    ) -> Option<Self::Target<'r>> {
        let resolved = self.resolve(registry);
        if resolved.is_none() {
            warnings.red_flag(undefined_reference_message(Self::KIND, self.name(), site));
        }
        resolved
    }
}

pub fn undefined_reference_message(kind: ReferenceKind, name: &str, site: &str) -> String {
    format!("undefined reference to {} '{}' ({})", kind, name, site)
}

macro_rules! named_reference {
    ($(#[$meta:meta])* $reference:ident => $target:ty, $kind:ident, $lookup:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $reference {
            name: String,
        }

        impl $reference {
            pub fn new(name: impl Into<String>) -> Self {
                Self { name: name.into() }
            }

            pub fn name(&self) -> &str {
                &self.name
            }
        }

        impl Resolve for $reference {
            type Target<'r> = &'r $target;

            const KIND: ReferenceKind = ReferenceKind::$kind;

            fn name(&self) -> &str {
                &self.name
            }

            fn resolve<'r>(&self, registry: &'r dyn Registry) -> Option<&'r $target> {
                registry.$lookup(&self.name)
            }
        }
    };
}

named_reference!(
    /// `application <name>`
    ApplicationReference => Application, Application, lookup_application
);
named_reference!(
    /// `application-set <name>`
    ApplicationSetReference => ApplicationSet, ApplicationSet, lookup_application_set
);
named_reference!(PolicyStatementReference => PolicyStatement, PolicyStatement, lookup_policy_statement);
named_reference!(PoolReference => NatPool, NatPool, lookup_pool);
named_reference!(PrefixListReference => PrefixList, PrefixList, lookup_prefix_list);
named_reference!(RouteFilterReference => RouteFilter, RouteFilter, lookup_route_filter);
named_reference!(CommunityReference => CommunityDefinition, Community, lookup_community);
named_reference!(AsPathReference => AsPath, AsPath, lookup_as_path);
named_reference!(AsPathGroupReference => AsPathGroup, AsPathGroup, lookup_as_path_group);
named_reference!(VlanReference => Vlan, Vlan, lookup_vlan);
named_reference!(AddressReference => AddressBookEntry, Address, lookup_address);

/// Result of resolving a dual-kind name
#[derive(Debug, Clone, Copy)]
pub enum ApplicationOrSet<'r> {
    Application(&'r Application),
    ApplicationSet(&'r ApplicationSet),
}

/// Name that may denote an application or an application-set
///
/// The application table is probed first; a name defined in both tables
/// always resolves to the application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationOrSetReference {
    name: String,
}

impl ApplicationOrSetReference {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Resolve for ApplicationOrSetReference {
    type Target<'r> = ApplicationOrSet<'r>;

    const KIND: ReferenceKind = ReferenceKind::ApplicationOrSet;

    fn name(&self) -> &str {
        &self.name
    }

    fn resolve<'r>(&self, registry: &'r dyn Registry) -> Option<ApplicationOrSet<'r>> {
        if let Some(application) = registry.lookup_application(&self.name) {
            return Some(ApplicationOrSet::Application(application));
        }
        registry
            .lookup_application_set(&self.name)
            .map(ApplicationOrSet::ApplicationSet)
    }
}
