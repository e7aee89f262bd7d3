//! Registry Port
//!
//! Read-only view of every named definition in one device configuration.
//! Lowering functions receive it explicitly and never reach into global
//! state. The registry is fully populated before lowering starts, so
//! forward references resolve like any other.

use crate::features::applications::domain::{Application, ApplicationSet};
use crate::features::community::domain::{AsPath, AsPathGroup, CommunityDefinition};
use crate::features::nat::domain::{AddressBookEntry, NatPool};
use crate::features::policy::domain::PolicyStatement;
use crate::features::route_filter::domain::{PrefixList, RouteFilter};
use crate::features::vlan::domain::Vlan;

/// Named-definition lookup (Port in Hexagonal Architecture)
pub trait Registry: Send + Sync {
    fn lookup_application(&self, name: &str) -> Option<&Application>;

    fn lookup_application_set(&self, name: &str) -> Option<&ApplicationSet>;

    fn lookup_policy_statement(&self, name: &str) -> Option<&PolicyStatement>;

    fn lookup_pool(&self, name: &str) -> Option<&NatPool>;

    fn lookup_prefix_list(&self, name: &str) -> Option<&PrefixList>;

    fn lookup_route_filter(&self, name: &str) -> Option<&RouteFilter>;

    fn lookup_community(&self, name: &str) -> Option<&CommunityDefinition>;

    fn lookup_as_path(&self, name: &str) -> Option<&AsPath>;

    fn lookup_as_path_group(&self, name: &str) -> Option<&AsPathGroup>;

    fn lookup_vlan(&self, name: &str) -> Option<&Vlan>;

    fn lookup_address(&self, name: &str) -> Option<&AddressBookEntry>;
}
