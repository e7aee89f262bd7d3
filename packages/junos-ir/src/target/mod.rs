//! Vendor-independent lowering target
//!
//! Everything the lowering passes produce lives here: packet filters,
//! routing policies, route-filter lists, NAT transformations and integer
//! spaces. Downstream analysis consumes these without knowing the vendor.

pub mod acl;
pub mod header_space;
pub mod integer_space;
pub mod route_filter_list;
pub mod routing_policy;
pub mod transformation;

pub use acl::{AclLine, IpAccessList, LineAction};
pub use header_space::HeaderSpace;
pub use integer_space::IntegerSpace;
pub use route_filter_list::{RouteFilterList, RouteFilterListLine};
pub use routing_policy::{
    BooleanExpr, CommunityMatch, Origin, PrefixRange, RoutingPolicy, Statement,
};
pub use transformation::{
    NatTransformation, PortTranslation, TransformationStep, TransformationType,
};
