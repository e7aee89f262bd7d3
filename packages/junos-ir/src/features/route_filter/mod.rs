//! Route filters and prefix lists
//!
//! `domain/` holds the line variants and the dedup store; `infrastructure/`
//! lowers them to route-filter lists and prefix ranges.

pub mod domain;
pub mod infrastructure;

pub use domain::{
    LineId, PrefixList, RouteFilter, RouteFilterLine, RouteFilterLineKey, RouteFilterLineKind,
};
pub use infrastructure::{lower_prefix_list, lower_route_filter, lower_route_filter_line};
