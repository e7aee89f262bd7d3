//! Applications and application-sets
//!
//! User-defined and vendor-predefined protocol/port definitions, plus the
//! recursive expander that turns a member reference into concrete clauses.

pub mod domain;
pub mod infrastructure;

pub use domain::{
    Application, ApplicationSet, ApplicationSetMember, ApplicationTerm, BuiltinApplication,
    BuiltinApplicationSet,
};
pub use infrastructure::{ApplicationExpander, ExpandedLeaf};
