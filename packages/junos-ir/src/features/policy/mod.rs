//! Policy-statements
//!
//! `domain/` holds the from/to/then variants and the statement shape;
//! `infrastructure/` lowers them to routing policies.

pub mod domain;
pub mod infrastructure;

pub use domain::{AddressFamily, PolicyFrom, PolicyStatement, PolicyTerm, PolicyThen, PolicyTo};
pub use infrastructure::{lower_policy_statement, LoweredPolicy, PolicyLowering};
