pub mod from_lowering;
pub mod statement_lowering;
pub mod then_lowering;

pub use from_lowering::{lower_call, lower_from, lower_protocol, lower_to, TermSite};
pub use statement_lowering::{lower_policy_statement, LoweredPolicy, LoweredTerm, PolicyLowering};
pub use then_lowering::{lower_then, lower_thens, reject_statement};
