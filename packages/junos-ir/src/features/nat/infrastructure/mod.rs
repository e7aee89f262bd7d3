pub mod lowering;

pub use lowering::{lower_nat_rule, lower_nat_rule_set, NatLowering};
