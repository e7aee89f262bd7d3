//! NAT rule-sets, pools and address-book entries

pub mod domain;
pub mod infrastructure;

pub use domain::{AddressBookEntry, NatKind, NatPool, NatRule, NatRuleMatch, NatRuleSet, NatRuleThen};
pub use infrastructure::{lower_nat_rule, lower_nat_rule_set, NatLowering};
