pub mod pool;
pub mod rule;

pub use pool::{AddressBookEntry, NatPool};
pub use rule::{NatKind, NatRule, NatRuleMatch, NatRuleSet, NatRuleThen};
