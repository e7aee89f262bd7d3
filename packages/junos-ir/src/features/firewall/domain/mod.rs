pub mod filter;
pub mod from;
pub mod then;

pub use filter::{FirewallFilter, FirewallTerm};
pub use from::FirewallFrom;
pub use then::FirewallThen;
