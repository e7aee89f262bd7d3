pub mod lowering;

pub use lowering::{lower_firewall_filter, FirewallLowering, TermAction};
