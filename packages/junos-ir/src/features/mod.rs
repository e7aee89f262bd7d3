//! Feature slices
//!
//! Each slice owns one IR category: `domain/` holds the closed variant
//! set, `infrastructure/` lowers it into `crate::target`. Name resolution
//! is its own slice with a `ports/` trait every lowering pass depends on.

pub mod applications;
pub mod community;
pub mod firewall;
pub mod nat;
pub mod policy;
pub mod resolution;
pub mod route_filter;
pub mod screen;
pub mod vlan;
