//! Communities and AS paths

pub mod domain;
pub mod infrastructure;

pub use domain::{AsPath, AsPathGroup, CommunityDefinition, CommunityMember};
