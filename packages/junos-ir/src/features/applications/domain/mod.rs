pub mod application;
pub mod builtin;

pub use application::{Application, ApplicationSet, ApplicationSetMember, ApplicationTerm};
pub use builtin::{BuiltinApplication, BuiltinApplicationSet};
