pub mod from;
pub mod statement;
pub mod then;

pub use from::{AddressFamily, PolicyFrom, PolicyTo};
pub use statement::{PolicyStatement, PolicyTerm};
pub use then::PolicyThen;
