pub mod registry;

pub use registry::{ConfigurationRegistry, RegistryBuilder};
