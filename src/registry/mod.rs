pub mod endpoint_registry;
pub mod validation;

pub use endpoint_registry::{NavGroup, Registry};
