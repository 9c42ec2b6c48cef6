//! Products domain module.
//!
//! This crate holds the product record, the input schemas accepted for create and
//! update, and the registry that owns the collection. It is deterministic domain
//! logic only (no IO, no HTTP).

pub mod error;
pub mod product;
pub mod registry;

pub use error::{RegistryError, RegistryResult};
pub use product::{Product, ProductId, ProductInput, ProductPatch};
pub use registry::{InMemoryProductRegistry, ProductRegistry};
