//! `streetfood-core` — shared building blocks for the marketplace crates.
//!
//! This crate contains **pure domain** primitives (no IO, no collaborators).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{CatalogItemId, OrderId, SupplierId, VendorId};
pub use value_object::ValueObject;
