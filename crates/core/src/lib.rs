//! `storefront-core` — domain building blocks shared by the storefront crates.
//!
//! This crate contains **pure domain** primitives (no IO, no HTTP, no UI).

pub mod entity;
pub mod error;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
