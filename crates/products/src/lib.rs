//! Product catalog domain module.
//!
//! This crate contains the catalog rules (price variants, category filtering,
//! cart entries, display truncation) as deterministic domain logic: no IO, no
//! HTTP, no rendering.

pub mod cart;
pub mod category;
pub mod display;
pub mod product;
pub mod variant;

pub use cart::CartEntry;
pub use category::{filter_products, Category};
pub use display::{truncate, truncate_description, truncate_title, DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS};
pub use product::{Product, ProductId, Rating};
pub use variant::{current_variant, variants_for, Variant, VariantId};
