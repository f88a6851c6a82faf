//! `storefront-client`
//!
//! **Responsibility:** the product-listing client.
//!
//! This crate provides:
//! - A single-attempt, cancellable catalog load over HTTP
//! - Category filtering and per-card variant selection
//! - Add-to-cart dispatch to an external cart, with toast notifications
//! - A declarative render tree, printed by the CLI and mapped to DOM by the
//!   Leptos frontend on `wasm32`

pub mod card;
pub mod cart;
pub mod config;
pub mod loader;
pub mod notify;
#[cfg(not(target_arch = "wasm32"))]
pub mod page;
pub mod render;
pub mod source;
pub mod state;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use card::ProductCard;
pub use cart::{AddProduct, CartDispatch, CartSink, InMemoryCart};
pub use config::{ClientConfig, ConfigError};
pub use loader::{CatalogLoader, LoadError};
pub use notify::{Notification, Notifier, RecordingNotifier, Toast, ToastQueue, TracingNotifier};
#[cfg(not(target_arch = "wasm32"))]
pub use page::CatalogPage;
pub use render::{render, CatalogView};
pub use source::{CatalogSource, FetchError, HttpCatalogSource};
pub use state::CatalogState;
