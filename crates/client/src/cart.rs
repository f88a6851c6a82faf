//! Cart collaborator and the add-product dispatch used by product cards.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use storefront_products::CartEntry;

use crate::notify::{Notification, Notifier};

/// Receives cart entries. Storage and totals are the implementor's concern.
pub trait CartSink: Send + Sync {
    fn add(&self, entry: CartEntry);
}

/// Callback a product card forwards its cart entry to.
pub trait AddProduct {
    fn add_product(&self, entry: CartEntry);
}

impl<F> AddProduct for F
where
    F: Fn(CartEntry),
{
    fn add_product(&self, entry: CartEntry) {
        self(entry)
    }
}

/// Default add-product behaviour: toast "Added to cart", then dispatch the
/// entry to the cart.
#[derive(Clone)]
pub struct CartDispatch {
    cart: Arc<dyn CartSink>,
    notifier: Arc<dyn Notifier>,
}

impl CartDispatch {
    pub fn new(cart: Arc<dyn CartSink>, notifier: Arc<dyn Notifier>) -> Self {
        Self { cart, notifier }
    }
}

impl core::fmt::Debug for CartDispatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CartDispatch").finish_non_exhaustive()
    }
}

impl AddProduct for CartDispatch {
    fn add_product(&self, entry: CartEntry) {
        tracing::debug!(
            product_id = %entry.product.id,
            variant = %entry.variant.id,
            price = entry.variant.price,
            "adding to cart"
        );
        self.notifier.notify(Notification::added_to_cart());
        self.cart.add(entry);
    }
}

/// Cart that keeps entries in memory, in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryCart {
    entries: Mutex<Vec<CartEntry>>,
}

impl InMemoryCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<CartEntry> {
        self.locked().clone()
    }

    pub fn len(&self) -> usize {
        self.locked().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A panic while holding the lock cannot leave a half-pushed entry, so the
    /// contents stay usable after poisoning.
    fn locked(&self) -> MutexGuard<'_, Vec<CartEntry>> {
        self.entries.lock().unwrap_or_else(|poisoned| {
            tracing::error!("cart lock poisoned; recovering entries");
            PoisonError::into_inner(poisoned)
        })
    }
}

impl CartSink for InMemoryCart {
    fn add(&self, entry: CartEntry) {
        self.locked().push(entry);
    }
}
