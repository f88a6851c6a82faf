//! Mounted catalog page: one cancellable load plus the user events.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use storefront_products::{Category, ProductId, VariantId};

use crate::cart::CartDispatch;
use crate::loader::{CatalogLoader, LoadError};
use crate::notify::{Notification, Notifier};
use crate::render::{render, CatalogView};
use crate::source::CatalogSource;
use crate::state::CatalogState;

/// A catalog page between mount and unmount.
///
/// Mounting starts exactly one load. Unmounting cancels it and waits for the
/// load task to finish, so once [`CatalogPage::unmount`] returns nothing
/// touches the state again.
pub struct CatalogPage {
    state: Arc<Mutex<CatalogState>>,
    cancel: CancellationToken,
    load: Option<JoinHandle<()>>,
    dispatch: CartDispatch,
}

impl core::fmt::Debug for CatalogPage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CatalogPage")
            .field("cancelled", &self.cancel.is_cancelled())
            .field("load_pending", &self.load.is_some())
            .finish_non_exhaustive()
    }
}

impl CatalogPage {
    /// Mount the page: mark it loading and spawn the single catalog load.
    pub fn mount<S>(
        loader: CatalogLoader<S>,
        category: Category,
        notifier: Arc<dyn Notifier>,
        dispatch: CartDispatch,
    ) -> Self
    where
        S: CatalogSource + Send + Sync + 'static,
    {
        let state = Arc::new(Mutex::new(CatalogState::loading(category)));
        let cancel = CancellationToken::new();

        let load = tokio::spawn(run_load(loader, state.clone(), cancel.clone(), notifier));

        Self {
            state,
            cancel,
            load: Some(load),
            dispatch,
        }
    }

    /// Wait until the load has settled (succeeded, failed or been cancelled).
    pub async fn settled(&mut self) {
        if let Some(load) = self.load.take() {
            if let Err(err) = load.await {
                tracing::error!(error = %err, "catalog load task ended abnormally");
            }
        }
    }

    pub async fn snapshot(&self) -> CatalogState {
        self.state.lock().await.clone()
    }

    pub async fn render(&self) -> CatalogView {
        render(&*self.state.lock().await)
    }

    pub async fn select_category(&self, category: Category) {
        tracing::debug!(%category, "category selected");
        self.state.lock().await.select_category(category);
    }

    /// Returns `false` when no card for `product_id` is currently mounted.
    pub async fn select_variant(&self, product_id: ProductId, variant: VariantId) -> bool {
        let mut state = self.state.lock().await;
        match state.card_mut(product_id) {
            Some(card) => {
                card.select_variant(variant);
                true
            }
            None => false,
        }
    }

    /// Add the mounted card's product with its current variant to the cart.
    ///
    /// Returns `false` when the card is not mounted or is out of stock.
    pub async fn add_to_cart(&self, product_id: ProductId) -> bool {
        let state = self.state.lock().await;
        match state.card(product_id) {
            Some(card) => card.add_to_cart(&self.dispatch),
            None => false,
        }
    }

    /// Cancel any in-flight load, wait for it, and hand back the final state.
    pub async fn unmount(mut self) -> CatalogState {
        self.cancel.cancel();
        self.settled().await;
        self.snapshot().await
    }
}

impl Drop for CatalogPage {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn run_load<S>(
    loader: CatalogLoader<S>,
    state: Arc<Mutex<CatalogState>>,
    cancel: CancellationToken,
    notifier: Arc<dyn Notifier>,
) where
    S: CatalogSource + Send + Sync,
{
    let outcome = loader.load(&cancel).await;

    let mut state = state.lock().await;
    if cancel.is_cancelled() {
        tracing::debug!("catalog load discarded after unmount");
        return;
    }

    match outcome {
        Ok(products) => {
            tracing::info!(count = products.len(), "catalog loaded");
            state.finish_load(products);
        }
        Err(LoadError::Cancelled) => {
            tracing::debug!("catalog load cancelled");
        }
        Err(LoadError::Failed(err)) => {
            tracing::warn!(error = %err, "catalog load failed");
            notifier.notify(Notification::fetch_failed());
            state.fail_load();
        }
    }
}
