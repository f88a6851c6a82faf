//! Single-attempt, cancellable catalog load.

use thiserror::Error;
use tokio_util::sync::CancellationToken;

use storefront_products::Product;

use crate::source::{CatalogSource, FetchError};

/// Outcome of a load that produced no products.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The consumer went away before the response arrived. Never shown to the
    /// user.
    #[error("catalog load cancelled")]
    Cancelled,
    /// Network, status, decode or contract failure.
    #[error("catalog load failed: {0}")]
    Failed(#[from] FetchError),
}

impl LoadError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, LoadError::Cancelled)
    }
}

/// Issues exactly one fetch per [`CatalogLoader::load`] call.
#[derive(Debug, Clone)]
pub struct CatalogLoader<S> {
    source: S,
}

impl<S: CatalogSource> CatalogLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch the catalog unless `cancel` fires first.
    ///
    /// When cancellation wins, the in-flight request future is dropped, which
    /// aborts the underlying HTTP request. A token that is already cancelled
    /// never starts a request.
    pub async fn load(&self, cancel: &CancellationToken) -> Result<Vec<Product>, LoadError> {
        if cancel.is_cancelled() {
            return Err(LoadError::Cancelled);
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(LoadError::Cancelled),
            result = self.source.fetch_products() => result.map_err(LoadError::Failed),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_sources {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use tokio::sync::Notify;

    use storefront_products::{Product, ProductId};

    use crate::source::{CatalogSource, FetchError};

    pub fn product(id: u64, category: &str, price: f64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product number {id} with a long title"),
            description: format!("Description of product {id}"),
            price,
            image: format!("https://img.example/{id}.jpg"),
            category: category.to_string(),
            rating: None,
            stock: None,
        }
    }

    pub fn sample_catalog() -> Vec<Product> {
        vec![
            product(1, "men's clothing", 109.95),
            product(2, "jewelery", 695.0),
            product(3, "men's clothing", 50.0),
            product(4, "electronics", 64.0),
        ]
    }

    /// Answers with a fixed catalog, counting requests.
    #[derive(Debug, Default, Clone)]
    pub struct StaticSource {
        pub products: Vec<Product>,
        pub calls: Arc<AtomicUsize>,
    }

    impl StaticSource {
        pub fn new(products: Vec<Product>) -> Self {
            Self {
                products,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CatalogSource for StaticSource {
        async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.products.clone())
        }
    }

    /// Always fails with a network error.
    #[derive(Debug, Default, Clone)]
    pub struct FailingSource;

    #[async_trait]
    impl CatalogSource for FailingSource {
        async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
            Err(FetchError::Network("connection refused".to_string()))
        }
    }

    /// Holds the response until [`GatedSource::release`] is called.
    #[derive(Debug, Clone)]
    pub struct GatedSource {
        products: Vec<Product>,
        gate: Arc<Notify>,
        started: Arc<Notify>,
    }

    impl GatedSource {
        pub fn new(products: Vec<Product>) -> Self {
            Self {
                products,
                gate: Arc::new(Notify::new()),
                started: Arc::new(Notify::new()),
            }
        }

        pub fn release(&self) {
            self.gate.notify_one();
        }

        /// Resolves once a fetch is in flight.
        pub async fn started(&self) {
            self.started.notified().await;
        }
    }

    #[async_trait]
    impl CatalogSource for GatedSource {
        async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
            self.started.notify_one();
            self.gate.notified().await;
            Ok(self.products.clone())
        }
    }
}
