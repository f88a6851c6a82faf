//! Catalog sources: where the product list comes from.
//!
//! [`HttpCatalogSource`] owns transport details only: one `GET` against a fixed
//! endpoint, HTTP status mapping, JSON decoding and the boundary contract check
//! on every decoded product.

use async_trait::async_trait;
use reqwest::{Client, Url};
use thiserror::Error;

use storefront_core::DomainError;
use storefront_products::Product;

/// Why a catalog fetch produced no products.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("catalog API returned status {0}")]
    Status(u16),
    #[error("malformed catalog payload: {0}")]
    Decode(String),
    #[error("catalog payload violates product contract: {0}")]
    Contract(#[from] DomainError),
}

/// Something that can produce the full, ordered product collection.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait CatalogSource {
    /// Fetch every product once. Implementations never retry.
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError>;
}

/// Catalog source backed by the remote product-listing API.
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: Client,
    endpoint: Url,
}

impl HttpCatalogSource {
    /// Build a source for `endpoint` with a default reqwest client.
    ///
    /// No request timeout is configured; an in-flight fetch ends only when the
    /// server answers or the caller cancels it.
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchError> {
        tracing::debug!(endpoint = %self.endpoint, "fetching catalog");

        let response = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        parse_products(body.as_ref())
    }
}

/// Decode a catalog payload and check every product against the contract.
pub fn parse_products(body: &[u8]) -> Result<Vec<Product>, FetchError> {
    let products: Vec<Product> =
        serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    for product in &products {
        product.validate()?;
    }

    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ordered_payload() {
        let body = br#"[
            {"id": 3, "title": "Mens Cotton Jacket", "price": 55.99, "description": "d",
             "category": "men's clothing", "image": "https://img.example/3.jpg",
             "rating": {"rate": 4.7, "count": 500}},
            {"id": 1, "title": "Backpack", "price": 109.95, "description": "d",
             "category": "men's clothing", "image": "https://img.example/1.jpg"}
        ]"#;

        let products = parse_products(body).unwrap();
        let ids: Vec<u64> = products.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn empty_array_is_an_empty_catalog() {
        assert!(parse_products(b"[]").unwrap().is_empty());
    }

    #[test]
    fn non_array_payload_is_a_decode_error() {
        let err = parse_products(br#"{"products": []}"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn missing_fields_are_a_decode_error() {
        let err = parse_products(br#"[{"id": 1, "title": "x"}]"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn zero_price_violates_contract() {
        let body = br#"[{"id": 1, "title": "Free", "price": 0, "description": "d",
                         "category": "jewelery", "image": "https://img.example/1.jpg"}]"#;
        let err = parse_products(body).unwrap_err();
        assert!(matches!(err, FetchError::Contract(DomainError::Validation(_))));
    }

    #[test]
    fn unused_numeric_fields_accept_any_number() {
        let body = br#"[
            {"id": 1, "title": "Backpack", "price": 109.95, "description": "d",
             "category": "men's clothing", "image": "https://img.example/1.jpg",
             "stock": -1, "rating": {"rate": 3.9, "count": 12.5}},
            {"id": 2, "title": "Ring", "price": 9.99, "description": "d",
             "category": "jewelery", "image": "https://img.example/2.jpg",
             "stock": 2.5}
        ]"#;

        let products = parse_products(body).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].stock, Some(-1.0));
        assert_eq!(products[0].rating.as_ref().and_then(|r| r.count), Some(12.5));
    }
}
