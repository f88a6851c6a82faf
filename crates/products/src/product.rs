use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity};

/// Product identifier as assigned by the catalog API.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl ProductId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Review summary attached to a catalog record. Carried through, never used for
/// ordering or filtering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<f64>,
}

/// A catalog record as delivered by the product-listing endpoint.
///
/// Read-only to the client: nothing in this workspace mutates a product after
/// it has been decoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    /// Base price in the store currency (decimal, not minor units).
    pub price: f64,
    pub image: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
    /// Any JSON number is accepted; stock is not read from the payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock: Option<f64>,
}

impl Product {
    /// Boundary contract check applied to every decoded record.
    pub fn validate(&self) -> DomainResult<()> {
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(DomainError::validation(format!(
                "product {} has non-positive price {}",
                self.id, self.price
            )));
        }

        if self.title.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product {} has an empty title",
                self.id
            )));
        }

        Ok(())
    }

    /// Navigation target for the product detail page.
    pub fn detail_path(&self) -> String {
        format!("/product/{}", self.id)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}
