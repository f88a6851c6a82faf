//! Cart entry payload.

use serde::{Deserialize, Serialize};

use storefront_core::ValueObject;

use crate::product::Product;
use crate::variant::Variant;

/// Payload forwarded to the cart when the user adds an item.
///
/// Serialises as the product's own fields with the chosen variant attached
/// under `variant`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    #[serde(flatten)]
    pub product: Product,
    pub variant: Variant,
}

impl ValueObject for CartEntry {}

impl CartEntry {
    pub fn new(product: Product, variant: Variant) -> Self {
        Self { product, variant }
    }

    /// Price charged for this entry (the variant's, not the base price).
    pub fn unit_price(&self) -> f64 {
        self.variant.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::fixtures::product;
    use crate::variant::{variants_for, VariantId};

    #[test]
    fn serialises_product_fields_with_variant() {
        let p = product(1, "electronics", 50.0);
        let [_, _, premium] = variants_for(p.price);
        let entry = CartEntry::new(p, premium);

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["category"], "electronics");
        assert_eq!(json["price"], 50.0);
        assert_eq!(json["variant"]["id"], "premium");
        assert_eq!(json["variant"]["name"], "Premium");
        assert_eq!(json["variant"]["price"], 75.0);
    }

    #[test]
    fn decodes_back_from_flattened_shape() {
        let p = product(2, "jewelery", 10.0);
        let [_, large, _] = variants_for(p.price);
        let entry = CartEntry::new(p, large);
        let json = serde_json::to_string(&entry).unwrap();
        let decoded: CartEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.variant.id, VariantId::Large);
        assert_eq!(decoded.unit_price(), 12.0);
        assert_eq!(decoded.product.id, entry.product.id);
    }
}
