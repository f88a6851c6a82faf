//! Category filter.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_core::DomainError;

use crate::product::Product;

/// Exclusive-choice category filter.
///
/// The catalog's category field is an open set of strings; the filter only
/// offers `All` plus the four labels the storefront knows about.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "all")]
    All,
    #[serde(rename = "men's clothing")]
    MensClothing,
    #[serde(rename = "women's clothing")]
    WomensClothing,
    #[serde(rename = "jewelery")]
    Jewelery,
    #[serde(rename = "electronics")]
    Electronics,
}

impl Category {
    /// Filter options in display order.
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::MensClothing,
        Category::WomensClothing,
        Category::Jewelery,
        Category::Electronics,
    ];

    /// Value compared against [`Product::category`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::MensClothing => "men's clothing",
            Category::WomensClothing => "women's clothing",
            Category::Jewelery => "jewelery",
            Category::Electronics => "electronics",
        }
    }

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All",
            Category::MensClothing => "Men's Clothing",
            Category::WomensClothing => "Women's Clothing",
            Category::Jewelery => "Jewelery",
            Category::Electronics => "Electronics",
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Category::All => true,
            other => product.category == other.as_str(),
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::unknown("category", s))
    }
}

/// Stable filter of `products` by `category`.
///
/// Pure: the result is rebuilt from its inputs on every call and keeps the
/// source order. `Category::All` yields every product.
pub fn filter_products(products: &[Product], category: Category) -> Vec<&Product> {
    products.iter().filter(|p| category.matches(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::fixtures::product;

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "men's clothing", 109.95),
            product(2, "jewelery", 695.0),
            product(3, "men's clothing", 22.3),
            product(4, "electronics", 64.0),
            product(5, "women's clothing", 7.95),
            product(6, "jewelery", 9.99),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<u64> {
        products.iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn all_is_identity() {
        let products = catalog();
        let filtered = filter_products(&products, Category::All);
        assert_eq!(ids(&filtered), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn category_keeps_matching_products_in_order() {
        let products = catalog();
        assert_eq!(ids(&filter_products(&products, Category::MensClothing)), vec![1, 3]);
        assert_eq!(ids(&filter_products(&products, Category::Jewelery)), vec![2, 6]);
        assert_eq!(ids(&filter_products(&products, Category::Electronics)), vec![4]);
    }

    #[test]
    fn unknown_payload_categories_only_show_under_all() {
        let products = vec![product(9, "toys", 3.0)];
        assert!(Category::ALL[1..]
            .iter()
            .all(|c| filter_products(&products, *c).is_empty()));
        assert_eq!(filter_products(&products, Category::All).len(), 1);
    }

    #[test]
    fn empty_catalog_filters_to_empty() {
        assert!(filter_products(&[], Category::Jewelery).is_empty());
    }

    #[test]
    fn parses_wire_values_and_exposes_labels() {
        assert_eq!("men's clothing".parse::<Category>().unwrap(), Category::MensClothing);
        assert_eq!("all".parse::<Category>().unwrap(), Category::All);
        assert!("Men's Clothing".parse::<Category>().is_err());
        let labels: Vec<_> = Category::ALL.iter().map(Category::label).collect();
        assert_eq!(
            labels,
            vec!["All", "Men's Clothing", "Women's Clothing", "Jewelery", "Electronics"]
        );
    }

    #[test]
    fn serde_uses_wire_values() {
        let json = serde_json::to_string(&Category::WomensClothing).unwrap();
        assert_eq!(json, "\"women's clothing\"");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_catalog() -> impl Strategy<Value = Vec<Product>> {
            let categories = prop::sample::select(vec![
                "men's clothing",
                "women's clothing",
                "jewelery",
                "electronics",
                "toys",
            ]);
            prop::collection::vec(categories, 0..40).prop_map(|cats| {
                cats.into_iter()
                    .enumerate()
                    .map(|(i, c)| product(i as u64 + 1, c, 1.0 + i as f64))
                    .collect()
            })
        }

        proptest! {
            /// Property: filtering by `All` returns the input unchanged.
            #[test]
            fn all_returns_every_product(products in arb_catalog()) {
                let filtered: Vec<Product> = filter_products(&products, Category::All)
                    .into_iter()
                    .cloned()
                    .collect();
                prop_assert_eq!(filtered, products);
            }

            /// Property: a concrete category yields exactly its products, in order.
            #[test]
            fn category_is_exact_ordered_subsequence(
                products in arb_catalog(),
                category in prop::sample::select(Category::ALL[1..].to_vec()),
            ) {
                let filtered = filter_products(&products, category);
                let expected: Vec<&Product> = products
                    .iter()
                    .filter(|p| p.category == category.as_str())
                    .collect();
                prop_assert_eq!(filtered, expected);
            }
        }
    }
}
