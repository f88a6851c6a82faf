//! Per-product card: variant selection and add-to-cart.

use storefront_core::DomainResult;
use storefront_products::{
    current_variant, truncate_description, truncate_title, variants_for, CartEntry, Product,
    ProductId, Variant, VariantId,
};

use crate::cart::AddProduct;
use crate::render::{CardAction, CardView, VariantOption};

/// Stock is not sourced from the catalog yet; every card renders as in stock.
pub const DEFAULT_IN_STOCK: bool = true;

/// State owned by one rendered product card.
///
/// Lives exactly as long as the card is mounted; the only transition is
/// [`ProductCard::select_variant`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    product: Product,
    selected: VariantId,
    in_stock: bool,
}

impl ProductCard {
    pub fn new(product: Product) -> Self {
        Self {
            product,
            selected: VariantId::Default,
            in_stock: DEFAULT_IN_STOCK,
        }
    }

    /// Override the stock flag (the out-of-stock rendering path).
    pub fn with_stock(mut self, in_stock: bool) -> Self {
        self.in_stock = in_stock;
        self
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    pub fn is_in_stock(&self) -> bool {
        self.in_stock
    }

    pub fn selected_variant_id(&self) -> VariantId {
        self.selected
    }

    /// Swap in a newer copy of the same product; the selection is kept and the
    /// variants follow the new price.
    pub(crate) fn refresh(&mut self, product: Product) {
        debug_assert_eq!(product.id, self.product.id);
        self.product = product;
    }

    pub fn select_variant(&mut self, id: VariantId) {
        self.selected = id;
    }

    /// Apply a selector change event carrying the option's wire value.
    pub fn select_variant_value(&mut self, value: &str) -> DomainResult<()> {
        self.select_variant(value.parse()?);
        Ok(())
    }

    /// Variants for the product's current price, rebuilt on every call.
    pub fn variants(&self) -> [Variant; 3] {
        variants_for(self.product.price)
    }

    pub fn current_variant(&self) -> Variant {
        current_variant(&self.variants(), self.selected).clone()
    }

    /// Forward the product with the variant selected right now.
    ///
    /// Returns `false` without calling `add` when the card is out of stock.
    pub fn add_to_cart(&self, add: &dyn AddProduct) -> bool {
        if !self.in_stock {
            tracing::debug!(product_id = %self.product.id, "add to cart ignored: out of stock");
            return false;
        }

        add.add_product(CartEntry::new(self.product.clone(), self.current_variant()));
        true
    }

    /// Declarative description of the card.
    pub fn view(&self) -> CardView {
        let product = &self.product;
        let variants = self.variants();
        let current = current_variant(&variants, self.selected);

        let options = variants
            .iter()
            .map(|variant| VariantOption {
                id: variant.id,
                label: variant.option_label(),
                selected: variant.id == self.selected,
            })
            .collect();

        let action = if self.in_stock {
            CardAction::AddToCart {
                aria_label: format!("Add {} to cart", product.title),
            }
        } else {
            CardAction::OutOfStock {
                aria_label: format!("{} is out of stock", product.title),
            }
        };

        CardView {
            product_id: product.id,
            image: product.image.clone(),
            image_alt: product.title.clone(),
            title: truncate_title(&product.title).into_owned(),
            description: truncate_description(&product.description).into_owned(),
            selector_id: format!("variant-{}", product.id),
            selector_aria_label: format!("Select variant for {}", product.title),
            selector_disabled: !self.in_stock,
            options,
            price_label: format!("$ {}", current.price_label()),
            out_of_stock_badge: !self.in_stock,
            buy_now_href: product.detail_path(),
            action,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::loader::test_sources::product;

    fn collect_into(sink: &RefCell<Vec<CartEntry>>) -> impl Fn(CartEntry) + '_ {
        move |entry| sink.borrow_mut().push(entry)
    }

    #[test]
    fn starts_on_default_variant() {
        let card = ProductCard::new(product(1, "electronics", 50.0));
        assert_eq!(card.selected_variant_id(), VariantId::Default);
        assert_eq!(card.current_variant().price, 50.0);
        assert!(card.is_in_stock());
    }

    #[test]
    fn add_to_cart_uses_just_selected_variant() {
        let mut card = ProductCard::new(product(1, "electronics", 50.0));
        let added = RefCell::new(Vec::new());
        let add = collect_into(&added);

        card.select_variant(VariantId::Premium);
        assert!(card.add_to_cart(&add));

        drop(add);
        let added = added.into_inner();
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].variant.id, VariantId::Premium);
        assert_eq!(added[0].variant.price, 75.0);
        assert_eq!(added[0].product.id, ProductId::new(1));
    }

    #[test]
    fn reselecting_changes_the_forwarded_variant() {
        let mut card = ProductCard::new(product(1, "electronics", 50.0));
        let added = RefCell::new(Vec::new());
        let add = collect_into(&added);

        card.select_variant(VariantId::Large);
        card.add_to_cart(&add);
        card.select_variant(VariantId::Default);
        card.add_to_cart(&add);

        drop(add);
        let prices: Vec<f64> = added.into_inner().iter().map(|e| e.variant.price).collect();
        assert_eq!(prices, vec![60.0, 50.0]);
    }

    #[test]
    fn select_variant_value_parses_option_value() {
        let mut card = ProductCard::new(product(1, "electronics", 50.0));
        card.select_variant_value("large").unwrap();
        assert_eq!(card.selected_variant_id(), VariantId::Large);

        assert!(card.select_variant_value("gigantic").is_err());
        assert_eq!(card.selected_variant_id(), VariantId::Large);
    }

    #[test]
    fn view_truncates_and_prices_current_variant() {
        let mut p = product(7, "jewelery", 50.0);
        p.title = "A Very Long Product Title Here".to_string();
        p.description = "Short description".to_string();
        let mut card = ProductCard::new(p);
        card.select_variant(VariantId::Premium);

        let view = card.view();
        assert_eq!(view.title, "A Very Long Product ...");
        assert_eq!(view.image_alt, "A Very Long Product Title Here");
        assert_eq!(view.description, "Short description");
        assert_eq!(view.price_label, "$ 75.00");
        assert_eq!(view.selector_id, "variant-7");
        assert_eq!(view.buy_now_href, "/product/7");
        assert_eq!(view.options.len(), 3);
        assert_eq!(view.options[0].label, "Default - $50");
        assert!(view.options[2].selected);
        assert!(!view.selector_disabled);
        assert!(matches!(view.action, CardAction::AddToCart { .. }));
    }

    #[test]
    fn out_of_stock_card_disables_controls_and_ignores_add() {
        let card = ProductCard::new(product(2, "jewelery", 10.0)).with_stock(false);
        let added = RefCell::new(Vec::new());
        let add = collect_into(&added);

        assert!(!card.add_to_cart(&add));
        assert!(added.borrow().is_empty());

        let view = card.view();
        assert!(view.selector_disabled);
        assert!(view.out_of_stock_badge);
        match view.action {
            CardAction::OutOfStock { aria_label } => {
                assert!(aria_label.ends_with("is out of stock"))
            }
            other => panic!("Expected OutOfStock action, got {other:?}"),
        }
    }
}
