//! Catalog page state: products, loading flag, category and mounted cards.

use storefront_products::{filter_products, Category, Product, ProductId};

use crate::card::ProductCard;

/// State owned by one mounted catalog page.
///
/// `cards` always mirrors `filter_products(products, category)`: every
/// transition that touches either input rebuilds it. Cards whose product stays
/// visible keep their variant selection (matched by product id); cards that
/// leave the view are dropped and start over on `default` if they come back.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    products: Vec<Product>,
    is_loading: bool,
    category: Category,
    cards: Vec<ProductCard>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new(Category::All)
    }
}

impl CatalogState {
    /// Empty, idle state.
    pub fn new(category: Category) -> Self {
        Self {
            products: Vec::new(),
            is_loading: false,
            category,
            cards: Vec::new(),
        }
    }

    /// Empty state with a load already under way (the state at mount).
    pub fn loading(category: Category) -> Self {
        let mut state = Self::new(category);
        state.begin_load();
        state
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn cards(&self) -> &[ProductCard] {
        &self.cards
    }

    pub fn card(&self, id: ProductId) -> Option<&ProductCard> {
        self.cards.iter().find(|c| c.product_id() == id)
    }

    pub fn card_mut(&mut self, id: ProductId) -> Option<&mut ProductCard> {
        self.cards.iter_mut().find(|c| c.product_id() == id)
    }

    /// Products visible under the selected category, recomputed on each call.
    pub fn filtered_products(&self) -> Vec<&Product> {
        filter_products(&self.products, self.category)
    }

    pub fn begin_load(&mut self) {
        self.is_loading = true;
    }

    pub fn finish_load(&mut self, products: Vec<Product>) {
        self.products = products;
        self.is_loading = false;
        self.reconcile_cards();
    }

    /// A failed load keeps whatever products were there before.
    pub fn fail_load(&mut self) {
        self.is_loading = false;
    }

    /// Always reassigns, so re-selecting the current category is harmless.
    pub fn select_category(&mut self, category: Category) {
        self.category = category;
        self.reconcile_cards();
    }

    fn reconcile_cards(&mut self) {
        let mut previous = std::mem::take(&mut self.cards);
        self.cards = filter_products(&self.products, self.category)
            .into_iter()
            .map(|product| {
                match previous.iter().position(|c| c.product_id() == product.id) {
                    Some(idx) => {
                        let mut card = previous.swap_remove(idx);
                        card.refresh(product.clone());
                        card
                    }
                    None => ProductCard::new(product.clone()),
                }
            })
            .collect();
    }
}
