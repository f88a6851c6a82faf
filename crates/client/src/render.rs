//! Declarative render tree for the catalog page.
//!
//! The tree is data only. The CLI prints it through [`core::fmt::Display`]; the
//! WASM frontend maps the same state to DOM nodes.

use core::fmt;

use serde::Serialize;

use storefront_products::{Category, ProductId, VariantId};

use crate::state::CatalogState;

pub const PAGE_HEADING: &str = "Latest Products";

/// Number of placeholder cards shown while the catalog loads.
pub const PLACEHOLDER_CARDS: usize = 8;

const HEADER_PLACEHOLDER: Placeholder = Placeholder {
    height: 40,
    width: Some(560),
};
const CARD_PLACEHOLDER: Placeholder = Placeholder {
    height: 400,
    width: None,
};

/// Skeleton block reserved for content that is still loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    pub height: u32,
    pub width: Option<u32>,
}

/// One option of the exclusive category control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterButton {
    pub category: Category,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariantOption {
    pub id: VariantId,
    pub label: String,
    pub selected: bool,
}

/// The card's primary button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardAction {
    AddToCart { aria_label: String },
    OutOfStock { aria_label: String },
}

impl CardAction {
    pub fn is_enabled(&self) -> bool {
        matches!(self, CardAction::AddToCart { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub product_id: ProductId,
    pub image: String,
    pub image_alt: String,
    pub title: String,
    pub description: String,
    pub selector_id: String,
    pub selector_aria_label: String,
    pub selector_disabled: bool,
    pub options: Vec<VariantOption>,
    pub price_label: String,
    pub out_of_stock_badge: bool,
    pub buy_now_href: String,
    pub action: CardAction,
}

/// Everything below the page heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum CatalogView {
    Loading {
        header: Placeholder,
        cards: Vec<Placeholder>,
    },
    Ready {
        filters: Vec<FilterButton>,
        cards: Vec<CardView>,
    },
}

impl CatalogView {
    pub fn heading(&self) -> &'static str {
        PAGE_HEADING
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogView::Loading { .. })
    }
}

/// Render the page for the current state.
///
/// While loading the placeholder set is fixed, whatever the catalog will
/// eventually contain.
pub fn render(state: &CatalogState) -> CatalogView {
    if state.is_loading() {
        return CatalogView::Loading {
            header: HEADER_PLACEHOLDER,
            cards: vec![CARD_PLACEHOLDER; PLACEHOLDER_CARDS],
        };
    }

    let filters = Category::ALL
        .into_iter()
        .map(|category| FilterButton {
            category,
            label: category.label(),
            selected: category == state.category(),
        })
        .collect();

    let cards = state.cards().iter().map(|card| card.view()).collect();

    CatalogView::Ready { filters, cards }
}

impl fmt::Display for CatalogView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{PAGE_HEADING}")?;
        writeln!(f, "{}", "=".repeat(PAGE_HEADING.len()))?;

        match self {
            CatalogView::Loading { cards, .. } => {
                writeln!(f, "[{}]", "░".repeat(24))?;
                for _ in cards {
                    writeln!(f, "[ {} ]", "░".repeat(20))?;
                }
            }
            CatalogView::Ready { filters, cards } => {
                let buttons: Vec<String> = filters
                    .iter()
                    .map(|b| {
                        if b.selected {
                            format!("[{}]", b.label)
                        } else {
                            format!(" {} ", b.label)
                        }
                    })
                    .collect();
                writeln!(f, "{}", buttons.join(" "))?;
                writeln!(f)?;

                if cards.is_empty() {
                    writeln!(f, "(no products)")?;
                }

                for card in cards {
                    let badge = if card.out_of_stock_badge { "  [Out of Stock]" } else { "" };
                    writeln!(f, "#{} {}  {}{}", card.product_id, card.title, card.price_label, badge)?;
                    writeln!(f, "    {}", card.description)?;
                    let options: Vec<String> = card
                        .options
                        .iter()
                        .map(|o| {
                            if o.selected {
                                format!("*{}", o.label)
                            } else {
                                o.label.clone()
                            }
                        })
                        .collect();
                    writeln!(f, "    {}", options.join(" | "))?;
                    writeln!(f, "    -> {}", card.buy_now_href)?;
                }
            }
        }

        Ok(())
    }
}
