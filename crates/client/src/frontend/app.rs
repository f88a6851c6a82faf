//! Leptos application with routing.

use std::sync::Arc;

use leptos::*;
use leptos_router::*;
use tokio_util::sync::CancellationToken;

use storefront_products::{Category, ProductId};

use crate::card::ProductCard;
use crate::cart::{CartDispatch, InMemoryCart};
use crate::config::ClientConfig;
use crate::loader::{CatalogLoader, LoadError};
use crate::notify::{Notification, Notifier, ToastQueue};
use crate::render::{CardAction, CardView, PAGE_HEADING, PLACEHOLDER_CARDS};
use crate::source::HttpCatalogSource;
use crate::state::CatalogState;

/// Toast surface backed by a signal the app renders. Every toast removes
/// itself once its display time is up.
#[derive(Clone, Copy)]
struct ToastNotifier {
    toasts: RwSignal<ToastQueue>,
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        let duration = notification.display_duration();
        let mut id = 0;
        self.toasts.update(|queue| id = queue.push(notification));

        let toasts = self.toasts;
        set_timeout(move || toasts.update(|queue| queue.dismiss(id)), duration);
    }
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let toasts = create_rw_signal(ToastQueue::new());
    let notifier = ToastNotifier { toasts };
    let cart = Arc::new(InMemoryCart::new());
    provide_context(CartDispatch::new(cart, Arc::new(notifier)));
    provide_context(notifier);

    view! {
        <Router>
            <Routes>
                <Route path="/" view=ProductsPage/>
                <Route path="/product/:id" view=ProductDetailPage/>
            </Routes>
        </Router>
        <div class="toasts">
            {move || {
                toasts.with(|queue| {
                    queue
                        .toasts()
                        .iter()
                        .map(|toast| {
                            let class = if toast.notification.is_error() {
                                "toast error"
                            } else {
                                "toast success"
                            };
                            view! { <div class=class>{toast.notification.message().to_string()}</div> }
                        })
                        .collect_view()
                })
            }}
        </div>
    }
}

/// Catalog page: one cancellable load, category buttons, product grid.
#[component]
fn ProductsPage() -> impl IntoView {
    let state = create_rw_signal(CatalogState::loading(Category::All));
    let notifier = expect_context::<ToastNotifier>();
    let cancel = CancellationToken::new();

    {
        let cancel = cancel.clone();
        spawn_local(async move {
            let source = HttpCatalogSource::new(ClientConfig::default().catalog_url);
            let outcome = CatalogLoader::new(source).load(&cancel).await;
            if cancel.is_cancelled() {
                return;
            }
            match outcome {
                Ok(products) => state.update(|s| s.finish_load(products)),
                Err(LoadError::Cancelled) => {}
                Err(LoadError::Failed(err)) => {
                    tracing::warn!(error = %err, "catalog load failed");
                    notifier.notify(Notification::fetch_failed());
                    state.update(|s| s.fail_load());
                }
            }
        });
    }
    on_cleanup(move || cancel.cancel());

    // Cards live in the page state so their selections follow its reconciliation.
    let cards = create_memo(move |_| {
        state.with(|s| s.cards().iter().map(ProductCard::view).collect::<Vec<CardView>>())
    });

    view! {
        <div class="container my-3 py-3">
            <div class="row">
                <div class="col-12">
                    <h2 class="display-5 text-center">{PAGE_HEADING}</h2>
                    <hr/>
                </div>
            </div>
            <div class="row justify-content-center">
                <Show
                    when=move || !state.with(CatalogState::is_loading)
                    fallback=|| view! { <LoadingPlaceholders/> }
                >
                    <div class="buttons text-center py-4">
                        <div class="row justify-content-center g-2">
                            {Category::ALL
                                .into_iter()
                                .map(|category| {
                                    view! {
                                        <div class="col-auto">
                                            <button
                                                class="btn btn-outline-primary btn-sm"
                                                class:active=move || state.with(|s| s.category() == category)
                                                on:click=move |_| state.update(|s| s.select_category(category))
                                            >
                                                {category.label()}
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="row g-3">
                        <For
                            each=move || cards.get()
                            key=|card| card.product_id
                            children=move |card| view! { <ProductCardView initial=card state=state/> }
                        />
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn LoadingPlaceholders() -> impl IntoView {
    view! {
        <div class="col-12 py-5 text-center">
            <div class="skeleton" style="height: 40px; width: 560px;"></div>
        </div>
        {(0..PLACEHOLDER_CARDS)
            .map(|_| {
                view! {
                    <div class="col-xl-3 col-lg-4 col-md-6 col-sm-6 col-12 mb-4">
                        <div class="skeleton" style="height: 400px;"></div>
                    </div>
                }
            })
            .collect_view()}
    }
}

/// One product card, reading and updating its entry in the page state.
#[component]
fn ProductCardView(initial: CardView, state: RwSignal<CatalogState>) -> impl IntoView {
    let dispatch = expect_context::<CartDispatch>();
    let product_id: ProductId = initial.product_id;
    let card_view = create_memo(move |_| state.with(|s| s.card(product_id).map(ProductCard::view)));

    let on_variant_change = move |ev| {
        let value = event_target_value(&ev);
        state.update(|s| {
            let Some(card) = s.card_mut(product_id) else {
                return;
            };
            if let Err(err) = card.select_variant_value(&value) {
                tracing::warn!(error = %err, "ignoring variant selection");
            }
        });
    };

    let on_add = move |_| {
        state.with_untracked(|s| {
            if let Some(card) = s.card(product_id) {
                card.add_to_cart(&dispatch);
            }
        });
    };

    let action = match initial.action.clone() {
        CardAction::AddToCart { aria_label } => view! {
            <button class="btn btn-primary btn-sm" on:click=on_add aria-label=aria_label>
                "Add to Cart"
            </button>
        }
        .into_view(),
        CardAction::OutOfStock { aria_label } => view! {
            <button class="btn btn-secondary btn-sm" disabled=true aria-label=aria_label>
                "Out of Stock"
            </button>
        }
        .into_view(),
    };

    view! {
        <div class="col-xl-3 col-lg-4 col-md-6 col-sm-6 col-12 mb-4">
            <div class="card text-center h-100 shadow-sm hover-shadow">
                <img
                    class="card-img-top p-3"
                    src=initial.image.clone()
                    alt=initial.image_alt.clone()
                    style="height: 250px; object-fit: contain;"
                />
                <div class="card-body d-flex flex-column">
                    <h5 class="card-title fs-6 fw-bold">{initial.title.clone()}</h5>
                    <p class="card-text small text-muted flex-grow-1">{initial.description.clone()}</p>
                    <div class="mb-3">
                        <label for=initial.selector_id.clone() class="form-label small fw-semibold">
                            "Variant:"
                        </label>
                        <select
                            id=initial.selector_id.clone()
                            class="form-select form-select-sm"
                            disabled=initial.selector_disabled
                            aria-label=initial.selector_aria_label.clone()
                            on:change=on_variant_change
                        >
                            {move || {
                                card_view
                                    .get()
                                    .map(|view| view.options)
                                    .unwrap_or_default()
                                    .into_iter()
                                    .map(|option| {
                                        view! {
                                            <option value=option.id.as_str() selected=option.selected>
                                                {option.label}
                                            </option>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </select>
                    </div>
                </div>
                <ul class="list-group list-group-flush">
                    <li class="list-group-item">
                        <span class="fs-5 fw-bold text-primary">
                            {move || card_view.get().map(|view| view.price_label).unwrap_or_default()}
                        </span>
                        {initial
                            .out_of_stock_badge
                            .then(|| view! { <span class="badge bg-danger ms-2">"Out of Stock"</span> })}
                    </li>
                </ul>
                <div class="card-body d-flex flex-column gap-2">
                    <A href=initial.buy_now_href.clone() class="btn btn-outline-primary btn-sm">
                        "Buy Now"
                    </A>
                    {action}
                </div>
            </div>
        </div>
    }
}

/// Link target for "Buy Now"; product details are owned elsewhere.
#[component]
fn ProductDetailPage() -> impl IntoView {
    let params = use_params_map();
    let product_id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());

    view! {
        <div class="container my-3 py-3">
            <h2>{move || format!("Product {}", product_id())}</h2>
            <A href="/">"Back to products"</A>
        </div>
    }
}
