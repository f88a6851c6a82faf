//! Command-line storefront: loads the catalog once and prints the page.

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::sync::Arc;

    use anyhow::Context;

    use storefront_client::{
        CartDispatch, CatalogLoader, CatalogPage, ClientConfig, HttpCatalogSource, InMemoryCart,
        TracingNotifier,
    };

    storefront_observability::init();

    let config = ClientConfig::from_env().context("invalid storefront configuration")?;
    tracing::info!(
        catalog_url = %config.catalog_url,
        category = %config.initial_category,
        "starting storefront"
    );

    let notifier = Arc::new(TracingNotifier);
    let cart = Arc::new(InMemoryCart::new());
    let loader = CatalogLoader::new(HttpCatalogSource::new(config.catalog_url.clone()));

    let mut page = CatalogPage::mount(
        loader,
        config.initial_category,
        notifier.clone(),
        CartDispatch::new(cart, notifier),
    );

    tokio::select! {
        _ = page.settled() => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("interrupted; cancelling catalog load");
            page.unmount().await;
            return Ok(());
        }
    }

    println!("{}", page.render().await);
    page.unmount().await;
    Ok(())
}

// The WASM build starts from `frontend::main` instead.
#[cfg(target_arch = "wasm32")]
fn main() {}
