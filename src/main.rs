//! # Storefront Demo
//!
//! Walks the two screens against the configured backend:
//! 1.  Loads [`ApiConfig`] from the environment.
//! 2.  Activates the catalog and logs the products.
//! 3.  Opens the first product's detail screen and buys one unit if in stock.

use std::sync::Arc;
use storefront::config::ApiConfig;
use storefront::runtime::{setup_tracing, Storefront};
use storefront::views::{Route, TracingNavigator, TracingNotifier};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = ApiConfig::from_env().map_err(|e| e.to_string())?;
    let storefront = Storefront::new(
        &config,
        Arc::new(TracingNotifier),
        Arc::new(TracingNavigator),
    )
    .map_err(|e| e.to_string())?;

    let mut catalog = storefront.catalog_view();
    let products = catalog
        .activate()
        .resolved()
        .instrument(tracing::info_span!("catalog"))
        .await;

    if catalog.has_error() {
        error!("Catalog unavailable, stopping");
        return Ok(());
    }
    for product in &products {
        info!(
            id = product.id,
            name = %product.name,
            price = %catalog.format_price(product.price),
            "Product"
        );
    }

    let Some(first) = products.first() else {
        info!("Catalog is empty");
        return Ok(());
    };
    catalog.view_details(first.id);

    let span = tracing::info_span!("detail", product_id = first.id);
    async {
        let mut detail = storefront.detail_view();
        let record = detail
            .activate_with(Route::ProductDetail(first.id).params())
            .resolved()
            .await;

        let Some(record) = record else {
            error!("Product detail unavailable");
            return;
        };
        info!(
            name = %record.name,
            stock = record.quantity,
            price = %detail.format_price(record.price),
            "Product detail"
        );

        let outcome = detail.buy_product(record.product_id, record.quantity).await;
        info!(?outcome, "Purchase finished");
        if let Some(Some(refreshed)) = detail.inventory().latest() {
            info!(stock = refreshed.quantity, "Stock after purchase");
        }
        detail.go_back();
    }
    .instrument(span)
    .await;

    info!("Demo completed");
    Ok(())
}
