use crate::clients::{
    build_http_client, ApiError, CatalogApi, CatalogClient, InventoryApi, InventoryClient,
    PurchaseApi, PurchaseClient,
};
use crate::config::ApiConfig;
use crate::views::{CatalogView, DetailView, Navigator, Notifier};
use std::sync::Arc;
use tracing::info;

/// Owns the endpoint clients and the view collaborators.
///
/// `Storefront` is responsible for:
/// - **Client construction**: one shared `reqwest::Client`, three endpoint clients
/// - **Key scoping**: products key for the catalog, inventory key for inventory and purchase
/// - **View creation**: every view gets the same notifier and navigator
///
/// # Example
///
/// ```ignore
/// let storefront = Storefront::new(&config, notifier, navigator)?;
///
/// let mut detail = storefront.detail_view();
/// let record = detail.activate_with(RouteParams::with_id("1")).resolved().await;
/// ```
#[derive(Clone)]
pub struct Storefront {
    pub catalog: CatalogClient,
    pub inventory: InventoryClient,
    pub purchases: PurchaseClient,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl Storefront {
    pub fn new(
        config: &ApiConfig,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self, ApiError> {
        let http = build_http_client(config)?;
        info!(
            products = %config.products_url,
            inventory = %config.inventory_url,
            purchase = %config.purchase_url,
            "Storefront clients ready"
        );

        Ok(Self {
            catalog: CatalogClient::new(http.clone(), config),
            inventory: InventoryClient::new(http.clone(), config),
            purchases: PurchaseClient::new(http, config),
            notifier,
            navigator,
        })
    }

    /// A fresh, not yet activated product list screen.
    pub fn catalog_view(&self) -> CatalogView {
        let catalog: Arc<dyn CatalogApi> = Arc::new(self.catalog.clone());
        CatalogView::new(catalog, self.notifier.clone(), self.navigator.clone())
    }

    /// A fresh, not yet activated product detail screen.
    pub fn detail_view(&self) -> DetailView {
        let inventory: Arc<dyn InventoryApi> = Arc::new(self.inventory.clone());
        let purchases: Arc<dyn PurchaseApi> = Arc::new(self.purchases.clone());
        DetailView::new(
            inventory,
            purchases,
            self.notifier.clone(),
            self.navigator.clone(),
        )
    }
}
