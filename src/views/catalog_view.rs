//! # Catalog View
//!
//! The product list screen. Activation fetches the catalog once; the result is
//! published into a [`Replay`] cell so every part of the screen reads the same
//! list without refetching.
//!
//! ```text
//! Idle ──activate──▶ Loading ──ok──▶ Loaded   (list published)
//!                        └────err──▶ Failed   (empty list, one notification)
//! ```

use crate::clients::CatalogApi;
use crate::framework::{Phase, Replay, StatusCell, SwitchLatest, ViewStatus};
use crate::model::Product;
use crate::views::format::format_price;
use crate::views::notify::{Notification, Notifier};
use crate::views::routing::{Navigator, Route};
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Shown when the product list cannot be fetched.
pub const LOAD_PRODUCTS_FAILED: &str = "Could not load products";

pub struct CatalogView {
    catalog: Arc<dyn CatalogApi>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    status: StatusCell,
    products: Replay<Vec<Product>>,
    switch: SwitchLatest,
}

impl CatalogView {
    pub fn new(
        catalog: Arc<dyn CatalogApi>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            catalog,
            notifier,
            navigator,
            status: StatusCell::new(),
            products: Replay::new(),
            switch: SwitchLatest::new(),
        }
    }

    /// Starts loading the catalog and returns the cell the list will land in.
    ///
    /// Each activation gets a fresh cell and issues exactly one request; a
    /// previous activation still in flight is abandoned and can no longer touch
    /// the flags.
    #[instrument(skip(self))]
    pub fn activate(&mut self) -> Replay<Vec<Product>> {
        self.products = Replay::new();

        let ticket = self.switch.ticket();
        ticket.commit(|| self.status.begin());

        let catalog = self.catalog.clone();
        let notifier = self.notifier.clone();
        let status = self.status.clone();
        let products = self.products.clone();
        let fetch_ticket = ticket.clone();
        self.switch.run(&ticket, async move {
            let ticket = fetch_ticket;
            match catalog.list_products().await {
                Ok(list) => {
                    ticket.commit(|| {
                        info!(count = list.len(), "Catalog loaded");
                        status.settle();
                        products.publish(list);
                    });
                }
                Err(e) => {
                    error!(error = %e, "Error loading products");
                    if ticket.commit(|| status.fail()) {
                        notifier.notify(Notification::error(LOAD_PRODUCTS_FAILED));
                        products.publish(Vec::new());
                    }
                }
            }
        });

        self.products.clone()
    }

    /// The cell of the current activation.
    pub fn products(&self) -> Replay<Vec<Product>> {
        self.products.clone()
    }

    pub fn status(&self) -> ViewStatus {
        self.status.get()
    }

    pub fn is_loading(&self) -> bool {
        self.status.get().loading
    }

    pub fn has_error(&self) -> bool {
        self.status.get().error
    }

    pub fn phase(&self) -> Phase {
        self.status.get().phase(self.products.is_resolved())
    }

    /// Opens the detail screen for `product_id`.
    pub fn view_details(&self, product_id: i64) {
        self.navigator.navigate(Route::ProductDetail(product_id));
    }

    pub fn format_price(&self, amount: f64) -> String {
        format_price(amount)
    }
}

impl Drop for CatalogView {
    fn drop(&mut self) {
        self.switch.cancel();
    }
}
