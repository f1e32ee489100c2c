//! # Detail View
//!
//! The product detail screen: live stock for one product plus a buy button.
//!
//! ## Loading
//!
//! The product id comes from the route parameters. Every new parameter value
//! starts a new inventory fetch and abandons the previous one; only the newest
//! fetch may update flags or publish (see [`SwitchLatest`]). Failures are
//! absorbed here: error flag, one notification, `None` published.
//!
//! ## Buying
//!
//! ```text
//! buy_product(id, 0)  ─▶ "out of stock" notification, nothing else
//! buy_product(id, n)  ─▶ purchase(id, 1)
//!                          ├─ ok  ─▶ success notification ─▶ loading ─▶ re-fetch inventory(id)
//!                          └─ err ─▶ error notification (server message or fallback)
//! ```
//!
//! The re-fetch is only issued once the purchase response is in.

use crate::clients::{ApiError, InventoryApi, PurchaseApi};
use crate::framework::{Phase, Replay, StatusCell, SwitchLatest, Ticket, ViewStatus};
use crate::model::{InventoryRecord, PurchaseResponse};
use crate::views::format::format_price;
use crate::views::notify::{Notification, Notifier};
use crate::views::routing::{Navigator, Route, RouteParams, ID_PARAM};
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, instrument, warn};

/// Shown when the product's inventory cannot be fetched.
pub const LOAD_PRODUCT_FAILED: &str = "Could not load the product";
/// Shown when buying is attempted with zero stock.
pub const OUT_OF_STOCK: &str = "Product out of stock";
/// Shown when a purchase fails without a server-supplied message.
pub const PURCHASE_FAILED: &str = "Could not process the purchase";

/// What a call to [`DetailView::buy_product`] ended up doing.
#[derive(Debug, Clone, PartialEq)]
pub enum BuyOutcome {
    /// Nothing was sent; the product had no stock.
    OutOfStock,
    /// The purchase went through and inventory was re-fetched.
    Purchased(PurchaseResponse),
    /// The server refused or the call failed.
    Failed(ApiError),
}

/// How an inventory fetch reports failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OnFailure {
    /// Error flag plus a notification. Used for route-driven loads.
    Report,
    /// Just settle and publish `None`. Used for the post-purchase refresh.
    Quiet,
}

/// Everything an inventory fetch needs, cloneable into a spawned task.
#[derive(Clone)]
struct InventoryLoader {
    inventory: Arc<dyn InventoryApi>,
    notifier: Arc<dyn Notifier>,
    status: StatusCell,
    record: Replay<Option<InventoryRecord>>,
}

impl InventoryLoader {
    async fn load(&self, product_id: i64, ticket: Ticket, on_failure: OnFailure) {
        let started = ticket.commit(|| match on_failure {
            OnFailure::Report => self.status.begin(),
            OnFailure::Quiet => self.status.mark_loading(),
        });
        if !started {
            return;
        }

        debug!(product_id, generation = ticket.generation(), "Fetching inventory");
        match self.inventory.get_inventory(product_id).await {
            Ok(record) => {
                ticket.commit(|| {
                    info!(product_id, quantity = record.quantity, "Inventory loaded");
                    self.status.settle();
                    self.record.publish(Some(record));
                });
            }
            Err(e) => {
                error!(product_id, error = %e, "Error loading inventory");
                match on_failure {
                    OnFailure::Report => self.fail(&ticket),
                    OnFailure::Quiet => {
                        ticket.commit(|| {
                            self.status.settle();
                            self.record.publish(None);
                        });
                    }
                }
            }
        }
    }

    /// Error flag, one notification, `None` published.
    ///
    /// The notifier runs outside the ticket's lock; the publish is skipped if a
    /// newer load took over in between.
    fn fail(&self, ticket: &Ticket) {
        if ticket.commit(|| self.status.fail()) {
            self.notifier.notify(Notification::error(LOAD_PRODUCT_FAILED));
            ticket.commit(|| self.record.publish(None));
        }
    }

    /// A route parameter that is not a product id fails like a missing product.
    fn reject(&self, raw: Option<&str>, ticket: &Ticket) {
        warn!(param = ?raw, "Route parameter is not a product id");
        self.fail(ticket);
    }

    fn on_params(&self, params: &RouteParams, switch: &SwitchLatest) {
        match params.product_id() {
            Some(product_id) => {
                let loader = self.clone();
                switch.spawn(move |ticket| async move {
                    loader.load(product_id, ticket, OnFailure::Report).await;
                });
            }
            None => {
                switch.cancel();
                self.reject(params.get(ID_PARAM), &switch.current());
            }
        }
    }
}

pub struct DetailView {
    loader: InventoryLoader,
    purchases: Arc<dyn PurchaseApi>,
    navigator: Arc<dyn Navigator>,
    switch: SwitchLatest,
    route_task: Option<JoinHandle<()>>,
}

impl DetailView {
    pub fn new(
        inventory: Arc<dyn InventoryApi>,
        purchases: Arc<dyn PurchaseApi>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            loader: InventoryLoader {
                inventory,
                notifier,
                status: StatusCell::new(),
                record: Replay::new(),
            },
            purchases,
            navigator,
            switch: SwitchLatest::new(),
            route_task: None,
        }
    }

    /// Follows `params` and loads inventory for each product id it carries.
    ///
    /// Returns the cell of this activation. A previous activation is torn down.
    #[instrument(skip(self, params))]
    pub fn activate(
        &mut self,
        mut params: watch::Receiver<RouteParams>,
    ) -> Replay<Option<InventoryRecord>> {
        self.teardown();
        self.switch = SwitchLatest::new();
        self.loader.record = Replay::new();
        self.loader.status.begin();

        let loader = self.loader.clone();
        let switch = self.switch.clone();
        self.route_task = Some(tokio::spawn(async move {
            loop {
                let current = params.borrow_and_update().clone();
                loader.on_params(&current, &switch);
                if params.changed().await.is_err() {
                    debug!("Route closed");
                    break;
                }
            }
        }));

        self.loader.record.clone()
    }

    /// Activation for a fixed route that never changes.
    pub fn activate_with(&mut self, params: RouteParams) -> Replay<Option<InventoryRecord>> {
        let (sender, receiver) = watch::channel(params);
        let record = self.activate(receiver);
        // Dropping the sender ends the route task after the first load starts;
        // the load itself keeps running.
        drop(sender);
        record
    }

    /// The cell of the current activation.
    pub fn inventory(&self) -> Replay<Option<InventoryRecord>> {
        self.loader.record.clone()
    }

    pub fn status(&self) -> ViewStatus {
        self.loader.status.get()
    }

    pub fn is_loading(&self) -> bool {
        self.loader.status.get().loading
    }

    pub fn has_error(&self) -> bool {
        self.loader.status.get().error
    }

    pub fn phase(&self) -> Phase {
        self.loader.status.get().phase(self.loader.record.is_resolved())
    }

    /// Back to the product list.
    pub fn go_back(&self) {
        self.navigator.navigate(Route::Catalog);
    }

    /// Buys one unit of `product_id`, then refreshes its inventory.
    ///
    /// `current_quantity` is the stock the user is looking at; it only gates the
    /// out-of-stock short circuit. The amount bought is always one.
    #[instrument(skip(self))]
    pub async fn buy_product(&self, product_id: i64, current_quantity: u32) -> BuyOutcome {
        if current_quantity == 0 {
            info!(product_id, "Purchase skipped, no stock");
            self.loader.notifier.notify(Notification::error(OUT_OF_STOCK));
            return BuyOutcome::OutOfStock;
        }

        // Taken before the call: a route change while the purchase is in
        // flight makes the refresh stale.
        let ticket = self.switch.current();
        match self.purchases.purchase_one(product_id).await {
            Ok(response) => {
                self.loader
                    .notifier
                    .notify(Notification::success(response.message.clone()));
                if ticket.is_current() {
                    self.loader.load(product_id, ticket, OnFailure::Quiet).await;
                } else {
                    debug!(product_id, "Route changed during purchase, skipping refresh");
                }
                BuyOutcome::Purchased(response)
            }
            Err(e) => {
                warn!(product_id, error = %e, "Purchase failed");
                let message = e.server_message().unwrap_or(PURCHASE_FAILED).to_string();
                self.loader.notifier.notify(Notification::error(message));
                BuyOutcome::Failed(e)
            }
        }
    }

    pub fn format_price(&self, amount: f64) -> String {
        format_price(amount)
    }

    fn teardown(&mut self) {
        if let Some(task) = self.route_task.take() {
            task.abort();
        }
        self.switch.cancel();
    }
}

impl Drop for DetailView {
    fn drop(&mut self) {
        self.teardown();
    }
}
