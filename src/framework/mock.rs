//! # Mock Framework
//!
//! Utilities for testing views without a backend.
//!
//! [`MockApi`] implements [`CatalogApi`], [`InventoryApi`] and [`PurchaseApi`].
//! Queue expectations with the `expect_*` builders, hand the mock to a view,
//! then call [`MockApi::verify`] to check every expectation was consumed.
//! [`RecordingNotifier`] and [`RecordingNavigator`] capture what a view showed
//! and where it tried to go.

use crate::clients::{ApiError, CatalogApi, InventoryApi, PurchaseApi};
use crate::model::{InventoryRecord, Product, PurchaseRequest, PurchaseResponse};
use crate::views::{Navigator, Notification, Notifier, Route};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{oneshot, Notify};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A request observed by the mock, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListProducts,
    GetProduct(i64),
    GetInventory(i64),
    Purchase(PurchaseRequest),
}

/// The response queued for one expected request.
enum Reply {
    ListProducts {
        response: Result<Vec<Product>, ApiError>,
    },
    GetProduct {
        id: i64,
        response: Result<Product, ApiError>,
    },
    GetInventory {
        product_id: i64,
        response: Result<InventoryRecord, ApiError>,
    },
    Purchase {
        request: PurchaseRequest,
        response: Result<PurchaseResponse, ApiError>,
    },
}

/// Represents an expected request to the mock and the response to give.
struct Expectation {
    hold: Option<oneshot::Receiver<()>>,
    reply: Reply,
}

impl Expectation {
    fn matches(&self, call: &Call) -> bool {
        match (&self.reply, call) {
            (Reply::ListProducts { .. }, Call::ListProducts) => true,
            (Reply::GetProduct { id, .. }, Call::GetProduct(called)) => id == called,
            (Reply::GetInventory { product_id, .. }, Call::GetInventory(called)) => {
                product_id == called
            }
            (Reply::Purchase { request, .. }, Call::Purchase(called)) => request == called,
            _ => false,
        }
    }
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    calls: Vec<Call>,
}

/// A mock backend with expectation tracking for fluent testing.
///
/// Each incoming call consumes the first queued expectation that matches it
/// (same operation, same id or payload). A call with no matching expectation
/// panics.
///
/// # Example
/// ```ignore
/// let mock = MockApi::new();
/// mock.expect_get_inventory(1).return_ok(record);
/// mock.expect_purchase(1, 1).return_ok(response);
///
/// let view = DetailView::new(mock.inventory(), mock.purchases(), notifier, navigator);
/// // drive the view...
/// mock.verify();
/// ```
#[derive(Clone, Default)]
pub struct MockApi {
    state: Arc<Mutex<MockState>>,
    called: Arc<Notify>,
}

impl MockApi {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> Arc<dyn CatalogApi> {
        Arc::new(self.clone())
    }

    pub fn inventory(&self) -> Arc<dyn InventoryApi> {
        Arc::new(self.clone())
    }

    pub fn purchases(&self) -> Arc<dyn PurchaseApi> {
        Arc::new(self.clone())
    }

    /// Expects a `list_products` call.
    pub fn expect_list_products(&self) -> ExpectationBuilder<Vec<Product>> {
        ExpectationBuilder::new(self.state.clone(), |response| Reply::ListProducts {
            response,
        })
    }

    /// Expects a `get_product` call for `id`.
    pub fn expect_get_product(&self, id: i64) -> ExpectationBuilder<Product> {
        ExpectationBuilder::new(self.state.clone(), move |response| Reply::GetProduct {
            id,
            response,
        })
    }

    /// Expects a `get_inventory` call for `product_id`.
    pub fn expect_get_inventory(&self, product_id: i64) -> ExpectationBuilder<InventoryRecord> {
        ExpectationBuilder::new(self.state.clone(), move |response| Reply::GetInventory {
            product_id,
            response,
        })
    }

    /// Expects a `purchase` call with exactly this payload.
    pub fn expect_purchase(&self, product_id: i64, quantity: u32) -> ExpectationBuilder<PurchaseResponse> {
        let request = PurchaseRequest::new(product_id, quantity);
        ExpectationBuilder::new(self.state.clone(), move |response| Reply::Purchase {
            request,
            response,
        })
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.state.lock().unwrap().calls.len()
    }

    /// Waits until at least `n` calls have been received.
    pub async fn wait_for_calls(&self, n: usize) {
        loop {
            let notified = self.called.notified();
            if self.call_count() >= n {
                return;
            }
            notified.await;
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let state = self.state.lock().unwrap();
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining (calls seen: {:?})",
                state.expectations.len(),
                state.calls
            );
        }
    }

    /// Records `call`, consumes its expectation and waits out any hold.
    async fn respond(&self, call: Call) -> Reply {
        // The guard must not live across the await below.
        let expectation = {
            let mut state = self.state.lock().unwrap();
            state.calls.push(call.clone());
            let position = state.expectations.iter().position(|e| e.matches(&call));
            position.and_then(|i| state.expectations.remove(i))
        };
        self.called.notify_waiters();

        let Some(Expectation { hold, reply }) = expectation else {
            panic!("Unexpected request: {call:?}");
        };
        if let Some(hold) = hold {
            let _ = hold.await;
        }
        reply
    }
}

/// Builder for a single expectation.
pub struct ExpectationBuilder<R> {
    state: Arc<Mutex<MockState>>,
    make: Box<dyn FnOnce(Result<R, ApiError>) -> Reply + Send>,
    hold: Option<oneshot::Receiver<()>>,
}

impl<R> ExpectationBuilder<R> {
    fn new<F>(state: Arc<Mutex<MockState>>, make: F) -> Self
    where
        F: FnOnce(Result<R, ApiError>) -> Reply + Send + 'static,
    {
        Self {
            state,
            make: Box::new(make),
            hold: None,
        }
    }

    /// Delays the response until `release` fires (or its sender is dropped).
    pub fn held(mut self, release: oneshot::Receiver<()>) -> Self {
        self.hold = Some(release);
        self
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ApiError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, ApiError>) {
        let expectation = Expectation {
            hold: self.hold,
            reply: (self.make)(response),
        };
        self.state.lock().unwrap().expectations.push_back(expectation);
    }
}

#[async_trait]
impl CatalogApi for MockApi {
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        match self.respond(Call::ListProducts).await {
            Reply::ListProducts { response } => response,
            _ => unreachable!("matched expectation has the wrong kind"),
        }
    }

    async fn get_product(&self, id: i64) -> Result<Product, ApiError> {
        match self.respond(Call::GetProduct(id)).await {
            Reply::GetProduct { response, .. } => response,
            _ => unreachable!("matched expectation has the wrong kind"),
        }
    }
}

#[async_trait]
impl InventoryApi for MockApi {
    async fn get_inventory(&self, product_id: i64) -> Result<InventoryRecord, ApiError> {
        match self.respond(Call::GetInventory(product_id)).await {
            Reply::GetInventory { response, .. } => response,
            _ => unreachable!("matched expectation has the wrong kind"),
        }
    }
}

#[async_trait]
impl PurchaseApi for MockApi {
    async fn purchase(&self, product_id: i64, quantity: u32) -> Result<PurchaseResponse, ApiError> {
        let request = PurchaseRequest::new(product_id, quantity);
        match self.respond(Call::Purchase(request)).await {
            Reply::Purchase { response, .. } => response,
            _ => unreachable!("matched expectation has the wrong kind"),
        }
    }
}

// =============================================================================
// COLLABORATOR RECORDERS
// =============================================================================

/// Collects every notification a view shows.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    shown: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.shown.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.notifications().into_iter().map(|n| n.message).collect()
    }

    pub fn count(&self) -> usize {
        self.shown.lock().unwrap().len()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.shown.lock().unwrap().push(notification);
    }
}

/// Collects every navigation request.
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    routes: Arc<Mutex<Vec<Route>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_with_expectations() {
        let mock = MockApi::new();
        mock.expect_list_products()
            .return_ok(vec![Product::new(1, "Lamp", 10.0, "")]);
        mock.expect_get_product(9)
            .return_err(ApiError::NotFound(Default::default()));

        let catalog = mock.catalog();
        let products = catalog.list_products().await.unwrap();
        assert_eq!(products.len(), 1);

        let missing = catalog.get_product(9).await;
        assert!(matches!(missing, Err(ApiError::NotFound(_))));

        assert_eq!(mock.calls(), vec![Call::ListProducts, Call::GetProduct(9)]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_expectations_match_by_id() {
        let mock = MockApi::new();
        mock.expect_get_inventory(1)
            .return_ok(InventoryRecord::new(1, 5, "A", 1.0, ""));
        mock.expect_get_inventory(2)
            .return_ok(InventoryRecord::new(2, 7, "B", 1.0, ""));

        let inventory = mock.inventory();
        assert_eq!(inventory.get_inventory(2).await.unwrap().quantity, 7);
        assert_eq!(inventory.get_inventory(1).await.unwrap().quantity, 5);
        mock.verify();
    }

    #[tokio::test]
    async fn test_held_response_waits_for_release() {
        let mock = MockApi::new();
        let (release, hold) = oneshot::channel();
        mock.expect_get_inventory(1)
            .held(hold)
            .return_ok(InventoryRecord::new(1, 1, "A", 1.0, ""));

        let inventory = mock.inventory();
        let pending = tokio::spawn(async move { inventory.get_inventory(1).await });

        mock.wait_for_calls(1).await;
        assert!(!pending.is_finished());

        release.send(()).unwrap();
        assert!(pending.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_held_purchase_waits_for_release() {
        let mock = MockApi::new();
        let (release, hold) = oneshot::channel();
        mock.expect_purchase(2, 1).held(hold).return_ok(PurchaseResponse {
            message: "ok".into(),
            remaining_quantity: 0,
        });

        let purchases = mock.purchases();
        let pending = tokio::spawn(async move { purchases.purchase_one(2).await });

        mock.wait_for_calls(1).await;
        assert!(!pending.is_finished());

        release.send(()).unwrap();
        assert!(pending.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_purchase_one_uses_default_quantity() {
        let mock = MockApi::new();
        mock.expect_purchase(4, 1).return_ok(PurchaseResponse {
            message: "ok".into(),
            remaining_quantity: 2,
        });

        let response = mock.purchases().purchase_one(4).await.unwrap();
        assert_eq!(response.remaining_quantity, 2);
        assert_eq!(mock.calls(), vec![Call::Purchase(PurchaseRequest::new(4, 1))]);
    }

    #[test]
    #[should_panic(expected = "Not all expectations were met")]
    fn test_verify_panics_on_leftovers() {
        let mock = MockApi::new();
        mock.expect_list_products().return_ok(Vec::new());
        mock.verify();
    }
}
