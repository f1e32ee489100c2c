use storefront::clients::{ApiError, ErrorBody};
use storefront::framework::mock::{Call, MockApi, RecordingNavigator, RecordingNotifier};
use storefront::framework::Phase;
use storefront::model::Product;
use storefront::views::{CatalogView, Route, LOAD_PRODUCTS_FAILED};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;

fn products() -> Vec<Product> {
    vec![
        Product::new(1, "Product 1", 100000.0, "Description 1"),
        Product::new(2, "Product 2", 50000.0, "Description 2"),
    ]
}

fn view(mock: &MockApi) -> (CatalogView, RecordingNotifier, RecordingNavigator) {
    let notifier = RecordingNotifier::new();
    let navigator = RecordingNavigator::new();
    let view = CatalogView::new(
        mock.catalog(),
        Arc::new(notifier.clone()),
        Arc::new(navigator.clone()),
    );
    (view, notifier, navigator)
}

/// The published list is exactly what the endpoint returned, in order.
#[tokio::test]
async fn test_successful_load_publishes_list() {
    let mock = MockApi::new();
    mock.expect_list_products().return_ok(products());
    let (mut view, notifier, _) = view(&mock);

    assert_eq!(view.phase(), Phase::Idle);
    let published = view.activate().resolved().await;

    assert_eq!(published, products());
    assert!(!view.is_loading());
    assert!(!view.has_error());
    assert_eq!(view.phase(), Phase::Loaded);
    assert_eq!(notifier.count(), 0);
    mock.verify();
}

/// Late observers get the replayed list; the endpoint is hit only once.
#[tokio::test]
async fn test_late_observers_do_not_refetch() {
    let mock = MockApi::new();
    mock.expect_list_products().return_ok(products());
    let (mut view, _, _) = view(&mock);

    let first = view.activate().resolved().await;
    let second = view.products().resolved().await;
    let third = view.products().latest();

    assert_eq!(first, second);
    assert_eq!(third, Some(first));
    assert_eq!(mock.calls(), vec![Call::ListProducts]);
    assert_eq!(view.products().publish_count(), 1);
}

#[tokio::test]
async fn test_server_error_publishes_empty_list_and_notifies_once() {
    let mock = MockApi::new();
    mock.expect_list_products().return_err(ApiError::Server {
        status: 500,
        body: ErrorBody::with_message("An unexpected error occurred"),
    });
    let (mut view, notifier, _) = view(&mock);

    let published = view.activate().resolved().await;

    assert!(published.is_empty());
    assert!(!view.is_loading());
    assert!(view.has_error());
    assert_eq!(view.phase(), Phase::Failed);

    let shown = notifier.notifications();
    assert_eq!(shown.len(), 1);
    assert!(shown[0].is_error());
    assert_eq!(shown[0].message, LOAD_PRODUCTS_FAILED);
}

#[tokio::test]
async fn test_transport_error_is_absorbed() {
    let mock = MockApi::new();
    mock.expect_list_products()
        .return_err(ApiError::Transport("connection refused".into()));
    let (mut view, notifier, _) = view(&mock);

    assert!(view.activate().resolved().await.is_empty());
    assert!(view.has_error());
    assert_eq!(notifier.count(), 1);
}

/// Re-activation starts over with a new cell and a new request.
#[tokio::test]
async fn test_reactivation_uses_fresh_cell() {
    let mock = MockApi::new();
    mock.expect_list_products()
        .return_err(ApiError::Transport("down".into()));
    mock.expect_list_products().return_ok(products());
    let (mut view, _, _) = view(&mock);

    let first = view.activate();
    assert!(first.resolved().await.is_empty());
    assert!(view.has_error());

    let second = view.activate();
    assert_eq!(second.resolved().await, products());
    assert!(!view.has_error());

    // The old cell still holds the old activation's result.
    assert_eq!(first.latest(), Some(Vec::new()));
    assert_eq!(mock.call_count(), 2);
    mock.verify();
}

/// A superseded activation cannot touch the flags of the one that replaced it.
#[tokio::test]
async fn test_superseded_activation_leaves_flags_alone() {
    let mock = MockApi::new();
    let (release, hold) = oneshot::channel();
    mock.expect_list_products()
        .held(hold)
        .return_err(ApiError::Transport("late".into()));
    mock.expect_list_products().return_ok(products());
    let (mut view, notifier, _) = view(&mock);

    let first = view.activate();
    mock.wait_for_calls(1).await;
    let second = view.activate();
    assert_eq!(second.resolved().await, products());

    let _ = release.send(());
    tokio::time::sleep(Duration::from_millis(20)).await;

    assert!(!view.has_error());
    assert!(!view.is_loading());
    assert_eq!(view.phase(), Phase::Loaded);
    assert_eq!(notifier.count(), 0);
    assert!(!first.is_resolved());
    mock.verify();
}

#[tokio::test]
async fn test_view_details_navigates_without_network() {
    let mock = MockApi::new();
    let (view, _, navigator) = view(&mock);

    view.view_details(2);

    assert_eq!(navigator.routes(), vec![Route::ProductDetail(2)]);
    assert_eq!(navigator.routes()[0].path(), "/products/2");
    assert_eq!(mock.call_count(), 0);
}

#[tokio::test]
async fn test_format_price() {
    let mock = MockApi::new();
    let (view, _, _) = view(&mock);

    assert!(view.format_price(0.0).contains('0'));
    let formatted = view.format_price(100000.0);
    assert!(formatted.contains("100.000"));
    assert!(formatted.contains('$'));
    assert!(!view.format_price(50000.0).contains(','));
}
