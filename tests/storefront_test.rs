use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use storefront::clients::API_KEY_HEADER;
use storefront::config::ApiConfig;
use storefront::framework::mock::{RecordingNavigator, RecordingNotifier};
use storefront::runtime::Storefront;
use storefront::views::{BuyOutcome, NotificationKind, Route};

/// A backend with one product whose stock goes down on every purchase.
#[derive(Clone)]
struct Shop {
    stock: Arc<Mutex<u64>>,
}

fn authorized(headers: &HeaderMap, key: &str) -> bool {
    headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok()) == Some(key)
}

fn unauthorized() -> (StatusCode, Json<Value>) {
    (StatusCode::UNAUTHORIZED, Json(json!({"message": "Invalid API key"})))
}

async fn products(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    if !authorized(&headers, "p-key") {
        return unauthorized();
    }
    (
        StatusCode::OK,
        Json(json!([{"id": 1, "name": "Lamp", "price": 45000, "description": "Desk lamp"}])),
    )
}

async fn inventory(
    State(shop): State<Shop>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    if !authorized(&headers, "i-key") {
        return unauthorized();
    }
    if id != 1 {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"status": 404, "message": "Inventory not found"})),
        );
    }
    let stock = *shop.stock.lock().unwrap();
    (
        StatusCode::OK,
        Json(json!({
            "productId": 1, "quantity": stock, "name": "Lamp",
            "price": 45000, "description": "Desk lamp"
        })),
    )
}

async fn purchase(
    State(shop): State<Shop>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    if !authorized(&headers, "i-key") {
        return unauthorized();
    }
    let quantity = body["quantity"].as_u64().unwrap_or(0);
    let mut stock = shop.stock.lock().unwrap();
    if quantity > *stock {
        return (
            StatusCode::CONFLICT,
            Json(json!({"status": 409, "message": "Insufficient stock"})),
        );
    }
    *stock -= quantity;
    (
        StatusCode::OK,
        Json(json!({"message": "Purchase completed", "remainingQuantity": *stock})),
    )
}

async fn start(stock: u64) -> ApiConfig {
    let shop = Shop {
        stock: Arc::new(Mutex::new(stock)),
    };
    let router = Router::new()
        .route("/products", get(products))
        .route("/inventory/{id}", get(inventory))
        .route("/purchase", post(purchase))
        .with_state(shop);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    ApiConfig::local(&format!("http://{addr}"), "p-key", "i-key")
}

/// Full flow against a live backend: list, open detail, buy, see stock drop.
#[tokio::test]
async fn test_browse_and_buy() {
    let config = start(2).await;
    let notifier = RecordingNotifier::new();
    let navigator = RecordingNavigator::new();
    let storefront = Storefront::new(
        &config,
        Arc::new(notifier.clone()),
        Arc::new(navigator.clone()),
    )
    .expect("Failed to build storefront");

    let mut catalog = storefront.catalog_view();
    let products = catalog.activate().resolved().await;
    assert_eq!(products.len(), 1);
    assert!(!catalog.has_error());
    assert_eq!(catalog.format_price(products[0].price), "$\u{a0}45.000");

    catalog.view_details(products[0].id);
    let route = navigator.routes()[0];
    assert_eq!(route, Route::ProductDetail(1));

    let mut detail = storefront.detail_view();
    let record = detail
        .activate_with(route.params())
        .resolved()
        .await
        .expect("Inventory should load");
    assert_eq!(record.quantity, 2);

    let outcome = detail.buy_product(record.product_id, record.quantity).await;
    assert!(matches!(outcome, BuyOutcome::Purchased(ref r) if r.remaining_quantity == 1));
    let refreshed = detail.inventory().latest().flatten().expect("Refreshed record");
    assert_eq!(refreshed.quantity, 1);

    detail.buy_product(1, refreshed.quantity).await;
    let empty = detail.inventory().latest().flatten().expect("Refreshed record");
    assert_eq!(empty.quantity, 0);

    let outcome = detail.buy_product(1, empty.quantity).await;
    assert_eq!(outcome, BuyOutcome::OutOfStock);

    let kinds: Vec<NotificationKind> = notifier.notifications().iter().map(|n| n.kind).collect();
    assert_eq!(
        kinds,
        vec![
            NotificationKind::Success,
            NotificationKind::Success,
            NotificationKind::Error
        ]
    );

    detail.go_back();
    assert_eq!(navigator.routes().last(), Some(&Route::Catalog));
}

/// A stale inventory view still buys against the server, which is authoritative.
#[tokio::test]
async fn test_server_rejects_purchase_beyond_stock() {
    let config = start(0).await;
    let notifier = RecordingNotifier::new();
    let storefront = Storefront::new(
        &config,
        Arc::new(notifier.clone()),
        Arc::new(RecordingNavigator::new()),
    )
    .unwrap();

    let detail = storefront.detail_view();
    let outcome = detail.buy_product(1, 5).await;

    assert!(matches!(outcome, BuyOutcome::Failed(ref e) if e.is_rejection()));
    assert_eq!(notifier.messages(), vec!["Insufficient stock".to_string()]);
}

#[tokio::test]
async fn test_wrong_key_surfaces_as_catalog_error() {
    let mut config = start(1).await;
    config.products_api_key = "nope".to_string();
    let notifier = RecordingNotifier::new();
    let storefront = Storefront::new(
        &config,
        Arc::new(notifier.clone()),
        Arc::new(RecordingNavigator::new()),
    )
    .unwrap();

    let mut catalog = storefront.catalog_view();
    assert!(catalog.activate().resolved().await.is_empty());
    assert!(catalog.has_error());
    assert_eq!(notifier.count(), 1);
}
