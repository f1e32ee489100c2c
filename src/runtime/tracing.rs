//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## What Gets Traced
//!
//! - **HTTP calls**: one span per client call, failures with status and server message
//! - **View activity**: activation, loads, stale results being dropped, purchases
//! - **Notifications**: when the demo binary's [`TracingNotifier`](crate::views::TracingNotifier) is used
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show payloads and switch-latest decisions
//! RUST_LOG=debug cargo run
//!
//! # Filter to specific modules
//! RUST_LOG=storefront::views=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` a detail screen load looks like:
//!
//! ```text
//! DEBUG activate: Switched to latest fetch generation=1
//! DEBUG Fetching inventory product_id=1 generation=1
//! DEBUG get_inventory:get_json: Sending request url="http://localhost:8081/inventory/1"
//! INFO Inventory loaded product_id=1 quantity=50
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths
        .compact() // Compact format shows spans inline (e.g., "buy_product:purchase")
        .init();
}
