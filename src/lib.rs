//! # Storefront
//!
//! > **Product list, product detail and one-click purchase over three HTTP endpoints.**
//!
//! This crate is the client side of a small shop: it reads the product catalog,
//! reads live stock from the inventory service and submits purchases. Two
//! screen models ("views") sit on top and turn network results into state a UI
//! can render.
//!
//! ## 🏗️ Design
//!
//! ### Views own their state
//! Each view keeps its own loading/error flags and publishes its result into a
//! [`Replay`](framework::Replay) cell. Anyone can read the cell at any time; the
//! network is hit once per activation.
//!
//! ### Failures stop at the view
//! Client calls return [`ApiError`](clients::ApiError). Views never pass those
//! on: a failed load becomes an error flag, an empty or absent result and a
//! notification.
//!
//! ### Latest input wins
//! The detail screen follows its route parameter. When the parameter changes,
//! the old fetch is aborted and, should it still complete, its result is
//! dropped (see [`SwitchLatest`](framework::SwitchLatest)).
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Wire ([`clients`], [`model`])
//! - **Role**: HTTP calls with the `X-API-KEY` header, JSON DTOs, error mapping.
//! - **Key items**: [`CatalogClient`](clients::CatalogClient),
//!   [`InventoryClient`](clients::InventoryClient), [`PurchaseClient`](clients::PurchaseClient).
//!
//! ### 2. The Plumbing ([`framework`])
//! - **Role**: replay cells, switch-to-latest tickets, view flags, and the test mocks.
//!
//! ### 3. The Screens ([`views`])
//! - **Role**: [`CatalogView`](views::CatalogView) and [`DetailView`](views::DetailView),
//!   plus price formatting, routes and notifications.
//!
//! ### 4. The Wiring ([`config`], [`runtime`])
//! - **Role**: per-environment configuration, client construction, logging setup.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo against local services
//! STOREFRONT_PRODUCTS_API_KEY=products-api-key-123 \
//! STOREFRONT_INVENTORY_API_KEY=inventory-api-key-123 \
//! RUST_LOG=info cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod clients;
pub mod config;
pub mod framework;
pub mod model;
pub mod runtime;
pub mod views;
