//! # Catalog Client
//!
//! Reads products from the catalog endpoint with the products API key.
use crate::clients::api_client::ApiClient;
use crate::clients::{ApiError, CatalogApi};
use crate::config::ApiConfig;
use crate::model::Product;
use async_trait::async_trait;
use tracing::{info, instrument};

/// HTTP client for `GET {products-base}` and `GET {products-base}/{id}`.
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl CatalogClient {
    pub fn new(http: reqwest::Client, config: &ApiConfig) -> Self {
        Self {
            http,
            base_url: config.products_url.clone(),
            api_key: config.products_api_key.clone(),
        }
    }
}

impl ApiClient for CatalogClient {
    fn http(&self) -> &reqwest::Client {
        &self.http
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }
}

#[async_trait]
impl CatalogApi for CatalogClient {
    #[instrument(skip(self))]
    async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let products: Vec<Product> = self.get_json(&self.base_url).await?;
        info!(count = products.len(), "Products listed");
        Ok(products)
    }

    #[instrument(skip(self))]
    async fn get_product(&self, id: i64) -> Result<Product, ApiError> {
        self.get_json(&format!("{}/{}", self.base_url, id)).await
    }
}
