use crate::clients::api_client::ApiClient;
use crate::clients::{ApiError, InventoryApi};
use crate::config::ApiConfig;
use crate::model::InventoryRecord;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// HTTP client for `GET {inventory-base}/{productId}`.
#[derive(Clone)]
pub struct InventoryClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl InventoryClient {
    pub fn new(http: reqwest::Client, config: &ApiConfig) -> Self {
        Self {
            http,
            base_url: config.inventory_url.clone(),
            api_key: config.inventory_api_key.clone(),
        }
    }
}

impl ApiClient for InventoryClient {
    fn http(&self) -> &reqwest::Client {
        &self.http
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }
}

#[async_trait]
impl InventoryApi for InventoryClient {
    #[instrument(skip(self))]
    async fn get_inventory(&self, product_id: i64) -> Result<InventoryRecord, ApiError> {
        let record: InventoryRecord = self
            .get_json(&format!("{}/{}", self.base_url, product_id))
            .await?;
        debug!(?record, "Inventory fetched");
        Ok(record)
    }
}
