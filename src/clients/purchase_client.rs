//! # Purchase Client
//!
//! Submits purchases to the purchase endpoint.
//!
//! The endpoint lives in the inventory service and is authenticated with the
//! inventory API key; there is no separate purchase key.
use crate::clients::api_client::ApiClient;
use crate::clients::{ApiError, PurchaseApi};
use crate::config::ApiConfig;
use crate::model::{PurchaseRequest, PurchaseResponse};
use async_trait::async_trait;
use tracing::{info, instrument};

/// HTTP client for `POST {purchase-base}`.
#[derive(Clone)]
pub struct PurchaseClient {
    http: reqwest::Client,
    url: String,
    api_key: String,
}

impl PurchaseClient {
    pub fn new(http: reqwest::Client, config: &ApiConfig) -> Self {
        Self {
            http,
            url: config.purchase_url.clone(),
            api_key: config.inventory_api_key.clone(),
        }
    }
}

impl ApiClient for PurchaseClient {
    fn http(&self) -> &reqwest::Client {
        &self.http
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }
}

#[async_trait]
impl PurchaseApi for PurchaseClient {
    #[instrument(skip(self))]
    async fn purchase(&self, product_id: i64, quantity: u32) -> Result<PurchaseResponse, ApiError> {
        let request = PurchaseRequest::new(product_id, quantity);
        let response: PurchaseResponse = self.post_json(&self.url, &request).await?;
        info!(
            product_id,
            remaining = response.remaining_quantity,
            "Purchase accepted"
        );
        Ok(response)
    }
}
