use crate::clients::{ApiError, ErrorBody};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// Header carrying the static API key on every request.
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// Trait for endpoint-specific clients to inherit the shared request plumbing.
///
/// Implementors only say which `reqwest::Client` and which API key to use; the
/// default methods attach the key header, send the request and map non-2xx
/// responses to [`ApiError`].
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// Access the shared HTTP client.
    fn http(&self) -> &reqwest::Client;

    /// The key sent in [`API_KEY_HEADER`].
    fn api_key(&self) -> &str;

    /// GET `url` and decode a JSON body.
    #[tracing::instrument(skip(self))]
    async fn get_json<T>(&self, url: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Send,
    {
        debug!("Sending request");
        let response = self
            .http()
            .get(url)
            .header(API_KEY_HEADER, self.api_key())
            .send()
            .await
            .map_err(ApiError::transport)?;
        decode(response).await
    }

    /// POST `body` as JSON to `url` and decode a JSON body.
    #[tracing::instrument(skip(self, body))]
    async fn post_json<B, T>(&self, url: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        debug!("Sending request");
        // `.json()` also sets `Content-Type: application/json`.
        let response = self
            .http()
            .post(url)
            .header(API_KEY_HEADER, self.api_key())
            .json(body)
            .send()
            .await
            .map_err(ApiError::transport)?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        return response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()));
    }

    let raw = match response.text().await {
        Ok(raw) => raw,
        Err(e) => {
            warn!(status = status.as_u16(), error = %e, "Could not read error body");
            String::new()
        }
    };
    let error = ApiError::from_status(status.as_u16(), ErrorBody::parse(&raw));
    warn!(status = status.as_u16(), error = %error, "Request failed");
    Err(error)
}

/// Builds the `reqwest::Client` shared by all endpoint clients.
pub fn build_http_client(config: &crate::config::ApiConfig) -> Result<reqwest::Client, ApiError> {
    reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .map_err(ApiError::transport)
}
