//! Shared HTTP core for the resource clients.
//!
//! Wraps a reqwest client with the API base URL, bearer-token injection from
//! the session store, and decoding of the API's `{"detail": ...}` error body
//! into the client-side error taxonomy. No retries: a failed request is
//! terminal for the action that issued it.

use std::time::Duration;

use reqwest::multipart;
use serde::de::DeserializeOwned;
use serde::Serialize;

use common::{ApiConfig, ApiErrorBody, AppError, AppResult};

use crate::session::TokenStore;

/// HTTP transport shared by all resource clients.
#[derive(Clone)]
pub struct Http {
    client: reqwest::Client,
    base_url: String,
    tokens: TokenStore,
}

impl Http {
    /// Build the transport from configuration.
    pub fn new(config: &ApiConfig, tokens: TokenStore) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token (when present), send, and map non-2xx
    /// responses to [`AppError`] with the API's detail message verbatim.
    async fn execute(&self, mut builder: reqwest::RequestBuilder) -> AppResult<reqwest::Response> {
        if let Some(token) = self.tokens.access_token() {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let detail = response
            .json::<ApiErrorBody>()
            .await
            .map(|body| body.detail)
            .unwrap_or_default();
        let detail = if detail.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        } else {
            detail
        };

        tracing::debug!("API error {}: {}", status.as_u16(), detail);
        Err(AppError::from_status(status.as_u16(), detail))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let response = self.execute(self.client.get(self.url(path))).await?;
        Ok(response.json().await?)
    }

    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> AppResult<T> {
        let response = self
            .execute(self.client.get(self.url(path)).query(query))
            .await?;
        Ok(response.json().await?)
    }

    pub async fn get_bytes(&self, path: &str) -> AppResult<Vec<u8>> {
        let response = self.execute(self.client.get(self.url(path))).await?;
        Ok(response.bytes().await?.to_vec())
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .execute(self.client.post(self.url(path)).json(body))
            .await?;
        Ok(response.json().await?)
    }

    pub async fn post_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> AppResult<T> {
        let response = self
            .execute(self.client.post(self.url(path)).query(query))
            .await?;
        Ok(response.json().await?)
    }

    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: multipart::Form,
    ) -> AppResult<T> {
        let response = self
            .execute(self.client.post(self.url(path)).multipart(form))
            .await?;
        Ok(response.json().await?)
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .execute(self.client.put(self.url(path)).json(body))
            .await?;
        Ok(response.json().await?)
    }

    pub async fn patch<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let response = self.execute(self.client.patch(self.url(path))).await?;
        Ok(response.json().await?)
    }

    pub async fn delete(&self, path: &str) -> AppResult<()> {
        self.execute(self.client.delete(self.url(path))).await?;
        Ok(())
    }
}
