//! HTTP client wrapper for console-to-server calls.

use reqwest::{Client, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;

use crate::error::CargaError;
use crate::model::common::ApiErrorBody;

/// Connection settings for the console HTTP client.
#[derive(Clone, Debug)]
pub struct HttpClientConfig {
    pub base_url: String,
    pub context_path: String,
    pub connect_timeout_ms: u64,
    pub read_timeout_ms: u64,
}

impl HttpClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            context_path: "/api".to_string(),
            connect_timeout_ms: 5000,
            read_timeout_ms: 30000,
        }
    }
}

/// Thin typed wrapper over reqwest.
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    pub fn new(config: HttpClientConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.read_timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}{}{}",
            self.config.base_url, self.config.context_path, path
        )
    }

    pub async fn get_with_query<Q: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Q,
    ) -> anyhow::Result<T> {
        let response = self.client.get(self.url(path)).query(query).send().await?;

        Self::parse_json(path, response).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> anyhow::Result<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;

        Self::parse_json(path, response).await
    }

    pub async fn patch_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> anyhow::Result<T> {
        let response = self.client.patch(self.url(path)).json(body).send().await?;

        Self::parse_json(path, response).await
    }

    pub async fn delete(&self, path: &str) -> anyhow::Result<()> {
        let response = self.client.delete(self.url(path)).send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(());
        }

        Err(Self::error_for(path, status, response).await.into())
    }

    async fn parse_json<T: DeserializeOwned>(path: &str, response: Response) -> anyhow::Result<T> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }

        Err(Self::error_for(path, status, response).await.into())
    }

    async fn error_for(path: &str, status: StatusCode, response: Response) -> CargaError {
        let message = response
            .json::<ApiErrorBody>()
            .await
            .map(|body| body.error)
            .unwrap_or_else(|_| status.to_string());

        match status {
            StatusCode::NOT_FOUND => CargaError::NotFound(format!("resource '{}'", path)),
            StatusCode::BAD_REQUEST => CargaError::IllegalArgument(message),
            _ => CargaError::NetworkError(format!("{} returned {}: {}", path, status, message)),
        }
    }
}
