//! Native HTTP transport (reqwest)

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde_json::Value;
use std::time::Instant;
use uuid::Uuid;

use super::client::{RiftClient, Transport};
use crate::config::ClientConfig;
use crate::error::ClientError;

/// Header carrying a per-request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// reqwest-backed [`Transport`] with the client-wide timeout applied
pub struct HttpTransport {
    client: Client,
    base_url: String,
    timeout_ms: u64,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            timeout_ms: config.timeout_ms(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(
        &self,
        method: &'static str,
        path: &str,
        request: RequestBuilder,
    ) -> Result<Value, ClientError> {
        let request_id = Uuid::new_v4().to_string();
        let started = Instant::now();
        tracing::debug!(%request_id, "{} {}", method, path);

        let response = request
            .header(REQUEST_ID_HEADER, &request_id)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        tracing::info!(
            %request_id,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "{} {}",
            method,
            path
        );

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = ClientError::from_response(status.as_u16(), &body);
            tracing::warn!(%request_id, "{} {} failed: {}", method, path, err);
            return Err(err);
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| match self.transport_error(e) {
                ClientError::Network(msg) => ClientError::Decode(msg),
                other => other,
            })
    }

    fn transport_error(&self, e: reqwest::Error) -> ClientError {
        if e.is_timeout() {
            ClientError::Timeout(self.timeout_ms)
        } else {
            ClientError::Network(e.to_string())
        }
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<Value, ClientError> {
        let request = self.client.get(self.url(path));
        self.send("GET", path, request).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value, ClientError> {
        let request = self.client.post(self.url(path)).json(&body);
        self.send("POST", path, request).await
    }
}

impl RiftClient<HttpTransport> {
    /// Build a native client from resolved settings
    pub fn http(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = HttpTransport::new(&config)?;
        Ok(Self::new(transport, config))
    }
}
