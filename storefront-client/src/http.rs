//! HTTP transport
//!
//! [`HttpClient`] is the seam every flow in this crate talks through.
//! [`NetworkHttpClient`] goes over reqwest; the in-process client in
//! [`crate::oneshot`] calls an axum Router directly.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP 客户端 trait
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    /// GET returning the raw body (file downloads)
    async fn get_text(&self, path: &str) -> ClientResult<String>;
    fn set_token(&mut self, token: Option<String>);
    fn token(&self) -> Option<&str>;
}

/// 网络 HTTP 客户端
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl NetworkHttpClient {
    pub fn new(base_url: &str) -> ClientResult<Self> {
        Self::from_config(&ClientConfig::new(base_url))
    }

    pub fn from_config(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout_duration())
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    /// 获取基础 URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn send(&self, req: reqwest::RequestBuilder) -> ClientResult<reqwest::Response> {
        let response = self.authorize(req).send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            tracing::debug!(status = %status, "Request rejected");
            return Err(ClientError::from_response(status, text));
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let response = self.send(req).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send_json(self.client.get(self.url(path))).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send_json(self.client.post(self.url(path)).json(body))
            .await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send_json(self.client.post(self.url(path))).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        self.send_json(self.client.put(self.url(path)).json(body))
            .await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send_json(self.client.delete(self.url(path))).await
    }

    async fn get_text(&self, path: &str) -> ClientResult<String> {
        let response = self.send(self.client.get(self.url(path))).await?;
        Ok(response.text().await?)
    }

    fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = NetworkHttpClient::new("http://localhost:3000/").unwrap();
        assert_eq!(client.url("/api/products"), "http://localhost:3000/api/products");
        assert_eq!(client.url("health"), "http://localhost:3000/health");
    }

    #[test]
    fn test_token_roundtrip() {
        let mut client = NetworkHttpClient::new("http://localhost:3000").unwrap();
        assert!(client.token().is_none());
        client.set_token(Some("jwt".to_string()));
        assert_eq!(client.token(), Some("jwt"));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_http_error() {
        let client = NetworkHttpClient::new("http://127.0.0.1:9").unwrap();
        let err = client.get::<serde_json::Value>("/health").await.unwrap_err();
        assert!(matches!(err, ClientError::Http(_)));
    }
}
