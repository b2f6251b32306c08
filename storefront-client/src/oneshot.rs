//! Oneshot HTTP 客户端 - 内存通信
//!
//! 需要启用 "in-process" feature

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request, header};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use crate::http::HttpClient;
use crate::{ClientError, ClientResult};

/// Oneshot HTTP 客户端 (内存调用)
///
/// 使用 Tower Service 的 oneshot 模式直接调用 Router，
/// 适用于同进程的服务器-客户端通信，零网络开销。
///
/// ```ignore
/// let router = storefront_server::build_app(state);
/// let client = OneshotHttpClient::new(router);
/// let products: Vec<Product> = client.get("/api/products").await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
    token: Option<String>,
}

impl OneshotHttpClient {
    /// `router` must already have its state attached
    pub fn new(router: Router) -> Self {
        Self {
            router,
            token: None,
        }
    }

    fn build_request(&self, method: Method, path: &str, body: Option<Vec<u8>>) -> ClientResult<Request<Body>> {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = &self.token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let body = match body {
            Some(bytes) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(bytes)
            }
            None => Body::empty(),
        };
        builder
            .body(body)
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }

    fn build_json_request<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> ClientResult<Request<Body>> {
        let bytes = serde_json::to_vec(body)?;
        self.build_request(method, path, Some(bytes))
    }

    /// 执行请求, 返回成功响应的 body
    async fn execute(&self, request: Request<Body>) -> ClientResult<axum::body::Bytes> {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body).to_string();
            return Err(ClientError::from_response(status, text));
        }
        Ok(body)
    }

    async fn execute_json<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        let body = self.execute(request).await?;
        serde_json::from_slice(&body)
            .map_err(|e| ClientError::InvalidResponse(format!("JSON parse error: {}", e)))
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::GET, path, None)?;
        self.execute_json(request).await
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.build_json_request(Method::POST, path, body)?;
        self.execute_json(request).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::POST, path, None)?;
        self.execute_json(request).await
    }

    async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let request = self.build_json_request(Method::PUT, path, body)?;
        self.execute_json(request).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::DELETE, path, None)?;
        self.execute_json(request).await
    }

    async fn get_text(&self, path: &str) -> ClientResult<String> {
        let request = self.build_request(Method::GET, path, None)?;
        let body = self.execute(request).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }

    fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
