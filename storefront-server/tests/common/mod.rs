//! Shared helpers for the HTTP integration tests
//!
//! Each test gets its own in-memory database and drives the router with
//! `tower::ServiceExt::oneshot`.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde::Serialize;
use serde_json::Value;
use storefront_server::auth::JwtConfig;
use storefront_server::{Config, ServerState, build_app};
use tower::ServiceExt;

pub const ADMIN_EMAIL: &str = "admin@nakubyte.com";
pub const ADMIN_PASSWORD: &str = "rahasia-admin-123";

pub struct TestApp {
    pub state: ServerState,
    router: Router,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap_or(Value::Null)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl TestApp {
    pub async fn new() -> Self {
        let mut config = Config::for_tests(JwtConfig::for_tests());
        config.admin_password = Some(ADMIN_PASSWORD.to_string());
        let state = ServerState::for_tests(config).await.unwrap();
        let router = build_app(state.clone());
        Self { state, router }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes().to_vec();
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None, None).await
    }

    pub async fn post(&self, uri: &str, body: impl Serialize) -> TestResponse {
        let json = serde_json::to_value(body).unwrap();
        self.request(Method::POST, uri, Some(json), None).await
    }

    pub async fn login(&self, email: &str, password: &str) -> TestResponse {
        self.post(
            "/api/auth/login",
            serde_json::json!({ "email": email, "password": password }),
        )
        .await
    }

    /// Sign in as the configured admin and return the token
    pub async fn admin_token(&self) -> String {
        let response = self.login(ADMIN_EMAIL, ADMIN_PASSWORD).await;
        assert_eq!(response.status, StatusCode::OK, "{}", response.text());
        response.json()["token"].as_str().unwrap().to_string()
    }
}

pub fn order_body(product_id: &str, quantity: u32) -> Value {
    serde_json::json!({
        "product_id": product_id,
        "customer_name": "Budi Santoso",
        "whatsapp": "0858-6413-9786",
        "address": "Jl. Merdeka No. 10, Bandung",
        "quantity": quantity,
    })
}
