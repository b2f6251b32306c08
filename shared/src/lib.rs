//! Shared types for the NakuByte storefront
//!
//! Domain models, catalog filtering, order validation and the unified error
//! system used by both storefront-server and storefront-client.

pub mod catalog;
pub mod client;
pub mod error;
pub mod models;
pub mod order;
pub mod seed;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};
