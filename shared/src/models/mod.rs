//! Data models
//!
//! Shared between storefront-server and storefront-client (via API).
//! Record ids are plain strings; the server strips the table prefix.

pub mod category;
pub mod order;
pub mod product;

// Re-exports
pub use category::*;
pub use order::*;
pub use product::*;
