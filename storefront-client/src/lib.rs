//! Storefront Client - HTTP client and flows for the storefront server
//!
//! - [`CatalogView`]: product list with search and filter, seed fallback
//! - [`OrderWizard`]: the three-step checkout
//! - [`AdminSession`]: sign-in, product management, order board

pub mod admin;
pub mod catalog;
pub mod config;
pub mod error;
pub mod http;
#[cfg(feature = "in-process")]
pub mod oneshot;
pub mod wizard;

pub use admin::{AdminSession, ProductForm, login_error_message};
pub use catalog::{CatalogSource, CatalogView, ProductCard};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use oneshot::OneshotHttpClient;
pub use wizard::{CompletedOrder, OrderWizard, WizardStep};

// Re-export shared types for convenience
pub use shared::client::{AccountInfo, LoginResponse, SubmitOrderResponse};
