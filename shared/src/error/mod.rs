//! Error codes and the JSON envelope shared by server and client
//!
//! Codes are grouped by thousands: 0xxx general, 1xxx sign-in and tokens,
//! 2xxx permissions, 4xxx orders, 6xxx products, 9xxx system.
//!
//! ```
//! use shared::error::{ApiResponse, AppError, ErrorCode};
//!
//! let err = AppError::with_message(ErrorCode::ProductInvalidPrice, "Harga harus lebih dari 0")
//!     .with_detail("price", 0);
//! let body = ApiResponse::<()>::from(err);
//! assert_eq!(body.code, Some(6002));
//! ```

mod codes;
mod http;
mod types;

pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
