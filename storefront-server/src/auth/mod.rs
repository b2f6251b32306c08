//! 管理后台认证
//!
//! 邮箱密码登录 ([`credentials`])，HS256 令牌 ([`JwtService`])，
//! 以及挂在 `/api` 上的 [`require_auth`] / [`require_admin`]。

pub mod credentials;
pub mod extractor;
pub mod jwt;
pub mod middleware;

pub use credentials::{LoginAttempts, hash_password, is_valid_email, verify_password};
pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{is_public_route, require_admin, require_auth};
