//! Authentication Handlers
//!
//! Email/password sign-in for the admin panel. Failures carry the
//! provider-style `auth/...` code in `details.auth_code`.

use std::time::Duration;

use axum::{Extension, Json, extract::State};
use shared::client::{AccountInfo, LoginRequest, LoginResponse};
use shared::error::ErrorCode;

use crate::AppError;
use crate::auth::{CurrentUser, is_valid_email};
use crate::core::ServerState;
use crate::security_log;

/// Login handler
///
/// Order of checks: email format, lockout, account lookup, password.
/// The lookup is followed by a fixed delay whether or not it matched.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let email = req.email.trim().to_lowercase();

    if !is_valid_email(&email) {
        return Err(AppError::auth(ErrorCode::InvalidEmail));
    }

    if state.login_attempts.is_blocked(&email) {
        security_log!("WARN", "login_locked", email = email.clone());
        return Err(AppError::auth(ErrorCode::TooManyAttempts));
    }

    let account = state.accounts().find_by_email(&email).await?;

    tokio::time::sleep(Duration::from_millis(state.config.auth_delay_ms)).await;

    let account = match account {
        Some(account) if account.verify_password(&req.password) => account,
        Some(_) => {
            let failures = state.login_attempts.record_failure(&email);
            security_log!(
                "WARN",
                "login_failed",
                email = email.clone(),
                reason = "wrong_password",
                failures = failures
            );
            return Err(AppError::auth(ErrorCode::WrongPassword));
        }
        None => {
            let failures = state.login_attempts.record_failure(&email);
            security_log!(
                "WARN",
                "login_failed",
                email = email.clone(),
                reason = "user_not_found",
                failures = failures
            );
            return Err(AppError::auth(ErrorCode::UserNotFound));
        }
    };

    state.login_attempts.reset(&email);

    let is_admin = state.config.is_admin_email(&account.email);
    let token = state
        .get_jwt_service()
        .issue(&account.id, &account.email, is_admin)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(
        account_id = %account.id,
        email = %account.email,
        is_admin,
        "Account signed in"
    );

    Ok(Json(LoginResponse {
        token,
        user: AccountInfo {
            id: account.id,
            email: account.email,
            is_admin,
        },
    }))
}

/// Current account info
pub async fn me(Extension(user): Extension<CurrentUser>) -> Json<AccountInfo> {
    let is_admin = user.is_admin();
    Json(AccountInfo {
        id: user.id,
        email: user.email,
        is_admin,
    })
}
