//! Bearer token → `CurrentUser`

use axum::{extract::FromRequestParts, http::request::Parts};
use http::{HeaderMap, Uri};

use crate::AppError;
use crate::auth::{CurrentUser, JwtError, JwtService};
use crate::core::ServerState;
use crate::security_log;

/// Read and verify `Authorization: Bearer <token>`
pub(crate) fn authenticate(
    jwt: &JwtService,
    headers: &HeaderMap,
    uri: &Uri,
) -> Result<CurrentUser, AppError> {
    let Some(header) = headers
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    else {
        security_log!("WARN", "auth_missing", uri = uri.path().to_string());
        return Err(AppError::unauthorized());
    };
    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::invalid_token("Expected a Bearer token"))?;

    jwt.verify(token).map(CurrentUser::from).map_err(|e| {
        security_log!(
            "WARN",
            "auth_failed",
            error = e.to_string(),
            uri = uri.path().to_string()
        );
        match e {
            JwtError::Expired => AppError::token_expired(),
            _ => AppError::invalid_token("Invalid token"),
        }
    })
}

/// Handlers behind `require_auth` get the user the middleware stored;
/// anywhere else the header is checked here.
impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<CurrentUser>() {
            return Ok(user.clone());
        }
        let user = authenticate(&state.get_jwt_service(), &parts.headers, &parts.uri)?;
        parts.extensions.insert(user.clone());
        Ok(user)
    }
}
