//! ErrorCode → HTTP status

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Status sent with the error body; anything not listed is a 400
    pub fn http_status(&self) -> StatusCode {
        use ErrorCode::*;
        match self {
            NotFound | OrderNotFound | ProductNotFound => StatusCode::NOT_FOUND,
            AlreadyExists => StatusCode::CONFLICT,
            NotAuthenticated | TokenExpired | TokenInvalid | UserNotFound | WrongPassword => {
                StatusCode::UNAUTHORIZED
            }
            AdminRequired => StatusCode::FORBIDDEN,
            TooManyAttempts => StatusCode::TOO_MANY_REQUESTS,
            InternalError | DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
            ValidationFailed
            | RequiredField
            | ValueOutOfRange
            | InvalidEmail
            | ProductInvalidPrice
            | ProductSubcategoryRequired
            | ProductImageRequired => StatusCode::BAD_REQUEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_in_failures() {
        assert_eq!(ErrorCode::UserNotFound.http_status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorCode::WrongPassword.http_status(), StatusCode::UNAUTHORIZED);
        // a malformed email is the caller's mistake, not a failed credential
        assert_eq!(ErrorCode::InvalidEmail.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorCode::TooManyAttempts.http_status(),
            StatusCode::TOO_MANY_REQUESTS
        );
    }

    #[test]
    fn test_lookups_and_guards() {
        assert_eq!(ErrorCode::OrderNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::ProductNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::AdminRequired.http_status(), StatusCode::FORBIDDEN);
        assert_eq!(ErrorCode::AlreadyExists.http_status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_server_side_failures_are_5xx() {
        for code in ErrorCode::ALL {
            let expected = matches!(code, ErrorCode::InternalError | ErrorCode::DatabaseError);
            assert_eq!(code.http_status().is_server_error(), expected, "{:?}", code);
        }
    }
}
