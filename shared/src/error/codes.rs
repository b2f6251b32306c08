//! Numeric error codes
//!
//! The value is what goes over the wire in `ApiResponse.code`; the
//! thousands digit tells the area (0 general, 1 sign-in, 2 permission,
//! 4 order, 6 product, 9 system).

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! error_codes {
    ($($name:ident = $value:literal => $message:literal,)+) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(into = "u16", try_from = "u16")]
        #[repr(u16)]
        pub enum ErrorCode {
            $($name = $value,)+
        }

        impl ErrorCode {
            pub const ALL: &'static [ErrorCode] = &[$(ErrorCode::$name,)+];

            /// English message used when no custom one is given
            pub const fn message(&self) -> &'static str {
                match self {
                    $(ErrorCode::$name => $message,)+
                }
            }
        }
    };
}

error_codes! {
    ValidationFailed = 2 => "Validation failed",
    NotFound = 3 => "Resource not found",
    AlreadyExists = 4 => "Resource already exists",
    RequiredField = 7 => "Required field is missing",
    ValueOutOfRange = 8 => "Value is out of range",

    NotAuthenticated = 1001 => "User is not authenticated",
    TokenExpired = 1003 => "Authentication token has expired",
    TokenInvalid = 1004 => "Authentication token is invalid",
    InvalidEmail = 1005 => "Email address is badly formatted",
    UserNotFound = 1006 => "No account exists for this email",
    WrongPassword = 1007 => "The password is invalid",
    TooManyAttempts = 1008 => "Too many failed sign-in attempts",

    AdminRequired = 2002 => "Administrator account is required",

    OrderNotFound = 4001 => "Order not found",

    ProductNotFound = 6001 => "Product not found",
    ProductInvalidPrice = 6002 => "Product price is invalid",
    ProductSubcategoryRequired = 6004 => "Product subcategory is required",
    ProductImageRequired = 6005 => "At least one product image is required",

    InternalError = 9001 => "Internal server error",
    DatabaseError = 9002 => "Database error",
}

impl ErrorCode {
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Sign-in code in the `auth/...` form the admin login screen keys on
    pub const fn auth_provider_code(&self) -> Option<&'static str> {
        match self {
            ErrorCode::InvalidEmail => Some("auth/invalid-email"),
            ErrorCode::UserNotFound => Some("auth/user-not-found"),
            ErrorCode::WrongPassword => Some("auth/wrong-password"),
            ErrorCode::TooManyAttempts => Some("auth/too-many-requests"),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// A number that is not one of the known codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown error code {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|code| code.code() == value)
            .ok_or(InvalidErrorCode(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values() {
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::WrongPassword.code(), 1007);
        assert_eq!(ErrorCode::AdminRequired.code(), 2002);
        assert_eq!(ErrorCode::OrderNotFound.code(), 4001);
        assert_eq!(ErrorCode::ProductSubcategoryRequired.code(), 6004);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_every_code_parses_back() {
        for code in ErrorCode::ALL {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(*code));
        }
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
    }

    #[test]
    fn test_serialized_as_number() {
        assert_eq!(serde_json::to_string(&ErrorCode::WrongPassword).unwrap(), "1007");
        let code: ErrorCode = serde_json::from_str("6005").unwrap();
        assert_eq!(code, ErrorCode::ProductImageRequired);
        assert!(serde_json::from_str::<ErrorCode>("12345").is_err());
    }

    #[test]
    fn test_only_sign_in_codes_have_auth_code() {
        assert_eq!(
            ErrorCode::UserNotFound.auth_provider_code(),
            Some("auth/user-not-found")
        );
        assert_eq!(
            ErrorCode::TooManyAttempts.auth_provider_code(),
            Some("auth/too-many-requests")
        );
        assert_eq!(ErrorCode::TokenExpired.auth_provider_code(), None);
        assert_eq!(ErrorCode::ProductNotFound.auth_provider_code(), None);
    }
}
