//! Authentication DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for POST /api/v1/auth/login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// The user to issue a token for
    #[validate(length(min = 1, max = 64))]
    pub user_id: String,

    /// Account password
    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// Response body for a successful login
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed identity token
    pub token: String,

    /// Token validity window in seconds
    pub expires_in: i64,
}

/// Request body for POST /api/v1/auth/verify-token
#[derive(Debug, Deserialize, Serialize)]
pub struct VerifyTokenRequest {
    pub token: String,
}

/// Response body for a successfully verified token
#[derive(Debug, Serialize, Deserialize)]
pub struct VerifyTokenResponse {
    /// Subject the token was issued for
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_requires_user_id() {
        let request = LoginRequest {
            user_id: "".to_string(),
            password: "secret".to_string(),
        };
        assert!(request.validate().is_err());

        let request = LoginRequest {
            user_id: "u-1".to_string(),
            password: "secret".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
