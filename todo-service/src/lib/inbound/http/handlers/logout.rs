use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;

/// Logout acknowledgement.
///
/// Credentials are stateless and carry their own expiry; there is no
/// server-side session to tear down. The client discards its token.
pub async fn logout() -> Result<ApiSuccess<LogoutResponseData>, ApiError> {
    Ok(ApiSuccess::new(
        StatusCode::OK,
        LogoutResponseData {
            message: "Successfully logged out".to_string(),
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoutResponseData {
    pub message: String,
}
