use thiserror::Error;

/// Error type for token issuance.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to sign token: {0}")]
    SigningFailed(String),
}

/// Why a token failed verification.
///
/// The distinction exists for internal logging only. Callers at the HTTP
/// boundary must collapse every variant into one generic unauthorized
/// response so the rejection reason cannot be used as a signature oracle.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TokenRejection {
    #[error("Token is structurally invalid: {0}")]
    Malformed(String),

    #[error("Token signature does not verify")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Token is missing required claim: {0}")]
    MissingClaim(String),
}
