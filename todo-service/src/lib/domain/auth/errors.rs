use auth::PasswordError;
use auth::TokenError;
use auth::TokenRejection;
use auth::WeakPasswordError;
use thiserror::Error;

use crate::user::errors::UserError;
use crate::user::models::UserId;

/// Authentication and authorization failures.
///
/// Variants are precise so logging can record what actually happened; the
/// HTTP boundary flattens every credential-class variant into one generic
/// unauthorized response. Keeping the taxonomy here and the flattening there
/// means nothing is silently swallowed on the way out.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    // Credential-class failures: all collapse to a generic 401 externally
    #[error("Authorization header missing")]
    MissingCredential,

    #[error("Authorization header malformed (expected: Bearer <token>)")]
    MalformedCredential,

    #[error("Credential rejected: {0}")]
    InvalidCredential(#[from] TokenRejection),

    #[error("Token subject does not resolve to a user: {0}")]
    IdentityNotFound(UserId),

    #[error("Token subject resolves to an inactive user: {0}")]
    IdentityInactive(UserId),

    // Login failures
    #[error("Incorrect email or password")]
    InvalidLoginCredentials,

    #[error("Inactive user")]
    InactiveUser,

    // Registration failures
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    #[error("Username already taken: {0}")]
    DuplicateUsername(String),

    #[error("Password rejected: {0}")]
    WeakPassword(#[from] WeakPasswordError),

    // Infrastructure failures
    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<UserError> for AuthError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::EmailAlreadyExists(email) => AuthError::DuplicateEmail(email),
            UserError::UsernameAlreadyExists(username) => AuthError::DuplicateUsername(username),
            UserError::NotFound(id) => AuthError::Unknown(format!("user vanished: {}", id)),
            UserError::DatabaseError(msg) => AuthError::DatabaseError(msg),
            other => AuthError::Unknown(other.to_string()),
        }
    }
}
