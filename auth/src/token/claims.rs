use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Kind of credential a token represents.
///
/// Only access tokens exist today; the claim is encoded so that future token
/// kinds (refresh, service-to-service) cannot be replayed as access tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Access => write!(f, "access"),
        }
    }
}

/// Claims carried by a signed token.
///
/// All fields are required: a token missing any of them fails verification.
/// `sub` is the subject's id as a string, `exp` and `iat` are Unix timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier, stringified)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Token kind
    pub kind: TokenKind,
}

impl Claims {
    /// Check whether the token is expired at the given instant.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}
