use std::sync::Arc;

use auth::TokenCodec;

use super::errors::AuthError;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

const BEARER_PREFIX_LEN: usize = "Bearer ".len();

/// Resolves a raw Authorization header into a live user identity.
///
/// The pipeline rejects at the first failing step: missing header, wrong
/// scheme, empty token, codec rejection, unparseable subject, unknown
/// identity, inactive identity. Each rejection is typed for logging; callers
/// present them all as the same unauthorized response so none of the steps
/// becomes an enumeration oracle.
///
/// Performs exactly one persistence read per successfully verified token.
pub struct IdentityResolver<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    token_codec: Arc<TokenCodec>,
}

impl<UR> IdentityResolver<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>, token_codec: Arc<TokenCodec>) -> Self {
        Self {
            repository,
            token_codec,
        }
    }

    /// Resolve the caller behind an Authorization header value.
    ///
    /// # Arguments
    /// * `header` - Raw header value, `None` when the header was absent
    ///
    /// # Errors
    /// * `MissingCredential` - No Authorization header
    /// * `MalformedCredential` - Scheme is not Bearer or token is empty
    /// * `InvalidCredential` - Token failed verification
    /// * `IdentityNotFound` / `IdentityInactive` - Subject no longer resolvable
    pub async fn resolve(&self, header: Option<&str>) -> Result<User, AuthError> {
        let header = header.ok_or(AuthError::MissingCredential)?;
        let token = extract_bearer_token(header)?;

        let claims = self.token_codec.verify(token)?;

        // A signed token whose subject is not a well-formed id is still an
        // invalid credential, not a lookup miss.
        let user_id = UserId::from_string(&claims.sub).map_err(|e| {
            AuthError::InvalidCredential(auth::TokenRejection::Malformed(e.to_string()))
        })?;

        let user = self
            .repository
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthError::IdentityNotFound(user_id))?;

        if !user.is_active {
            return Err(AuthError::IdentityInactive(user_id));
        }

        Ok(user)
    }
}

/// Extract the token from a `Bearer <token>` header value.
///
/// The scheme comparison is case-insensitive; an empty remainder is rejected.
fn extract_bearer_token(header: &str) -> Result<&str, AuthError> {
    let scheme = header
        .get(..BEARER_PREFIX_LEN)
        .ok_or(AuthError::MalformedCredential)?;

    if !scheme.eq_ignore_ascii_case("bearer ") {
        return Err(AuthError::MalformedCredential);
    }

    let token = &header[BEARER_PREFIX_LEN..];
    if token.is_empty() {
        return Err(AuthError::MalformedCredential);
    }

    Ok(token)
}
