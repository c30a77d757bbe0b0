use async_trait::async_trait;

use super::errors::AuthError;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::UpdateProfileCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;

/// Port for authentication service operations.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new account and issue its first access token.
    ///
    /// # Arguments
    /// * `command` - Validated command containing username, email, and password
    ///
    /// # Returns
    /// Created user entity and a freshly issued access token
    ///
    /// # Errors
    /// * `DuplicateEmail` / `DuplicateUsername` - Identity already registered
    /// * `WeakPassword` - Password fails the strength policy
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterCommand) -> Result<(User, String), AuthError>;

    /// Verify credentials and issue an access token.
    ///
    /// # Errors
    /// * `InvalidLoginCredentials` - Unknown email or wrong password
    ///   (deliberately indistinguishable)
    /// * `InactiveUser` - Credentials matched but the account is disabled
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, email: &str, password: &str) -> Result<(User, String), AuthError>;

    /// Update the caller's own profile with optional fields.
    ///
    /// A new password is policy-checked and re-hashed.
    ///
    /// # Errors
    /// * `IdentityNotFound` - User does not exist
    /// * `DuplicateEmail` / `DuplicateUsername` - New value already taken
    /// * `WeakPassword` - New password fails the strength policy
    /// * `DatabaseError` - Database operation failed
    async fn update_profile(
        &self,
        id: &UserId,
        command: UpdateProfileCommand,
    ) -> Result<User, AuthError>;
}
