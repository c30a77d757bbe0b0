use std::sync::Arc;

use async_trait::async_trait;
use auth::PasswordHasher;
use auth::PasswordPolicy;
use auth::TokenCodec;
use auth::TokenKind;
use chrono::Duration;
use chrono::Utc;

use super::errors::AuthError;
use super::ports::AuthServicePort;
use crate::domain::user::models::RegisterCommand;
use crate::domain::user::models::UpdateProfileCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Domain service for registration, login, and profile updates.
///
/// All collaborators are injected at construction; nothing here reaches for
/// ambient state. Generic over the repository port for testability.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    token_codec: Arc<TokenCodec>,
    password_hasher: PasswordHasher,
    password_policy: PasswordPolicy,
    token_ttl: Duration,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new authentication service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `token_codec` - Shared credential codec
    /// * `password_policy` - Strength policy applied to new passwords
    /// * `token_ttl` - Lifetime of issued access tokens
    pub fn new(
        repository: Arc<UR>,
        token_codec: Arc<TokenCodec>,
        password_policy: PasswordPolicy,
        token_ttl: Duration,
    ) -> Self {
        Self {
            repository,
            token_codec,
            password_hasher: PasswordHasher::new(),
            password_policy,
            token_ttl,
        }
    }

    fn issue_access_token(&self, user: &User) -> Result<String, AuthError> {
        let token =
            self.token_codec
                .issue(&user.id.to_string(), TokenKind::Access, self.token_ttl)?;
        Ok(token)
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<(User, String), AuthError> {
        // Advisory pre-check for a clear error message. The database unique
        // constraint remains the authority: a concurrent registration that
        // slips past this lookup still fails on insert and is translated to
        // the same rejection below.
        if self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(AuthError::DuplicateEmail(command.email.as_str().to_string()));
        }

        self.password_policy.validate(&command.password)?;

        let password_hash = self.password_hasher.hash(&command.password)?;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            password_hash,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        let user = self.repository.create(user).await?;
        tracing::info!(user_id = %user.id, "user registered");

        let token = self.issue_access_token(&user)?;
        Ok((user, token))
    }

    async fn login(&self, email: &str, password: &str) -> Result<(User, String), AuthError> {
        // Unknown email and wrong password collapse into the same rejection
        // so the login endpoint cannot be used to probe for accounts.
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidLoginCredentials)?;

        if !self.password_hasher.verify(password, &user.password_hash) {
            tracing::warn!(user_id = %user.id, "login failed: password mismatch");
            return Err(AuthError::InvalidLoginCredentials);
        }

        // Only reachable once the password has matched.
        if !user.is_active {
            tracing::warn!(user_id = %user.id, "login failed: inactive user");
            return Err(AuthError::InactiveUser);
        }

        let token = self.issue_access_token(&user)?;
        tracing::info!(user_id = %user.id, "access token issued");
        Ok((user, token))
    }

    async fn update_profile(
        &self,
        id: &UserId,
        command: UpdateProfileCommand,
    ) -> Result<User, AuthError> {
        let mut user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(AuthError::IdentityNotFound(*id))?;

        if let Some(new_username) = command.username {
            user.username = new_username;
        }

        if let Some(new_email) = command.email {
            user.email = new_email;
        }

        if let Some(new_password) = command.password {
            self.password_policy.validate(&new_password)?;
            user.password_hash = self.password_hasher.hash(&new_password)?;
        }

        user.updated_at = Utc::now();

        let user = self.repository.update(user).await?;
        tracing::info!(user_id = %user.id, "profile updated");
        Ok(user)
    }
}
