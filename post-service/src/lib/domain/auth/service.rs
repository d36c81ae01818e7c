use std::sync::Arc;

use async_trait::async_trait;
use auth::AccessTokenCodec;
use auth::OpaqueTokenGenerator;
use auth::PasswordHasher;
use auth::TokenError;
use chrono::Duration;
use chrono::Utc;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::LoginOutcome;
use crate::domain::auth::models::RefreshToken;
use crate::domain::auth::ports::AuthServicePort;
use crate::domain::auth::ports::RefreshTokenRepository;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;

/// Access tokens are short-lived; a fresh one is minted at login and on
/// every refresh.
const ACCESS_TOKEN_TTL_SECONDS: i64 = 60 * 60;

/// Refresh tokens live for a fixed 60-day window from creation.
const REFRESH_TOKEN_TTL_DAYS: i64 = 60;

/// Authentication orchestrator.
///
/// Composes password verification, the access-token codec, and the opaque
/// generator into the login/refresh/revoke protocols. Holds no mutable state
/// of its own; concurrent requests only meet at the refresh-token store.
pub struct AuthService<UR, RR>
where
    UR: UserRepository,
    RR: RefreshTokenRepository,
{
    users: Arc<UR>,
    refresh_tokens: Arc<RR>,
    password_hasher: PasswordHasher,
    codec: AccessTokenCodec,
    token_generator: OpaqueTokenGenerator,
}

impl<UR, RR> AuthService<UR, RR>
where
    UR: UserRepository,
    RR: RefreshTokenRepository,
{
    /// Create the orchestrator.
    ///
    /// # Arguments
    /// * `users` - Identity lookups for login
    /// * `refresh_tokens` - Refresh-token record store
    /// * `token_secret` - Process-wide signing secret, injected explicitly
    pub fn new(users: Arc<UR>, refresh_tokens: Arc<RR>, token_secret: &[u8]) -> Self {
        Self {
            users,
            refresh_tokens,
            password_hasher: PasswordHasher::new(),
            codec: AccessTokenCodec::new(token_secret),
            token_generator: OpaqueTokenGenerator::new(),
        }
    }

    fn issue_access_token(&self, user_id: UserId) -> Result<String, AuthError> {
        self.codec
            .issue(user_id.0, Duration::seconds(ACCESS_TOKEN_TTL_SECONDS))
            .map_err(|e| AuthError::Internal(e.to_string()))
    }
}

#[async_trait]
impl<UR, RR> AuthServicePort for AuthService<UR, RR>
where
    UR: UserRepository,
    RR: RefreshTokenRepository,
{
    async fn login(
        &self,
        email: &EmailAddress,
        password: &str,
    ) -> Result<LoginOutcome, AuthError> {
        let user = self
            .users
            .find_by_email(email)
            .await
            .map_err(|e| AuthError::DatabaseError(e.to_string()))?
            .ok_or_else(|| {
                // Unknown email and wrong password look identical to the caller
                tracing::debug!("Login attempt for unknown email");
                AuthError::InvalidCredentials
            })?;

        let password_matches = self
            .password_hasher
            .verify(password, &user.password_hash)
            .unwrap_or_else(|e| {
                // A malformed stored hash is logged but reported as a plain
                // authentication failure, same as a wrong password
                tracing::warn!(user_id = %user.id, "Stored password hash rejected: {}", e);
                false
            });

        if !password_matches {
            return Err(AuthError::InvalidCredentials);
        }

        let access_token = self.issue_access_token(user.id)?;

        let token_value = self
            .token_generator
            .generate()
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        let now = Utc::now();
        let record = RefreshToken {
            token: token_value.clone(),
            user_id: user.id,
            created_at: now,
            updated_at: now,
            expires_at: now + Duration::days(REFRESH_TOKEN_TTL_DAYS),
            revoked_at: None,
        };
        self.refresh_tokens.create(record).await?;

        Ok(LoginOutcome {
            user,
            access_token,
            refresh_token: token_value,
        })
    }

    async fn refresh(&self, token_value: &str) -> Result<String, AuthError> {
        let record = self
            .refresh_tokens
            .find_by_value(token_value)
            .await?
            .ok_or_else(|| {
                tracing::debug!("Refresh attempt with unknown token");
                AuthError::InvalidCredentials
            })?;

        if record.is_expired(Utc::now()) {
            tracing::debug!(user_id = %record.user_id, "Refresh attempt with expired token");
            return Err(AuthError::RefreshTokenExpired);
        }

        if record.is_revoked() {
            tracing::debug!(user_id = %record.user_id, "Refresh attempt with revoked token");
            return Err(AuthError::RefreshTokenRevoked);
        }

        self.issue_access_token(record.user_id)
    }

    async fn revoke(&self, token_value: &str) -> Result<(), AuthError> {
        self.refresh_tokens.revoke(token_value, Utc::now()).await
    }

    async fn verify_access_token(&self, token: &str) -> Result<UserId, AuthError> {
        match self.codec.verify(token) {
            Ok(subject) => Ok(UserId(subject)),
            Err(TokenError::Expired) => Err(AuthError::AccessTokenExpired),
            Err(e) => Err(AuthError::AccessTokenInvalid(e.to_string())),
        }
    }

    async fn list_refresh_tokens(&self) -> Result<Vec<RefreshToken>, AuthError> {
        self.refresh_tokens.list_all().await
    }
}
