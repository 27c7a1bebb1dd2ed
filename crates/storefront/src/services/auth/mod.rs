//! Authentication service.
//!
//! Password login plus session-token issuance and resolution. Tokens are
//! opaque random strings persisted as `{token, user_id}` rows: they never
//! expire, are never revoked, and a user may hold any number of them. The
//! cookie that carries a token to and from the browser is handled by the
//! route layer, not here.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::RngCore;
use sqlx::SqlitePool;

use crate::db::sessions::SessionRepository;
use crate::db::users::UserRepository;
use crate::models::User;

/// Random bytes per session token before encoding.
const TOKEN_BYTES: usize = 32;

/// Authentication service.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
    sessions: SessionRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            users: UserRepository::new(pool),
            sessions: SessionRepository::new(pool),
        }
    }

    /// Authenticate with username and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` for an unknown username or
    /// a wrong password; the two cases are not distinguishable to the
    /// caller.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AuthError> {
        let (user, password_hash) = self
            .users
            .get_with_password_hash(username)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &password_hash)?;

        Ok(user)
    }

    /// Issue a new session token for a user and persist it.
    ///
    /// The token is 32 cryptographically random bytes, base64 URL-safe
    /// encoded. Uniqueness is enforced by the sessions schema.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the insert fails (including the
    /// astronomically unlikely token collision).
    pub async fn create_session(&self, user: &User) -> Result<String, AuthError> {
        let token = generate_session_token();
        self.sessions.insert(&token, user.id).await?;

        Ok(token)
    }

    /// Resolve a session token to its user.
    ///
    /// Empty and unknown tokens resolve to `None` (anonymous); that is an
    /// ordinary result, not an error.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` if the lookup fails.
    pub async fn resolve_session(&self, token: &str) -> Result<Option<User>, AuthError> {
        if token.is_empty() {
            return Ok(None);
        }

        let user = self.sessions.find_user(token).await?;

        Ok(user)
    }
}

/// Generate an unguessable session token.
fn generate_session_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Hash a password using Argon2id.
pub(crate) fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed_hash = PasswordHash::new(hash).map_err(|_| AuthError::InvalidCredentials)?;
    let argon2 = Argon2::default();

    argon2
        .verify_password(password.as_bytes(), &parsed_hash)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_util::test_pool;

    async fn create_user(pool: &SqlitePool, username: &str, password: &str) -> User {
        let hash = hash_password(password).expect("hash");
        UserRepository::new(pool)
            .create(username, &hash)
            .await
            .expect("create user")
    }

    #[tokio::test]
    async fn test_authenticate_requires_exact_match() {
        let pool = test_pool().await;
        let auth = AuthService::new(&pool);
        let user = create_user(&pool, "zagreus", "cerberus").await;

        let ok = auth.authenticate("zagreus", "cerberus").await.expect("login");
        assert_eq!(ok, user);

        for (username, password) in [
            ("zagreus", "wrong"),
            ("nobody", "cerberus"),
            ("zagreus", ""),
        ] {
            let err = auth
                .authenticate(username, password)
                .await
                .expect_err("must fail");
            assert!(matches!(err, AuthError::InvalidCredentials));
        }
    }

    #[tokio::test]
    async fn test_session_roundtrip() {
        let pool = test_pool().await;
        let auth = AuthService::new(&pool);
        let user = create_user(&pool, "melinoe", "b4d3ec1").await;

        let token = auth.create_session(&user).await.expect("create session");
        // 32 bytes before encoding, comfortably above the 16-byte floor.
        assert!(token.len() >= 43);

        let resolved = auth.resolve_session(&token).await.expect("resolve");
        assert_eq!(resolved, Some(user));
    }

    #[tokio::test]
    async fn test_garbage_and_empty_tokens_are_anonymous() {
        let pool = test_pool().await;
        let auth = AuthService::new(&pool);

        assert_eq!(auth.resolve_session("").await.expect("resolve"), None);
        assert_eq!(auth.resolve_session("garbage").await.expect("resolve"), None);
    }

    #[tokio::test]
    async fn test_sessions_accumulate() {
        let pool = test_pool().await;
        let auth = AuthService::new(&pool);
        let user = create_user(&pool, "zagreus", "cerberus").await;

        let first = auth.create_session(&user).await.expect("create session");
        let second = auth.create_session(&user).await.expect("create session");
        assert_ne!(first, second);

        assert_eq!(
            auth.resolve_session(&first).await.expect("resolve"),
            Some(user.clone())
        );
        assert_eq!(
            auth.resolve_session(&second).await.expect("resolve"),
            Some(user)
        );
    }
}
