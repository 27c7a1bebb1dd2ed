//! Session repository for database operations.
//!
//! Sessions are `{token, user_id}` rows: one row per login, no expiry, no
//! revocation. Token uniqueness is enforced by the schema at insert time.

use sqlx::SqlitePool;

use cortado_core::UserId;

use super::RepositoryError;
use crate::models::User;

/// Repository for session database operations.
pub struct SessionRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> SessionRepository<'a> {
    /// Create a new session repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist a new session token for a user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the token already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn insert(&self, token: &str, user_id: UserId) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO sessions (token, user_id)
            VALUES (?, ?)
            ",
        )
        .bind(token)
        .bind(user_id)
        .execute(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("session token already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(())
    }

    /// Resolve a session token to its user.
    ///
    /// Returns `None` for unknown tokens; an unknown token is anonymous,
    /// not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_user(&self, token: &str) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r"
            SELECT u.id, u.username
            FROM sessions s
            INNER JOIN users u ON s.user_id = u.id
            WHERE s.token = ?
            LIMIT 1
            ",
        )
        .bind(token)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_util::test_pool;
    use crate::db::users::UserRepository;

    #[tokio::test]
    async fn test_tokens_accumulate_per_user() {
        let pool = test_pool().await;
        let users = UserRepository::new(&pool);
        let sessions = SessionRepository::new(&pool);

        let user = users.create("zagreus", "hash").await.expect("create user");

        sessions.insert("token-a", user.id).await.expect("insert");
        sessions.insert("token-b", user.id).await.expect("insert");

        assert_eq!(
            sessions.find_user("token-a").await.expect("query"),
            Some(user.clone())
        );
        assert_eq!(
            sessions.find_user("token-b").await.expect("query"),
            Some(user)
        );
    }

    #[tokio::test]
    async fn test_duplicate_token_is_conflict() {
        let pool = test_pool().await;
        let users = UserRepository::new(&pool);
        let sessions = SessionRepository::new(&pool);

        let user = users.create("melinoe", "hash").await.expect("create user");
        sessions.insert("token", user.id).await.expect("insert");

        let err = sessions.insert("token", user.id).await.expect_err("duplicate");
        assert!(matches!(err, RepositoryError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_unknown_token_is_anonymous() {
        let pool = test_pool().await;
        let sessions = SessionRepository::new(&pool);

        assert_eq!(sessions.find_user("garbage").await.expect("query"), None);
    }
}
