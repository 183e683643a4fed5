//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use platform::password::HashedPassword;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::{auth_session::AuthSession, user::User};
use crate::domain::repository::{AuthSessionRepository, UserRepository};
use crate::domain::value_object::{Email, UserId};
use crate::error::{AuthError, AuthResult};

/// PostgreSQL-backed auth repository
#[derive(Clone)]
pub struct PgAuthRepository {
    pool: PgPool,
}

impl PgAuthRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgAuthRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                email,
                password_hash,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.email.as_str())
        .bind(user.password_hash.as_phc_string())
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                email,
                password_hash,
                created_at,
                updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                email,
                password_hash,
                created_at,
                updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }
}

// ============================================================================
// Auth Session Repository Implementation
// ============================================================================

impl AuthSessionRepository for PgAuthRepository {
    async fn create(&self, session: &AuthSession) -> AuthResult<()> {
        sqlx::query(
            r#"
            INSERT INTO auth_sessions (
                session_id,
                user_id,
                email,
                expires_at_ms,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(session.session_id)
        .bind(session.user_id.as_uuid())
        .bind(session.email.as_str())
        .bind(session.expires_at_ms)
        .bind(session.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, session_id: Uuid) -> AuthResult<Option<AuthSession>> {
        let row = sqlx::query_as::<_, SessionRow>(
            r#"
            SELECT
                session_id,
                user_id,
                email,
                expires_at_ms,
                created_at
            FROM auth_sessions
            WHERE session_id = $1
            "#,
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_session()).transpose()
    }

    async fn delete(&self, session_id: Uuid) -> AuthResult<()> {
        sqlx::query("DELETE FROM auth_sessions WHERE session_id = $1")
            .bind(session_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn cleanup_expired(&self) -> AuthResult<u64> {
        let now_ms = Utc::now().timestamp_millis();

        let deleted = sqlx::query("DELETE FROM auth_sessions WHERE expires_at_ms < $1")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(sessions_deleted = deleted, "Cleaned up expired auth sessions");

        Ok(deleted)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> AuthResult<User> {
        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            email: Email::new(self.email)
                .map_err(|e| AuthError::Internal(format!("Corrupt email in users row: {e}")))?,
            password_hash: HashedPassword::from_phc_string(self.password_hash)
                .map_err(|e| AuthError::Internal(format!("Corrupt password hash: {e}")))?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct SessionRow {
    session_id: Uuid,
    user_id: Uuid,
    email: String,
    expires_at_ms: i64,
    created_at: DateTime<Utc>,
}

impl SessionRow {
    fn into_session(self) -> AuthResult<AuthSession> {
        Ok(AuthSession {
            session_id: self.session_id,
            user_id: UserId::from_uuid(self.user_id),
            email: Email::new(self.email)
                .map_err(|e| AuthError::Internal(format!("Corrupt email in session row: {e}")))?,
            expires_at_ms: self.expires_at_ms,
            created_at: self.created_at,
        })
    }
}
