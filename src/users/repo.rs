use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{acquire, StoreError};
use crate::users::repo_types::{NewUser, User};

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a user. Fails with `StoreError::DuplicateEmail` when the email is taken.
    async fn create(&self, user: &NewUser) -> Result<Uuid, StoreError>;

    /// Find the user whose email and password both match exactly.
    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, StoreError>;
}

#[derive(Clone)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create(&self, user: &NewUser) -> Result<Uuid, StoreError> {
        let mut conn = acquire(&self.db).await?;
        // The UNIQUE constraint on user_email decides; no row back means it was taken.
        let user_id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO users (user_name, user_email, user_password, pet_name)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_email) DO NOTHING
            RETURNING user_id
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(&user.pet_name)
        .fetch_optional(&mut *conn)
        .await?;

        user_id.ok_or(StoreError::DuplicateEmail)
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, StoreError> {
        let mut conn = acquire(&self.db).await?;
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, user_name, user_email, user_password, pet_name, created_at
            FROM users
            WHERE user_email = $1 AND user_password = $2
            LIMIT 1
            "#,
        )
        .bind(email)
        .bind(password)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(user)
    }
}
