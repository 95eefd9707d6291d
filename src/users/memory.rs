use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::db::StoreError;
use crate::users::repo::UserStore;
use crate::users::repo_types::{NewUser, User};

/// In-process stand-in for the `users` table.
#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl MemoryUserStore {
    pub async fn len(&self) -> usize {
        self.users.lock().await.len()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, user: &NewUser) -> Result<Uuid, StoreError> {
        let mut users = self.users.lock().await;
        if users.iter().any(|u| u.user_email == user.email) {
            return Err(StoreError::DuplicateEmail);
        }
        let user_id = Uuid::new_v4();
        users.push(User {
            user_id,
            user_name: user.name.clone(),
            user_email: user.email.clone(),
            user_password: user.password.clone(),
            pet_name: user.pet_name.clone(),
            created_at: OffsetDateTime::now_utc(),
        });
        Ok(user_id)
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().await;
        Ok(users
            .iter()
            .find(|u| u.user_email == email && u.user_password == password)
            .cloned())
    }
}

/// Store whose every call fails, for the error paths.
pub struct FailingUserStore;

#[async_trait]
impl UserStore for FailingUserStore {
    async fn create(&self, _user: &NewUser) -> Result<Uuid, StoreError> {
        Err(StoreError::Connection(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_credentials(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<Option<User>, StoreError> {
        Err(StoreError::Query(sqlx::Error::RowNotFound))
    }
}
