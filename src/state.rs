use std::sync::Arc;

use sqlx::PgPool;

use crate::users::repo::{PgUserStore, UserStore};
use crate::water_log::repo::{PgWaterLogStore, WaterLogStore};

#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub water_log: Arc<dyn WaterLogStore>,
}

impl AppState {
    pub fn from_pool(db: PgPool) -> Self {
        Self::from_parts(
            Arc::new(PgUserStore::new(db.clone())),
            Arc::new(PgWaterLogStore::new(db)),
        )
    }

    pub fn from_parts(users: Arc<dyn UserStore>, water_log: Arc<dyn WaterLogStore>) -> Self {
        Self { users, water_log }
    }

    #[cfg(test)]
    pub fn fake() -> Self {
        use crate::users::memory::MemoryUserStore;
        use crate::water_log::memory::MemoryWaterLogStore;

        Self::from_parts(
            Arc::new(MemoryUserStore::default()),
            Arc::new(MemoryWaterLogStore::default()),
        )
    }
}
