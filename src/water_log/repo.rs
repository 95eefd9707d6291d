use async_trait::async_trait;
use sqlx::PgPool;

use crate::db::{acquire, StoreError};

/// One `water_log` row as a JSON object, every column passed through as stored.
pub type WaterLogEntry = serde_json::Value;

#[async_trait]
pub trait WaterLogStore: Send + Sync {
    /// Every row, most recent `timestamp` first.
    async fn list_recent_first(&self) -> Result<Vec<WaterLogEntry>, StoreError>;
}

#[derive(Clone)]
pub struct PgWaterLogStore {
    db: PgPool,
}

impl PgWaterLogStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WaterLogStore for PgWaterLogStore {
    async fn list_recent_first(&self) -> Result<Vec<WaterLogEntry>, StoreError> {
        let mut conn = acquire(&self.db).await?;
        let rows = sqlx::query_scalar::<_, WaterLogEntry>(
            r#"
            SELECT row_to_json(w)
            FROM water_log w
            ORDER BY w."timestamp" DESC
            "#,
        )
        .fetch_all(&mut *conn)
        .await?;
        Ok(rows)
    }
}
