use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::db::StoreError;
use crate::water_log::repo::{WaterLogEntry, WaterLogStore};

/// In-process stand-in for the `water_log` table.
#[derive(Default)]
pub struct MemoryWaterLogStore {
    rows: Mutex<Vec<WaterLogEntry>>,
}

impl MemoryWaterLogStore {
    pub async fn push(&self, row: WaterLogEntry) {
        self.rows.lock().await.push(row);
    }
}

#[async_trait]
impl WaterLogStore for MemoryWaterLogStore {
    async fn list_recent_first(&self) -> Result<Vec<WaterLogEntry>, StoreError> {
        let mut rows = self.rows.lock().await.clone();
        // RFC 3339 stamps in one offset order lexically.
        rows.sort_by(|a, b| timestamp(b).cmp(&timestamp(a)));
        Ok(rows)
    }
}

fn timestamp(row: &WaterLogEntry) -> Option<&str> {
    row.get("timestamp").and_then(|t| t.as_str())
}

/// Fails every call with the given kind of error.
pub enum FailingWaterLogStore {
    Connection,
    Query,
}

#[async_trait]
impl WaterLogStore for FailingWaterLogStore {
    async fn list_recent_first(&self) -> Result<Vec<WaterLogEntry>, StoreError> {
        match self {
            Self::Connection => Err(StoreError::Connection(sqlx::Error::PoolTimedOut)),
            Self::Query => Err(StoreError::Query(sqlx::Error::RowNotFound)),
        }
    }
}
