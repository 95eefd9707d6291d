use serde::Serialize;

use crate::water_log::repo::WaterLogEntry;

/// Bare array on success, `{"error": ...}` on failure. Existing clients branch on the shape.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum WaterLogResponse {
    Entries(Vec<WaterLogEntry>),
    Error { error: String },
}

impl WaterLogResponse {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }
}
