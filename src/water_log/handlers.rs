use axum::{
    extract::State,
    http::{header, Method},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, error, instrument};

use crate::{db::StoreError, state::AppState, water_log::dto::WaterLogResponse};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/water-log", get(list_entries))
        .layer(cors())
}

pub fn legacy_routes() -> Router<AppState> {
    Router::new()
        .route("/get_water_log.php", get(list_entries))
        .layer(cors())
}

// The log is read by the web dashboard from other origins.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
}

#[instrument(skip_all)]
pub async fn list_entries(State(state): State<AppState>) -> impl IntoResponse {
    let body = match state.water_log.list_recent_first().await {
        Ok(entries) => {
            debug!(count = entries.len(), "water log fetched");
            WaterLogResponse::Entries(entries)
        }
        Err(StoreError::Connection(e)) => {
            error!(error = %e, "water log connection failed");
            WaterLogResponse::error(format!("Connection failed: {e}"))
        }
        Err(e) => {
            error!(error = %e, "water log query failed");
            WaterLogResponse::error(format!("Query failed: {e}"))
        }
    };

    (
        [(header::CONTENT_TYPE, "application/json; charset=UTF-8")],
        Json(body),
    )
}
