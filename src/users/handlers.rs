use axum::{extract::State, routing::post, Json, Router};
use tracing::{error, info, instrument, warn};

use crate::{
    db::StoreError,
    state::AppState,
    users::extractors::FormFields,
    users::dto::{
        ApiResponse, LoginForm, RegisterForm, EMAIL_TAKEN, INVALID_CREDENTIALS, MISSING_FIELDS,
        REGISTERED, REGISTRATION_FAILED,
    },
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Paths the mobile client was built against.
pub fn legacy_routes() -> Router<AppState> {
    Router::new()
        .route("/add_user.php", post(register))
        .route("/login_user.php", post(login))
}

#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    fields: FormFields,
) -> Json<ApiResponse> {
    let Some(new_user) = RegisterForm::from(fields).into_new_user() else {
        warn!("register missing fields");
        return Json(ApiResponse::failure(MISSING_FIELDS));
    };

    match state.users.create(&new_user).await {
        Ok(user_id) => {
            info!(%user_id, email = %new_user.email, "user registered");
            Json(ApiResponse::ok(REGISTERED))
        }
        Err(StoreError::DuplicateEmail) => {
            warn!(email = %new_user.email, "email already registered");
            Json(ApiResponse::failure(EMAIL_TAKEN))
        }
        Err(e) => {
            error!(error = %e, "create user failed");
            Json(ApiResponse::failure(REGISTRATION_FAILED))
        }
    }
}

#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    fields: FormFields,
) -> Json<ApiResponse> {
    let Some((email, password)) = LoginForm::from(fields).into_credentials() else {
        warn!("login missing fields");
        return Json(ApiResponse::failure(MISSING_FIELDS));
    };

    match state.users.find_by_credentials(&email, &password).await {
        Ok(Some(user)) => {
            info!(user_id = %user.user_id, email = %user.user_email, "user logged in");
            Json(ApiResponse::user(user))
        }
        Ok(None) => {
            warn!(email = %email, "login invalid credentials");
            Json(ApiResponse::failure(INVALID_CREDENTIALS))
        }
        Err(e) => {
            error!(error = %e, "find_by_credentials failed");
            Json(ApiResponse::failure(INVALID_CREDENTIALS))
        }
    }
}
