use axum::{Json, extract::State, http::StatusCode};
use frontend_core::AppError;
use secrecy::ExposeSecret;
use serde::Serialize;
use serde_json::json;
use tower_sessions::Session;
use validator::Validate;

use crate::AppState;
use crate::dtos::LoginRequest;
use crate::middleware::auth::SESSION_USER_KEY;

#[derive(Debug, Serialize)]
pub struct SessionInfo {
    pub username: String,
}

pub async fn login_handler(
    State(state): State<AppState>,
    session: Session,
    Json(body): Json<LoginRequest>,
) -> Result<Json<serde_json::Value>, AppError> {
    body.validate()?;

    if body.username != state.auth.username
        || body.password != *state.auth.password.expose_secret()
    {
        tracing::warn!(username = %body.username, "rejected login attempt");
        return Err(AppError::Unauthorized(anyhow::anyhow!(
            "Invalid username or password"
        )));
    }

    session
        .insert(SESSION_USER_KEY, body.username.clone())
        .await
        .map_err(|e| AppError::InternalError(anyhow::anyhow!("session store failed: {e}")))?;

    tracing::info!(username = %body.username, "operator logged in");
    Ok(Json(json!({ "message": "Logged in" })))
}

pub async fn logout_handler(session: Session) -> Result<StatusCode, AppError> {
    session
        .flush()
        .await
        .map_err(|e| AppError::InternalError(anyhow::anyhow!("session store failed: {e}")))?;
    Ok(StatusCode::NO_CONTENT)
}

/// Who-am-I endpoint for the logged-in operator. Runs behind the auth
/// middleware, so the session user is always present here.
pub async fn session_info(session: Session) -> Result<Json<SessionInfo>, AppError> {
    let username: Option<String> = session
        .get(SESSION_USER_KEY)
        .await
        .map_err(|e| AppError::InternalError(anyhow::anyhow!("session store failed: {e}")))?;

    match username {
        Some(username) => Ok(Json(SessionInfo { username })),
        None => Err(AppError::Unauthorized(anyhow::anyhow!("Not logged in"))),
    }
}
