use axum::{
    Json,
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tower_sessions::Session;

pub const SESSION_USER_KEY: &str = "user";

/// Reject requests without a logged-in session.
///
/// Session state is the only gate here; this is a front-door convenience,
/// not a security boundary. The remote API is the system of record.
pub async fn auth_middleware(
    session: Session,
    request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let user: Option<String> = session.get(SESSION_USER_KEY).await.unwrap_or(None);

    if user.is_none() {
        return Ok((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Not logged in" })),
        )
            .into_response());
    }

    Ok(next.run(request).await)
}
