use axum::{Json, extract::State, http::StatusCode};
use serde::Serialize;

use crate::AppState;

pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

#[derive(Debug, Serialize)]
pub struct ConnectivityReport {
    pub reachable: bool,
    pub message: String,
}

/// Probe the upstream API and report the result without failing the request.
/// The remediation text is the same bilingual message shown for a failed
/// data fetch, so the diagnostics page and the error banners agree.
pub async fn retest_connection(State(state): State<AppState>) -> Json<ConnectivityReport> {
    let report = match state.api.ping().await {
        Ok(()) => ConnectivityReport {
            reachable: true,
            message: "Connection OK".to_string(),
        },
        Err(err) => {
            tracing::warn!(kind = err.kind(), "upstream connectivity probe failed");
            ConnectivityReport {
                reachable: false,
                message: err.user_message(),
            }
        }
    };
    Json(report)
}
