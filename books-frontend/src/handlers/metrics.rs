use axum::http::{HeaderValue, StatusCode, header};
use axum::response::IntoResponse;

pub async fn metrics_handler() -> impl IntoResponse {
    let body = frontend_core::observability::metrics::gather();
    (
        StatusCode::OK,
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; version=0.0.4"),
        )],
        body,
    )
}
