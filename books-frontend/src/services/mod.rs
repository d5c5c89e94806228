pub mod pdf;

use books_api::ApiError;
use frontend_core::AppError;

/// Map an upstream API failure onto the HTTP error surface.
///
/// The canned remediation text travels in the response body; classification
/// detail stays in the logs.
pub fn upstream(err: ApiError) -> AppError {
    let message = err.user_message();
    match err {
        ApiError::NotFound { .. } => AppError::NotFound(anyhow::anyhow!(message)),
        ApiError::Api(_) => AppError::BadRequest(anyhow::anyhow!(message)),
        ApiError::Network { .. } | ApiError::HostingChallenge | ApiError::Malformed { .. } => {
            AppError::BadGateway(message)
        }
    }
}
