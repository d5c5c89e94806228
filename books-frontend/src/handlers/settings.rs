use axum::{Json, extract::State};
use books_api::models::{CompanySettings, DocumentSettings};
use frontend_core::AppError;

use crate::AppState;
use crate::services::upstream;

pub async fn get_company_settings(
    State(state): State<AppState>,
) -> Result<Json<CompanySettings>, AppError> {
    let settings = state.api.company_settings().await.map_err(upstream)?;
    Ok(Json(settings))
}

pub async fn update_company_settings(
    State(state): State<AppState>,
    Json(settings): Json<CompanySettings>,
) -> Result<Json<CompanySettings>, AppError> {
    if settings.name.trim().is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "company name must not be empty"
        )));
    }
    let updated = state
        .api
        .update_company_settings(&settings)
        .await
        .map_err(upstream)?;
    Ok(Json(updated))
}

pub async fn get_document_settings(
    State(state): State<AppState>,
) -> Result<Json<DocumentSettings>, AppError> {
    let settings = state.api.document_settings().await.map_err(upstream)?;
    Ok(Json(settings))
}

pub async fn update_document_settings(
    State(state): State<AppState>,
    Json(settings): Json<DocumentSettings>,
) -> Result<Json<DocumentSettings>, AppError> {
    let counters = [
        &settings.sales_invoice,
        &settings.purchase_invoice,
        &settings.quotation,
        &settings.receipt,
        &settings.payment_voucher,
    ];
    if counters.iter().any(|c| c.next_number < 1) {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "document counters must start at 1 or above"
        )));
    }
    let updated = state
        .api
        .update_document_settings(&settings)
        .await
        .map_err(upstream)?;
    Ok(Json(updated))
}
