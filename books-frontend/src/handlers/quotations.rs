use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use books_api::models::Quotation;
use frontend_core::AppError;
use frontend_core::paging::{ListParams, Page, filter_and_paginate};
use validator::Validate;

use crate::AppState;
use crate::dtos::QuotationForm;
use crate::handlers::invoices::check_line_items;
use crate::services::upstream;

pub async fn list_quotations(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<Quotation>>, AppError> {
    let quotations = state.api.quotations().await.map_err(upstream)?;
    Ok(Json(filter_and_paginate(quotations, &params)))
}

pub async fn get_quotation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Quotation>, AppError> {
    let quotation = state.api.quotation(id).await.map_err(upstream)?;
    Ok(Json(quotation))
}

pub async fn create_quotation(
    State(state): State<AppState>,
    Json(form): Json<QuotationForm>,
) -> Result<(StatusCode, Json<Quotation>), AppError> {
    form.validate()?;
    check_line_items(&form.items)?;
    let quotation = state
        .api
        .create_quotation(&form.into_input())
        .await
        .map_err(upstream)?;
    Ok((StatusCode::CREATED, Json(quotation)))
}

pub async fn update_quotation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(form): Json<QuotationForm>,
) -> Result<Json<Quotation>, AppError> {
    form.validate()?;
    check_line_items(&form.items)?;
    let quotation = state
        .api
        .update_quotation(id, &form.into_input())
        .await
        .map_err(upstream)?;
    Ok(Json(quotation))
}

pub async fn delete_quotation(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.api.delete_quotation(id).await.map_err(upstream)?;
    Ok(StatusCode::NO_CONTENT)
}
