//! Receipts (money in) and payment vouchers (money out). Both sides are
//! create/delete only; corrections happen by voiding and re-entering.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use books_api::models::{PaymentVoucher, Receipt};
use frontend_core::AppError;
use frontend_core::paging::{ListParams, Page, filter_and_paginate};
use validator::Validate;

use crate::AppState;
use crate::dtos::PaymentForm;
use crate::services::upstream;

fn check_amount(form: &PaymentForm) -> Result<(), AppError> {
    if form.amount.is_sign_negative() || form.amount.is_zero() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "payment amount must be positive"
        )));
    }
    Ok(())
}

pub async fn list_receipts(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<Receipt>>, AppError> {
    let receipts = state.api.receipts().await.map_err(upstream)?;
    Ok(Json(filter_and_paginate(receipts, &params)))
}

pub async fn get_receipt(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Receipt>, AppError> {
    let receipt = state.api.receipt(id).await.map_err(upstream)?;
    Ok(Json(receipt))
}

pub async fn create_receipt(
    State(state): State<AppState>,
    Json(form): Json<PaymentForm>,
) -> Result<(StatusCode, Json<Receipt>), AppError> {
    form.validate()?;
    check_amount(&form)?;
    let receipt = state
        .api
        .create_receipt(&form.into_input())
        .await
        .map_err(upstream)?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

pub async fn delete_receipt(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.api.delete_receipt(id).await.map_err(upstream)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_payment_vouchers(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<PaymentVoucher>>, AppError> {
    let vouchers = state.api.payment_vouchers().await.map_err(upstream)?;
    Ok(Json(filter_and_paginate(vouchers, &params)))
}

pub async fn get_payment_voucher(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PaymentVoucher>, AppError> {
    let voucher = state.api.payment_voucher(id).await.map_err(upstream)?;
    Ok(Json(voucher))
}

pub async fn create_payment_voucher(
    State(state): State<AppState>,
    Json(form): Json<PaymentForm>,
) -> Result<(StatusCode, Json<PaymentVoucher>), AppError> {
    form.validate()?;
    check_amount(&form)?;
    let voucher = state
        .api
        .create_payment_voucher(&form.into_input())
        .await
        .map_err(upstream)?;
    Ok((StatusCode::CREATED, Json(voucher)))
}

pub async fn delete_payment_voucher(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.api.delete_payment_voucher(id).await.map_err(upstream)?;
    Ok(StatusCode::NO_CONTENT)
}
