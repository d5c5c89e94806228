use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use books_api::models::Product;
use frontend_core::AppError;
use frontend_core::paging::{ListParams, Page, filter_and_paginate};
use validator::Validate;

use crate::AppState;
use crate::dtos::ProductForm;
use crate::services::upstream;

fn check_prices(form: &ProductForm) -> Result<(), AppError> {
    let negative = form.price.is_sign_negative()
        || form.cost.is_some_and(|c| c.is_sign_negative())
        || form.tax_rate.is_some_and(|t| t.is_sign_negative());
    if negative {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "product prices must not be negative"
        )));
    }
    Ok(())
}

pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<Product>>, AppError> {
    let products = state.api.products().await.map_err(upstream)?;
    Ok(Json(filter_and_paginate(products, &params)))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, AppError> {
    let product = state.api.product(id).await.map_err(upstream)?;
    Ok(Json(product))
}

pub async fn create_product(
    State(state): State<AppState>,
    Json(form): Json<ProductForm>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    form.validate()?;
    check_prices(&form)?;
    let product = state
        .api
        .create_product(&form.into_input())
        .await
        .map_err(upstream)?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(form): Json<ProductForm>,
) -> Result<Json<Product>, AppError> {
    form.validate()?;
    check_prices(&form)?;
    let product = state
        .api
        .update_product(id, &form.into_input())
        .await
        .map_err(upstream)?;
    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.api.delete_product(id).await.map_err(upstream)?;
    Ok(StatusCode::NO_CONTENT)
}
