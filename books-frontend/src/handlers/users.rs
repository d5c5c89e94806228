use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use books_api::models::User;
use frontend_core::AppError;
use frontend_core::paging::{ListParams, Page, filter_and_paginate};
use validator::Validate;

use crate::AppState;
use crate::dtos::UserForm;
use crate::services::upstream;

pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<User>>, AppError> {
    let users = state.api.users().await.map_err(upstream)?;
    Ok(Json(filter_and_paginate(users, &params)))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<User>, AppError> {
    let user = state.api.user(id).await.map_err(upstream)?;
    Ok(Json(user))
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(form): Json<UserForm>,
) -> Result<(StatusCode, Json<User>), AppError> {
    form.validate()?;
    // A password is mandatory on create; updates may omit it to keep the
    // current one.
    if form.password.is_none() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "a password is required for a new user"
        )));
    }
    let user = state
        .api
        .create_user(&form.into_input())
        .await
        .map_err(upstream)?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(form): Json<UserForm>,
) -> Result<Json<User>, AppError> {
    form.validate()?;
    let user = state
        .api
        .update_user(id, &form.into_input())
        .await
        .map_err(upstream)?;
    Ok(Json(user))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.api.delete_user(id).await.map_err(upstream)?;
    Ok(StatusCode::NO_CONTENT)
}
