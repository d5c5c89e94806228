//! Customer and supplier CRUD. Both share one implementation keyed by
//! `ContactKind`; search and pagination happen here, over the full list
//! returned by the upstream API.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use books_api::models::{Contact, ContactKind};
use frontend_core::AppError;
use frontend_core::paging::{ListParams, Page, filter_and_paginate};
use validator::Validate;

use crate::AppState;
use crate::dtos::ContactForm;
use crate::services::upstream;

async fn list_contacts(
    state: &AppState,
    kind: ContactKind,
    params: ListParams,
) -> Result<Json<Page<Contact>>, AppError> {
    let contacts = state.api.contacts(kind).await.map_err(upstream)?;
    Ok(Json(filter_and_paginate(contacts, &params)))
}

async fn get_contact(
    state: &AppState,
    kind: ContactKind,
    id: i64,
) -> Result<Json<Contact>, AppError> {
    let contact = state.api.contact(kind, id).await.map_err(upstream)?;
    Ok(Json(contact))
}

async fn create_contact(
    state: &AppState,
    kind: ContactKind,
    form: ContactForm,
) -> Result<(StatusCode, Json<Contact>), AppError> {
    form.validate()?;
    let contact = state
        .api
        .create_contact(kind, &form.into_input())
        .await
        .map_err(upstream)?;
    Ok((StatusCode::CREATED, Json(contact)))
}

async fn update_contact(
    state: &AppState,
    kind: ContactKind,
    id: i64,
    form: ContactForm,
) -> Result<Json<Contact>, AppError> {
    form.validate()?;
    let contact = state
        .api
        .update_contact(kind, id, &form.into_input())
        .await
        .map_err(upstream)?;
    Ok(Json(contact))
}

async fn delete_contact(
    state: &AppState,
    kind: ContactKind,
    id: i64,
) -> Result<StatusCode, AppError> {
    state.api.delete_contact(kind, id).await.map_err(upstream)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_customers(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<Contact>>, AppError> {
    list_contacts(&state, ContactKind::Customer, params).await
}

pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Contact>, AppError> {
    get_contact(&state, ContactKind::Customer, id).await
}

pub async fn create_customer(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<(StatusCode, Json<Contact>), AppError> {
    create_contact(&state, ContactKind::Customer, form).await
}

pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(form): Json<ContactForm>,
) -> Result<Json<Contact>, AppError> {
    update_contact(&state, ContactKind::Customer, id, form).await
}

pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    delete_contact(&state, ContactKind::Customer, id).await
}

pub async fn list_suppliers(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<Contact>>, AppError> {
    list_contacts(&state, ContactKind::Supplier, params).await
}

pub async fn get_supplier(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Contact>, AppError> {
    get_contact(&state, ContactKind::Supplier, id).await
}

pub async fn create_supplier(
    State(state): State<AppState>,
    Json(form): Json<ContactForm>,
) -> Result<(StatusCode, Json<Contact>), AppError> {
    create_contact(&state, ContactKind::Supplier, form).await
}

pub async fn update_supplier(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(form): Json<ContactForm>,
) -> Result<Json<Contact>, AppError> {
    update_contact(&state, ContactKind::Supplier, id, form).await
}

pub async fn delete_supplier(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    delete_contact(&state, ContactKind::Supplier, id).await
}
