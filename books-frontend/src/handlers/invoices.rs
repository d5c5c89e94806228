//! Sales and purchase invoice CRUD plus PDF export, keyed by `InvoiceKind`.

use askama::Template;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    response::IntoResponse,
};
use books_api::currency::format_currency;
use books_api::models::{Invoice, InvoiceKind};
use chrono::Utc;
use frontend_core::AppError;
use frontend_core::paging::{ListParams, Page, filter_and_paginate};
use validator::Validate;

use crate::AppState;
use crate::dtos::{InvoiceForm, LineItemForm};
use crate::services::pdf::sanitize_filename;
use crate::services::upstream;

/// Sign checks `validator` cannot express on `Decimal` fields.
pub(crate) fn check_line_items(items: &[LineItemForm]) -> Result<(), AppError> {
    for item in items {
        if item.quantity.is_sign_negative()
            || item.unit_price.is_sign_negative()
            || item.tax_rate.is_sign_negative()
        {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "line item amounts must not be negative"
            )));
        }
    }
    Ok(())
}

async fn list_invoices(
    state: &AppState,
    kind: InvoiceKind,
    params: ListParams,
) -> Result<Json<Page<Invoice>>, AppError> {
    let invoices = state.api.invoices(kind).await.map_err(upstream)?;
    Ok(Json(filter_and_paginate(invoices, &params)))
}

async fn get_invoice(
    state: &AppState,
    kind: InvoiceKind,
    id: i64,
) -> Result<Json<Invoice>, AppError> {
    let invoice = state.api.invoice(kind, id).await.map_err(upstream)?;
    Ok(Json(invoice))
}

async fn create_invoice(
    state: &AppState,
    kind: InvoiceKind,
    form: InvoiceForm,
) -> Result<(StatusCode, Json<Invoice>), AppError> {
    form.validate()?;
    check_line_items(&form.items)?;
    let invoice = state
        .api
        .create_invoice(kind, &form.into_input())
        .await
        .map_err(upstream)?;
    Ok((StatusCode::CREATED, Json(invoice)))
}

async fn update_invoice(
    state: &AppState,
    kind: InvoiceKind,
    id: i64,
    form: InvoiceForm,
) -> Result<Json<Invoice>, AppError> {
    form.validate()?;
    check_line_items(&form.items)?;
    let invoice = state
        .api
        .update_invoice(kind, id, &form.into_input())
        .await
        .map_err(upstream)?;
    Ok(Json(invoice))
}

async fn delete_invoice(
    state: &AppState,
    kind: InvoiceKind,
    id: i64,
) -> Result<StatusCode, AppError> {
    state.api.delete_invoice(kind, id).await.map_err(upstream)?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_sales_invoices(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<Invoice>>, AppError> {
    list_invoices(&state, InvoiceKind::Sales, params).await
}

pub async fn get_sales_invoice(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Invoice>, AppError> {
    get_invoice(&state, InvoiceKind::Sales, id).await
}

pub async fn create_sales_invoice(
    State(state): State<AppState>,
    Json(form): Json<InvoiceForm>,
) -> Result<(StatusCode, Json<Invoice>), AppError> {
    create_invoice(&state, InvoiceKind::Sales, form).await
}

pub async fn update_sales_invoice(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(form): Json<InvoiceForm>,
) -> Result<Json<Invoice>, AppError> {
    update_invoice(&state, InvoiceKind::Sales, id, form).await
}

pub async fn delete_sales_invoice(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    delete_invoice(&state, InvoiceKind::Sales, id).await
}

pub async fn list_purchase_invoices(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Page<Invoice>>, AppError> {
    list_invoices(&state, InvoiceKind::Purchase, params).await
}

pub async fn get_purchase_invoice(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Invoice>, AppError> {
    get_invoice(&state, InvoiceKind::Purchase, id).await
}

pub async fn create_purchase_invoice(
    State(state): State<AppState>,
    Json(form): Json<InvoiceForm>,
) -> Result<(StatusCode, Json<Invoice>), AppError> {
    create_invoice(&state, InvoiceKind::Purchase, form).await
}

pub async fn update_purchase_invoice(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(form): Json<InvoiceForm>,
) -> Result<Json<Invoice>, AppError> {
    update_invoice(&state, InvoiceKind::Purchase, id, form).await
}

pub async fn delete_purchase_invoice(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    delete_invoice(&state, InvoiceKind::Purchase, id).await
}

// -----------------------------------------------------------------------------
// PDF export
// -----------------------------------------------------------------------------

#[derive(Template)]
#[template(path = "invoice.html")]
struct InvoiceTemplate {
    title: String,
    number: String,
    contact_name: String,
    date: String,
    due_date: String,
    status: String,
    company_name: String,
    company_details: String,
    rows: Vec<InvoiceRow>,
    subtotal: String,
    tax_total: String,
    total: String,
    notes: String,
    footer: String,
    generated_at: String,
}

struct InvoiceRow {
    description: String,
    quantity: String,
    unit_price: String,
    tax_rate: String,
    total: String,
}

async fn export_invoice_pdf(
    state: &AppState,
    kind: InvoiceKind,
    id: i64,
) -> Result<impl IntoResponse, AppError> {
    let invoice = state.api.invoice(kind, id).await.map_err(upstream)?;
    let company = state.api.company_settings().await.map_err(upstream)?;
    let documents = state.api.document_settings().await.map_err(upstream)?;

    let symbol = &company.currency.symbol;
    let rows = invoice
        .items
        .iter()
        .map(|item| InvoiceRow {
            description: item.description.clone(),
            quantity: item.quantity.to_string(),
            unit_price: format_currency(item.unit_price, symbol, false),
            tax_rate: format!("{}%", item.tax_rate),
            total: format_currency(item.total, symbol, false),
        })
        .collect();

    let title = match kind {
        InvoiceKind::Sales => "Sales Invoice",
        InvoiceKind::Purchase => "Purchase Invoice",
    };
    let company_details = [
        company.address.as_deref(),
        company.phone.as_deref(),
        company.tax_number.as_deref(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" | ");

    let template = InvoiceTemplate {
        title: title.to_string(),
        number: invoice.number.clone(),
        contact_name: invoice.contact_name.clone(),
        date: invoice.date.to_string(),
        due_date: invoice
            .due_date
            .map(|d| d.to_string())
            .unwrap_or_default(),
        status: invoice.status.as_str().to_string(),
        company_name: company.name,
        company_details,
        rows,
        subtotal: format_currency(invoice.subtotal, symbol, true),
        tax_total: format_currency(invoice.tax_total, symbol, true),
        total: format_currency(invoice.total, symbol, true),
        notes: invoice.notes.clone().unwrap_or_default(),
        footer: documents.footer_text.unwrap_or_default(),
        generated_at: Utc::now().format("%Y-%m-%d %H:%M UTC").to_string(),
    };

    let html = template
        .render()
        .map_err(|e| AppError::InternalError(anyhow::anyhow!("template render failed: {e}")))?;

    let bytes = state.pdf.render(&html).await?;
    let filename = sanitize_filename(&format!("invoice-{}", invoice.number));

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/pdf"));
    let disposition = format!("attachment; filename=\"{filename}\"");
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition)
            .map_err(|e| AppError::InternalError(anyhow::anyhow!("bad filename header: {e}")))?,
    );

    Ok((headers, bytes))
}

pub async fn sales_invoice_pdf(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    export_invoice_pdf(&state, InvoiceKind::Sales, id).await
}

pub async fn purchase_invoice_pdf(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    export_invoice_pdf(&state, InvoiceKind::Purchase, id).await
}
