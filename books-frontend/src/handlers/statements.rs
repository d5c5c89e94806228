//! Account statement views: date-range filtering with running-balance
//! recomputation, and PDF export.

use askama::Template;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, HeaderValue, header},
    response::IntoResponse,
};
use books_api::currency::format_currency;
use books_api::models::{ContactKind, Currency};
use books_api::statement::StatementView;
use chrono::{NaiveDate, Utc};
use frontend_core::AppError;
use serde::Serialize;

use crate::AppState;
use crate::dtos::StatementQuery;
use crate::services::pdf::sanitize_filename;
use crate::services::upstream;

#[derive(Debug, Serialize)]
pub struct StatementResponse {
    pub contact_id: i64,
    pub contact_name: String,
    pub contact_details: Option<String>,
    pub statement_date: NaiveDate,
    pub currency: Currency,
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(flatten)]
    pub view: StatementView,
    pub display: DisplayTotals,
}

/// Headline figures pre-formatted for display, symbol included.
#[derive(Debug, Serialize)]
pub struct DisplayTotals {
    pub opening: String,
    pub total_debit: String,
    pub total_credit: String,
    pub closing: String,
}

/// Resolve the requested period. An absent start widens to all history, an
/// absent end defaults to today; an inverted range is rejected.
fn resolve_period(query: StatementQuery) -> Result<(Option<NaiveDate>, NaiveDate), AppError> {
    let end = query.end.unwrap_or_else(|| Utc::now().date_naive());
    if let Some(start) = query.start {
        if start > end {
            return Err(AppError::BadRequest(anyhow::anyhow!(
                "start date {start} is after end date {end}"
            )));
        }
    }
    Ok((query.start, end))
}

async fn build_statement(
    state: &AppState,
    kind: ContactKind,
    contact_id: i64,
    query: StatementQuery,
) -> Result<StatementResponse, AppError> {
    let (requested_start, end) = resolve_period(query)?;
    let statement = state
        .api
        .statement(kind, contact_id)
        .await
        .map_err(upstream)?;

    // An omitted start still filters from the beginning of history, but the
    // reported period starts at the earliest entry rather than a sentinel.
    let filter_start = requested_start.unwrap_or(NaiveDate::MIN);
    let start = requested_start
        .or_else(|| statement.entries.iter().map(|e| e.date).min())
        .unwrap_or(end);

    let view = StatementView::from_statement(&statement, filter_start, end);
    let symbol = &statement.currency.symbol;
    let display = DisplayTotals {
        opening: format_currency(view.period_opening_balance, symbol, true),
        total_debit: format_currency(view.total_debit, symbol, true),
        total_credit: format_currency(view.total_credit, symbol, true),
        closing: format_currency(view.closing_balance, symbol, true),
    };

    Ok(StatementResponse {
        contact_id: statement.contact_id,
        contact_name: statement.contact_name,
        contact_details: statement.contact_details,
        statement_date: statement.statement_date,
        currency: statement.currency,
        start,
        end,
        view,
        display,
    })
}

pub async fn customer_statement(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<StatementQuery>,
) -> Result<Json<StatementResponse>, AppError> {
    build_statement(&state, ContactKind::Customer, id, query)
        .await
        .map(Json)
}

pub async fn supplier_statement(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<StatementQuery>,
) -> Result<Json<StatementResponse>, AppError> {
    build_statement(&state, ContactKind::Supplier, id, query)
        .await
        .map(Json)
}

// -----------------------------------------------------------------------------
// PDF export
// -----------------------------------------------------------------------------

#[derive(Template)]
#[template(path = "statement.html")]
struct StatementTemplate {
    contact_name: String,
    contact_details: String,
    period: String,
    currency_code: String,
    opening: String,
    total_debit: String,
    total_credit: String,
    closing: String,
    rows: Vec<StatementRow>,
    generated_at: String,
}

struct StatementRow {
    date: String,
    transaction_id: String,
    description: String,
    debit: String,
    credit: String,
    balance: String,
}

fn statement_template(response: &StatementResponse) -> StatementTemplate {
    let symbol = &response.currency.symbol;
    let rows = response
        .view
        .entries
        .iter()
        .map(|e| StatementRow {
            date: e.date.to_string(),
            transaction_id: e.transaction_id.clone(),
            description: e.description.clone(),
            debit: format_currency(e.debit, symbol, false),
            credit: format_currency(e.credit, symbol, false),
            balance: format_currency(e.balance, symbol, false),
        })
        .collect();

    StatementTemplate {
        contact_name: response.contact_name.clone(),
        contact_details: response.contact_details.clone().unwrap_or_default(),
        period: format!("{} to {}", response.start, response.end),
        currency_code: response.currency.code.clone(),
        opening: response.display.opening.clone(),
        total_debit: response.display.total_debit.clone(),
        total_credit: response.display.total_credit.clone(),
        closing: response.display.closing.clone(),
        rows,
        generated_at: Utc::now().format("%Y-%m-%d %H:%M UTC").to_string(),
    }
}

async fn export_statement_pdf(
    state: &AppState,
    kind: ContactKind,
    contact_id: i64,
    query: StatementQuery,
) -> Result<impl IntoResponse, AppError> {
    let response = build_statement(state, kind, contact_id, query).await?;

    let template = statement_template(&response);
    let html = template
        .render()
        .map_err(|e| AppError::InternalError(anyhow::anyhow!("template render failed: {e}")))?;

    let bytes = state.pdf.render(&html).await?;
    let filename = sanitize_filename(&format!("statement-{}-{}", kind.as_str(), contact_id));

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

pub async fn customer_statement_pdf(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<StatementQuery>,
) -> Result<impl IntoResponse, AppError> {
    export_statement_pdf(&state, ContactKind::Customer, id, query).await
}

pub async fn supplier_statement_pdf(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<StatementQuery>,
) -> Result<impl IntoResponse, AppError> {
    export_statement_pdf(&state, ContactKind::Supplier, id, query).await
}
