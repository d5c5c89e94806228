//! Invoice models, shared by the sales and purchase sides.

use chrono::NaiveDate;
use frontend_core::paging::{Searchable, fields_match};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sales (customer-facing) or purchase (supplier-facing) invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceKind {
    Sales,
    Purchase,
}

impl InvoiceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceKind::Sales => "sales",
            InvoiceKind::Purchase => "purchase",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Issued,
    Paid,
    Void,
    Overdue,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Issued => "issued",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Void => "void",
            InvoiceStatus::Overdue => "overdue",
        }
    }
}

/// Line item on an invoice or quotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub id: i64,
    #[serde(default)]
    pub product_id: Option<i64>,
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    #[serde(default)]
    pub tax_rate: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i64,
    pub number: String,
    pub contact_id: i64,
    pub contact_name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub status: InvoiceStatus,
    pub items: Vec<LineItem>,
    pub subtotal: Decimal,
    pub tax_total: Decimal,
    pub total: Decimal,
    #[serde(default)]
    pub amount_paid: Decimal,
    #[serde(default)]
    pub amount_due: Decimal,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Searchable for Invoice {
    fn matches(&self, needle: &str) -> bool {
        fields_match(
            needle,
            &[
                Some(&self.number),
                Some(&self.contact_name),
                self.notes.as_deref(),
            ],
        )
    }
}

/// Input for a new or edited line item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItemInput {
    #[serde(default)]
    pub product_id: Option<i64>,
    pub description: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    #[serde(default)]
    pub tax_rate: Decimal,
}

/// Input for creating or updating an invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceInput {
    pub contact_id: i64,
    pub date: NaiveDate,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub items: Vec<LineItemInput>,
    #[serde(default)]
    pub notes: Option<String>,
}
