//! Quotation model.

use chrono::NaiveDate;
use frontend_core::paging::{Searchable, fields_match};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::invoice::{LineItem, LineItemInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuotationStatus {
    Draft,
    Sent,
    Accepted,
    Declined,
    Expired,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quotation {
    pub id: i64,
    pub number: String,
    pub customer_id: i64,
    pub customer_name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    pub status: QuotationStatus,
    pub items: Vec<LineItem>,
    pub subtotal: Decimal,
    pub tax_total: Decimal,
    pub total: Decimal,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Searchable for Quotation {
    fn matches(&self, needle: &str) -> bool {
        fields_match(
            needle,
            &[
                Some(&self.number),
                Some(&self.customer_name),
                self.notes.as_deref(),
            ],
        )
    }
}

/// Input for creating or updating a quotation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotationInput {
    pub customer_id: i64,
    pub date: NaiveDate,
    #[serde(default)]
    pub expiry_date: Option<NaiveDate>,
    pub items: Vec<LineItemInput>,
    #[serde(default)]
    pub notes: Option<String>,
}
