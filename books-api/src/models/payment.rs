//! Payment models: receipts (money in) and payment vouchers (money out).

use chrono::NaiveDate;
use frontend_core::paging::{Searchable, fields_match};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Customer payment received against a sales invoice (or on account).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    pub id: i64,
    pub number: String,
    pub customer_id: i64,
    pub customer_name: String,
    #[serde(default)]
    pub invoice_id: Option<i64>,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub payment_method: String,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Searchable for Receipt {
    fn matches(&self, needle: &str) -> bool {
        fields_match(
            needle,
            &[
                Some(&self.number),
                Some(&self.customer_name),
                self.reference.as_deref(),
            ],
        )
    }
}

/// Payment made out to a supplier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentVoucher {
    pub id: i64,
    pub number: String,
    pub supplier_id: i64,
    pub supplier_name: String,
    #[serde(default)]
    pub invoice_id: Option<i64>,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub payment_method: String,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl Searchable for PaymentVoucher {
    fn matches(&self, needle: &str) -> bool {
        fields_match(
            needle,
            &[
                Some(&self.number),
                Some(&self.supplier_name),
                self.reference.as_deref(),
            ],
        )
    }
}

/// Input for recording a payment on either side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentInput {
    pub contact_id: i64,
    #[serde(default)]
    pub invoice_id: Option<i64>,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub payment_method: String,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}
