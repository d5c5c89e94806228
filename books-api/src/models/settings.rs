//! Company and document settings.

use serde::{Deserialize, Serialize};

use super::statement::Currency;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanySettings {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub tax_number: Option<String>,
    pub currency: Currency,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Numbering scheme for one document type (invoices, receipts, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentCounter {
    pub prefix: String,
    pub next_number: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSettings {
    pub sales_invoice: DocumentCounter,
    pub purchase_invoice: DocumentCounter,
    pub quotation: DocumentCounter,
    pub receipt: DocumentCounter,
    pub payment_voucher: DocumentCounter,
    #[serde(default)]
    pub footer_text: Option<String>,
    #[serde(default)]
    pub terms: Option<String>,
}
