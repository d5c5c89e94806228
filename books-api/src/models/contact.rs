//! Contact model: a customer or a supplier.

use frontend_core::paging::{Searchable, fields_match};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Which side of the ledger a contact sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Customer,
    Supplier,
}

impl ContactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactKind::Customer => "customer",
            ContactKind::Supplier => "supplier",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub tax_number: Option<String>,
    #[serde(default)]
    pub opening_balance: Decimal,
}

impl Searchable for Contact {
    fn matches(&self, needle: &str) -> bool {
        fields_match(
            needle,
            &[
                Some(&self.name),
                self.phone.as_deref(),
                self.email.as_deref(),
                self.tax_number.as_deref(),
            ],
        )
    }
}

/// Input for creating or updating a contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactInput {
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub tax_number: Option<String>,
    #[serde(default)]
    pub opening_balance: Option<Decimal>,
}
