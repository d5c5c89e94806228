//! Product catalog model.

use frontend_core::paging::{Searchable, fields_match};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub cost: Option<Decimal>,
    #[serde(default)]
    pub tax_rate: Decimal,
}

impl Searchable for Product {
    fn matches(&self, needle: &str) -> bool {
        fields_match(
            needle,
            &[
                Some(&self.code),
                Some(&self.name),
                self.description.as_deref(),
            ],
        )
    }
}

/// Input for creating or updating a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductInput {
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub cost: Option<Decimal>,
    #[serde(default)]
    pub tax_rate: Option<Decimal>,
}
