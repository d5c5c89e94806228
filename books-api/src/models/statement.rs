//! Account statement wire model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Currency descriptor attached to a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub code: String,
    pub symbol: String,
}

/// Single ledger entry as returned by the backend.
///
/// `balance` is a derived field: it is recomputed on every filter change by
/// [`crate::statement::recompute`] and never trusted from the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub date: NaiveDate,
    pub transaction_id: String,
    pub description: String,
    pub debit: Decimal,
    pub credit: Decimal,
    #[serde(default)]
    pub balance: Decimal,
}

impl LedgerEntry {
    /// Signed contribution to the balance: debit increases, credit decreases.
    pub fn signed_amount(&self) -> Decimal {
        self.debit - self.credit
    }
}

/// Account statement for one contact (customer or supplier).
///
/// Entries arrive in server order, which is not guaranteed sorted. The
/// statement is a read-only view: fetched fresh per request, never written
/// back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountStatement {
    pub contact_id: i64,
    pub contact_name: String,
    #[serde(default)]
    pub contact_details: Option<String>,
    pub statement_date: NaiveDate,
    pub opening_balance: Decimal,
    #[serde(default)]
    pub closing_balance: Decimal,
    pub entries: Vec<LedgerEntry>,
    pub currency: Currency,
}

impl AccountStatement {
    /// Schema-level checks the decoder cannot express: amounts must be
    /// non-negative.
    pub fn validate(&self) -> Result<(), ApiError> {
        for entry in &self.entries {
            if entry.debit.is_sign_negative() || entry.credit.is_sign_negative() {
                return Err(ApiError::Malformed {
                    detail: format!(
                        "negative debit/credit on transaction {}",
                        entry.transaction_id
                    ),
                });
            }
        }
        Ok(())
    }
}
