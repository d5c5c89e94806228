//! Statement filter/recompute core.
//!
//! Given the entries of an account statement and an inclusive date interval,
//! this module carries the opening balance forward into the interval,
//! recomputes the running balance per entry, and produces period totals.
//! The running balance on each entry is derived here on every filter change;
//! whatever the server sent in the `balance` field is discarded.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{AccountStatement, LedgerEntry};

/// Result of filtering a statement to a period.
#[derive(Debug, Clone, Serialize)]
pub struct StatementView {
    /// Account opening balance plus the signed sum of all entries dated
    /// before the interval start.
    pub period_opening_balance: Decimal,
    pub total_debit: Decimal,
    pub total_credit: Decimal,
    pub closing_balance: Decimal,
    /// Entries within the interval, balances recomputed, sorted descending
    /// by date for presentation (stable, so same-day entries keep the order
    /// the server sent them in).
    pub entries: Vec<LedgerEntry>,
}

/// Recompute running balances over `[start, end]` (inclusive bounds).
///
/// The balance walk happens in the order the entries arrived from the
/// server, NOT in display order: the descending presentation sort is applied
/// only after every balance is fixed. A row's balance therefore always
/// reflects the true chronological running total at that entry, not a
/// "balance as of this row in display order".
pub fn recompute(
    entries: &[LedgerEntry],
    opening_balance: Decimal,
    start: NaiveDate,
    end: NaiveDate,
) -> StatementView {
    let mut period_opening_balance = opening_balance;
    let mut in_range: Vec<LedgerEntry> = Vec::new();

    for entry in entries {
        if entry.date < start {
            period_opening_balance += entry.signed_amount();
        } else if entry.date <= end {
            in_range.push(entry.clone());
        }
        // Entries after `end` feed neither the carry-forward nor the output.
    }

    let mut total_debit = Decimal::ZERO;
    let mut total_credit = Decimal::ZERO;
    let mut running = period_opening_balance;

    for entry in &mut in_range {
        running += entry.signed_amount();
        entry.balance = running;
        total_debit += entry.debit;
        total_credit += entry.credit;
    }

    let closing_balance = period_opening_balance + total_debit - total_credit;

    // Presentation only: most recent first. `sort_by` is stable, preserving
    // server order among same-day entries.
    in_range.sort_by(|a, b| b.date.cmp(&a.date));

    StatementView {
        period_opening_balance,
        total_debit,
        total_credit,
        closing_balance,
        entries: in_range,
    }
}

impl StatementView {
    /// Filter a fetched statement to a period.
    pub fn from_statement(statement: &AccountStatement, start: NaiveDate, end: NaiveDate) -> Self {
        recompute(&statement.entries, statement.opening_balance, start, end)
    }
}
