//! Locale-style currency formatting.
//!
//! Two decimal places, comma thousand separators, symbol appended after the
//! amount (`1,234.50 $`).

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount for display.
///
/// `with_symbol` controls whether the currency symbol is appended; totals in
/// tables omit it, headline figures include it.
pub fn format_currency(amount: Decimal, symbol: &str, with_symbol: bool) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    // Exact after rounding to two places.
    let cents = (rounded.abs() * Decimal::from(100))
        .round()
        .to_i128()
        .unwrap_or(0);
    let int_part = cents / 100;
    let frac_part = cents % 100;

    let mut body = format!("{}.{:02}", group_thousands(int_part), frac_part);
    if negative {
        body.insert(0, '-');
    }
    if with_symbol {
        format!("{body} {symbol}")
    } else {
        body
    }
}

fn group_thousands(mut n: i128) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut groups = Vec::new();
    while n > 0 {
        groups.push((n % 1000) as u16);
        n /= 1000;
    }
    let mut out = groups.last().map(|g| g.to_string()).unwrap_or_default();
    for g in groups.iter().rev().skip(1) {
        out.push_str(&format!(",{:03}", g));
    }
    out
}
