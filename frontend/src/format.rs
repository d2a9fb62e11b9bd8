use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::TransactionType;

pub const CURRENCY_SYMBOL: &str = "₹";

/// Groups the integer part in threes and keeps at most two decimals.
pub fn format_with_commas(value: Decimal) -> String {
    let rounded = value.round_dp(2).normalize();
    let text = rounded.abs().to_string();
    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };

    let digits = whole.chars().rev().collect::<Vec<char>>();
    let mut out = Vec::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    let mut formatted: String = out.into_iter().rev().collect();
    if let Some(fraction) = fraction {
        formatted.push('.');
        formatted.push_str(fraction);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{}", formatted)
    } else {
        formatted
    }
}

pub fn format_currency(amount: Decimal) -> String {
    let sign = if amount.is_sign_negative() && !amount.round_dp(2).is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}{}", sign, CURRENCY_SYMBOL, format_with_commas(amount.abs()))
}

/// Ledger amount with its direction marker.
pub fn signed_amount(kind: TransactionType, amount: Decimal) -> String {
    let marker = match kind {
        TransactionType::Income => "+",
        TransactionType::Expense => "-",
        TransactionType::Transfer => "⇄",
    };
    format!("{}{}", marker, format_currency(amount.abs()))
}

pub fn format_date(at: DateTime<Utc>) -> String {
    at.format("%b %d, %Y").to_string()
}

pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `part` as a whole percentage of `total`, clamped to 0..=100.
pub fn percent_of(part: Decimal, total: Decimal) -> u32 {
    if total <= Decimal::ZERO || part <= Decimal::ZERO {
        return 0;
    }
    let ratio = (part / total * Decimal::ONE_HUNDRED).round();
    ratio.to_u32().unwrap_or(0).min(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_with_commas(Decimal::new(1234567, 0)), "1,234,567");
        assert_eq!(format_with_commas(Decimal::new(999, 0)), "999");
        assert_eq!(format_with_commas(Decimal::new(12345675, 1)), "1,234,567.5");
        assert_eq!(format_with_commas(Decimal::new(-250000, 2)), "-2,500");
    }

    #[test]
    fn currency_and_direction_markers() {
        assert_eq!(format_currency(Decimal::new(500, 0)), "₹500");
        assert_eq!(format_currency(Decimal::new(-12005, 1)), "-₹1,200.5");
        assert_eq!(signed_amount(TransactionType::Expense, Decimal::new(42, 0)), "-₹42");
        assert_eq!(signed_amount(TransactionType::Transfer, Decimal::new(100, 0)), "⇄₹100");
    }

    #[test]
    fn dates_and_labels() {
        let at = Utc.with_ymd_and_hms(2025, 3, 4, 10, 15, 0).unwrap();
        assert_eq!(format_date(at), "Mar 04, 2025");
        assert_eq!(capitalize("shopping"), "Shopping");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn percentages_are_clamped() {
        assert_eq!(percent_of(Decimal::new(1, 0), Decimal::new(3, 0)), 33);
        assert_eq!(percent_of(Decimal::new(5, 0), Decimal::ZERO), 0);
        assert_eq!(percent_of(Decimal::new(300, 0), Decimal::new(200, 0)), 100);
    }
}
