//! Currency display formatting
//!
//! Amounts are rendered as `<symbol><grouped integer>[.<fraction>]` with comma
//! thousands separators and the currency's own number of decimals, e.g.
//! `$1,234.50`, `₩1,435`, `-€3.20`.

use crate::currency::CurrencyCode;

/// Decimals used for codes outside [`CurrencyCode`]
const FALLBACK_MINOR_UNITS: u32 = 2;

/// Format `amount` for the currency named by `code`.
///
/// Never fails: an unrecognised code is used as its own symbol followed by a
/// space, e.g. `XYZ 15.00`.
pub fn format_currency(amount: f64, code: &str) -> String {
    match code.parse::<CurrencyCode>() {
        Ok(currency) => format_amount(amount, currency),
        Err(_) => {
            let prefix = format!("{} ", code.trim().to_ascii_uppercase());
            render(amount, &prefix, FALLBACK_MINOR_UNITS)
        }
    }
}

/// Format `amount` for a known currency
pub fn format_amount(amount: f64, currency: CurrencyCode) -> String {
    render(amount, currency.symbol(), currency.minor_units())
}

fn render(amount: f64, symbol: &str, decimals: u32) -> String {
    if !amount.is_finite() {
        return format!("{}{}", symbol, amount);
    }

    // Split one rounded string so a carry (999.999 -> 1000.00) reaches both parts.
    let fixed = format!("{:.*}", decimals as usize, amount.abs());
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let is_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
    let sign = if amount < 0.0 && !is_zero { "-" } else { "" };

    let mut out = String::with_capacity(fixed.len() + symbol.len() + integer.len() / 3 + 1);
    out.push_str(sign);
    out.push_str(symbol);
    out.push_str(&group_thousands(integer));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
