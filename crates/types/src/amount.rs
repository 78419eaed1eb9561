use bitcoin::{Amount, Denomination};

use crate::errors::ApiError;

/// Parses user-entered BTC text. Empty or malformed input is `None`;
/// callers decide whether that is an error or just an incomplete field.
#[must_use]
pub fn parse_btc(text: &str) -> Option<Amount> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    Amount::from_str_in(trimmed, Denomination::Bitcoin).ok()
}

/// Formats an amount as BTC with the full 8 fraction digits.
#[must_use]
pub fn format_btc(amount: Amount) -> String {
    format!("{:.8}", amount.to_btc())
}

/// Converts a decimal-BTC wire value into an `Amount`.
pub fn amount_from_btc(value: f64) -> Result<Amount, ApiError> {
    Amount::from_btc(value).map_err(|e| ApiError::Decode(format!("bad BTC amount {value}: {e}")))
}

/// Strips everything but digits and the first decimal point, matching what
/// the amount field accepts as the user types.
#[must_use]
pub fn sanitize_amount_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut seen_dot = false;
    for c in input.chars() {
        match c {
            '0'..='9' => out.push(c),
            '.' if !seen_dot => {
                seen_dot = true;
                out.push('.');
            }
            _ => {}
        }
    }
    out
}
