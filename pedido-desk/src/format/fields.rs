//! Input masks
//!
//! Pure keystroke-to-display rules. Every function is total: malformed
//! input degrades to the best valid prefix, never an error. All masks
//! start by reducing the raw input to its digit stream.

use rust_decimal::prelude::*;

use super::words;

/// Masked text field kinds handled by [`format_field`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// CPF, XXX.XXX.XXX-XX
    TaxId,
    /// (XX) XXXX-XXXX or (XX) XXXXX-XXXX
    Phone,
    /// CEP, XXXXX-XXX
    PostalCode,
    /// DD/MM/YYYY
    Date,
    /// Digit count plus " dias"
    DeliveryDays,
    /// No mask
    FreeText,
}

/// Paired money outputs; the two are never produced separately
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoneyInput {
    /// "R$ 1.234,56"
    pub display: String,
    /// Written-out form of `display`
    pub words: String,
}

/// Money digit streams are capped so amounts stay below
/// R$ 1.000.000,00, the range the words converter covers.
const MAX_MONEY_DIGITS: usize = 8;

/// Keep only ASCII digits.
pub fn digit_stream(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Apply the mask for `kind` to raw input.
pub fn format_field(kind: FieldKind, raw: &str) -> String {
    match kind {
        FieldKind::TaxId => format_tax_id(raw),
        FieldKind::Phone => format_phone(raw),
        FieldKind::PostalCode => format_postal_code(raw),
        FieldKind::Date => format_date(raw),
        FieldKind::DeliveryDays => format_delivery_days(raw),
        FieldKind::FreeText => raw.to_string(),
    }
}

/// CPF mask: dots after the 3rd and 6th digit, hyphen after the 9th,
/// truncated at 11 digits.
pub fn format_tax_id(raw: &str) -> String {
    let mut d = digit_stream(raw);
    d.truncate(11);

    match d.len() {
        0..=3 => d,
        4..=6 => format!("{}.{}", &d[..3], &d[3..]),
        7..=9 => format!("{}.{}.{}", &d[..3], &d[3..6], &d[6..]),
        _ => format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..]),
    }
}

/// Phone mask: area code in parentheses, hyphen before the trailing
/// block; 11 digits switch to the five-digit mobile prefix.
pub fn format_phone(raw: &str) -> String {
    let mut d = digit_stream(raw);
    d.truncate(11);

    match d.len() {
        0 => String::new(),
        1..=2 => format!("({}", d),
        3..=6 => format!("({}) {}", &d[..2], &d[2..]),
        7..=10 => format!("({}) {}-{}", &d[..2], &d[2..6], &d[6..]),
        _ => format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..]),
    }
}

/// CEP mask: XXXXX-XXX, truncated at 8 digits.
pub fn format_postal_code(raw: &str) -> String {
    let mut d = digit_stream(raw);
    d.truncate(8);

    match d.len() {
        0..=5 => d,
        _ => format!("{}-{}", &d[..5], &d[5..]),
    }
}

/// Date mask: slashes appear after the 2nd and 4th digit, truncated at
/// 8 digits. Shape only; no calendar validation.
pub fn format_date(raw: &str) -> String {
    let mut d = digit_stream(raw);
    d.truncate(8);

    match d.len() {
        0..=2 => d,
        3..=4 => format!("{}/{}", &d[..2], &d[2..]),
        _ => format!("{}/{}/{}", &d[..2], &d[2..4], &d[4..]),
    }
}

/// Delivery in days: digit count plus the literal suffix.
pub fn format_delivery_days(raw: &str) -> String {
    let d = digit_stream(raw);
    if d.is_empty() {
        String::new()
    } else {
        format!("{} dias", d)
    }
}

/// Rewrite a date-picker value (YYYY-MM-DD) into display form.
pub fn from_picker_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let parts: Vec<&str> = raw.split('-').collect();
    match parts.as_slice() {
        [year, month, day] => format!("{}/{}/{}", day, month, year),
        _ => String::new(),
    }
}

/// Rewrite a stored DD/MM/YYYY value back into picker form.
///
/// Strict shape check: exactly ten ASCII characters with slashes at
/// positions 2 and 5 and digits elsewhere. Anything else yields an
/// empty picker value; there is no partial parse.
pub fn to_picker_date(display: &str) -> String {
    let bytes = display.as_bytes();
    if bytes.len() != 10 || bytes[2] != b'/' || bytes[5] != b'/' {
        return String::new();
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());
    if !digits_ok {
        return String::new();
    }
    format!("{}-{}-{}", &display[6..10], &display[3..5], &display[0..2])
}

/// Money mask: digit stream read as cents, rendered as pt-BR currency
/// together with its written-out form.
pub fn money_input(raw: &str) -> MoneyInput {
    let mut d = digit_stream(raw);
    if d.is_empty() {
        return MoneyInput::default();
    }
    d.truncate(MAX_MONEY_DIGITS);

    // Can't overflow: at most 8 digits
    let cents: i64 = d.parse().unwrap_or(0);
    let amount = Decimal::new(cents, 2);

    MoneyInput {
        display: format_brl(amount),
        words: words::to_words(amount),
    }
}

/// Render an amount as "R$ 1.234,56".
pub fn format_brl(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let cents = (rounded * Decimal::from(100)).to_i64().unwrap_or(0);

    let int_part = cents / 100;
    let frac_part = (cents % 100).abs();

    let int_digits = int_part.abs().to_string();
    let mut grouped = String::new();
    for (idx, ch) in int_digits.chars().enumerate() {
        if idx > 0 && (int_digits.len() - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if cents < 0 { "-" } else { "" };
    format!("R$ {}{},{:02}", sign, grouped, frac_part)
}

/// Read a "R$ 1.234,56" display string back into a decimal amount.
///
/// The inverse of the money mask. `None` when the string carries no
/// digits (a cleared field).
pub fn parse_brl(display: &str) -> Option<Decimal> {
    let mut d = digit_stream(display);
    if d.is_empty() {
        return None;
    }
    d.truncate(MAX_MONEY_DIGITS);
    let cents: i64 = d.parse().ok()?;
    Some(Decimal::new(cents, 2))
}
