use thiserror::Error;

const MAX_DIGITS: usize = 8;
const DECIMAL_PLACES: usize = 2;
const MAX_WHOLE_DIGITS: usize = MAX_DIGITS - DECIMAL_PLACES;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceParseError {
    #[error("Enter a valid number.")]
    Invalid,
    #[error("Ensure that there are no more than 8 digits in total.")]
    TooManyDigits,
    #[error("Ensure that there are no more than 2 decimal places.")]
    TooManyDecimalPlaces,
    #[error("Ensure that there are no more than 6 digits before the decimal point.")]
    TooManyWholeDigits,
}

/// Parses a dollar amount such as `"12.5"` into integer cents.
///
/// The sign is kept; rejecting non-positive amounts is left to validation.
pub fn parse_price(input: &str) -> Result<i64, PriceParseError> {
    let s = input.trim();

    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let (whole, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    if whole.is_empty() && frac.is_empty() {
        return Err(PriceParseError::Invalid);
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PriceParseError::Invalid);
    }

    let whole = whole.trim_start_matches('0');

    if whole.len() + frac.len() > MAX_DIGITS {
        return Err(PriceParseError::TooManyDigits);
    }
    if frac.len() > DECIMAL_PLACES {
        return Err(PriceParseError::TooManyDecimalPlaces);
    }
    if whole.len() > MAX_WHOLE_DIGITS {
        return Err(PriceParseError::TooManyWholeDigits);
    }

    let dollars: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| PriceParseError::Invalid)?
    };

    let cents: i64 = match frac.len() {
        0 => 0,
        1 => frac.parse::<i64>().map_err(|_| PriceParseError::Invalid)? * 10,
        _ => frac.parse().map_err(|_| PriceParseError::Invalid)?,
    };

    let total = dollars * 100 + cents;
    Ok(if negative { -total } else { total })
}

/// Formats cents as a two-decimal dollar amount, e.g. `1250` -> `"12.50"`.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}
