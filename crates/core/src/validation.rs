//! Text classification for untrusted numeric input.
//!
//! The predicates are total: they never fail and never convert. The `parse_*`
//! helpers combine a predicate with the actual conversion so the shell gets a
//! single `DomainResult` to branch on.

use crate::error::{DomainError, DomainResult};

/// `true` iff `text` is non-empty and made only of ASCII digits.
///
/// No sign, no surrounding whitespace.
pub fn is_integer(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// `true` iff `text` is non-empty, has at most one `.`, and every other
/// character is an ASCII digit.
///
/// `"1."` and `".5"` are accepted; so is a lone `"."`, which then fails at
/// conversion time in [`parse_decimal`].
pub fn is_decimal(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }

    let mut seen_dot = false;
    for b in text.bytes() {
        match b {
            b'0'..=b'9' => {}
            b'.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    true
}

/// Validate and convert integer text.
pub fn parse_integer(text: &str) -> DomainResult<i64> {
    if !is_integer(text) {
        return Err(DomainError::validation(format!("`{text}` is not a whole number")));
    }
    text.parse::<i64>()
        .map_err(|e| DomainError::validation(format!("`{text}`: {e}")))
}

/// Validate and convert decimal text.
pub fn parse_decimal(text: &str) -> DomainResult<f64> {
    if !is_decimal(text) {
        return Err(DomainError::validation(format!("`{text}` is not a decimal number")));
    }
    let value = text
        .parse::<f64>()
        .map_err(|e| DomainError::validation(format!("`{text}`: {e}")))?;
    if !value.is_finite() {
        return Err(DomainError::validation(format!("`{text}` is out of range")));
    }
    Ok(value)
}
