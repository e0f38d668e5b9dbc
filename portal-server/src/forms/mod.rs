//! Record-mutation form engine
//!
//! Every mutating page submits a *draft*: the schema's fields as raw
//! strings, exactly as typed. The helpers here turn drafts into typed
//! payloads — required-field presence, text length limits, numeric
//! coercion with rejection on unparsable input — and return
//! [`AppError::Validation`] so the client keeps its draft on failure.
//!
//! Limits are chosen as reasonable UX bounds; the hosted entity layer
//! does not enforce lengths itself.

pub mod employee;

pub use employee::{EmployeeDraft, EmployeeSave, save_employee};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use validator::ValidateEmail;

use crate::core::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Names, titles, subjects.
pub const MAX_NAME_LEN: usize = 200;

/// Notes, remarks, descriptions.
pub const MAX_NOTE_LEN: usize = 500;

/// Short identifiers: employee id, phone number, check-in times.
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321).
pub const MAX_EMAIL_LEN: usize = 254;

/// URLs / uploaded file references.
pub const MAX_URL_LEN: usize = 2048;

/// Addresses.
pub const MAX_ADDRESS_LEN: usize = 500;

/// Update and notification bodies.
pub const MAX_BODY_LEN: usize = 10_000;

// ── Field helpers ───────────────────────────────────────────────────

/// Require a non-empty string within the length limit.
pub fn required_text(value: &str, field: &str, max_len: usize) -> Result<String, AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} is required")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(value.to_string())
}

/// An optional string: empty input becomes `None`, anything else must fit
/// the length limit.
pub fn optional_text(
    value: &str,
    field: &str,
    max_len: usize,
) -> Result<Option<String>, AppError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(Some(value.to_string()))
}

/// Parse a required numeric field. Unparsable or non-finite input is a
/// validation failure, never a silently-stored string.
pub fn parse_number(raw: &str, field: &str) -> Result<f64, AppError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::validation(format!("{field} must be a number")))?;
    if !value.is_finite() {
        return Err(AppError::validation(format!("{field} must be a number")));
    }
    Ok(value)
}

/// Parse a monetary amount. Amounts are exact decimals and never negative.
pub fn parse_amount(raw: &str, field: &str) -> Result<Decimal, AppError> {
    let value: Decimal = raw
        .trim()
        .parse()
        .map_err(|_| AppError::validation(format!("{field} must be an amount")))?;
    if value.is_sign_negative() {
        return Err(AppError::validation(format!("{field} must not be negative")));
    }
    Ok(value)
}

/// Parse a 0-10 score.
pub fn parse_score(raw: &str, field: &str) -> Result<f64, AppError> {
    let value = parse_number(raw, field)?;
    if !(0.0..=10.0).contains(&value) {
        return Err(AppError::validation(format!(
            "{field} must be between 0 and 10"
        )));
    }
    Ok(value)
}

/// Parse a required `YYYY-MM-DD` date field.
pub fn parse_date(raw: &str, field: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("{field} must be a date (YYYY-MM-DD)")))
}

/// Require a syntactically valid email address.
pub fn required_email(raw: &str, field: &str) -> Result<String, AppError> {
    let value = required_text(raw, field, MAX_EMAIL_LEN)?;
    if !value.validate_email() {
        return Err(AppError::validation(format!(
            "{field} must be an email address"
        )));
    }
    Ok(value)
}
