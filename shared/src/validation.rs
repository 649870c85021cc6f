use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;
use thiserror::Error;

/// Reasons a form submission is declined at the store boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter what the expense was for")]
    EmptyItem,
    #[error("Please enter a label for the essential")]
    EmptyLabel,
    #[error("Please enter a cost")]
    MissingCost,
    #[error("Cost is not a number: {0}")]
    InvalidCost(String),
    #[error("Cost cannot be negative")]
    NegativeCost,
    #[error("Cost cannot exceed 1,000,000,000,000")]
    CostTooLarge,
}

/// Largest cost a single expense may carry. Keeps ledger sums far from
/// `Decimal`'s range.
pub const MAX_COST: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

/// Parse a cost typed into a form field.
///
/// Accepts plain and scientific notation (number inputs can produce both).
/// Empty input, anything non-numeric (including `NaN`/`inf`), negative
/// amounts and amounts above [`MAX_COST`] are rejected. Amounts too small
/// for `Decimal` to hold count as zero.
pub fn parse_cost(input: &str) -> Result<Decimal, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingCost);
    }

    let cost = match Decimal::from_str(trimmed).or_else(|_| Decimal::from_scientific(trimmed)) {
        Ok(cost) => cost,
        Err(_) => parse_out_of_range(trimmed)?,
    };

    if cost.is_sign_negative() && !cost.is_zero() {
        return Err(ValidationError::NegativeCost);
    }
    if cost > MAX_COST {
        return Err(ValidationError::CostTooLarge);
    }
    Ok(cost)
}

// Numbers `Decimal` cannot hold: huge exponents overflow, tiny ones underflow to zero.
fn parse_out_of_range(text: &str) -> Result<Decimal, ValidationError> {
    let invalid = || ValidationError::InvalidCost(text.to_string());
    let value: f64 = text.parse().map_err(|_| invalid())?;
    let lowered = text.to_ascii_lowercase();
    if value.is_nan() || lowered.contains("inf") {
        return Err(invalid());
    }
    if value.is_sign_negative() && value != 0.0 {
        return Err(ValidationError::NegativeCost);
    }
    if value.is_infinite() || value > 1.0 {
        return Err(ValidationError::CostTooLarge);
    }
    Ok(Decimal::from_f64(value)
        .filter(|cost| !cost.is_zero())
        .map(|cost| cost.round_dp(2))
        .unwrap_or(Decimal::ZERO))
}

/// Trim `input` and reject it with `error` if nothing is left.
pub fn require_text(input: &str, error: ValidationError) -> Result<String, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(error)
    } else {
        Ok(trimmed.to_string())
    }
}

/// Lenient reading of a stored cost: numbers and numeric strings are kept,
/// anything else counts as zero.
pub(crate) fn coerce_stored_cost(value: &serde_json::Value) -> Decimal {
    let text = match value {
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::String(s) => s.trim().to_string(),
        _ => return Decimal::ZERO,
    };
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map(|d| d.normalize())
        .unwrap_or(Decimal::ZERO)
}
