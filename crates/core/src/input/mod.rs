//! Boundary parsing.
//!
//! Records arrive with money, hours and percentages as decimal strings and
//! dates as `YYYY-MM-DD` strings. They are parsed once here; the engine only
//! ever sees typed values.

mod error;
mod raw;

#[cfg(test)]
mod tests;

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

pub use error::InputError;
pub use raw::{
    RawBudgetExpense, RawBudgetLabor, RawExpense, RawPayment, RawProject, RawProjectSnapshot,
    RawStaff, RawTimeLog,
};

/// Date format accepted at the boundary.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest money magnitude, 9,999,999,999,999.99 (15 digits, 2 decimals).
pub const MAX_MONEY: Decimal = Decimal::from_parts(2_764_472_319, 232_830, 0, false, 2);

/// Largest hours or hourly rate, 99,999,999.99 (10 digits, 2 decimals).
pub const MAX_QUANTITY: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

/// Largest multiplier or margin, 999.99 (5 digits, 2 decimals).
pub const MAX_FACTOR: Decimal = Decimal::from_parts(99_999, 0, 0, false, 2);

/// Most stoppage days a project may record.
pub const MAX_STOPPAGE_DAYS: u32 = 36_500;

/// Parses a trimmed decimal string.
///
/// # Errors
///
/// Returns `InputError::InvalidDecimal` if `value` is not a decimal number.
pub fn parse_decimal(field: &'static str, value: &str) -> Result<Decimal, InputError> {
    Decimal::from_str(value.trim()).map_err(|_| InputError::InvalidDecimal {
        field,
        value: value.to_string(),
    })
}

/// Parses a decimal rounded to 2 places whose magnitude must not exceed `max`.
///
/// Keeps every engine sum and product far from `Decimal`'s limits.
///
/// # Errors
///
/// Returns `InputError::InvalidDecimal` for non-numeric input and
/// `InputError::OutOfRange` when `|value| > max`.
pub fn parse_bounded(
    field: &'static str,
    value: &str,
    max: Decimal,
) -> Result<Decimal, InputError> {
    let parsed = parse_decimal(field, value)?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    if parsed.abs() > max {
        return Err(InputError::OutOfRange {
            field,
            value: parsed,
            min: -max,
            max,
        });
    }
    Ok(parsed)
}

/// Parses a money amount.
///
/// # Errors
///
/// See [`parse_bounded`].
pub fn parse_money(field: &'static str, value: &str) -> Result<Decimal, InputError> {
    parse_bounded(field, value, MAX_MONEY)
}

/// Parses hours or an hourly rate.
///
/// # Errors
///
/// See [`parse_bounded`].
pub fn parse_quantity(field: &'static str, value: &str) -> Result<Decimal, InputError> {
    parse_bounded(field, value, MAX_QUANTITY)
}

/// Parses an overhead multiplier or target margin.
///
/// # Errors
///
/// See [`parse_bounded`].
pub fn parse_factor(field: &'static str, value: &str) -> Result<Decimal, InputError> {
    parse_bounded(field, value, MAX_FACTOR)
}

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `InputError::InvalidDate` if `value` is not a calendar date.
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| InputError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

/// Parses a completion percentage, which must lie in 0..=100.
///
/// # Errors
///
/// Returns `InputError::InvalidDecimal` for non-numeric input and
/// `InputError::OutOfRange` outside 0..=100.
pub fn parse_percent_complete(value: &str) -> Result<Decimal, InputError> {
    const FIELD: &str = "percent_complete";

    let percent = parse_decimal(FIELD, value)?;
    if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
        return Err(InputError::OutOfRange {
            field: FIELD,
            value: percent,
            min: Decimal::ZERO,
            max: Decimal::ONE_HUNDRED,
        });
    }
    Ok(percent)
}
