//! Boundary parsing errors.

use feeburn_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// A record field that could not be turned into its typed value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Field is not a decimal number.
    #[error("Invalid decimal for {field}: {value:?}")]
    InvalidDecimal {
        /// Field name.
        field: &'static str,
        /// Raw value as received.
        value: String,
    },

    /// Field is not a `YYYY-MM-DD` date.
    #[error("Invalid date for {field}: {value:?}")]
    InvalidDate {
        /// Field name.
        field: &'static str,
        /// Raw value as received.
        value: String,
    },

    /// Field parsed but lies outside its allowed range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Field name.
        field: &'static str,
        /// Parsed value.
        value: Decimal,
        /// Lower bound (inclusive).
        min: Decimal,
        /// Upper bound (inclusive).
        max: Decimal,
    },
}

impl From<InputError> for AppError {
    fn from(err: InputError) -> Self {
        Self::Validation(err.to_string())
    }
}
