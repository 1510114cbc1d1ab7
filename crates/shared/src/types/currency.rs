//! Project currency codes.
//!
//! Amounts themselves are plain `rust_decimal::Decimal` values; a project carries
//! one currency and every figure derived for it is expressed in that currency.

use serde::{Deserialize, Serialize};

/// ISO 4217 currency codes a project can be billed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Saudi Riyal
    #[default]
    Sar,
    /// Egyptian Pound
    Egp,
    /// UAE Dirham
    Aed,
    /// US Dollar
    Usd,
    /// Euro
    Eur,
}

impl Currency {
    /// Returns the ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Sar => "SAR",
            Self::Egp => "EGP",
            Self::Aed => "AED",
            Self::Usd => "USD",
            Self::Eur => "EUR",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "SAR" => Ok(Self::Sar),
            "EGP" => Ok(Self::Egp),
            "AED" => Ok(Self::Aed),
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}
