use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::EngineError;

/// Currency a cash advice can be given in.
///
/// Codes are matched exactly (`"rub"`, `"eur"`, `"usd"`); `"RUB"` is not a
/// known currency.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    Rub,
    Eur,
    Usd,
}

impl Currency {
    /// Canonical currency code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Rub => "rub",
            Currency::Eur => "eur",
            Currency::Usd => "usd",
        }
    }

    /// Name used inside advice messages.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Currency::Rub => "руб",
            Currency::Eur => "Euro",
            Currency::Usd => "USD",
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<&str> for Currency {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "rub" => Ok(Currency::Rub),
            "eur" => Ok(Currency::Eur),
            "usd" => Ok(Currency::Usd),
            other => Err(EngineError::InvalidCurrency(other.to_string())),
        }
    }
}

impl FromStr for Currency {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::try_from(s)
    }
}

/// How many roubles one unit of each currency is worth.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rates {
    pub usd: f64,
    pub eur: f64,
    pub rub: f64,
}

impl Rates {
    pub const USD: f64 = 90.1;
    pub const EUR: f64 = 98.2;
    pub const RUB: f64 = 1.0;

    #[must_use]
    pub const fn rate(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Rub => self.rub,
            Currency::Eur => self.eur,
            Currency::Usd => self.usd,
        }
    }
}

impl Default for Rates {
    fn default() -> Self {
        Self {
            usd: Self::USD,
            eur: Self::EUR,
            rub: Self::RUB,
        }
    }
}
