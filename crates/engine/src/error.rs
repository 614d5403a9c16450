//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`InvalidCurrency`] thrown when a cash advice is requested in a currency
//!   the [`CashTracker`] does not know.
//!
//!  [`InvalidCurrency`]: EngineError::InvalidCurrency
//!  [`CashTracker`]: super::cash::CashTracker
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone)]
pub enum EngineError {
    /// The message is the one shown to the user; the payload keeps the
    /// rejected code.
    #[error("Выбрано неверное значение валюты. Доступные значения: руб, eur, usd.")]
    InvalidCurrency(String),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidCurrency(a), Self::InvalidCurrency(b)) => a == b,
        }
    }
}
