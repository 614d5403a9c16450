//! Money spending tracking with advice in several currencies.
use crate::{
    ResultEngine,
    clock::Clock,
    currency::{Currency, Rates},
    tracker::{DailyLimit, Tracker},
};

/// Tracks money spent against a daily budget expressed in roubles.
#[derive(Debug)]
pub struct CashTracker {
    tracker: Tracker,
    rates: Rates,
}

impl CashTracker {
    pub fn new(limit: f64) -> Self {
        Self {
            tracker: Tracker::new(limit),
            rates: Rates::default(),
        }
    }

    pub fn with_clock(limit: f64, clock: impl Clock + 'static) -> Self {
        Self {
            tracker: Tracker::with_clock(limit, clock),
            rates: Rates::default(),
        }
    }

    /// Replace the conversion table.
    #[must_use]
    pub fn with_rates(mut self, rates: Rates) -> Self {
        self.rates = rates;
        self
    }

    #[must_use]
    pub fn rates(&self) -> &Rates {
        &self.rates
    }

    /// Tells how much is left to spend today, converted to `code`.
    ///
    /// The amount shown is the absolute value of what remains, so an exceeded
    /// budget is reported as money left rather than as a debt. The debt
    /// message is only produced when the conversion is not a number.
    pub fn cash_advice(&self, code: &str) -> ResultEngine<String> {
        let currency = Currency::try_from(code)?;
        let name = currency.display_name();
        let cash_today = self.today_remaining().abs() / self.rates.rate(currency);

        let advice = if cash_today == 0.0 {
            "Денег нет, держись!".to_string()
        } else if cash_today > 0.0 {
            format!("На сегодня осталось {cash_today:.2} {name}.")
        } else {
            format!("Денег нет, держись: твой долг - {cash_today:.2} {name}.")
        };

        Ok(advice)
    }

    /// Same as [`cash_advice`](Self::cash_advice), with an unknown currency
    /// reported as its message instead of an error.
    #[must_use]
    pub fn cash_advice_text(&self, code: &str) -> String {
        self.cash_advice(code).unwrap_or_else(|err| err.to_string())
    }
}

impl DailyLimit for CashTracker {
    fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    fn tracker_mut(&mut self) -> &mut Tracker {
        &mut self.tracker
    }
}
