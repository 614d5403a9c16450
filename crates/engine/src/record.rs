//! The module contains the `Record` type, a single dated expense or meal.
//!
//! Dates are kept as strings in the `DD.MM.YYYY` format and trackers compare
//! them as strings: a record whose date is written any other way is never
//! counted.
use core::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};

/// Format every record date is written in.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Render a calendar date the way records store it.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Money spent or calories eaten, with a note and the day it happened.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    amount: f64,
    comment: String,
    date: String,
}

impl Record {
    /// Creates a record dated today (local time).
    pub fn new(amount: f64, comment: impl Into<String>) -> Self {
        Self::on(amount, comment, SystemClock.today())
    }

    /// Creates a record for the given calendar day.
    pub fn on(amount: f64, comment: impl Into<String>, date: NaiveDate) -> Self {
        Self::with_date(amount, comment, format_date(date))
    }

    /// Creates a record with a date string taken as is.
    ///
    /// The string is not validated: `"8.11.2022"` is accepted but will never
    /// match `"08.11.2022"`.
    pub fn with_date(amount: f64, comment: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            amount,
            comment: comment.into(),
            date: date.into(),
        }
    }

    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    #[must_use]
    pub fn date(&self) -> &str {
        &self.date
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Amount: {}, comment: {}, date: {}.",
            self.amount, self.comment, self.date
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_record() {
        let record = Record::with_date(145.0, "кофе", "08.11.2022");

        assert_eq!(
            record.to_string(),
            "Amount: 145, comment: кофе, date: 08.11.2022."
        );
    }

    #[test]
    fn display_fractional_amount() {
        let record = Record::with_date(12.5, "Йогурт.", "24.02.2019");

        assert_eq!(
            record.to_string(),
            "Amount: 12.5, comment: Йогурт., date: 24.02.2019."
        );
    }

    #[test]
    fn dates_are_zero_padded() {
        let day = NaiveDate::from_ymd_opt(2019, 2, 4).unwrap();
        let record = Record::on(84.0, "Йогурт.", day);

        assert_eq!(record.date(), "04.02.2019");
    }

    #[test]
    fn raw_date_kept_verbatim() {
        let record = Record::with_date(1.0, "", "2022-11-08");

        assert_eq!(record.date(), "2022-11-08");
        assert_eq!(record.comment(), "");
    }

    #[test]
    fn new_record_is_dated_today() {
        let before = format_date(SystemClock.today());
        let record = Record::new(10.0, "кофе");
        let after = format_date(SystemClock.today());

        assert!(record.date() == before || record.date() == after);
    }
}
