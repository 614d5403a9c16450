//! The module contains the aggregation core shared by every tracker.
//!
//! A [`Tracker`] owns a daily limit and an append-only list of [`Record`]s.
//! Specialized trackers embed one and expose it through [`DailyLimit`], which
//! provides the aggregate queries.
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
    clock::{Clock, SystemClock},
    record::{Record, format_date},
};

/// Length of the trailing window summed by [`DailyLimit::week_total`],
/// today included.
pub const WEEK_DAYS: u64 = 7;

/// A limit and the records counted against it.
#[derive(Debug)]
pub struct Tracker {
    limit: f64,
    records: Vec<Record>,
    clock: Box<dyn Clock>,
}

impl Tracker {
    /// Creates a tracker that reads the host's local date.
    pub fn new(limit: f64) -> Self {
        Self::with_clock(limit, SystemClock)
    }

    pub fn with_clock(limit: f64, clock: impl Clock + 'static) -> Self {
        Self {
            limit,
            records: Vec::new(),
            clock: Box::new(clock),
        }
    }

    #[must_use]
    pub fn limit(&self) -> f64 {
        self.limit
    }

    /// Records in the order they were added.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    fn push(&mut self, record: Record) {
        tracing::trace!(amount = record.amount(), date = record.date(), "add record");
        self.records.push(record);
    }

    /// Sum of the records whose date string equals `date`.
    fn total_on(&self, date: &str) -> f64 {
        self.records
            .iter()
            .filter(|record| record.date() == date)
            .map(Record::amount)
            .sum()
    }
}

/// Snapshot of a tracker's aggregates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub limit: f64,
    pub today: f64,
    pub week: f64,
    pub remaining: f64,
}

/// Aggregate queries over a daily limit.
///
/// Implementors only hand out their embedded [`Tracker`].
pub trait DailyLimit {
    fn tracker(&self) -> &Tracker;

    fn tracker_mut(&mut self) -> &mut Tracker;

    fn limit(&self) -> f64 {
        self.tracker().limit()
    }

    fn records(&self) -> &[Record] {
        self.tracker().records()
    }

    fn add_record(&mut self, record: Record) {
        self.tracker_mut().push(record);
    }

    /// Amount recorded today. Records with any other date string are ignored.
    fn today_total(&self) -> f64 {
        let tracker = self.tracker();
        tracker.total_on(&format_date(tracker.today()))
    }

    /// Amount recorded today and over the previous six days.
    fn week_total(&self) -> f64 {
        let tracker = self.tracker();
        let today = tracker.today();

        (0..WEEK_DAYS)
            .filter_map(|back| today.checked_sub_days(Days::new(back)))
            .map(|day| tracker.total_on(&format_date(day)))
            .sum()
    }

    /// What is left of today's limit. Negative once the limit is exceeded.
    fn today_remaining(&self) -> f64 {
        self.limit() - self.today_total()
    }

    fn summary(&self) -> Summary {
        Summary {
            limit: self.limit(),
            today: self.today_total(),
            week: self.week_total(),
            remaining: self.today_remaining(),
        }
    }
}

impl DailyLimit for Tracker {
    fn tracker(&self) -> &Tracker {
        self
    }

    fn tracker_mut(&mut self) -> &mut Tracker {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tracker() -> Tracker {
        Tracker::with_clock(1000.0, FixedClock(day(2022, 11, 14)))
    }

    #[test]
    fn add_record() {
        let mut tracker = tracker();
        tracker.add_record(Record::on(145.0, "кофе", day(2022, 11, 14)));
        tracker.add_record(Record::with_date(3000.0, "бар", "08.11.2022"));

        assert_eq!(tracker.records().len(), 2);
        assert_eq!(tracker.records()[0].comment(), "кофе");
        assert_eq!(tracker.records()[1].date(), "08.11.2022");
    }

    #[test]
    fn empty_tracker() {
        let tracker = tracker();

        assert_eq!(tracker.today_total(), 0.0);
        assert_eq!(tracker.week_total(), 0.0);
        assert_eq!(tracker.today_remaining(), 1000.0);
    }

    #[test]
    fn today_total_matches_date_string() {
        let mut tracker = tracker();
        tracker.add_record(Record::on(145.0, "кофе", day(2022, 11, 14)));
        tracker.add_record(Record::on(300.0, "обед", day(2022, 11, 14)));
        tracker.add_record(Record::on(50.0, "вчера", day(2022, 11, 13)));
        tracker.add_record(Record::with_date(70.0, "без нуля", "14.11.2022 "));

        assert_eq!(tracker.today_total(), 445.0);
        assert_eq!(tracker.today_remaining(), 555.0);
    }

    #[test]
    fn week_window_is_seven_days() {
        let mut tracker = tracker();
        tracker.add_record(Record::on(1.0, "today", day(2022, 11, 14)));
        tracker.add_record(Record::on(10.0, "six days ago", day(2022, 11, 8)));
        tracker.add_record(Record::on(100.0, "seven days ago", day(2022, 11, 7)));
        tracker.add_record(Record::on(1000.0, "tomorrow", day(2022, 11, 15)));

        assert_eq!(tracker.week_total(), 11.0);
    }

    #[test]
    fn week_window_crosses_year_boundary() {
        let mut tracker = Tracker::with_clock(10.0, FixedClock(day(2023, 1, 2)));
        tracker.add_record(Record::on(5.0, "", day(2022, 12, 27)));
        tracker.add_record(Record::on(7.0, "", day(2022, 12, 26)));

        assert_eq!(tracker.week_total(), 5.0);
    }

    #[test]
    fn summary() {
        let mut tracker = tracker();
        tracker.add_record(Record::on(1200.0, "", day(2022, 11, 14)));
        tracker.add_record(Record::on(300.0, "", day(2022, 11, 10)));

        assert_eq!(
            tracker.summary(),
            Summary {
                limit: 1000.0,
                today: 1200.0,
                week: 1500.0,
                remaining: -200.0,
            }
        );
    }
}
