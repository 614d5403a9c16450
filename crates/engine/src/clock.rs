//! Source of the reference date used by every aggregation.
//!
//! Trackers never read the wall clock directly: they ask their [`Clock`],
//! so tests can pin "today" with a [`FixedClock`].
use chrono::{Local, NaiveDate};

/// Something that knows which calendar day it is.
pub trait Clock: std::fmt::Debug {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the host, read at every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on a single day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
