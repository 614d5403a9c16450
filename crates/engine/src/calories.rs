//! Calorie intake tracking.
use crate::{
    clock::Clock,
    tracker::{DailyLimit, Tracker},
};

/// Tracks calories eaten against a daily intake limit.
#[derive(Debug)]
pub struct CalorieTracker {
    tracker: Tracker,
}

impl CalorieTracker {
    pub fn new(limit: f64) -> Self {
        Self {
            tracker: Tracker::new(limit),
        }
    }

    pub fn with_clock(limit: f64, clock: impl Clock + 'static) -> Self {
        Self {
            tracker: Tracker::with_clock(limit, clock),
        }
    }

    /// Tells whether something else can be eaten today.
    ///
    /// Reaching the limit exactly already counts as having eaten enough.
    #[must_use]
    pub fn calories_advice(&self) -> String {
        if self.limit() > self.today_total() {
            format!(
                "Сегодня можно съесть что-нибудь ещё, но с общей калорийностью не более {} кКал.",
                self.today_remaining()
            )
        } else {
            "Хватит есть!".to_string()
        }
    }
}

impl DailyLimit for CalorieTracker {
    fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    fn tracker_mut(&mut self) -> &mut Tracker {
        &mut self.tracker
    }
}
