//! Daily limit trackers for money and calories.
//!
//! A tracker holds a limit and the [`Record`]s added to it, and answers how
//! much was spent today, over the last week and how much is left. See
//! [`CashTracker`] and [`CalorieTracker`] for the advice they give.
pub use calories::CalorieTracker;
pub use cash::CashTracker;
pub use clock::{Clock, FixedClock, SystemClock};
pub use currency::{Currency, Rates};
pub use error::EngineError;
pub use record::{DATE_FORMAT, Record, format_date};
pub use tracker::{DailyLimit, Summary, Tracker, WEEK_DAYS};

mod calories;
mod cash;
mod clock;
mod currency;
mod error;
mod record;
mod tracker;

type ResultEngine<T> = Result<T, EngineError>;
