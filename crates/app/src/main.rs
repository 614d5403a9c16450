use engine::{CalorieTracker, CashTracker, Clock, DailyLimit, FixedClock, Record, SystemClock};

mod error;
mod settings;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "daily_limit={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let (cash, mut calories) = match settings.today {
        Some(day) => {
            tracing::info!("Pinning today to {day}");
            (
                CashTracker::with_clock(settings.limit, FixedClock(day)),
                CalorieTracker::with_clock(settings.limit, FixedClock(day)),
            )
        }
        None => (
            CashTracker::new(settings.limit),
            CalorieTracker::new(settings.limit),
        ),
    };
    let mut cash = cash.with_rates(settings.rates);
    let today = settings.today.unwrap_or_else(|| SystemClock.today());

    cash.add_record(Record::on(145.0, "кофе", today));
    cash.add_record(Record::on(300.0, "Серёге за обед", today));
    cash.add_record(Record::with_date(
        3000.0,
        "Бар на Танин день рождения",
        "08.11.2022",
    ));

    calories.add_record(Record::on(118.0, "Кусок тортика. И ещё один.", today));
    calories.add_record(Record::on(84.0, "Йогурт.", today));
    calories.add_record(Record::with_date(1140.0, "Баночка чипсов.", "24.02.2019"));

    for record in cash.records().iter().chain(calories.records()) {
        tracing::debug!("{record}");
    }
    tracing::debug!(summary = ?cash.summary(), "cash");
    tracing::debug!(summary = ?calories.summary(), "calories");

    println!("{}", cash.cash_advice_text(&settings.currency));
    println!("{}", calories.calories_advice());

    Ok(())
}
