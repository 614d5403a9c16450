//! Handles settings for the application. Configuration is read from
//! `config/daily_limit.toml` (optional), then from `DAILY_LIMIT__*`
//! environment variables, then from command line flags.
use chrono::NaiveDate;
use clap::Parser;
use config::{Config, Environment, File};
use engine::{DATE_FORMAT, Rates};
use serde::Deserialize;

use crate::error::{AppError, Result};

const DEFAULT_CONFIG_PATH: &str = "config/daily_limit.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    /// Daily limit shared by the cash and calorie trackers.
    pub limit: f64,
    /// Currency code the cash advice is printed in.
    pub currency: String,
    pub rates: Rates,
    /// Pins "today" instead of reading the local date.
    #[serde(skip)]
    pub today: Option<NaiveDate>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: App::default(),
            limit: 1000.0,
            currency: "rub".to_string(),
            rates: Rates::default(),
            today: None,
        }
    }
}

#[derive(Debug, Default, Parser)]
#[command(name = "daily_limit", about = "Track spending and calories against a daily limit")]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the daily limit.
    #[arg(long)]
    limit: Option<f64>,
    /// Override the advice currency (rub, eur, usd).
    #[arg(long)]
    currency: Option<String>,
    /// Override the log level.
    #[arg(long)]
    level: Option<String>,
    /// Use this day (DD.MM.YYYY) as today.
    #[arg(long)]
    today: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    fn from_args(args: Args) -> Result<Self> {
        let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
        let mut settings: Settings = Config::builder()
            .add_source(File::with_name(config_path).required(false))
            .add_source(Environment::with_prefix("DAILY_LIMIT").separator("__"))
            .build()?
            .try_deserialize()?;

        if let Some(limit) = args.limit {
            settings.limit = limit;
        }
        if let Some(currency) = args.currency {
            settings.currency = currency;
        }
        if let Some(level) = args.level {
            settings.app.level = level;
        }
        if let Some(today) = args.today {
            settings.today = Some(parse_day(&today)?);
        }

        Ok(settings)
    }
}

fn parse_day(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| AppError::Date(value.to_string()))
}
