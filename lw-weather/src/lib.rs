mod condition;
mod date;
mod view;

pub use condition::{Condition, Language};
pub use date::format_date_eu;
pub use view::{present, DayView};

/// Number of days the forecast covers, day 0 is today
pub const FORECAST_DAYS: usize = 7;

/// Location resolved from the client IP
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoLocation {
    pub latitude: f64,
    pub longitude: f64,
    pub country_name: String,
    pub city: String,
    pub postcode: String,
}

/// Forecast for a single calendar day
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayForecast {
    /// ISO `YYYY-MM-DD` as sent by the api
    pub date: String,
    pub temperature_min: f64,
    pub temperature_max: f64,
    /// percent, 0..=100
    pub precipitation_probability: u8,
    /// WMO code, `None` when the api sent none or the fetch failed
    pub weather_code: Option<i32>,
}

/// Exactly [`FORECAST_DAYS`] entries indexed by day offset from today
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyForecast {
    pub days: [DayForecast; FORECAST_DAYS],
}
