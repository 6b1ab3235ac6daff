mod api;
mod types;

use log::{debug, error, info};
use lw_weather::{DailyForecast, GeoLocation};
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

pub const BIGDATACLOUD_URL: &str = "https://api.bigdatacloud.net/data/reverse-geocode-client";
pub const OPEN_METEO_URL: &str = "https://api.open-meteo.com/v1/forecast";

const DAILY_FIELDS: &str =
    "temperature_2m_min,temperature_2m_max,precipitation_probability_mean,weather_code";

#[derive(Debug, Error)]
pub enum Error {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("malformed payload: {0}")]
    Malformed(String),
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

/// Everything shown by the app, fetched once at startup
#[derive(Debug, Clone, Default)]
pub struct LocalWeather {
    pub location: GeoLocation,
    pub forecast: DailyForecast,
    /// failures that left `location` or `forecast` zeroed
    pub errors: Vec<String>,
}

pub struct OpenMeteo {
    client: Client,
    location_url: String,
    forecast_url: String,
}

impl OpenMeteo {
    pub fn new(location_url: &str, forecast_url: &str) -> Result<Self, Error> {
        // fail early on bad config instead of on first request
        Url::parse(location_url)?;
        Url::parse(forecast_url)?;
        Ok(Self {
            client: Client::builder().build()?,
            location_url: location_url.to_owned(),
            forecast_url: forecast_url.to_owned(),
        })
    }

    /// Location of the caller, resolved from its IP
    pub fn get_location(&self) -> Result<GeoLocation, Error> {
        let raw: types::ReverseGeocode = self.get_json(Url::parse(&self.location_url)?)?;
        Ok(raw.into())
    }

    pub fn get_forecast(&self, location: &GeoLocation) -> Result<DailyForecast, Error> {
        let url = self.forecast_url(location)?;
        let raw: types::Forecast = self.get_json(url)?;
        raw.try_into()
    }

    pub fn forecast_url(&self, location: &GeoLocation) -> Result<Url, Error> {
        Ok(Url::parse_with_params(
            &self.forecast_url,
            &[
                ("latitude", format!("{:.6}", location.latitude)),
                ("longitude", format!("{:.6}", location.longitude)),
                ("daily", DAILY_FIELDS.to_owned()),
            ],
        )?)
    }

    /// Fetches location then forecast. Never fails: a failed step is logged,
    /// recorded in `errors` and leaves its part at the zero default.
    /// The forecast is still requested when the location lookup fails.
    pub fn load(&self) -> LocalWeather {
        let mut weather = LocalWeather::default();
        match self.get_location() {
            Ok(location) => {
                info!("location: {} {}", location.postcode, location.city);
                weather.location = location;
            }
            Err(e) => {
                error!("location lookup failed: {e}");
                weather.errors.push(format!("location: {e}"));
            }
        }
        match self.get_forecast(&weather.location) {
            Ok(forecast) => {
                info!("forecast loaded");
                weather.forecast = forecast;
            }
            Err(e) => {
                error!("forecast failed: {e}");
                weather.errors.push(format!("forecast: {e}"));
            }
        }
        weather
    }

    fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {url}");
        let res = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()?;
        let status = res.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }
        let body = res.bytes()?;
        Ok(serde_json::from_slice(&body)?)
    }
}
