use serde::Deserialize;

// BigDataCloud reverse-geocode-client, only the fields we show are kept
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseGeocode {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country_name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub postcode: String,
}

#[derive(Debug, Deserialize)]
pub struct Forecast {
    pub daily: Daily,
}

// parallel arrays, one entry per day
#[derive(Debug, Deserialize)]
pub struct Daily {
    pub time: Vec<String>,
    pub temperature_2m_min: Vec<Option<f64>>,
    pub temperature_2m_max: Vec<Option<f64>>,
    pub precipitation_probability_mean: Vec<Option<i64>>,
    pub weather_code: Vec<Option<i32>>,
}
