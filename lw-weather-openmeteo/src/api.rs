use lw_weather::{DailyForecast, DayForecast, GeoLocation, FORECAST_DAYS};

use crate::types::{Daily, Forecast, ReverseGeocode};
use crate::Error;

impl From<ReverseGeocode> for GeoLocation {
    fn from(value: ReverseGeocode) -> Self {
        Self {
            latitude: value.latitude,
            longitude: value.longitude,
            country_name: value.country_name,
            city: value.city,
            postcode: value.postcode,
        }
    }
}

impl TryFrom<Forecast> for DailyForecast {
    type Error = Error;

    fn try_from(value: Forecast) -> Result<Self, Self::Error> {
        let daily = value.daily;
        check_len("time", daily.time.len())?;
        check_len("temperature_2m_min", daily.temperature_2m_min.len())?;
        check_len("temperature_2m_max", daily.temperature_2m_max.len())?;
        check_len(
            "precipitation_probability_mean",
            daily.precipitation_probability_mean.len(),
        )?;
        check_len("weather_code", daily.weather_code.len())?;

        let mut forecast = DailyForecast::default();
        for (i, day) in forecast.days.iter_mut().enumerate() {
            *day = day_at(&daily, i);
        }
        Ok(forecast)
    }
}

fn check_len(field: &str, len: usize) -> Result<(), Error> {
    if len < FORECAST_DAYS {
        return Err(Error::Malformed(format!(
            "daily.{field} has {len} entries, expected {FORECAST_DAYS}"
        )));
    }
    Ok(())
}

//lengths are checked by the caller, null numbers become zero, a null code stays unset
fn day_at(daily: &Daily, i: usize) -> DayForecast {
    let precipitation = daily.precipitation_probability_mean[i].unwrap_or(0);
    DayForecast {
        date: daily.time[i].clone(),
        temperature_min: daily.temperature_2m_min[i].unwrap_or(0.0),
        temperature_max: daily.temperature_2m_max[i].unwrap_or(0.0),
        precipitation_probability: precipitation.clamp(0, 100) as u8,
        weather_code: daily.weather_code[i],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FORECAST_JSON: &str = r#"{
        "latitude": 52.52,
        "longitude": 13.419998,
        "generationtime_ms": 0.05,
        "utc_offset_seconds": 0,
        "timezone": "GMT",
        "timezone_abbreviation": "GMT",
        "elevation": 38.0,
        "daily_units": {
            "time": "iso8601",
            "temperature_2m_min": "°C",
            "temperature_2m_max": "°C",
            "precipitation_probability_mean": "%",
            "weather_code": "wmo code"
        },
        "daily": {
            "time": ["2023-11-07","2023-11-08","2023-11-09","2023-11-10","2023-11-11","2023-11-12","2023-11-13"],
            "temperature_2m_min": [4.1, 3.0, -1.5, 2.0, 5.2, 6.0, 1.1],
            "temperature_2m_max": [9.8, 8.7, 4.0, 9.5, 11.3, 12.0, 7.4],
            "precipitation_probability_mean": [10, 35, 0, 80, 55, null, 20],
            "weather_code": [3, 61, 71, 61, 80, 95, null]
        }
    }"#;

    #[test]
    fn converts_forecast() {
        let raw: Forecast = serde_json::from_str(FORECAST_JSON).unwrap();
        let forecast = DailyForecast::try_from(raw).unwrap();
        let day3 = &forecast.days[3];
        assert_eq!(day3.date, "2023-11-10");
        assert_eq!(day3.temperature_min, 2.0);
        assert_eq!(day3.temperature_max, 9.5);
        assert_eq!(day3.precipitation_probability, 80);
        assert_eq!(day3.weather_code, Some(61));
        // null numbers decode to zero, a null code is left unset
        assert_eq!(forecast.days[5].precipitation_probability, 0);
        assert_eq!(forecast.days[6].weather_code, None);
        assert_eq!(forecast.days[0].weather_code, Some(3));
    }

    #[test]
    fn short_arrays_are_malformed() {
        let json = r#"{"daily": {
            "time": ["2023-11-07"],
            "temperature_2m_min": [1.0],
            "temperature_2m_max": [2.0],
            "precipitation_probability_mean": [0],
            "weather_code": [0]
        }}"#;
        let raw: Forecast = serde_json::from_str(json).unwrap();
        let err = DailyForecast::try_from(raw).unwrap_err();
        assert!(matches!(err, Error::Malformed(_)), "{err:?}");
    }

    #[test]
    fn long_arrays_are_truncated() {
        let time: Vec<String> = (1..=16).map(|d| format!("2023-11-{d:02}")).collect();
        let daily = Daily {
            time,
            temperature_2m_min: vec![Some(1.0); 16],
            temperature_2m_max: vec![Some(2.0); 16],
            precipitation_probability_mean: vec![Some(150); 16],
            weather_code: vec![Some(45); 16],
        };
        let forecast = DailyForecast::try_from(Forecast { daily }).unwrap();
        assert_eq!(forecast.days[6].date, "2023-11-07");
        assert_eq!(forecast.days[6].precipitation_probability, 100);
    }

    #[test]
    fn converts_location_ignoring_extra_fields() {
        let json = r#"{
            "latitude": 52.52,
            "lookupSource": "ipGeolocation",
            "longitude": 13.40,
            "countryName": "Deutschland",
            "countryCode": "DE",
            "city": "Berlin",
            "postcode": "10115",
            "localityInfo": {"administrative": []}
        }"#;
        let raw: ReverseGeocode = serde_json::from_str(json).unwrap();
        let location = GeoLocation::from(raw);
        assert_eq!(location.city, "Berlin");
        assert_eq!(location.country_name, "Deutschland");
        assert_eq!(location.postcode, "10115");
        assert_eq!(location.latitude, 52.52);
    }

    #[test]
    fn location_tolerates_missing_names() {
        let raw: ReverseGeocode =
            serde_json::from_str(r#"{"latitude": 1.5, "longitude": 2.5}"#).unwrap();
        let location = GeoLocation::from(raw);
        assert!(location.city.is_empty());
        assert_eq!(location.longitude, 2.5);
    }
}
