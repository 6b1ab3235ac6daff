use crate::{format_date_eu, Condition, DailyForecast, DayForecast, GeoLocation, Language};

/// Display strings and values for one day panel
#[derive(Debug, Clone, PartialEq)]
pub struct DayView {
    pub date: String,
    pub temperature_min: f64,
    pub temperature_max: f64,
    pub precipitation_probability: u8,
    pub condition: Condition,
    pub description: &'static str,
    language: Language,
}

impl DayView {
    pub fn new(day: &DayForecast, language: Language) -> Self {
        let condition = day
            .weather_code
            .map_or(Condition::Unknown, Condition::from);
        Self {
            date: format_date_eu(&day.date),
            temperature_min: day.temperature_min,
            temperature_max: day.temperature_max,
            precipitation_probability: day.precipitation_probability.min(100),
            condition,
            description: condition.description(language),
            language,
        }
    }

    /// Fill level of the precipitation bar, 0.0..=1.0
    pub fn precipitation_fraction(&self) -> f64 {
        f64::from(self.precipitation_probability) / 100.0
    }

    pub fn min_label(&self) -> &'static str {
        match self.language {
            Language::German => "Min. Temperatur :",
            Language::English => "Min. temperature :",
        }
    }

    pub fn max_label(&self) -> &'static str {
        match self.language {
            Language::German => "Max. Temperatur :",
            Language::English => "Max. temperature :",
        }
    }

    pub fn precipitation_label(&self) -> String {
        match self.language {
            Language::German => format!(
                "Regenwahrscheinlichkeit : {}%",
                self.precipitation_probability
            ),
            Language::English => format!(
                "Chance of rain : {}%",
                self.precipitation_probability
            ),
        }
    }

    pub fn city_label(&self, location: &GeoLocation) -> String {
        let prefix = match self.language {
            Language::German => "Stadt",
            Language::English => "City",
        };
        format!("{prefix}: {} {}", location.postcode, location.city)
    }

    pub fn country_label(&self, location: &GeoLocation) -> String {
        let prefix = match self.language {
            Language::German => "Land",
            Language::English => "Country",
        };
        format!("{prefix}: {}", location.country_name)
    }
}

/// Builds the panels for every forecast day, in day order
pub fn present(forecast: &DailyForecast, language: Language) -> Vec<DayView> {
    forecast
        .days
        .iter()
        .map(|day| DayView::new(day, language))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FORECAST_DAYS;

    fn rainy_day() -> DayForecast {
        DayForecast {
            date: "2023-11-10".to_owned(),
            temperature_min: 2.0,
            temperature_max: 9.5,
            precipitation_probability: 80,
            weather_code: Some(61),
        }
    }

    #[test]
    fn presents_all_days_in_order() {
        let mut forecast = DailyForecast::default();
        for (i, day) in forecast.days.iter_mut().enumerate() {
            day.date = format!("2023-11-{:02}", 7 + i);
        }
        forecast.days[3] = rainy_day();
        let views = present(&forecast, Language::German);
        assert_eq!(views.len(), FORECAST_DAYS);
        assert_eq!(views[0].date, "07.11.2023");
        assert_eq!(views[3].date, "10.11.2023");
        assert_eq!(views[3].condition, Condition::Rain);
        assert_eq!(
            views[3].description,
            "Regen: Leichte, mäßige und starke Intensität"
        );
        assert_eq!(views[3].precipitation_label(), "Regenwahrscheinlichkeit : 80%");
        assert!((views[3].precipitation_fraction() - 0.8).abs() < 1e-9);
    }

    #[test]
    fn zeroed_forecast_shows_unknown_weather() {
        let views = present(&DailyForecast::default(), Language::English);
        assert!(views.iter().all(|v| v.date.is_empty()));
        assert!(views.iter().all(|v| v.precipitation_probability == 0));
        assert!(views.iter().all(|v| v.temperature_min == 0.0));
        assert!(views.iter().all(|v| v.condition == Condition::Unknown));
        assert_eq!(views[0].description, "unknown");
        let views = present(&DailyForecast::default(), Language::German);
        assert_eq!(views[6].description, "unbekannt");
    }

    #[test]
    fn code_zero_is_still_clear_sky() {
        let mut day = rainy_day();
        day.weather_code = Some(0);
        assert_eq!(DayView::new(&day, Language::English).description, "clear sky");
    }

    #[test]
    fn location_labels() {
        let location = GeoLocation {
            latitude: 52.52,
            longitude: 13.40,
            country_name: "Deutschland".to_owned(),
            city: "Berlin".to_owned(),
            postcode: "10115".to_owned(),
        };
        let view = DayView::new(&rainy_day(), Language::German);
        assert_eq!(view.city_label(&location), "Stadt: 10115 Berlin");
        assert_eq!(view.country_label(&location), "Land: Deutschland");
        let view = DayView::new(&rainy_day(), Language::English);
        assert_eq!(view.city_label(&location), "City: 10115 Berlin");
        assert_eq!(view.min_label(), "Min. temperature :");
    }

    #[test]
    fn precipitation_is_capped() {
        let mut day = rainy_day();
        day.precipitation_probability = 140;
        assert_eq!(DayView::new(&day, Language::German).precipitation_probability, 100);
    }
}
