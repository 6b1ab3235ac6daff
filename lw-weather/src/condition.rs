use serde::Deserialize;

/// WMO weather code groups as reported by Open-Meteo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    ClearSky,
    PartlyCloudy,
    Fog,
    Drizzle,
    FreezingDrizzle,
    Rain,
    FreezingRain,
    Snow,
    SnowGrains,
    RainShowers,
    SnowShowers,
    Thunderstorm,
    ThunderstormHail,
    Unknown,
}

/// Language of the text resources
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "de")]
    German,
    #[serde(rename = "en")]
    English,
}

impl From<i32> for Condition {
    fn from(code: i32) -> Self {
        match code {
            0 => Condition::ClearSky,
            1 | 2 | 3 => Condition::PartlyCloudy,
            45 | 48 => Condition::Fog,
            51 | 53 | 55 => Condition::Drizzle,
            56 | 57 => Condition::FreezingDrizzle,
            61 | 63 | 65 => Condition::Rain,
            66 | 67 => Condition::FreezingRain,
            71 | 73 | 75 => Condition::Snow,
            77 => Condition::SnowGrains,
            80 | 81 | 82 => Condition::RainShowers,
            85 | 86 => Condition::SnowShowers,
            95 => Condition::Thunderstorm,
            96 | 99 => Condition::ThunderstormHail,
            _ => Condition::Unknown,
        }
    }
}

impl Condition {
    pub fn description(self, language: Language) -> &'static str {
        match language {
            Language::German => self.description_de(),
            Language::English => self.description_en(),
        }
    }

    fn description_de(self) -> &'static str {
        match self {
            Condition::ClearSky => "klarer Himmel",
            Condition::PartlyCloudy => "hauptsächlich klar, teilweise bewölkt",
            Condition::Fog => "Nebel und sich ablagernder Raureifnebel",
            Condition::Drizzle => "Nieselregen: Leichte, mäßige und dichte Intensität",
            Condition::FreezingDrizzle => "Gefrierender Nieselregen: Leichte und dichte Intensität",
            Condition::Rain => "Regen: Leichte, mäßige und starke Intensität",
            Condition::FreezingRain => "gefrierender Regen: Leichte und dichte Intensität",
            Condition::Snow => "Schnee: Leichte, mäßige und starke Intensität",
            Condition::SnowGrains => "Schneekörner",
            Condition::RainShowers => "Regenschauer: Leicht, mäßig und heftig",
            Condition::SnowShowers => "leichte und heftige Schneeschauer",
            Condition::Thunderstorm => "Gewitter: Leicht oder mäßig",
            Condition::ThunderstormHail => "Gewitter mit leichtem und schwerem Hagel",
            Condition::Unknown => "unbekannt",
        }
    }

    fn description_en(self) -> &'static str {
        match self {
            Condition::ClearSky => "clear sky",
            Condition::PartlyCloudy => "mainly clear, partly cloudy",
            Condition::Fog => "fog and depositing rime fog",
            Condition::Drizzle => "drizzle: light, moderate and dense",
            Condition::FreezingDrizzle => "freezing drizzle: light and dense",
            Condition::Rain => "rain: light, moderate and heavy",
            Condition::FreezingRain => "freezing rain: light and heavy",
            Condition::Snow => "snow: light, moderate and heavy",
            Condition::SnowGrains => "snow grains",
            Condition::RainShowers => "rain showers: light, moderate and violent",
            Condition::SnowShowers => "light and heavy snow showers",
            Condition::Thunderstorm => "thunderstorm: light or moderate",
            Condition::ThunderstormHail => "thunderstorm with light and heavy hail",
            Condition::Unknown => "unknown",
        }
    }
}
