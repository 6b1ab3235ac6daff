use std::path::Path;

use anyhow::{bail, Context};
use lw_weather::Language;
use serde::Deserialize;

const DEFAULT_CONFIG: &str = include_str!("../config.toml");
pub const OVERRIDE_FILE: &str = "localweather.toml";
const MIN_WIDTH: u32 = 300;
const MIN_HEIGHT: u32 = 600;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub language: Language,
    pub window: ConfigWindow,
    pub api: ConfigApi,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ConfigWindow {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub scale: u32,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ConfigApi {
    pub location_url: String,
    pub forecast_url: String,
}

impl Default for ConfigWindow {
    fn default() -> Self {
        Self {
            title: "LocalWeather".to_owned(),
            width: 380,
            height: 700,
            scale: 1,
        }
    }
}

impl Default for ConfigApi {
    fn default() -> Self {
        Self {
            location_url: lw_weather_openmeteo::BIGDATACLOUD_URL.to_owned(),
            forecast_url: lw_weather_openmeteo::OPEN_METEO_URL.to_owned(),
        }
    }
}

impl Config {
    /// Built in defaults, replaced by `localweather.toml` in `dir` when present
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        let path = dir.join(OVERRIDE_FILE);
        let config = if path.exists() {
            log::info!("loading config from {}", path.display());
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            Self::parse(&text).with_context(|| format!("parsing {}", path.display()))?
        } else {
            Self::parse(DEFAULT_CONFIG).context("parsing built in config")?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        let window = &self.window;
        if window.width < MIN_WIDTH || window.height < MIN_HEIGHT {
            bail!(
                "window must be at least {MIN_WIDTH}x{MIN_HEIGHT}, got {}x{}",
                window.width,
                window.height
            );
        }
        if window.scale == 0 {
            bail!("window.scale must be at least 1");
        }
        Ok(())
    }
}
