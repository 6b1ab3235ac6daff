mod config;
mod input;
#[cfg(not(feature = "window"))]
mod shell;
#[cfg(feature = "window")]
mod window;

use log::{info, warn};
use lw_ui::AppState;
use lw_weather_openmeteo::OpenMeteo;

use config::Config;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    //Load Config
    let config = Config::load(&std::env::current_dir()?)?;

    info!("fetching location and forecast");
    let weather_api = OpenMeteo::new(&config.api.location_url, &config.api.forecast_url)?;
    let weather = weather_api.load();
    let status = if weather.errors.is_empty() {
        None
    } else {
        warn!("showing incomplete data");
        Some(weather.errors.join("; "))
    };
    let mut state = AppState::new(weather.location, &weather.forecast, config.language, status);

    run(&config, &mut state)
}

#[cfg(feature = "window")]
fn run(config: &Config, state: &mut AppState) -> anyhow::Result<()> {
    window::run(&config.window, state)
}

#[cfg(not(feature = "window"))]
fn run(config: &Config, state: &mut AppState) -> anyhow::Result<()> {
    info!(
        "built without the window feature, showing '{}' in the terminal",
        config.window.title
    );
    shell::run(state, std::io::stdin().lock(), std::io::stdout())?;
    Ok(())
}
