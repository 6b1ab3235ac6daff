use anyhow::anyhow;
use embedded_graphics::{pixelcolor::Rgb888, prelude::*};
use lw_weather::Condition;
use tinybmp::Bmp;

use crate::pages::PageError;
use crate::Icons128;

pub const ICON_SIZE: Size = Size::new(128, 128);

/// Returns bmp file name to load
pub fn condition_to_image(condition: Condition) -> &'static str {
    match condition {
        Condition::ClearSky => "clear.bmp",
        Condition::PartlyCloudy => "partly_cloudy.bmp",
        Condition::Fog => "fog.bmp",
        Condition::Drizzle => "drizzle.bmp",
        Condition::FreezingDrizzle => "freezing_drizzle.bmp",
        Condition::Rain => "rain.bmp",
        Condition::FreezingRain => "freezing_rain.bmp",
        Condition::Snow => "snow.bmp",
        Condition::SnowGrains => "snow_grains.bmp",
        Condition::RainShowers => "rain_showers.bmp",
        Condition::SnowShowers => "snow_showers.bmp",
        Condition::Thunderstorm => "thunderstorm.bmp",
        Condition::ThunderstormHail => "thunderstorm_hail.bmp",
        Condition::Unknown => "unknown.bmp",
    }
}

/// Draws the icon with its top left corner at `origin`, black pixels are skipped
pub fn draw_icon<D, E>(display: &mut D, condition: Condition, origin: Point) -> Result<(), PageError>
where
    E: Into<PageError>,
    D: DrawTarget<Color = Rgb888, Error = E>,
{
    let icon_path = condition_to_image(condition);
    let Some(icon) = Icons128::get(icon_path) else {
        return Err(anyhow!("Couldn't find icon: {}", icon_path).into());
    };
    let bmp = Bmp::<Rgb888>::from_slice(&icon.data).map_err(PageError::Bmp)?;
    display
        .draw_iter(
            bmp.pixels()
                .filter(|Pixel(_, color)| *color != Rgb888::BLACK)
                .map(|Pixel(point, color)| Pixel(point + origin, color)),
        )
        .map_err(|e| e.into())?;
    Ok(())
}
