use std::convert::Infallible;

use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::Rectangle};
use thiserror::Error;

use crate::palette;
use crate::state::AppState;

pub mod help;
pub mod weather;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("BMP: {0:?}")]
    Bmp(tinybmp::ParseError),
    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

impl From<Infallible> for PageError {
    fn from(value: Infallible) -> Self {
        match value {}
    }
}

/// Draws the selected day and, when open, the help dialog over it
pub fn draw_screen<D, E>(display: &mut D, state: &AppState) -> Result<(), PageError>
where
    E: Into<PageError>,
    D: DrawTarget<Color = Rgb888, Error = E>,
{
    weather::draw(display, state)?;
    if state.help_open() {
        help::draw(display)?;
    }
    Ok(())
}

/// Vertical gradient from [`palette::GRADIENT_TOP`] to [`palette::GRADIENT_BOTTOM`]
pub fn draw_background<D, E>(display: &mut D) -> Result<(), PageError>
where
    E: Into<PageError>,
    D: DrawTarget<Color = Rgb888, Error = E>,
{
    let area = display.bounding_box();
    let rows = area.size.height;
    for row in 0..rows {
        let line = Rectangle::new(
            area.top_left + Point::new(0, row as i32),
            Size::new(area.size.width, 1),
        );
        display
            .fill_solid(&line, gradient_at(row, rows))
            .map_err(|e| e.into())?;
    }
    Ok(())
}

pub fn gradient_at(row: u32, rows: u32) -> Rgb888 {
    let t = if rows > 1 {
        f64::from(row) / f64::from(rows - 1)
    } else {
        0.0
    };
    let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
    let (top, bottom) = (palette::GRADIENT_TOP, palette::GRADIENT_BOTTOM);
    Rgb888::new(
        mix(top.r(), bottom.r()),
        mix(top.g(), bottom.g()),
        mix(top.b(), bottom.b()),
    )
}
