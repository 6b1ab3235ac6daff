use embedded_graphics::{
    mono_font::iso_8859_1::{FONT_6X13, FONT_7X13, FONT_9X18_BOLD},
    pixelcolor::Rgb888,
    prelude::*,
    primitives::Rectangle,
};
use log::debug;
use lw_weather::Language;

use super::{draw_background, PageError};
use crate::icons::{draw_icon, ICON_SIZE};
use crate::palette;
use crate::state::AppState;
use crate::widgets::{draw_label, Button, ButtonIcon, ProgressBar, TemperatureBar, Widget};

const MARGIN: i32 = 20;
const NAV_BUTTON: Size = Size::new(50, 30);
const HELP_BUTTON: Size = Size::new(40, 30);

/// Where every element of a day panel goes on a `size` screen
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayout {
    pub previous: Rectangle,
    pub date: Rectangle,
    pub next: Rectangle,
    pub help: Rectangle,
    pub min_label: Rectangle,
    pub min_bar: Rectangle,
    pub max_label: Rectangle,
    pub max_bar: Rectangle,
    pub rain_label: Rectangle,
    pub rain_bar: Rectangle,
    pub description: Rectangle,
    pub icon: Point,
    pub city: Rectangle,
    pub country: Rectangle,
    pub status: Rectangle,
}

impl PanelLayout {
    pub fn new(size: Size) -> Self {
        let width = size.width as i32;
        let height = size.height as i32;
        let content = (width - 2 * MARGIN).max(0) as u32;
        let row = |y: i32, h: u32| Rectangle::new(Point::new(MARGIN, y), Size::new(content, h));

        let previous = Rectangle::new(Point::new(MARGIN, 10), NAV_BUTTON);
        let help = Rectangle::new(
            Point::new(width - MARGIN - HELP_BUTTON.width as i32, 10),
            HELP_BUTTON,
        );
        let next = Rectangle::new(
            Point::new(help.top_left.x - 8 - NAV_BUTTON.width as i32, 10),
            NAV_BUTTON,
        );
        let date_x = previous.top_left.x + NAV_BUTTON.width as i32;
        let date = Rectangle::new(
            Point::new(date_x, 16),
            Size::new((next.top_left.x - date_x).max(0) as u32, 20),
        );

        Self {
            previous,
            date,
            next,
            help,
            min_label: row(52, 16),
            min_bar: row(70, 25),
            max_label: row(107, 16),
            max_bar: row(125, 25),
            rain_label: row(162, 16),
            rain_bar: row(180, 20),
            description: row(212, 30),
            icon: Point::new((width - ICON_SIZE.width as i32) / 2, 250),
            city: row(height - 110, 16),
            country: row(height - 88, 16),
            status: row(height - 56, 30),
        }
    }
}

pub fn draw<D, E>(display: &mut D, state: &AppState) -> Result<(), PageError>
where
    E: Into<PageError>,
    D: DrawTarget<Color = Rgb888, Error = E>,
{
    let layout = PanelLayout::new(display.bounding_box().size);
    let day = state.selected();
    debug!("drawing day {} ({})", state.selected_day(), day.date);

    draw_background(display)?;

    Button::new(ButtonIcon::Rewind)
        .draw_in(layout.previous, display)
        .map_err(|e| e.into())?;
    Button::new(ButtonIcon::FastForward)
        .draw_in(layout.next, display)
        .map_err(|e| e.into())?;
    if state.shows_help_button() {
        Button::new(ButtonIcon::Help)
            .draw_in(layout.help, display)
            .map_err(|e| e.into())?;
    }
    draw_label(&day.date, &FONT_9X18_BOLD, palette::TEXT, layout.date, display)
        .map_err(|e| e.into())?;

    draw_label(day.min_label(), &FONT_7X13, palette::TEXT, layout.min_label, display)
        .map_err(|e| e.into())?;
    TemperatureBar::new(day.temperature_min)
        .draw_in(layout.min_bar, display)
        .map_err(|e| e.into())?;
    draw_label(day.max_label(), &FONT_7X13, palette::TEXT, layout.max_label, display)
        .map_err(|e| e.into())?;
    TemperatureBar::new(day.temperature_max)
        .draw_in(layout.max_bar, display)
        .map_err(|e| e.into())?;

    draw_label(
        &day.precipitation_label(),
        &FONT_7X13,
        palette::TEXT,
        layout.rain_label,
        display,
    )
    .map_err(|e| e.into())?;
    ProgressBar::new(day.precipitation_fraction())
        .draw_in(layout.rain_bar, display)
        .map_err(|e| e.into())?;

    draw_label(day.description, &FONT_6X13, palette::TEXT, layout.description, display)
        .map_err(|e| e.into())?;
    draw_icon(display, day.condition, layout.icon)?;

    let location = state.location();
    draw_label(&day.city_label(location), &FONT_7X13, palette::TEXT, layout.city, display)
        .map_err(|e| e.into())?;
    draw_label(
        &day.country_label(location),
        &FONT_7X13,
        palette::TEXT,
        layout.country,
        display,
    )
    .map_err(|e| e.into())?;

    if let Some(status) = state.status() {
        let prefix = match state.language() {
            Language::German => "Fehler",
            Language::English => "Error",
        };
        draw_label(
            &format!("{prefix}: {status}"),
            &FONT_6X13,
            palette::ERROR,
            layout.status,
            display,
        )
        .map_err(|e| e.into())?;
    }
    Ok(())
}
