use embedded_graphics::{
    mono_font::iso_8859_1::{FONT_7X13, FONT_9X18_BOLD},
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{PrimitiveStyleBuilder, Rectangle, StrokeAlignment},
};

use super::PageError;
use crate::palette;
use crate::widgets::{draw_label, Button, ButtonIcon, Widget};

pub const TITLE: &str = "LocalWeather";
pub const ATTRIBUTION: [&str; 4] = [
    "(c)2023 by Lennart Martens",
    "License: MIT",
    "Wetter API: Open-Meteo",
    "Location API: BigDataCloud",
];

const DIALOG: Size = Size::new(300, 200);
const OK_BUTTON: Size = Size::new(80, 30);
const LINE_HEIGHT: u32 = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct HelpLayout {
    pub dialog: Rectangle,
    pub title: Rectangle,
    pub lines: Rectangle,
    pub ok: Rectangle,
}

impl HelpLayout {
    pub fn new(size: Size) -> Self {
        let screen = Rectangle::new(Point::zero(), size);
        let dialog = Rectangle::with_center(screen.center(), DIALOG);
        let inner_width = DIALOG.width - 20;
        let origin = dialog.top_left + Point::new(10, 0);
        let ok = Rectangle::new(
            Point::new(
                dialog.center().x - OK_BUTTON.width as i32 / 2,
                dialog.top_left.y + DIALOG.height as i32 - OK_BUTTON.height as i32 - 15,
            ),
            OK_BUTTON,
        );
        Self {
            dialog,
            title: Rectangle::new(origin + Point::new(0, 15), Size::new(inner_width, 20)),
            lines: Rectangle::new(origin + Point::new(0, 50), Size::new(inner_width, LINE_HEIGHT * ATTRIBUTION.len() as u32)),
            ok,
        }
    }
}

/// Modal box drawn over the current panel
pub fn draw<D, E>(display: &mut D) -> Result<(), PageError>
where
    E: Into<PageError>,
    D: DrawTarget<Color = Rgb888, Error = E>,
{
    let layout = HelpLayout::new(display.bounding_box().size);
    let style = PrimitiveStyleBuilder::new()
        .fill_color(palette::DIALOG)
        .stroke_color(palette::FRAME)
        .stroke_width(1)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();
    layout
        .dialog
        .into_styled(style)
        .draw(display)
        .map_err(|e| e.into())?;
    draw_label(TITLE, &FONT_9X18_BOLD, palette::ACCENT, layout.title, display)
        .map_err(|e| e.into())?;
    for (i, line) in ATTRIBUTION.iter().enumerate() {
        let area = Rectangle::new(
            layout.lines.top_left + Point::new(0, i as i32 * LINE_HEIGHT as i32),
            Size::new(layout.lines.size.width, LINE_HEIGHT),
        );
        draw_label(line, &FONT_7X13, palette::TEXT, area, display).map_err(|e| e.into())?;
    }
    Button::new(ButtonIcon::Text("Ok"))
        .draw_in(layout.ok, display)
        .map_err(|e| e.into())?;
    Ok(())
}
