use embedded_graphics::{
    mono_font::{iso_8859_1::FONT_7X13_BOLD, MonoTextStyle},
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

use super::Widget;
use crate::palette;

/// Filled track with the percentage centered on top
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProgressBar {
    value: f64,
}

impl ProgressBar {
    /// `value` is a fraction, anything outside 0.0..=1.0 is clamped
    pub fn new(value: f64) -> Self {
        Self {
            value: value.clamp(0.0, 1.0),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn label(&self) -> String {
        format!("{:.0}%", self.value * 100.0)
    }

    pub fn fill(&self, area: Rectangle) -> Rectangle {
        let width = (self.value * f64::from(area.size.width)).round() as u32;
        Rectangle::new(area.top_left, Size::new(width, area.size.height))
    }
}

impl Widget for ProgressBar {
    fn min_size(&self) -> Size {
        Size::new(100, 20)
    }

    fn draw_in<D>(&self, area: Rectangle, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        area.into_styled(PrimitiveStyle::with_fill(palette::PROGRESS_TRACK))
            .draw(target)?;
        self.fill(area)
            .into_styled(PrimitiveStyle::with_fill(palette::PROGRESS_FILL))
            .draw(target)?;
        Text::with_text_style(
            &self.label(),
            area.center(),
            MonoTextStyle::new(&FONT_7X13_BOLD, palette::TEXT),
            TextStyleBuilder::new()
                .alignment(Alignment::Center)
                .baseline(Baseline::Middle)
                .build(),
        )
        .draw(target)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics_simulator::SimulatorDisplay;

    #[test]
    fn fill_follows_value() {
        let area = Rectangle::new(Point::new(20, 0), Size::new(340, 20));
        assert_eq!(ProgressBar::new(0.8).fill(area).size.width, 272);
        assert_eq!(ProgressBar::new(0.0).fill(area).size.width, 0);
        assert_eq!(ProgressBar::new(1.7).fill(area).size.width, 340);
        assert_eq!(ProgressBar::new(-0.2).value(), 0.0);
    }

    #[test]
    fn label_is_percent() {
        assert_eq!(ProgressBar::new(0.8).label(), "80%");
        assert_eq!(ProgressBar::new(0.0).label(), "0%");
    }

    #[test]
    fn draws_track_and_fill() {
        let mut display = SimulatorDisplay::<Rgb888>::new(Size::new(200, 20));
        let area = Rectangle::new(Point::zero(), Size::new(200, 20));
        ProgressBar::new(0.25).draw_in(area, &mut display).unwrap();
        assert_eq!(display.get_pixel(Point::new(1, 1)), palette::PROGRESS_FILL);
        assert_eq!(display.get_pixel(Point::new(49, 1)), palette::PROGRESS_FILL);
        assert_eq!(display.get_pixel(Point::new(50, 1)), palette::PROGRESS_TRACK);
        assert_eq!(display.get_pixel(Point::new(199, 19)), palette::PROGRESS_TRACK);
    }
}
