use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use profont::PROFONT_14_POINT;

use super::Widget;
use crate::palette;

pub const MIN_TEMPERATURE: f64 = -60.0;
pub const MAX_TEMPERATURE: f64 = 60.0;
const PADDING: u32 = 2;
const MIN_SIZE: Size = Size::new(100, 25);

/// Horizontal bar showing one temperature in °C.
///
/// The bar spans [`MIN_TEMPERATURE`]..[`MAX_TEMPERATURE`] over the inner width,
/// blue below zero and red from zero up. Values outside the range are clamped
/// for the bar only, the label always shows the real value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TemperatureBar {
    temperature: f64,
}

/// Geometry of one layout pass, in draw order
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureBarLayout {
    pub frame: Rectangle,
    pub bar: Rectangle,
    pub bar_color: Rgb888,
    pub label: String,
    pub label_area: Rectangle,
}

impl TemperatureBar {
    pub fn new(temperature: f64) -> Self {
        Self { temperature }
    }

    /// Replaces the value, the caller redraws
    pub fn set_temperature(&mut self, temperature: f64) {
        self.temperature = temperature;
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn clamped(&self) -> f64 {
        self.temperature.clamp(MIN_TEMPERATURE, MAX_TEMPERATURE)
    }

    /// Position of the clamped value within the display range, 0.0..=1.0
    pub fn progress(&self) -> f64 {
        (self.clamped() - MIN_TEMPERATURE) / (MAX_TEMPERATURE - MIN_TEMPERATURE)
    }

    pub fn bar_color(&self) -> Rgb888 {
        if self.clamped() < 0.0 {
            palette::COLD
        } else {
            palette::WARM
        }
    }

    pub fn label(&self) -> String {
        format!("{:.1}°", self.temperature)
    }

    pub fn layout(&self, area: Rectangle) -> TemperatureBarLayout {
        let inner_size = Size::new(
            area.size.width.saturating_sub(2 * PADDING),
            area.size.height.saturating_sub(2 * PADDING),
        );
        let inner_origin = area.top_left + Point::new(PADDING as i32, PADDING as i32);
        let bar_width = (self.progress() * f64::from(inner_size.width)).round() as u32;
        TemperatureBarLayout {
            frame: area,
            bar: Rectangle::new(inner_origin, Size::new(bar_width, inner_size.height)),
            bar_color: self.bar_color(),
            label: self.label(),
            label_area: Rectangle::new(inner_origin, inner_size),
        }
    }
}

impl Widget for TemperatureBar {
    fn min_size(&self) -> Size {
        MIN_SIZE
    }

    fn draw_in<D>(&self, area: Rectangle, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let layout = self.layout(area);
        // transparent fill, border only
        let frame_style = PrimitiveStyleBuilder::new()
            .stroke_color(palette::FRAME)
            .stroke_width(1)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        layout.frame.into_styled(frame_style).draw(target)?;
        layout
            .bar
            .into_styled(PrimitiveStyle::with_fill(layout.bar_color))
            .draw(target)?;

        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();
        Text::with_text_style(
            &layout.label,
            layout.label_area.center(),
            MonoTextStyle::new(&PROFONT_14_POINT, palette::ACCENT),
            text_style,
        )
        .draw(target)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics_simulator::SimulatorDisplay;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn progress_over_display_range() {
        assert_eq!(TemperatureBar::new(-60.0).progress(), 0.0);
        assert_eq!(TemperatureBar::new(0.0).progress(), 0.5);
        assert_eq!(TemperatureBar::new(60.0).progress(), 1.0);
        assert!(close(TemperatureBar::new(2.0).progress(), 0.5167));
        assert!(close(TemperatureBar::new(9.5).progress(), 0.5792));

        let mut last = -1.0;
        for t in -60..=60 {
            let p = TemperatureBar::new(f64::from(t)).progress();
            assert!((0.0..=1.0).contains(&p));
            assert!(p > last, "not increasing at {t}");
            last = p;
        }
    }

    #[test]
    fn out_of_range_clamps_width() {
        let area = Rectangle::new(Point::zero(), Size::new(124, 25));
        let low = TemperatureBar::new(-60.0).layout(area).bar;
        let high = TemperatureBar::new(60.0).layout(area).bar;
        assert_eq!(TemperatureBar::new(-85.3).layout(area).bar, low);
        assert_eq!(TemperatureBar::new(f64::MIN).layout(area).bar, low);
        assert_eq!(TemperatureBar::new(71.0).layout(area).bar, high);
        assert_eq!(low.size.width, 0);
        assert_eq!(high.size.width, 120);
    }

    #[test]
    fn color_threshold_at_zero() {
        assert_eq!(TemperatureBar::new(-0.1).bar_color(), palette::COLD);
        assert_eq!(TemperatureBar::new(-75.0).bar_color(), palette::COLD);
        assert_eq!(TemperatureBar::new(0.0).bar_color(), palette::WARM);
        assert_eq!(TemperatureBar::new(2.0).bar_color(), palette::WARM);
        assert_eq!(TemperatureBar::new(99.0).bar_color(), palette::WARM);
    }

    #[test]
    fn label_uses_unclamped_value() {
        assert_eq!(TemperatureBar::new(21.0).label(), "21.0°");
        assert_eq!(TemperatureBar::new(-3.45).label(), "-3.5°");
        assert_eq!(TemperatureBar::new(-72.26).label(), "-72.3°");
        assert_eq!(TemperatureBar::new(80.0).label(), "80.0°");
    }

    #[test]
    fn layout_geometry() {
        let area = Rectangle::new(Point::new(10, 20), Size::new(104, 29));
        let layout = TemperatureBar::new(0.0).layout(area);
        assert_eq!(layout.frame, area);
        assert_eq!(layout.bar.top_left, Point::new(12, 22));
        assert_eq!(layout.bar.size, Size::new(50, 25));
        assert_eq!(layout.label_area, Rectangle::new(Point::new(12, 22), Size::new(100, 25)));
    }

    #[test]
    fn min_size_ignores_value() {
        assert_eq!(TemperatureBar::new(-40.0).min_size(), Size::new(100, 25));
        assert_eq!(TemperatureBar::new(40.0).min_size(), Size::new(100, 25));
    }

    #[test]
    fn set_temperature_changes_layout() {
        let area = Rectangle::new(Point::zero(), Size::new(104, 29));
        let mut bar = TemperatureBar::default();
        bar.set_temperature(-30.0);
        assert_eq!(bar.temperature(), -30.0);
        let layout = bar.layout(area);
        assert_eq!(layout.bar.size.width, 25);
        assert_eq!(layout.bar_color, palette::COLD);
    }

    #[test]
    fn draws_frame_and_bar() {
        let mut display = SimulatorDisplay::<Rgb888>::new(Size::new(104, 29));
        let area = Rectangle::new(Point::zero(), Size::new(104, 29));
        TemperatureBar::new(0.0).draw_in(area, &mut display).unwrap();
        assert_eq!(display.get_pixel(Point::new(0, 0)), palette::FRAME);
        assert_eq!(display.get_pixel(Point::new(103, 28)), palette::FRAME);
        assert_eq!(display.get_pixel(Point::new(4, 2)), palette::WARM);
        assert_eq!(display.get_pixel(Point::new(51, 2)), palette::WARM);
        // frame is not filled
        assert_eq!(display.get_pixel(Point::new(98, 2)), Rgb888::BLACK);

        let mut display = SimulatorDisplay::<Rgb888>::new(Size::new(104, 29));
        TemperatureBar::new(-30.0).draw_in(area, &mut display).unwrap();
        assert_eq!(display.get_pixel(Point::new(4, 2)), palette::COLD);
        assert_eq!(display.get_pixel(Point::new(26, 2)), palette::COLD);
        assert_eq!(display.get_pixel(Point::new(27, 2)), Rgb888::BLACK);
    }
}
