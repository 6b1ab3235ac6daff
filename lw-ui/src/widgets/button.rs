use embedded_graphics::{
    mono_font::{iso_8859_1::FONT_9X18_BOLD, MonoTextStyle},
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment, Triangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

use super::Widget;
use crate::palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonIcon {
    Rewind,
    FastForward,
    Help,
    Text(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub icon: ButtonIcon,
}

impl Button {
    pub fn new(icon: ButtonIcon) -> Self {
        Self { icon }
    }

    pub fn hit(area: &Rectangle, point: Point) -> bool {
        area.contains(point)
    }
}

// two triangles pointing left or right, like a media seek icon
fn seek_icon<D>(center: Point, forward: bool, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let dir = if forward { 1 } else { -1 };
    let style = PrimitiveStyle::with_fill(palette::TEXT);
    for offset in [-5, 5] {
        let tip = center + Point::new(offset * dir + 5 * dir, 0);
        let back = center + Point::new(offset * dir - 5 * dir, 0);
        Triangle::new(tip, back + Point::new(0, -7), back + Point::new(0, 7))
            .into_styled(style)
            .draw(target)?;
    }
    Ok(())
}

impl Widget for Button {
    fn min_size(&self) -> Size {
        Size::new(40, 30)
    }

    fn draw_in<D>(&self, area: Rectangle, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let style = PrimitiveStyleBuilder::new()
            .fill_color(palette::BUTTON)
            .stroke_color(palette::FRAME)
            .stroke_width(1)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        area.into_styled(style).draw(target)?;

        let center = area.center();
        let text = match self.icon {
            ButtonIcon::Rewind => return seek_icon(center, false, target),
            ButtonIcon::FastForward => return seek_icon(center, true, target),
            ButtonIcon::Help => "?",
            ButtonIcon::Text(text) => text,
        };
        Text::with_text_style(
            text,
            center,
            MonoTextStyle::new(&FONT_9X18_BOLD, palette::TEXT),
            TextStyleBuilder::new()
                .alignment(Alignment::Center)
                .baseline(Baseline::Middle)
                .build(),
        )
        .draw(target)?;
        Ok(())
    }
}
