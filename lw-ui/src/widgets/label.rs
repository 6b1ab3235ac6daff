use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::Rgb888,
    prelude::*,
    primitives::Rectangle,
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

use super::Widget;

/// Centered single font text, wrapped on words to fit the area width
pub struct Label<'a> {
    pub text: &'a str,
    pub font: &'a MonoFont<'a>,
    pub color: Rgb888,
}

impl<'a> Label<'a> {
    pub fn new(text: &'a str, font: &'a MonoFont<'a>, color: Rgb888) -> Self {
        Self { text, font, color }
    }

    fn line_height(&self) -> u32 {
        self.font.character_size.height + self.font.character_spacing
    }

    fn max_chars(&self, width: u32) -> usize {
        let advance = self.font.character_size.width + self.font.character_spacing;
        (width / advance.max(1)).max(1) as usize
    }
}

/// Breaks `text` into lines of at most `max_chars` characters.
/// Words longer than a line are split hard.
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > max_chars {
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            let rest = word.split_off(max_chars);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        let line_len = line.chars().count();
        if line_len > 0 && line_len + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.extend(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

impl Widget for Label<'_> {
    fn min_size(&self) -> Size {
        Size::new(self.font.character_size.width, self.line_height())
    }

    fn draw_in<D>(&self, area: Rectangle, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        let style = MonoTextStyle::new(self.font, self.color);
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Top)
            .build();
        let x = area.center().x;
        let mut y = area.top_left.y;
        let bottom = area.top_left.y + area.size.height as i32;
        for line in wrap(self.text, self.max_chars(area.size.width)) {
            if y + self.line_height() as i32 > bottom && y != area.top_left.y {
                break;
            }
            Text::with_text_style(&line, Point::new(x, y), style, text_style).draw(target)?;
            y += self.line_height() as i32;
        }
        Ok(())
    }
}

/// Shorthand for a centered label in `area`
pub fn draw_label<D>(
    text: &str,
    font: &MonoFont<'_>,
    color: Rgb888,
    area: Rectangle,
    target: &mut D,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    Label::new(text, font, color).draw_in(area, target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_words() {
        assert_eq!(
            wrap("Regen: Leichte, mäßige und starke Intensität", 20),
            vec!["Regen: Leichte,", "mäßige und starke", "Intensität"]
        );
        assert_eq!(wrap("klarer Himmel", 50), vec!["klarer Himmel"]);
        assert!(wrap("", 10).is_empty());
    }

    #[test]
    fn splits_long_words() {
        assert_eq!(wrap("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
    }
}
