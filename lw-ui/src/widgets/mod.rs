use embedded_graphics::{pixelcolor::Rgb888, prelude::*, primitives::Rectangle};

mod button;
mod label;
mod progress;
mod temperature;

pub use button::{Button, ButtonIcon};
pub use label::{draw_label, wrap, Label};
pub use progress::ProgressBar;
pub use temperature::{TemperatureBar, TemperatureBarLayout};

/// Something that can be laid out into an area and drawn there
pub trait Widget {
    /// Smallest area the widget still renders correctly in, callers may give more
    fn min_size(&self) -> Size;

    fn draw_in<D>(&self, area: Rectangle, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>;
}
