use embedded_graphics::pixelcolor::Rgb888;
use rust_embed::RustEmbed;

pub mod icons;
pub mod navigator;
pub mod pages;
pub mod state;
pub mod widgets;

pub use navigator::DayNavigator;
pub use state::{Action, AppState};

#[derive(RustEmbed)]
#[folder = "images/bmp/128/"]
struct Icons128;

/// Colors shared by the widgets and pages
pub mod palette {
    use super::Rgb888;

    pub const FRAME: Rgb888 = Rgb888::new(100, 100, 100);
    pub const COLD: Rgb888 = Rgb888::new(0, 0, 255);
    pub const WARM: Rgb888 = Rgb888::new(255, 0, 0);
    pub const ACCENT: Rgb888 = Rgb888::new(255, 255, 0);
    pub const TEXT: Rgb888 = Rgb888::new(255, 255, 255);
    pub const ERROR: Rgb888 = Rgb888::new(255, 120, 120);
    pub const PROGRESS_TRACK: Rgb888 = Rgb888::new(60, 60, 60);
    pub const PROGRESS_FILL: Rgb888 = Rgb888::new(41, 111, 246);
    pub const BUTTON: Rgb888 = Rgb888::new(40, 40, 48);
    pub const DIALOG: Rgb888 = Rgb888::new(24, 24, 32);
    pub const GRADIENT_TOP: Rgb888 = Rgb888::new(0, 0, 0);
    pub const GRADIENT_BOTTOM: Rgb888 = Rgb888::new(0, 0, 255);
}
