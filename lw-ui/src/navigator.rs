use lw_weather::FORECAST_DAYS;

const LAST_DAY: usize = FORECAST_DAYS - 1;

/// Cursor over the forecast days, no wraparound
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayNavigator {
    selected: usize,
}

impl DayNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Returns true if the cursor moved
    pub fn next(&mut self) -> bool {
        if self.selected < LAST_DAY {
            self.selected += 1;
            true
        } else {
            false
        }
    }

    /// Returns true if the cursor moved
    pub fn previous(&mut self) -> bool {
        if self.selected > 0 {
            self.selected -= 1;
            true
        } else {
            false
        }
    }
}
