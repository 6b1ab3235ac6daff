use embedded_graphics::prelude::*;
use lw_weather::{present, DailyForecast, DayView, GeoLocation, Language};

use crate::navigator::DayNavigator;
use crate::pages::{help::HelpLayout, weather::PanelLayout};
use crate::widgets::Button;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Previous,
    Help,
    CloseHelp,
    Quit,
}

/// Everything the shell shows, loaded once at startup
#[derive(Debug, Clone)]
pub struct AppState {
    location: GeoLocation,
    days: Vec<DayView>,
    navigator: DayNavigator,
    help_open: bool,
    status: Option<String>,
    language: Language,
}

impl AppState {
    /// `status` is shown on every panel, used for load failures
    pub fn new(
        location: GeoLocation,
        forecast: &DailyForecast,
        language: Language,
        status: Option<String>,
    ) -> Self {
        Self {
            location,
            days: present(forecast, language),
            navigator: DayNavigator::new(),
            help_open: false,
            status,
            language,
        }
    }

    pub fn location(&self) -> &GeoLocation {
        &self.location
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn selected_day(&self) -> usize {
        self.navigator.selected()
    }

    pub fn selected(&self) -> &DayView {
        &self.days[self.navigator.selected()]
    }

    pub fn days(&self) -> &[DayView] {
        &self.days
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Applies one input, returns true if the screen needs a redraw.
    /// While the help dialog is open only closing it has an effect.
    pub fn apply(&mut self, action: Action) -> bool {
        match (self.help_open, action) {
            (_, Action::Quit) => false,
            (true, Action::CloseHelp) => {
                self.help_open = false;
                true
            }
            (true, _) => false,
            (false, Action::Next) => self.navigator.next(),
            (false, Action::Previous) => self.navigator.previous(),
            (false, Action::Help) => {
                self.help_open = true;
                true
            }
            (false, Action::CloseHelp) => false,
        }
    }

    /// Maps a click on a `size` sized screen to the button under it
    pub fn action_at(&self, size: Size, point: Point) -> Option<Action> {
        if self.help_open {
            let layout = HelpLayout::new(size);
            return Button::hit(&layout.ok, point).then_some(Action::CloseHelp);
        }
        let layout = PanelLayout::new(size);
        if Button::hit(&layout.previous, point) {
            Some(Action::Previous)
        } else if Button::hit(&layout.next, point) {
            Some(Action::Next)
        } else if self.shows_help_button() && Button::hit(&layout.help, point) {
            Some(Action::Help)
        } else {
            None
        }
    }

    // only the first day carries the help button
    pub fn shows_help_button(&self) -> bool {
        self.navigator.selected() == 0
    }
}
