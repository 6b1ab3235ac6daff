use embedded_graphics::prelude::{Point, Size};
use lw_ui::{Action, AppState};

/// Keys the app reacts to, independent of the frontend that reads them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Right,
    Left,
    H,
    Escape,
    Return,
    Q,
}

// the terminal frontend only reads keys
#[cfg_attr(not(any(feature = "window", test)), allow(dead_code))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Key(Key),
    /// Left mouse button released at this point
    Click(Point),
    Quit,
}

pub fn key_action(key: Key) -> Action {
    match key {
        Key::Right => Action::Next,
        Key::Left => Action::Previous,
        Key::H => Action::Help,
        Key::Escape | Key::Return => Action::CloseHelp,
        Key::Q => Action::Quit,
    }
}

#[cfg_attr(not(any(feature = "window", test)), allow(dead_code))]
pub fn input_action(state: &AppState, screen: Size, input: Input) -> Option<Action> {
    match input {
        Input::Key(key) => Some(key_action(key)),
        Input::Click(point) => state.action_at(screen, point),
        Input::Quit => Some(Action::Quit),
    }
}
