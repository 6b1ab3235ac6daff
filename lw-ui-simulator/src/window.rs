use std::thread::sleep;
use std::time::Duration;

use embedded_graphics::{pixelcolor::Rgb888, prelude::Size};
use embedded_graphics_simulator::sdl2::{Keycode, MouseButton};
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};
use log::{debug, error};
use lw_ui::{pages::draw_screen, Action, AppState};

use crate::config::ConfigWindow;
use crate::input::{input_action, Input, Key};

fn key(keycode: Keycode) -> Option<Key> {
    match keycode {
        Keycode::Right => Some(Key::Right),
        Keycode::Left => Some(Key::Left),
        Keycode::H => Some(Key::H),
        Keycode::Escape => Some(Key::Escape),
        Keycode::Return => Some(Key::Return),
        Keycode::Q => Some(Key::Q),
        _ => None,
    }
}

fn input(event: SimulatorEvent) -> Option<Input> {
    match event {
        SimulatorEvent::Quit => Some(Input::Quit),
        SimulatorEvent::KeyDown { keycode, .. } => key(keycode).map(Input::Key),
        SimulatorEvent::MouseButtonUp {
            mouse_btn: MouseButton::Left,
            point,
        } => Some(Input::Click(point)),
        _ => None,
    }
}

pub fn run(config: &ConfigWindow, state: &mut AppState) -> anyhow::Result<()> {
    let size = Size::new(config.width, config.height);
    let mut display = SimulatorDisplay::<Rgb888>::new(size);
    draw_screen(&mut display, state)?;

    let output_settings = OutputSettingsBuilder::new().scale(config.scale).build();
    let mut window = Window::new(&config.title, &output_settings);

    'running: loop {
        window.update(&display);
        let mut redraw = false;
        for event in window.events() {
            let action = input(event).and_then(|input| input_action(state, size, input));
            match action {
                Some(Action::Quit) => break 'running,
                Some(action) => {
                    debug!("{action:?}");
                    redraw |= state.apply(action);
                }
                None => {}
            }
        }
        if redraw {
            if let Err(e) = draw_screen(&mut display, state) {
                error!("redraw failed: {e}");
            }
        }
        sleep(Duration::from_millis(16));
    }
    Ok(())
}
