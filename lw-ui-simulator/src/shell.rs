use std::io::{BufRead, Write};

use lw_ui::{Action, AppState};

use crate::input::{key_action, Key};

/// Reads one command per line: n(ext), p(revious), h(elp), o(k) closes help, q(uit)
pub fn parse_command(line: &str) -> Option<Action> {
    let key = match line.trim().to_ascii_lowercase().as_str() {
        "n" | "next" => Key::Right,
        "p" | "prev" | "previous" => Key::Left,
        "h" | "help" => Key::H,
        "o" | "ok" => Key::Return,
        "q" | "quit" => Key::Q,
        _ => return None,
    };
    Some(key_action(key))
}

pub fn render(state: &AppState) -> String {
    if state.help_open() {
        let mut text = format!("{}\n", lw_ui::pages::help::TITLE);
        for line in lw_ui::pages::help::ATTRIBUTION {
            text.push_str(line);
            text.push('\n');
        }
        text.push_str("[o]k\n");
        return text;
    }
    let day = state.selected();
    let location = state.location();
    let mut text = format!(
        "[p] < {} ({}/{}) > [n]\n{} {:.1}°\n{} {:.1}°\n{}\n{}\n{}\n{}\n",
        day.date,
        state.selected_day() + 1,
        state.days().len(),
        day.min_label(),
        day.temperature_min,
        day.max_label(),
        day.temperature_max,
        day.precipitation_label(),
        day.description,
        day.city_label(location),
        day.country_label(location),
    );
    if let Some(status) = state.status() {
        text.push_str(&format!("! {status}\n"));
    }
    text
}

/// Terminal frontend used when the crate is built without the `window` feature
pub fn run<R: BufRead, W: Write>(
    state: &mut AppState,
    input: R,
    mut output: W,
) -> std::io::Result<()> {
    write!(output, "{}", render(state))?;
    for line in input.lines() {
        let line = line?;
        let Some(action) = parse_command(&line) else {
            writeln!(output, "? n, p, h, o, q")?;
            continue;
        };
        if action == Action::Quit {
            break;
        }
        if state.apply(action) {
            write!(output, "{}", render(state))?;
        }
    }
    Ok(())
}
