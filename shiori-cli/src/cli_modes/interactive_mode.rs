use super::CliModeResult;
use crate::{Cli, render::Renderer};
use anyhow::{Context, Result};
use shiori_core::ItineraryView;
use std::io::{self, BufRead, Write};

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Select(i64),
    Next,
    Previous,
    Redraw,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let input = line.trim();
    match input.to_lowercase().as_str() {
        "" => Command::Redraw,
        "q" | "quit" | "exit" => Command::Quit,
        "n" | "next" => Command::Next,
        "p" | "prev" | "previous" => Command::Previous,
        other => other
            .trim_end_matches("日目")
            .parse::<i64>()
            .map(Command::Select)
            .unwrap_or_else(|_| Command::Unknown(input.to_string())),
    }
}

/// Applies one command to the view. Returns `false` when the session should end.
fn apply_command(view: &mut ItineraryView, command: &Command) -> bool {
    match command {
        Command::Select(day) => view.select_day(*day),
        Command::Next => view.select_day(view.selected_day().saturating_add(1)),
        Command::Previous => view.select_day(view.selected_day().saturating_sub(1)),
        Command::Redraw | Command::Unknown(_) => {}
        Command::Quit => return false,
    }
    true
}

/// Reads day numbers from stdin and redraws the selected day after each one.
/// Ends on `q` or end of input.
pub fn interactive_mode(
    cli: &Cli,
    renderer: &Renderer,
    view: &mut ItineraryView,
) -> Result<CliModeResult> {
    if !cli.interactive {
        return Ok(CliModeResult::NothingToDo);
    }

    renderer.print_header(view.itinerary());
    renderer.print_selected_day(view);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("day (1-{}, n/p, q to quit)> ", view.day_count());
        io::stdout().flush().context("flushing prompt")?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let command = parse_command(&line.context("reading stdin")?);
        if let Command::Unknown(input) = &command {
            renderer.print_info(&format!("'{input}' is not a day number."));
            continue;
        }
        if !apply_command(view, &command) {
            break;
        }
        renderer.print_selected_day(view);
    }
    Ok(CliModeResult::Finish)
}
