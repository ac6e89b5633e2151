//! Input handling for the nncalc TUI.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use nncalc_engine::{Digit, Event};

use crate::CalcApp;

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(50); // redraw cadence when idle
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Calc(Event),
    Quit,
}

/// Map a key press to its keypad action.
#[must_use]
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c' | 'd') => Some(Action::Quit),
            _ => None,
        };
    }

    let event = match key.code {
        KeyCode::Char(c @ '0'..='9') => Event::AppendDigit(Digit::try_from(c).ok()?),
        KeyCode::Char('+') => Event::Add,
        KeyCode::Char('-') => Event::Subtract,
        KeyCode::Char('*' | 'x') => Event::Multiply,
        KeyCode::Char('/') => Event::Divide,
        KeyCode::Char('^' | 'p') => Event::Power,
        KeyCode::Char('r') => Event::Root,
        KeyCode::Char('s') | KeyCode::Tab => Event::Swap,
        KeyCode::Char('c') | KeyCode::Backspace | KeyCode::Delete => Event::Clear,
        KeyCode::Enter | KeyCode::Char('=') => Event::Enter,
        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),
        _ => return None,
    };
    Some(Action::Calc(event))
}

/// Apply one terminal event. Returns `true` when the user asked to quit.
pub fn handle_event(app: &mut CalcApp, event: &TermEvent) -> Result<bool> {
    let TermEvent::Key(key) = event else {
        return Ok(false);
    };
    match action_for_key(*key) {
        Some(Action::Quit) => Ok(true),
        Some(Action::Calc(calc_event)) => {
            app.dispatch(calc_event)?;
            Ok(false)
        }
        None => {
            debug!(code = ?key.code, "Unbound key");
            Ok(false)
        }
    }
}

/// Drain pending terminal events, waiting briefly for the first one.
///
/// Returns `true` when the user asked to quit.
pub fn handle_events(app: &mut CalcApp) -> Result<bool> {
    let mut timeout = INPUT_POLL_TIMEOUT;
    for _ in 0..MAX_EVENTS_PER_FRAME {
        if !event::poll(timeout)? {
            break;
        }
        let ev = event::read()?;
        if handle_event(app, &ev)? {
            return Ok(true);
        }
        // Only the first poll waits; the rest just drain what is queued.
        timeout = Duration::ZERO;
    }
    Ok(false)
}
