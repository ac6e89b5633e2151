//! nncalc CLI - Binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI bridges [`nncalc_tui`] (keypad state and rendering) and the
//! terminal, providing RAII-based terminal management with guaranteed cleanup.
//!
//! ```text
//! main() -> TerminalSession::new() -> run_app() -> CalcApp + draw()
//! ```
//!
//! # Event Loop
//!
//! 1. Render frame
//! 2. Wait briefly for input, then drain the queue ([`nncalc_tui::handle_events`])
//! 3. Quit on request; any calculator error aborts the session

mod config;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::{
    env,
    fs::{self, OpenOptions},
    io::{Stdout, stdout},
    path::PathBuf,
    sync::Mutex,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use config::CalcConfig;
use nncalc_tui::{CalcApp, draw, handle_events};

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(env_filter);

    // No log file means no logs: the terminal belongs to the TUI.
    match open_log_file() {
        Some((path, file)) => {
            registry
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .init();
            tracing::info!(path = %path.display(), "Logging initialized");
        }
        None => registry.init(),
    }
}

/// First writable of `~/.nncalc/logs/nncalc.log` and `./.nncalc/logs/nncalc.log`.
fn open_log_file() -> Option<(PathBuf, fs::File)> {
    let home = CalcConfig::path().and_then(|config| config.parent().map(|dir| dir.join("logs")));
    let local = PathBuf::from(".nncalc").join("logs");

    home.into_iter().chain([local]).find_map(|dir| {
        fs::create_dir_all(&dir).ok()?;
        let path = dir.join("nncalc.log");
        let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;
        Some((path, file))
    })
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Raw mode and the alternate screen are entered on construction and always
/// restored on drop, so the terminal stays usable after errors and panics.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn main() -> Result<()> {
    init_tracing();

    let config = match CalcConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!("{err}");
            None
        }
    };
    let options = config::ui_options(config.as_ref(), |key| env::var(key).ok());
    let mut app = CalcApp::new(options);

    let result = {
        let mut session = TerminalSession::new()?;
        run_app(&mut session.terminal, &mut app)
    };

    match &result {
        Ok(()) => tracing::info!(
            bottom_digits = app.display().bottom().len(),
            "Session ended"
        ),
        Err(err) => tracing::error!("Session aborted: {err:#}"),
    }
    result
}

fn run_app<B>(terminal: &mut Terminal<B>, app: &mut CalcApp) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|frame| draw(frame, app))?;

        if handle_events(app)? {
            return Ok(());
        }
    }
}
