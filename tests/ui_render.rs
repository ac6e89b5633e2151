//! TUI snapshot tests using a vt100 virtual terminal.


use crossterm::event::{Event as TermEvent, KeyCode, KeyEvent, KeyModifiers};
use insta::assert_snapshot;
use ratatui::Terminal;

use nncalc_tui::{CalcApp, UiOptions, draw, handle_event};
use vt100_backend::VT100Backend;

const WIDTH: u16 = 90;
const HEIGHT: u16 = 20;

/// Render one frame of `app` and return the screen text.
fn screen(app: &CalcApp) -> String {
    let mut terminal =
        Terminal::new(VT100Backend::new(WIDTH, HEIGHT)).expect("failed to create terminal");
    terminal.draw(|frame| draw(frame, app)).expect("failed to draw");
    terminal.backend().to_string()
}

fn type_keys(app: &mut CalcApp, keys: &[KeyCode]) {
    for code in keys {
        let event = TermEvent::Key(KeyEvent::new(*code, KeyModifiers::NONE));
        let quit = handle_event(app, &event).expect("keypad never issues illegal events");
        assert!(!quit, "{code:?} should not quit");
    }
}

fn chars(s: &str) -> Vec<KeyCode> {
    s.chars().map(KeyCode::Char).collect()
}

#[test]
fn snapshot_initial_screen() {
    let app = CalcApp::new(UiOptions::default());
    let contents = screen(&app);

    // bottom = 0: subtract and power stay on, divide and root are off.
    assert!(contents.contains("● - subtract"), "{contents}");
    assert!(contents.contains("○ / divide"), "{contents}");
    assert!(contents.contains("● ^ power"), "{contents}");
    assert!(contents.contains("○ r root"), "{contents}");
    assert!(contents.contains("1 digit"), "{contents}");
    assert_snapshot!("initial_screen", contents);
}

#[test]
fn snapshot_ascii_only() {
    let app = CalcApp::new(UiOptions {
        ascii_only: true,
        high_contrast: false,
    });
    let contents = screen(&app);

    assert!(contents.contains("* + add"), "{contents}");
    assert!(contents.contains("- / divide"), "{contents}");
    assert!(!contents.contains('●'), "{contents}");
    assert_snapshot!("ascii_only", contents);
}

#[test]
fn snapshot_ignored_key() {
    let mut app = CalcApp::new(UiOptions::default());
    type_keys(&mut app, &chars("4-"));
    let contents = screen(&app);

    assert!(
        contents.contains("subtract unavailable for these operands"),
        "{contents}"
    );
    assert_snapshot!("ignored_key", contents);
}

#[test]
fn snapshot_long_number_wraps() {
    let mut app = CalcApp::new(UiOptions::default());
    type_keys(&mut app, &chars(&"7".repeat(150)));
    let contents = screen(&app);

    // Wrapped, not truncated.
    assert_eq!(contents.matches('7').count(), 150, "{contents}");
    assert!(contents.contains("150 digits"), "{contents}");
    assert_snapshot!("long_number_wraps", contents);
}

#[test]
fn snapshot_right_aligned_operands() {
    let mut app = CalcApp::new(UiOptions::default());
    type_keys(&mut app, &chars("12"));
    type_keys(&mut app, &[KeyCode::Enter]);
    type_keys(&mut app, &chars("42"));
    let contents = screen(&app);

    assert!(contents.contains("42 │"), "{contents}");
    assert!(contents.contains("● / divide"), "{contents}");
    assert_snapshot!("right_aligned_operands", contents);
}

#[test]
fn chained_keys_show_running_result() {
    let mut app = CalcApp::new(UiOptions::default());
    type_keys(&mut app, &chars("5"));
    type_keys(&mut app, &[KeyCode::Enter]);
    type_keys(&mut app, &chars("3+2*"));

    assert_eq!(app.display().top(), "0");
    assert_eq!(app.display().bottom(), "16");
    assert!(screen(&app).contains("16 │"));
}

#[test]
fn division_shows_quotient_and_remainder() {
    let mut app = CalcApp::new(UiOptions::default());
    type_keys(&mut app, &chars("29"));
    type_keys(&mut app, &[KeyCode::Enter]);
    type_keys(&mut app, &chars("4/"));

    assert_eq!(app.display().top(), "1");
    assert_eq!(app.display().bottom(), "7");
    assert!(screen(&app).contains("divide"));
}
