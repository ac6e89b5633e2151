//! TUI rendering for nncalc using ratatui.

mod app;
mod display;
mod input;
mod theme;

pub use app::{CalcApp, EntryState, Status};
pub use display::DisplayState;
pub use input::{Action, action_for_key, handle_event, handle_events};
pub use theme::{Glyphs, Palette, UiOptions, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap},
};

use nncalc_engine::Operation;

/// Height of the key panel including its border.
const KEY_PANEL_HEIGHT: u16 = 4;

/// Key legend, one row per line of the key panel.
const KEY_ROWS: [&[(&str, Operation)]; 2] = [
    &[
        ("+", Operation::Add),
        ("-", Operation::Subtract),
        ("*", Operation::Multiply),
        ("/", Operation::Divide),
        ("^", Operation::Power),
        ("r", Operation::Root),
    ],
    &[
        ("0-9", Operation::AppendDigit),
        ("Enter", Operation::Enter),
        ("Tab", Operation::Swap),
        ("Bksp", Operation::Clear),
    ],
];

/// Main draw function
pub fn draw(frame: &mut Frame, app: &CalcApp) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Fill(1),                 // Top operand
            Constraint::Fill(1),                 // Bottom operand
            Constraint::Length(KEY_PANEL_HEIGHT), // Keys
            Constraint::Length(1),               // Status bar
        ])
        .split(frame.area());

    let display = app.display();
    draw_operand(frame, chunks[0], " Top ", display.top(), &palette);
    draw_operand(frame, chunks[1], " Bottom ", display.bottom(), &palette);
    draw_keys(frame, app, chunks[2], &palette, &glyphs);
    draw_status_bar(frame, app, chunks[3], &palette, &glyphs);
}

fn draw_operand(frame: &mut Frame, area: Rect, title: &str, value: &str, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .title(Span::styled(title, styles::operand_label(palette)))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(palette.bg_panel));

    let paragraph = Paragraph::new(Line::from(Span::styled(
        value,
        styles::operand_value(palette),
    )))
    .alignment(Alignment::Right)
    .wrap(Wrap { trim: false })
    .block(block);

    frame.render_widget(paragraph, area);
}

fn draw_keys(frame: &mut Frame, app: &CalcApp, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let display = app.display();
    let lines: Vec<Line> = KEY_ROWS
        .iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 3);
            for (key, op) in row.iter().copied() {
                let allowed = display.allows(op);
                let (marker, key_style, label_style) = if allowed {
                    (
                        glyphs.enabled,
                        styles::key_enabled(palette),
                        Style::default().fg(palette.text_primary),
                    )
                } else {
                    (
                        glyphs.disabled,
                        styles::key_disabled(palette),
                        styles::key_disabled(palette),
                    )
                };
                spans.push(Span::styled(format!("{marker} "), key_style));
                spans.push(Span::styled(key, key_style));
                spans.push(Span::styled(format!(" {op}  "), label_style));
            }
            Line::from(spans)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .title(Span::styled(" Keys ", styles::key_hint(palette)));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_status_bar(
    frame: &mut Frame,
    app: &CalcApp,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let (icon, text, style) = match app.status() {
        Status::Ready => (
            glyphs.ready,
            "Ready".to_string(),
            Style::default().fg(palette.success),
        ),
        Status::Applied(op) => (
            glyphs.ready,
            op.to_string(),
            Style::default().fg(palette.accent),
        ),
        Status::Ignored(op) => (
            glyphs.ignored,
            format!("{op} unavailable for these operands"),
            Style::default().fg(palette.error),
        ),
    };

    let digits = match app.display().bottom().len() {
        1 => "1 digit".to_string(),
        n => format!("{n} digits"),
    };
    let spans = vec![
        Span::styled(format!(" {icon} "), style.add_modifier(Modifier::BOLD)),
        Span::styled(text, style),
        Span::styled(format!(" {} ", glyphs.separator), styles::key_hint(palette)),
        Span::styled(digits, styles::key_hint(palette)),
        Span::styled(format!(" {} ", glyphs.separator), styles::key_hint(palette)),
        Span::styled("q quit", styles::key_hint(palette)),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
