//! TUI rendering with ratatui
//!
//! Board grid, keyboard and message panels for the game interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Mark;
use crate::game::{GameStatus, KeyStatus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Board
            Constraint::Percentage(50), // Keyboard + messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE - Beat the Tree Agent")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn mark_style(mark: Mark) -> Style {
    match mark {
        Mark::Green => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Mark::Yellow => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        Mark::Miss => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let columns = app.words.word_length();
    let mut lines = vec![Line::from("")];

    // Submitted rows
    for row in app.game.rows() {
        let mut spans = vec![Span::raw(" ")];
        for (letter, &mark) in row.word.text().chars().zip(row.pattern.marks()) {
            spans.push(Span::styled(format!(" {letter} "), mark_style(mark)));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    // Row being typed
    if app.game.status() == GameStatus::InProgress {
        let mut spans = vec![Span::raw(" ")];
        for i in 0..columns {
            let cell = app
                .input
                .chars()
                .nth(i)
                .map_or_else(|| " _ ".to_string(), |c| format!(" {c} "));
            spans.push(Span::styled(
                cell,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    // Remaining empty rows
    let shown = app.game.rows().len()
        + usize::from(app.game.status() == GameStatus::InProgress);
    for _ in shown..app.game.max_rows() {
        let mut spans = vec![Span::raw(" ")];
        for _ in 0..columns {
            spans.push(Span::styled(
                " · ".to_string(),
                Style::default().fg(Color::DarkGray),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Keyboard
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_keyboard(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn key_style(status: KeyStatus) -> Style {
    match status {
        KeyStatus::Correct => Style::default().fg(Color::Black).bg(Color::Green),
        KeyStatus::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        KeyStatus::Absent => Style::default().fg(Color::DarkGray),
        KeyStatus::Unused => Style::default().fg(Color::White),
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let keyboard = app.game.keyboard();

    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let mut spans = Vec::new();
            for letter in row.chars() {
                spans.push(Span::styled(
                    format!("{letter}"),
                    key_style(keyboard.status(letter)),
                ));
                spans.push(Span::raw(" "));
            }
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(widget, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let mut items: Vec<ListItem> = Vec::new();

    if let Some(line) = &app.agent_line {
        items.push(
            ListItem::new(line.clone()).style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        );
    }

    items.extend(app.messages.iter().rev().map(|msg| {
        let style = match msg.style {
            MessageStyle::Info => Style::default().fg(Color::White),
            MessageStyle::Success => Style::default().fg(Color::Green),
            MessageStyle::Error => Style::default().fg(Color::Red),
        };
        ListItem::new(msg.text.clone()).style(style)
    }));

    let messages_list =
        List::new(items).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            String::new(),
            match app.game.status() {
                GameStatus::Won => Color::Green,
                _ => Color::Red,
            },
        ),
        InputMode::Typing => (
            " Type your guess | Enter to submit ",
            app.input.clone(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[0]);

    let rows_text = format!("Guesses left: {}", app.game.rows_left());
    let rows = Paragraph::new(rows_text).alignment(Alignment::Center);
    f.render_widget(rows, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Typing => "Esc: Quit | Backspace: Erase | Enter: Submit",
        InputMode::GameOver => "q: Quit | n: New Game",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
