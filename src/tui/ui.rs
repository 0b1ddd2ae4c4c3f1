//! Stateless UI rendering: header, board grid, chat panel, status line.

use omok::{Cell, Player};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::app::{App, Focus};

/// Renders the whole frame from current application state.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(10),   // Board + chat
            Constraint::Length(4), // Status
        ])
        .split(area);

    draw_header(frame, chunks[0], app);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(24), Constraint::Length(34)])
        .split(chunks[1]);

    draw_board(frame, body[0], app);
    draw_chat(frame, body[1], app);
    draw_status(frame, chunks[2], app);
}

/// Title, version, move count, and active player — re-read from the
/// session on every draw.
fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let header = Line::from(vec![
        Span::styled(
            "Omok",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("  v{}", env!("CARGO_PKG_VERSION"))),
        Span::raw(format!("  │  Turn: {}", session.turn())),
        Span::styled(
            format!("  │  {} to move", session.active_player()),
            Style::default().fg(Color::Yellow),
        ),
    ]);
    frame.render_widget(Paragraph::new(header).alignment(Alignment::Center), area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board = app.session().board();
    let cursor = *app.cursor();
    let focused = *app.focus() == Focus::Board;

    let mut rows = Vec::with_capacity(board.size());
    for row in 0..board.size() {
        let mut spans = Vec::with_capacity(board.size());
        for col in 0..board.size() {
            let cell = board.get(row, col).unwrap_or(Cell::Empty);
            // Checkerboard tint on empty cells.
            let (glyph, base) = match cell {
                Cell::Empty if (row + col) % 2 == 0 => {
                    ("· ", Style::default().fg(Color::DarkGray))
                }
                Cell::Empty => ("· ", Style::default().fg(Color::Gray)),
                Cell::Stone(Player::Black) => (
                    "● ",
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::BOLD),
                ),
                Cell::Stone(Player::White) => (
                    "○ ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
            };
            let style = if focused && (row, col) == cursor {
                base.bg(Color::White).fg(Color::Black)
            } else {
                base
            };
            spans.push(Span::styled(glyph, style));
        }
        rows.push(Line::from(spans));
    }

    let block = Block::default().borders(Borders::ALL).title("Board");
    frame.render_widget(
        Paragraph::new(rows)
            .block(block)
            .alignment(Alignment::Center),
        area,
    );
}

fn draw_chat(frame: &mut Frame, area: Rect, app: &App) {
    let chat_focused = *app.focus() == Focus::Chat;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(3)])
        .split(area);

    // Show the tail of the log that fits the pane.
    let log_height = chunks[0].height.saturating_sub(2) as usize;
    let lines = app.chat().lines();
    let visible = lines.len().saturating_sub(log_height);
    let items: Vec<ListItem> = lines[visible..]
        .iter()
        .map(|l| ListItem::new(l.as_str()))
        .collect();
    let log = List::new(items).block(Block::default().borders(Borders::ALL).title("Chat"));
    frame.render_widget(log, chunks[0]);

    let input_style = if chat_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let input = Paragraph::new(app.chat().input().as_str()).style(input_style).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Enter chat (Tab to switch)"),
    );
    frame.render_widget(input, chunks[1]);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let hints = "Arrows/hjkl move · Enter places · n new game · Tab chat · q quits";
    let text = format!("{}\n{hints}", app.status());
    let status = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}
