//! Stateless rendering of a game snapshot.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};
use tictactoe_core::{Mark, SIDE, Snapshot};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Draws one frame from `snapshot`; a quitting snapshot clears the screen.
pub fn draw(frame: &mut Frame, snapshot: &Snapshot, help: &str) {
    let area = frame.area();

    if *snapshot.quitting() {
        frame.render_widget(Clear, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(3), // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD | Modifier::UNDERLINED))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], snapshot);

    let status = Paragraph::new(status_line(snapshot))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

/// `"Turn: X | <status>"`.
pub fn status_line(snapshot: &Snapshot) -> String {
    format!("Turn: {} | {}", snapshot.turn(), snapshot.status())
}

fn draw_board(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let width = CELL_WIDTH * SIDE as u16 + 2 + 2;
    let height = CELL_HEIGHT * SIDE as u16 + 2 + 2;
    let board_area = center_rect(area, width, height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(inner);

    for row in 0..SIDE {
        draw_row(frame, rows[row * 2], snapshot, row);
    }
    for sep in [rows[1], rows[3]] {
        let line = Paragraph::new("─".repeat(sep.width as usize))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(line, sep);
    }
}

fn draw_row(frame: &mut Frame, area: Rect, snapshot: &Snapshot, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for col in 0..SIDE {
        draw_cell(frame, cols[col * 2], snapshot, row * SIDE + col);
    }
    for sep in [cols[1], cols[3]] {
        let bar = Paragraph::new(vec![Line::from("│"); area.height as usize])
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(bar, sep);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, snapshot: &Snapshot, index: usize) {
    let mark = snapshot.mark(index).unwrap_or_default();

    let (symbol, base_style) = match mark {
        Mark::Empty => (" ", Style::default().fg(Color::DarkGray)),
        Mark::X => ("X", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Mark::O => ("O", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    let mut style = base_style;
    if snapshot.is_winning_cell(index) {
        style = style.fg(Color::Green);
    }
    if index == snapshot.cursor().index() {
        style = style.bg(Color::Indexed(62)).add_modifier(Modifier::BOLD);
    }

    // Vertically center the symbol in the cell.
    let pad = (area.height.saturating_sub(1) / 2) as usize;
    let mut lines = vec![Line::from(""); pad];
    lines.push(Line::from(Span::styled(symbol, style)));

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(style.bg.unwrap_or(Color::Reset)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
