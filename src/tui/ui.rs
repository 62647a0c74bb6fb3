//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe::{LineDirection, Player, Position, Square, WinLine};

use super::app::App;

const HELP: &str = "arrows move · enter/1-9 play · m mode · r restart · q quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(1), // Mode
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    frame.render_widget(mode_line(app), chunks[1]);

    draw_board(frame, chunks[2], app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn mode_line(app: &App) -> Paragraph<'static> {
    let playing = app.state().mode();
    let selected = app.selected_mode();
    let mut spans = vec![Span::raw(format!("Mode: {playing}"))];
    if selected != playing {
        spans.push(Span::styled(
            format!("  (next game: {selected})"),
            Style::default().fg(Color::Magenta),
        ));
    }
    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, cells) in Position::ALL.chunks(3).enumerate() {
        draw_row(frame, rows[row * 2], app, cells);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, cells: &[Position]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, pos) in cells.iter().enumerate() {
        // Middle line of the three-row cell so marks sit centered.
        let cell = Rect {
            y: cols[col * 2].y + 1,
            height: 1,
            ..cols[col * 2]
        };
        draw_cell(frame, cell, app, *pos);
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let strike = app.state().status().win_line().filter(|line| line.contains(pos));

    let (mark, base_style) = match app.state().board().get(pos) {
        Square::Empty => (' ', Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (
            'X',
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            'O',
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let (text, style) = match strike {
        Some(line) => {
            let glyph = strike_glyph(&line);
            (
                format!("{glyph}{glyph}{mark}{glyph}{glyph}"),
                base_style.fg(Color::Green).add_modifier(Modifier::CROSSED_OUT),
            )
        }
        None => (format!("  {mark}  "), base_style),
    };

    let style = if pos == app.cursor() && app.state().status().is_active() {
        style.bg(Color::White).fg(Color::Black)
    } else {
        style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(text, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Character drawn either side of a mark on the winning line.
pub fn strike_glyph(line: &WinLine) -> char {
    match line.direction() {
        LineDirection::Horizontal => '─',
        LineDirection::Vertical => '│',
        LineDirection::Diagonal => '╲',
        LineDirection::AntiDiagonal => '╱',
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("────────────┼────────────┼────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
