//! Stateless UI rendering for the board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};
use twenty48_board::{Cell, SIZE, Tile};

use super::app::App;
use super::palette::{LABEL, cell_color};

/// Title shown above the board.
pub const TITLE: &str = "2048 Game";

/// Message shown once the board is stuck.
pub const GAME_OVER: &str = "Game Over!";

/// Width of one cell in columns.
pub const CELL_WIDTH: u16 = 8;

/// Height of one cell in rows.
pub const CELL_HEIGHT: u16 = 3;

const GAP: u16 = 1;
const BOARD_WIDTH: u16 = SIZE as u16 * (CELL_WIDTH + GAP) - GAP;
const BOARD_HEIGHT: u16 = SIZE as u16 * (CELL_HEIGHT + GAP) - GAP;

/// Renders the whole screen: title, board, status, and the game-over message when stuck.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Status
        ])
        .split(area);

    let title = Paragraph::new(TITLE)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let board_area = board_rect(chunks[1]);
    draw_board(frame, board_area, app);

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    if app.is_over() {
        draw_game_over(frame, board_area);
    }
}

/// Area the 4x4 grid occupies inside `area`.
pub fn board_rect(area: Rect) -> Rect {
    center_rect(area, BOARD_WIDTH, BOARD_HEIGHT)
}

/// Area of one cell inside the board area, clipped to it.
pub fn cell_rect(board_area: Rect, cell: Cell) -> Rect {
    Rect::new(
        board_area.x + cell.col as u16 * (CELL_WIDTH + GAP),
        board_area.y + cell.row as u16 * (CELL_HEIGHT + GAP),
        CELL_WIDTH,
        CELL_HEIGHT,
    )
    .intersection(board_area)
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board = app.board();
    for cell in Cell::all() {
        draw_cell(frame, cell_rect(area, cell), board.get(cell));
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, tile: Tile) {
    let label = if tile == 0 {
        String::new()
    } else {
        tile.to_string()
    };

    // Pad above so the label sits on the middle row.
    let mut lines = vec![Line::from(""); usize::from(CELL_HEIGHT / 2)];
    lines.push(Line::from(label));

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(cell_color(tile)).fg(LABEL))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_game_over(frame: &mut Frame, board_area: Rect) {
    let width = GAME_OVER.len() as u16 + 4;
    let area = center_rect(board_area, width, 3);
    frame.render_widget(Clear, area);
    let message = Paragraph::new(vec![Line::from(""), Line::from(GAME_OVER)])
        .alignment(Alignment::Center);
    frame.render_widget(message, area);
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
