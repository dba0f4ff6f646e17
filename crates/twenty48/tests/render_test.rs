//! Tests for board rendering against an in-memory terminal.

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect};
use twenty48::tui::{palette, ui};
use twenty48::{App, GameSettings, TileShade};
use twenty48_board::{Board, Cell, Game, SpawnRule};

fn render(rows: [[u32; 4]; 4]) -> Buffer {
    let board = Board::from_rows(rows).unwrap();
    let app = App::new(
        Game::from_board(board, 0, SpawnRule::Always),
        GameSettings::default(),
    );
    let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
    terminal.draw(|f| ui::draw(f, &app)).unwrap();
    terminal.backend().buffer().clone()
}

fn text(buffer: &Buffer) -> String {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Board area inside the 60x24 screen, following the same layout as `ui::draw`.
fn board_area() -> Rect {
    ui::board_rect(Rect::new(0, 3, 60, 18))
}

#[test]
fn test_title_and_labels_drawn() {
    let buffer = render([[2, 0, 0, 0], [0, 64, 0, 0], [0; 4], [0, 0, 0, 2048]]);
    let screen = text(&buffer);
    assert!(screen.contains(ui::TITLE));
    assert!(screen.contains("64"));
    assert_eq!(screen.matches("2048").count(), 2);
    assert!(!screen.contains(ui::GAME_OVER));
}

#[test]
fn test_cells_use_palette() {
    let buffer = render([[2, 0, 0, 0], [0, 128, 0, 0], [0; 4], [0, 0, 0, 16384]]);
    let area = board_area();

    let at = |cell: Cell| {
        let rect = ui::cell_rect(area, cell);
        buffer[(rect.x, rect.y)].bg
    };

    assert_eq!(at(Cell::new(0, 0)), TileShade::White.color());
    assert_eq!(at(Cell::new(1, 1)), TileShade::Cyan.color());
    assert_eq!(at(Cell::new(3, 3)), TileShade::Fallback.color());
    assert_eq!(at(Cell::new(2, 2)), palette::EMPTY_CELL);
}

#[test]
fn test_label_centered_in_cell() {
    let buffer = render([[0; 4], [0; 4], [0, 0, 8, 0], [0; 4]]);
    let rect = ui::cell_rect(board_area(), Cell::new(2, 2));
    let middle: String = (rect.left()..rect.right())
        .map(|x| buffer[(x, rect.y + ui::CELL_HEIGHT / 2)].symbol())
        .collect();
    assert_eq!(middle.trim(), "8");
    assert_eq!(buffer[(rect.x, rect.y + ui::CELL_HEIGHT / 2)].fg, palette::LABEL);
}

#[test]
fn test_game_over_message_on_stuck_board() {
    let buffer = render([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
    // Once over the board, once in the status line.
    assert_eq!(text(&buffer).matches(ui::GAME_OVER).count(), 2);
}
