//! Fixed tile colors.

use ratatui::style::Color;
use twenty48_board::Tile;

/// Background drawn behind every cell, and the color of empty cells.
pub const EMPTY_CELL: Color = Color::Rgb(80, 80, 80);

/// Color of tile labels.
pub const LABEL: Color = Color::Rgb(0, 0, 0);

/// Shade of a tile.
///
/// Values 2 through 8192 each have an assigned shade; every other nonzero
/// value renders with [`TileShade::Fallback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileShade {
    /// 2
    White,
    /// 4 and 512
    Yellow,
    /// 8 and 1024
    Orange,
    /// 16 and 2048
    Red,
    /// 32 and 4096
    Purple,
    /// 64 and 8192
    Blue,
    /// 128
    Cyan,
    /// 256
    Green,
    /// Anything outside the table.
    Fallback,
}

impl TileShade {
    /// Looks up the shade for a nonzero tile.
    pub fn for_tile(tile: Tile) -> Self {
        match tile {
            2 => Self::White,
            4 | 512 => Self::Yellow,
            8 | 1024 => Self::Orange,
            16 | 2048 => Self::Red,
            32 | 4096 => Self::Purple,
            64 | 8192 => Self::Blue,
            128 => Self::Cyan,
            256 => Self::Green,
            _ => Self::Fallback,
        }
    }

    /// Terminal color of this shade.
    pub fn color(self) -> Color {
        match self {
            Self::White => Color::Rgb(255, 255, 255),
            Self::Yellow => Color::Rgb(255, 255, 0),
            Self::Orange => Color::Rgb(255, 140, 0),
            Self::Red => Color::Rgb(128, 0, 0),
            Self::Purple => Color::Rgb(128, 0, 128),
            Self::Blue => Color::Rgb(0, 0, 255),
            Self::Cyan => Color::Rgb(0, 255, 255),
            Self::Green => Color::Rgb(0, 128, 0),
            Self::Fallback => Color::Rgb(0, 0, 0),
        }
    }
}

/// Fill color of a cell; empty cells use [`EMPTY_CELL`].
pub fn cell_color(tile: Tile) -> Color {
    if tile == 0 {
        EMPTY_CELL
    } else {
        TileShade::for_tile(tile).color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_value_is_mapped() {
        for exp in 1..=13 {
            let tile = 1u32 << exp;
            assert_ne!(TileShade::for_tile(tile), TileShade::Fallback, "tile {tile}");
        }
    }

    #[test]
    fn test_shades_repeat_from_512() {
        assert_eq!(TileShade::for_tile(4), TileShade::for_tile(512));
        assert_eq!(TileShade::for_tile(16), TileShade::for_tile(2048));
        assert_eq!(TileShade::for_tile(64), TileShade::for_tile(8192));
    }

    #[test]
    fn test_values_past_table_fall_back() {
        assert_eq!(TileShade::for_tile(16384), TileShade::Fallback);
        assert_eq!(TileShade::for_tile(3), TileShade::Fallback);
        assert_eq!(cell_color(16384), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn test_empty_cell_color() {
        assert_eq!(cell_color(0), EMPTY_CELL);
        assert_eq!(cell_color(2), Color::Rgb(255, 255, 255));
    }
}
