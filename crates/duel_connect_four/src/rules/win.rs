//! Four-in-a-row detection.

use crate::{Board, COLS, Cell, Coord, Disc, ROWS};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Four consecutive cells of one colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FourInARow {
    disc: Disc,
    cells: [Coord; 4],
}

impl FourInARow {
    /// Returns the winning colour.
    pub fn disc(&self) -> Disc {
        self.disc
    }

    /// Returns the four cells, starting from the scan origin.
    pub fn cells(&self) -> [Coord; 4] {
        self.cells
    }

    /// Returns true if `coord` is part of the line.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }
}

/// Direction of a scan, as a (row, col) step.
#[derive(Debug, Clone, Copy)]
struct Direction {
    d_row: isize,
    d_col: isize,
}

/// Scan order: horizontal, vertical, diagonal down-right, diagonal down-left.
const DIRECTIONS: [Direction; 4] = [
    Direction { d_row: 0, d_col: 1 },
    Direction { d_row: 1, d_col: 0 },
    Direction { d_row: 1, d_col: 1 },
    Direction { d_row: 1, d_col: -1 },
];

/// Returns the four cells starting at `origin` along `dir`, if they all fit on the board.
fn run(origin: Coord, dir: Direction) -> Option<[Coord; 4]> {
    let mut cells = [origin; 4];
    for (step, cell) in cells.iter_mut().enumerate() {
        let row = origin.row.checked_add_signed(dir.d_row * step as isize)?;
        let col = origin.col.checked_add_signed(dir.d_col * step as isize)?;
        if row >= ROWS || col >= COLS {
            return None;
        }
        *cell = Coord::new(row, col);
    }
    Some(cells)
}

/// Returns the first four-in-a-row found.
///
/// Directions are tried in order (horizontal, vertical, down-right,
/// down-left); within each, rows are scanned top to bottom and columns left
/// to right. The first match wins.
#[instrument(skip(board))]
pub fn detect_winner(board: &Board) -> Option<FourInARow> {
    DIRECTIONS.iter().find_map(|&dir| {
        (0..ROWS)
            .flat_map(|row| (0..COLS).map(move |col| Coord::new(row, col)))
            .filter_map(|origin| run(origin, dir))
            .find_map(|cells| match board.get(cells[0]) {
                Some(Cell::Filled(disc))
                    if cells[1..]
                        .iter()
                        .all(|c| board.get(*c) == Some(Cell::Filled(disc))) =>
                {
                    Some(FourInARow { disc, cells })
                }
                _ => None,
            })
    })
}
