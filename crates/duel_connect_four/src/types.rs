//! Board, discs and coordinates.

use crate::MoveError;
use derive_new::new;
use duel_core::Seat;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Number of rows.
pub const ROWS: usize = 6;

/// Number of columns.
pub const COLS: usize = 7;

/// Disc colour; red drops first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Disc {
    /// Red disc.
    #[display("red")]
    Red,
    /// Yellow disc.
    #[display("yellow")]
    Yellow,
}

impl Seat for Disc {
    const ALL: [Self; 2] = [Disc::Red, Disc::Yellow];

    fn opponent(self) -> Self {
        match self {
            Disc::Red => Disc::Yellow,
            Disc::Yellow => Disc::Red,
        }
    }

    fn index(self) -> usize {
        match self {
            Disc::Red => 0,
            Disc::Yellow => 1,
        }
    }
}

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No disc.
    Empty,
    /// Holds a disc.
    Filled(Disc),
}

/// A cell address. Row 0 is the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, new)]
pub struct Coord {
    /// Row index, 0 (top) to 5 (bottom).
    pub row: usize,
    /// Column index, 0 (left) to 6 (right).
    pub col: usize,
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The 6x7 grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Creates a board from rows, top row first.
    ///
    /// No gravity check is made; use this for fixtures and rendering only.
    pub fn from_rows(cells: [[Cell; COLS]; ROWS]) -> Self {
        Self { cells }
    }

    /// Returns the cell at `coord`, or `None` off the grid.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.cells.get(coord.row)?.get(coord.col).copied()
    }

    /// Returns the rows, top row first.
    pub fn rows(&self) -> &[[Cell; COLS]; ROWS] {
        &self.cells
    }

    /// Returns the row a disc dropped into `col` would land in.
    ///
    /// `None` if the column is full or does not exist.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Returns the columns that still accept a disc.
    pub fn playable_columns(&self) -> Vec<usize> {
        (0..COLS)
            .filter(|&col| self.landing_row(col).is_some())
            .collect()
    }

    /// Checks if every cell holds a disc.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| *c != Cell::Empty)
    }

    /// Counts the discs of one colour.
    pub fn count(&self, disc: Disc) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| **c == Cell::Filled(disc))
            .count()
    }

    /// Drops a disc into `col`, returning the new board and where it landed.
    ///
    /// The disc settles in the lowest empty cell of the column, scanning from
    /// the bottom row upward.
    ///
    /// # Errors
    ///
    /// - [`MoveError::ColumnOutOfRange`] if `col` is not in `0..7`
    /// - [`MoveError::ColumnFull`] if the column has no empty cell
    #[instrument(skip(self))]
    pub fn drop_disc(&self, col: usize, disc: Disc) -> Result<(Board, Coord), MoveError> {
        if col >= COLS {
            return Err(MoveError::ColumnOutOfRange(col));
        }
        let row = self.landing_row(col).ok_or(MoveError::ColumnFull(col))?;

        let mut next = self.clone();
        next.cells[row][col] = Cell::Filled(disc);
        trace!(row, col, %disc, "Disc landed");
        Ok((next, Coord::new(row, col)))
    }

    /// Formats the board as a human-readable string, top row first.
    pub fn display(&self) -> String {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Empty => '.',
                        Cell::Filled(Disc::Red) => 'R',
                        Cell::Filled(Disc::Yellow) => 'Y',
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_disc_lands_on_bottom_row() {
        let (board, at) = Board::new().drop_disc(3, Disc::Red).unwrap();
        assert_eq!(at, Coord::new(5, 3));
        assert_eq!(board.get(at), Some(Cell::Filled(Disc::Red)));
    }

    #[test]
    fn test_discs_stack() {
        let (board, _) = Board::new().drop_disc(0, Disc::Red).unwrap();
        let (board, at) = board.drop_disc(0, Disc::Yellow).unwrap();
        assert_eq!(at, Coord::new(4, 0));
        assert_eq!(board.landing_row(0), Some(3));
    }

    #[test]
    fn test_full_column_rejected() {
        let mut board = Board::new();
        for i in 0..ROWS {
            let disc = if i % 2 == 0 { Disc::Red } else { Disc::Yellow };
            board = board.drop_disc(6, disc).unwrap().0;
        }
        assert_eq!(board.landing_row(6), None);
        assert_eq!(board.drop_disc(6, Disc::Red), Err(MoveError::ColumnFull(6)));
        assert!(!board.playable_columns().contains(&6));
    }

    #[test]
    fn test_out_of_range_column() {
        assert_eq!(
            Board::new().drop_disc(COLS, Disc::Red),
            Err(MoveError::ColumnOutOfRange(COLS))
        );
        assert_eq!(Board::new().get(Coord::new(ROWS, 0)), None);
    }

    #[test]
    fn test_display() {
        let (board, _) = Board::new().drop_disc(1, Disc::Yellow).unwrap();
        assert_eq!(board.display().lines().last(), Some(".Y....."));
    }

    proptest! {
        #[test]
        fn drop_lands_on_lowest_empty_row(cols in prop::collection::vec(0usize..COLS, 0..60)) {
            let mut board = Board::new();
            let mut disc = Disc::Red;
            for col in cols {
                let before = board.clone();
                match board.drop_disc(col, disc) {
                    Ok((next, at)) => {
                        prop_assert_eq!(at.col, col);
                        prop_assert_eq!(Some(at.row), before.landing_row(col));
                        // Everything below the landing cell was already filled.
                        for row in at.row + 1..ROWS {
                            prop_assert_ne!(before.get(Coord::new(row, col)), Some(Cell::Empty));
                        }
                        board = next;
                        disc = disc.opponent();
                    }
                    Err(err) => {
                        prop_assert_eq!(err, MoveError::ColumnFull(col));
                        prop_assert_eq!(before.landing_row(col), None);
                        prop_assert_eq!(&board, &before);
                    }
                }
            }
        }
    }
}
