//! Fixed line and box layout for an N x N dot grid.
//!
//! Lines are ordered horizontals first (row-major), then verticals
//! (row-major). Boxes are row-major. These orders are stable for the
//! lifetime of a session and double as storage indices in [`Grid`](crate::Grid).

use crate::{BoxId, Direction, LineId};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Dots per side in a standard game (a 4x4 field of boxes).
pub const DEFAULT_GRID_SIZE: usize = 5;

/// Smallest playable grid: a single box.
pub const MIN_GRID_SIZE: usize = 2;

/// Largest supported grid.
pub const MAX_GRID_SIZE: usize = 10;

/// Requested grid size is not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Grid size {} is outside {}..={}", size, MIN_GRID_SIZE, MAX_GRID_SIZE)]
pub struct GridSizeError {
    /// The rejected size.
    pub size: usize,
}

/// Shape of the board: `size` dots per side.
///
/// Serialized as the bare size; deserializing goes through [`Topology::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Topology {
    size: usize,
}

impl Topology {
    /// Creates a topology with `size` dots per side.
    ///
    /// # Errors
    ///
    /// Returns [`GridSizeError`] unless `size` is within
    /// [`MIN_GRID_SIZE`]..=[`MAX_GRID_SIZE`].
    #[instrument]
    pub fn new(size: usize) -> Result<Self, GridSizeError> {
        if (MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&size) {
            Ok(Self { size })
        } else {
            Err(GridSizeError { size })
        }
    }

    /// Dots per side.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of horizontal lines.
    pub fn horizontal_count(&self) -> usize {
        self.size * (self.size - 1)
    }

    /// Total number of lines.
    pub fn line_count(&self) -> usize {
        2 * self.horizontal_count()
    }

    /// Total number of boxes.
    pub fn box_count(&self) -> usize {
        (self.size - 1) * (self.size - 1)
    }

    /// Storage index of `line`, or `None` if the line is not on this grid.
    ///
    /// Horizontal lines exist at every `(row, col)` with `col < size - 1`;
    /// vertical lines at every `(row, col)` with `row < size - 1`.
    pub fn line_index(&self, line: LineId) -> Option<usize> {
        let n = self.size;
        match line.direction {
            Direction::Horizontal if line.row < n && line.col < n - 1 => {
                Some(line.row * (n - 1) + line.col)
            }
            Direction::Vertical if line.row < n - 1 && line.col < n => {
                Some(self.horizontal_count() + line.row * n + line.col)
            }
            _ => None,
        }
    }

    /// Storage index of `id`, or `None` if the box is not on this grid.
    pub fn box_index(&self, id: BoxId) -> Option<usize> {
        let side = self.size - 1;
        (id.row < side && id.col < side).then(|| id.row * side + id.col)
    }

    /// Every line, in storage order.
    pub fn line_ids(&self) -> impl Iterator<Item = LineId> + '_ {
        let n = self.size;
        let horizontal = (0..n).flat_map(move |row| (0..n - 1).map(move |col| LineId::horizontal(row, col)));
        let vertical = (0..n - 1).flat_map(move |row| (0..n).map(move |col| LineId::vertical(row, col)));
        horizontal.chain(vertical)
    }

    /// Every box, in storage order.
    pub fn box_ids(&self) -> impl Iterator<Item = BoxId> + '_ {
        let side = self.size - 1;
        (0..side).flat_map(move |row| (0..side).map(move |col| BoxId::new(row, col)))
    }

    /// The four sides of a box: top, bottom, left, right.
    pub fn bounding_lines(&self, id: BoxId) -> [LineId; 4] {
        [
            LineId::horizontal(id.row, id.col),
            LineId::horizontal(id.row + 1, id.col),
            LineId::vertical(id.row, id.col),
            LineId::vertical(id.row, id.col + 1),
        ]
    }
}

impl TryFrom<usize> for Topology {
    type Error = GridSizeError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<Topology> for usize {
    fn from(topology: Topology) -> Self {
        topology.size
    }
}

impl Default for Topology {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_counts() {
        let t = Topology::default();
        assert_eq!(t.horizontal_count(), 20);
        assert_eq!(t.line_count(), 40);
        assert_eq!(t.box_count(), 16);
        assert_eq!(t.line_ids().count(), 40);
        assert_eq!(t.box_ids().count(), 16);
    }

    #[test]
    fn test_line_index_follows_iteration_order() {
        let t = Topology::new(4).unwrap();
        for (i, line) in t.line_ids().enumerate() {
            assert_eq!(t.line_index(line), Some(i));
        }
        for (i, id) in t.box_ids().enumerate() {
            assert_eq!(t.box_index(id), Some(i));
        }
    }

    #[test]
    fn test_lines_off_grid() {
        let t = Topology::default();
        assert_eq!(t.line_index(LineId::horizontal(0, 4)), None);
        assert_eq!(t.line_index(LineId::horizontal(5, 0)), None);
        assert_eq!(t.line_index(LineId::vertical(4, 0)), None);
        assert_eq!(t.line_index(LineId::vertical(0, 5)), None);
        assert!(t.line_index(LineId::horizontal(4, 3)).is_some());
        assert!(t.line_index(LineId::vertical(3, 4)).is_some());
    }

    #[test]
    fn test_bounding_lines_exist() {
        let t = Topology::default();
        for id in t.box_ids() {
            assert!(t.bounding_lines(id).iter().all(|l| t.line_index(*l).is_some()));
        }
    }

    #[test]
    fn test_deserialize_checks_size() {
        assert_eq!(serde_json::to_string(&Topology::default()).unwrap(), "5");
        assert_eq!(serde_json::from_str::<Topology>("3").unwrap().box_count(), 4);
        assert!(serde_json::from_str::<Topology>("0").is_err());
        assert!(serde_json::from_str::<Topology>("11").is_err());
    }

    #[test]
    fn test_size_bounds() {
        assert_eq!(Topology::new(1), Err(GridSizeError { size: 1 }));
        assert_eq!(Topology::new(11), Err(GridSizeError { size: 11 }));
        assert!(Topology::new(2).is_ok_and(|t| t.box_count() == 1));
    }
}
