//! Line and box ownership over a fixed topology.

use crate::{BoxId, Line, LineId, MoveError, Player, Square, Topology};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Ownership of every line and box on the board.
///
/// Membership never changes after construction; claims only fill in owners.
/// Like the other boards, grids are values: every operation returns a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GridRecord")]
pub struct Grid {
    topology: Topology,
    lines: Vec<Option<Player>>,
    boxes: Vec<Option<Player>>,
}

/// A stored grid whose line or box count does not fit its topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display(
    "Grid of {} dots needs {} lines and {} boxes, found {} and {}",
    size,
    expected_lines,
    expected_boxes,
    lines,
    boxes
)]
pub struct GridShapeError {
    /// Dots per side.
    pub size: usize,
    /// Lines the topology defines.
    pub expected_lines: usize,
    /// Boxes the topology defines.
    pub expected_boxes: usize,
    /// Lines found.
    pub lines: usize,
    /// Boxes found.
    pub boxes: usize,
}

#[derive(Deserialize)]
struct GridRecord {
    topology: Topology,
    lines: Vec<Option<Player>>,
    boxes: Vec<Option<Player>>,
}

impl TryFrom<GridRecord> for Grid {
    type Error = GridShapeError;

    fn try_from(record: GridRecord) -> Result<Self, Self::Error> {
        let topology = record.topology;
        let lines_fit = record.lines.len() == topology.line_count();
        let boxes_fit = record.boxes.len() == topology.box_count();
        if !(lines_fit && boxes_fit) {
            return Err(GridShapeError {
                size: topology.size(),
                expected_lines: topology.line_count(),
                expected_boxes: topology.box_count(),
                lines: record.lines.len(),
                boxes: record.boxes.len(),
            });
        }
        Ok(Self {
            topology,
            lines: record.lines,
            boxes: record.boxes,
        })
    }
}

impl Grid {
    /// Creates a grid with every line and box unowned.
    pub fn new(topology: Topology) -> Self {
        Self {
            topology,
            lines: vec![None; topology.line_count()],
            boxes: vec![None; topology.box_count()],
        }
    }

    /// Returns the layout.
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Returns a line with its owner, or `None` if it is not on this grid.
    pub fn line(&self, id: LineId) -> Option<Line> {
        let index = self.topology.line_index(id)?;
        Some(Line {
            id,
            owner: self.lines[index],
        })
    }

    /// Returns a box with its owner, or `None` if it is not on this grid.
    pub fn square(&self, id: BoxId) -> Option<Square> {
        let index = self.topology.box_index(id)?;
        Some(Square {
            id,
            owner: self.boxes[index],
        })
    }

    /// Every line, horizontals first.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.topology
            .line_ids()
            .zip(self.lines.iter())
            .map(|(id, owner)| Line { id, owner: *owner })
    }

    /// Every box, row-major.
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.topology
            .box_ids()
            .zip(self.boxes.iter())
            .map(|(id, owner)| Square { id, owner: *owner })
    }

    /// Lines nobody has claimed yet.
    pub fn available_lines(&self) -> Vec<LineId> {
        self.lines()
            .filter(|line| line.owner.is_none())
            .map(|line| line.id)
            .collect()
    }

    /// Number of boxes `player` owns on this grid.
    pub fn boxes_owned_by(&self, player: Player) -> usize {
        self.boxes.iter().filter(|b| **b == Some(player)).count()
    }

    /// Number of boxes with any owner.
    pub fn owned_boxes(&self) -> usize {
        self.boxes.iter().filter(|b| b.is_some()).count()
    }

    /// True once every box has an owner.
    pub fn all_boxes_owned(&self) -> bool {
        self.boxes.iter().all(Option::is_some)
    }

    /// True if all four sides of `id` are claimed.
    pub fn is_enclosed(&self, id: BoxId) -> bool {
        self.topology
            .bounding_lines(id)
            .iter()
            .all(|line| self.line(*line).is_some_and(|l| l.owner.is_some()))
    }

    /// Returns a grid with `line` drawn by `player`.
    ///
    /// Boxes are not touched; follow up with [`Grid::resolve_boxes`].
    ///
    /// # Errors
    ///
    /// - [`MoveError::LineOutOfRange`] if the line is not on this grid
    /// - [`MoveError::LineClaimed`] if someone already drew it
    #[instrument(skip(self, line), fields(line = %line))]
    pub fn claim_line(&self, line: LineId, player: Player) -> Result<Grid, MoveError> {
        let index = self
            .topology
            .line_index(line)
            .ok_or(MoveError::LineOutOfRange(line))?;
        if self.lines[index].is_some() {
            return Err(MoveError::LineClaimed(line));
        }

        let mut next = self.clone();
        next.lines[index] = Some(player);
        Ok(next)
    }

    /// Awards every unowned, fully enclosed box to `player`.
    ///
    /// Returns the new grid and the boxes that changed hands, in row-major
    /// order. After a single claim this is at most two boxes.
    #[instrument(skip(self))]
    pub fn resolve_boxes(&self, player: Player) -> (Grid, Vec<BoxId>) {
        let mut next = self.clone();
        let mut completed = Vec::new();
        for (index, id) in self.topology.box_ids().enumerate() {
            if self.boxes[index].is_none() && self.is_enclosed(id) {
                next.boxes[index] = Some(player);
                completed.push(id);
                trace!(%id, %player, "Box completed");
            }
        }
        (next, completed)
    }

    /// Formats the grid as text: `+` dots, `-`/`|` claimed lines, `1`/`2` owned boxes.
    pub fn display(&self) -> String {
        let n = self.topology.size();
        let claimed = |id: LineId| self.line(id).is_some_and(|l| l.owner.is_some());
        let mut out = Vec::with_capacity(2 * n - 1);

        for row in 0..n {
            let mut dots = String::new();
            for col in 0..n {
                dots.push('+');
                if col < n - 1 {
                    dots.push(if claimed(LineId::horizontal(row, col)) { '-' } else { ' ' });
                }
            }
            out.push(dots);

            if row < n - 1 {
                let mut sides = String::new();
                for col in 0..n {
                    sides.push(if claimed(LineId::vertical(row, col)) { '|' } else { ' ' });
                    if col < n - 1 {
                        sides.push(match self.square(BoxId::new(row, col)).and_then(|s| s.owner) {
                            Some(Player::One) => '1',
                            Some(Player::Two) => '2',
                            None => ' ',
                        });
                    }
                }
                out.push(sides);
            }
        }
        out.join("\n")
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(Topology::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claim_all(grid: Grid, lines: &[LineId], player: Player) -> Grid {
        lines
            .iter()
            .fold(grid, |g, line| g.claim_line(*line, player).unwrap())
    }

    #[test]
    fn test_fresh_grid_is_unowned() {
        let grid = Grid::default();
        assert_eq!(grid.lines().count(), 40);
        assert_eq!(grid.available_lines().len(), 40);
        assert_eq!(grid.owned_boxes(), 0);
        assert!(!grid.all_boxes_owned());
    }

    #[test]
    fn test_claim_sets_owner_only() {
        let grid = Grid::default();
        let next = grid.claim_line(LineId::vertical(1, 2), Player::Two).unwrap();
        assert_eq!(grid, Grid::default());
        assert_eq!(next.line(LineId::vertical(1, 2)).unwrap().owner, Some(Player::Two));
        assert_eq!(next.available_lines().len(), 39);
    }

    #[test]
    fn test_claim_twice_rejected() {
        let grid = Grid::default().claim_line(LineId::horizontal(0, 0), Player::One).unwrap();
        assert_eq!(
            grid.claim_line(LineId::horizontal(0, 0), Player::Two),
            Err(MoveError::LineClaimed(LineId::horizontal(0, 0)))
        );
    }

    #[test]
    fn test_claim_off_grid_rejected() {
        assert_eq!(
            Grid::default().claim_line(LineId::horizontal(0, 4), Player::One),
            Err(MoveError::LineOutOfRange(LineId::horizontal(0, 4)))
        );
    }

    #[test]
    fn test_resolve_awards_enclosed_box() {
        let grid = claim_all(
            Grid::default(),
            &[
                LineId::horizontal(0, 0),
                LineId::horizontal(1, 0),
                LineId::vertical(0, 0),
                LineId::vertical(0, 1),
            ],
            Player::One,
        );
        let (resolved, completed) = grid.resolve_boxes(Player::Two);
        assert_eq!(completed, vec![BoxId::new(0, 0)]);
        assert_eq!(resolved.square(BoxId::new(0, 0)).unwrap().owner, Some(Player::Two));

        // Owned boxes are never reassigned.
        let (again, completed) = resolved.resolve_boxes(Player::One);
        assert!(completed.is_empty());
        assert_eq!(again, resolved);
    }

    #[test]
    fn test_shared_side_completes_two() {
        let grid = claim_all(
            Grid::default(),
            &[
                LineId::horizontal(0, 0),
                LineId::horizontal(1, 0),
                LineId::vertical(0, 0),
                LineId::horizontal(0, 1),
                LineId::horizontal(1, 1),
                LineId::vertical(0, 2),
                LineId::vertical(0, 1),
            ],
            Player::One,
        );
        let (_, completed) = grid.resolve_boxes(Player::One);
        assert_eq!(completed, vec![BoxId::new(0, 0), BoxId::new(0, 1)]);
    }

    #[test]
    fn test_deserialize_round_trips_claims() {
        let grid = Grid::default().claim_line(LineId::vertical(2, 3), Player::Two).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn test_deserialize_rejects_wrong_shape() {
        let short = r#"{"topology":2,"lines":[null,null,null],"boxes":[null]}"#;
        let err = serde_json::from_str::<Grid>(short).unwrap_err();
        assert!(err.to_string().contains("needs 4 lines"));

        let bad_size = r#"{"topology":0,"lines":[],"boxes":[]}"#;
        assert!(serde_json::from_str::<Grid>(bad_size).is_err());
    }

    #[test]
    fn test_display_small_grid() {
        let topology = Topology::new(2).unwrap();
        let grid = claim_all(
            Grid::new(topology),
            &[
                LineId::horizontal(0, 0),
                LineId::horizontal(1, 0),
                LineId::vertical(0, 0),
                LineId::vertical(0, 1),
            ],
            Player::One,
        );
        let (grid, _) = grid.resolve_boxes(Player::One);
        assert_eq!(grid.display(), "+-+\n|1|\n+-+");
    }
}
