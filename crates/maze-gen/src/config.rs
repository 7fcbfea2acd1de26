//! Maze configuration: grid size, obstacle count, endpoints and the set of
//! cells kept free of obstacles.

use std::collections::BTreeSet;

use maze_core::{Bounds, Position};

use crate::error::MazeError;

/// Width in pixels of the display area the default grid is derived from.
pub const SCREEN_WIDTH: i32 = 800;
/// Height in pixels of the display area the default grid is derived from.
pub const SCREEN_HEIGHT: i32 = 600;
/// Side in pixels of one displayed cell.
pub const CELL_SIZE: i32 = 20;

/// Rows of the default grid.
pub const DEFAULT_ROWS: i32 = SCREEN_HEIGHT / CELL_SIZE;
/// Columns of the default grid.
pub const DEFAULT_COLS: i32 = SCREEN_WIDTH / CELL_SIZE;
/// Obstacles placed by the default configuration.
pub const DEFAULT_OBSTACLE_COUNT: usize = 400;

// ---------------------------------------------------------------------------
// ExclusionSet
// ---------------------------------------------------------------------------

/// Cells that must never receive an obstacle.
///
/// Cells outside the grid are allowed in the set and simply have no effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExclusionSet(BTreeSet<Position>);

impl ExclusionSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The classic layout: both corners plus a few cells beside them.
    ///
    /// `(0,0)`, `(0,1)`, `(1,0)`, `(2,0)` near the top-left corner and
    /// `(rows-1,cols-1)`, `(rows-2,cols-1)`, `(rows-1,cols-2)` near the
    /// bottom-right one.
    pub fn corners(rows: i32, cols: i32) -> Self {
        [
            (0, 0),
            (rows - 1, cols - 1),
            (rows - 2, cols - 1),
            (0, 1),
            (1, 0),
            (rows - 1, cols - 2),
            (2, 0),
        ]
        .into_iter()
        .map(Position::from)
        .collect()
    }

    /// Every cell within Manhattan distance `radius` of one of `centers`.
    pub fn around(centers: &[Position], radius: i32) -> Self {
        let mut set = BTreeSet::new();
        for &c in centers {
            for dr in -radius..=radius {
                let span = radius - dr.abs();
                for dc in -span..=span {
                    set.insert(c.shift(dr, dc));
                }
            }
        }
        Self(set)
    }

    /// Add a cell. Returns `false` if it was already present.
    pub fn insert(&mut self, p: Position) -> bool {
        self.0.insert(p)
    }

    /// Whether `p` is excluded.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        self.0.contains(&p)
    }

    /// Number of cells in the set, out-of-grid ones included.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Position> for ExclusionSet {
    fn from_iter<T: IntoIterator<Item = Position>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Position> for ExclusionSet {
    fn extend<T: IntoIterator<Item = Position>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

// ---------------------------------------------------------------------------
// MazeConfig
// ---------------------------------------------------------------------------

/// Everything needed to build a [`Maze`](crate::Maze).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MazeConfig {
    pub rows: i32,
    pub cols: i32,
    /// Exact number of obstacles to place.
    pub obstacle_count: usize,
    pub start: Position,
    pub goal: Position,
    /// Cells kept free in addition to `start` and `goal`.
    pub exclusion: ExclusionSet,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            obstacle_count: DEFAULT_OBSTACLE_COUNT,
            start: Position::ZERO,
            goal: Position::new(DEFAULT_ROWS - 1, DEFAULT_COLS - 1),
            exclusion: ExclusionSet::corners(DEFAULT_ROWS, DEFAULT_COLS),
        }
    }
}

impl MazeConfig {
    /// Resize the grid.
    ///
    /// The start moves to the top-left corner, the goal to the bottom-right
    /// one, and the exclusion set is rebuilt with [`ExclusionSet::corners`].
    pub fn with_size(mut self, rows: i32, cols: i32) -> Self {
        self.rows = rows;
        self.cols = cols;
        self.start = Position::ZERO;
        self.goal = Position::new(rows - 1, cols - 1);
        self.exclusion = ExclusionSet::corners(rows, cols);
        self
    }

    pub fn with_obstacle_count(mut self, count: usize) -> Self {
        self.obstacle_count = count;
        self
    }

    /// Set the start and goal cells. The exclusion set is left unchanged.
    pub fn with_endpoints(mut self, start: Position, goal: Position) -> Self {
        self.start = start;
        self.goal = goal;
        self
    }

    pub fn with_exclusion(mut self, exclusion: ExclusionSet) -> Self {
        self.exclusion = exclusion;
        self
    }

    /// The grid rectangle.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.rows, self.cols)
    }

    /// Whether `p` may not receive an obstacle.
    #[inline]
    pub fn is_reserved(&self, p: Position) -> bool {
        p == self.start || p == self.goal || self.exclusion.contains(p)
    }

    /// Number of in-grid cells eligible for an obstacle.
    pub fn eligible_count(&self) -> usize {
        self.bounds()
            .iter()
            .filter(|&p| !self.is_reserved(p))
            .count()
    }

    /// Check that the configuration describes a buildable maze.
    pub fn validate(&self) -> Result<(), MazeError> {
        let bounds = self.bounds();
        if self.rows <= 0 || self.cols <= 0 {
            return Err(MazeError::EmptyGrid {
                rows: self.rows,
                cols: self.cols,
            });
        }
        for (what, pos) in [("start", self.start), ("goal", self.goal)] {
            if !bounds.contains(pos) {
                return Err(MazeError::OutOfBounds { what, pos, bounds });
            }
        }
        let available = self.eligible_count();
        if self.obstacle_count > available {
            return Err(MazeError::TooManyObstacles {
                requested: self.obstacle_count,
                available,
            });
        }
        Ok(())
    }
}
