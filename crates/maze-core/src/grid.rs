//! The maze grid: a fixed-size, row-major array of [`CellState`].
//!
//! Obstacles are placed once while the maze is built. Search annotations
//! ([`CellState::Visited`], [`CellState::OnPath`]) are layered on top of free
//! cells and can be wiped with [`Grid::clear_annotations`] without touching
//! the obstacle layout.

use std::fmt;

use crate::geom::{Bounds, Position};

/// Classification of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Free,
    Obstacle,
    /// Finalized by a search.
    Visited,
    /// Part of the discovered route.
    OnPath,
}

impl CellState {
    /// Whether a walker may enter the cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Obstacle)
    }

    /// Whether the cell carries a search annotation.
    #[inline]
    pub const fn is_annotation(self) -> bool {
        matches!(self, Self::Visited | Self::OnPath)
    }

    /// Single-character text form.
    pub const fn glyph(self) -> char {
        match self {
            Self::Free => '.',
            Self::Obstacle => '#',
            Self::Visited => 'o',
            Self::OnPath => '*',
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A `rows x cols` grid of [`CellState`] values.
///
/// The grid is a plain owned value: whoever holds `&mut Grid` (the obstacle
/// placement during setup, the search engine afterwards) is the only writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    bounds: Bounds,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a new grid with every cell free.
    pub fn new(rows: i32, cols: i32) -> Self {
        let bounds = Bounds::new(rows, cols);
        Self {
            bounds,
            cells: vec![CellState::Free; bounds.len()],
        }
    }

    /// Create a grid and place every obstacle in `obstacles`.
    ///
    /// Positions outside the grid are ignored.
    pub fn with_obstacles<I>(rows: i32, cols: i32, obstacles: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Position>,
    {
        let mut grid = Self::new(rows, cols);
        for p in obstacles {
            grid.place_obstacle(p.into());
        }
        grid
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// The grid rectangle.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Whether the grid contains the given position.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        self.bounds.contains(p)
    }

    /// Get the cell state at a position, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Position) -> Option<CellState> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is in bounds and not an obstacle.
    #[inline]
    pub fn is_passable(&self, p: Position) -> bool {
        self.at(p).is_some_and(CellState::is_passable)
    }

    /// Turn a cell into an obstacle. Returns `false` if out of bounds.
    pub fn place_obstacle(&mut self, p: Position) -> bool {
        match self.bounds.index(p) {
            Some(i) => {
                self.cells[i] = CellState::Obstacle;
                true
            }
            None => false,
        }
    }

    /// Mark a cell as visited by a search.
    ///
    /// Obstacles and out-of-bounds positions are left alone and reported
    /// with `false`.
    #[inline]
    pub fn mark_visited(&mut self, p: Position) -> bool {
        self.annotate(p, CellState::Visited)
    }

    /// Mark a cell as part of the discovered route.
    ///
    /// Obstacles and out-of-bounds positions are left alone and reported
    /// with `false`.
    #[inline]
    pub fn mark_path(&mut self, p: Position) -> bool {
        self.annotate(p, CellState::OnPath)
    }

    fn annotate(&mut self, p: Position, state: CellState) -> bool {
        let Some(i) = self.bounds.index(p) else {
            return false;
        };
        if self.cells[i] == CellState::Obstacle {
            return false;
        }
        self.cells[i] = state;
        true
    }

    /// Reset every visited or on-path cell back to free.
    pub fn clear_annotations(&mut self) {
        for c in self.cells.iter_mut() {
            if c.is_annotation() {
                *c = CellState::Free;
            }
        }
    }

    /// Count how many cells are in the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Positions of every obstacle, in row-major order.
    pub fn obstacles(&self) -> impl Iterator<Item = Position> + '_ {
        self.iter()
            .filter(|&(_, c)| c == CellState::Obstacle)
            .map(|(p, _)| p)
    }

    /// Iterate over `(Position, CellState)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// The cells of row `row`, or an empty slice if out of bounds.
    pub fn row(&self, row: i32) -> &[CellState] {
        if row < 0 || row >= self.bounds.rows {
            return &[];
        }
        let w = self.bounds.cols as usize;
        let start = row as usize * w;
        &self.cells[start..start + w]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.bounds.rows {
            for c in self.row(row) {
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
