//! A generated maze: the grid, its endpoints and the obstacle layout.

use std::collections::BTreeSet;
use std::fmt;

use maze_core::{Grid, Position};
use maze_paths::{Heuristic, Search, SearchOutcome, bfs_map, find_path, find_path_traced};
use rand::Rng;

use crate::config::MazeConfig;
use crate::error::MazeError;
use crate::obstacles::ObstacleGenerator;

/// A grid populated with obstacles, ready to be solved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    pub grid: Grid,
    pub start: Position,
    pub goal: Position,
    pub obstacles: BTreeSet<Position>,
}

impl Maze {
    /// Validate `config`, sample its obstacles with `rng` and build the grid.
    pub fn generate<R: Rng>(config: &MazeConfig, rng: R) -> Result<Self, MazeError> {
        let obstacles = ObstacleGenerator::new(rng).generate(config)?;
        Ok(Self::from_obstacles(config, obstacles))
    }

    /// Build a maze from a known obstacle layout.
    ///
    /// The layout is used as given, minus cells outside the grid; only
    /// [`Maze::generate`] enforces the configuration's exclusion set.
    pub fn from_obstacles(config: &MazeConfig, mut obstacles: BTreeSet<Position>) -> Self {
        let bounds = config.bounds();
        obstacles.retain(|&p| bounds.contains(p));
        let grid = Grid::with_obstacles(config.rows, config.cols, obstacles.iter().copied());
        Self {
            grid,
            start: config.start,
            goal: config.goal,
            obstacles,
        }
    }

    /// Run A* from start to goal, annotating the grid.
    pub fn solve(&mut self) -> SearchOutcome {
        find_path(&mut self.grid, self.start, self.goal)
    }

    /// Like [`solve`](Self::solve), reporting each finalized cell.
    pub fn solve_traced(&mut self, on_visit: impl FnMut(Position)) -> SearchOutcome {
        find_path_traced(&mut self.grid, self.start, self.goal, on_visit)
    }

    /// A stepping search from start to goal.
    pub fn search(&mut self, heuristic: Heuristic) -> Search<'_> {
        Search::with_heuristic(&mut self.grid, self.start, self.goal, heuristic)
    }

    /// Whether the goal can be reached at all, without touching the grid.
    pub fn is_solvable(&self) -> bool {
        self.grid.is_passable(self.start)
            && self.grid.is_passable(self.goal)
            && bfs_map(&self.grid, self.grid.bounds(), &[self.start]).reachable(self.goal)
    }

    /// Remove the annotations left by previous searches.
    pub fn reset(&mut self) {
        self.grid.clear_annotations();
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}
