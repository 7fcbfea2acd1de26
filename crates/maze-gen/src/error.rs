use std::fmt;

use maze_core::{Bounds, Position};

/// Errors reported while validating a [`MazeConfig`](crate::MazeConfig).
///
/// An unreachable goal is not an error; see
/// [`SearchOutcome::NotFound`](maze_paths::SearchOutcome::NotFound).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// The grid has no cell.
    EmptyGrid { rows: i32, cols: i32 },
    /// The start or goal cell lies outside the grid.
    OutOfBounds {
        what: &'static str,
        pos: Position,
        bounds: Bounds,
    },
    /// More obstacles were requested than there are eligible cells.
    TooManyObstacles { requested: usize, available: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { rows, cols } => write!(f, "maze: empty grid ({rows}x{cols})"),
            Self::OutOfBounds { what, pos, bounds } => {
                write!(f, "maze: {what} {pos} is outside the {bounds} grid")
            }
            Self::TooManyObstacles {
                requested,
                available,
            } => write!(
                f,
                "maze: {requested} obstacles requested but only {available} cells are eligible"
            ),
        }
    }
}

impl std::error::Error for MazeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let e = MazeError::TooManyObstacles {
            requested: 10,
            available: 3,
        };
        assert_eq!(
            e.to_string(),
            "maze: 10 obstacles requested but only 3 cells are eligible"
        );
        let e = MazeError::OutOfBounds {
            what: "goal",
            pos: Position::new(5, 0),
            bounds: Bounds::new(2, 2),
        };
        assert_eq!(e.to_string(), "maze: goal (5, 0) is outside the 2x2 grid");
    }
}
