use maze_core::Position;

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Position, b: Position) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Distance estimate used to order the search frontier.
///
/// Both variants are admissible and consistent on a 4-directional
/// unit-cost grid, so they yield paths of the same (minimal) length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// A*: estimate with the Manhattan distance to the goal.
    #[default]
    Manhattan,
    /// Uniform-cost (Dijkstra) search: no estimate at all.
    Zero,
}

impl Heuristic {
    /// Estimated remaining cost from `from` to `to`.
    #[inline]
    pub fn estimate(self, from: Position, to: Position) -> i32 {
        match self {
            Self::Manhattan => manhattan(from, to),
            Self::Zero => 0,
        }
    }
}
