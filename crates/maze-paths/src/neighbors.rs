use maze_core::{Grid, Position};

/// Lazily enumerate the 4-directional moves out of `p`.
///
/// Neighbors come in the fixed order up, left, down, right; those outside
/// the grid or on an obstacle are skipped. Together with the frontier's
/// position tie-break this makes the search order fully deterministic.
pub fn cardinal(grid: &Grid, p: Position) -> impl Iterator<Item = Position> + '_ {
    p.neighbors_4()
        .into_iter()
        .filter(move |&n| grid.is_passable(n))
}
