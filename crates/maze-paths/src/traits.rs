use maze_core::{Grid, Position};

use crate::neighbors::cardinal;
use crate::search::STEP_COST;

/// Minimal pathfinding interface — provides neighbor enumeration.
pub trait Pather {
    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Position, to: Position) -> i32;
}

impl Pather for Grid {
    fn neighbors(&self, p: Position, buf: &mut Vec<Position>) {
        buf.extend(cardinal(self, p));
    }
}

impl WeightedPather for Grid {
    fn cost(&self, _from: Position, _to: Position) -> i32 {
        STEP_COST
    }
}
