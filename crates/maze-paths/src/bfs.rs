use std::collections::VecDeque;

use maze_core::{Bounds, Position};

use crate::traits::Pather;

/// Sentinel value meaning "unreachable" in a [`DistanceMap`].
pub const UNREACHABLE: i32 = i32::MAX;

/// Unit-cost distances from a set of sources, produced by [`bfs_map`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    bounds: Bounds,
    dist: Vec<i32>,
}

impl DistanceMap {
    /// Distance at `p`, or `None` if out of bounds or not reached.
    pub fn at(&self, p: Position) -> Option<i32> {
        let i = self.bounds.index(p)?;
        match self.dist[i] {
            UNREACHABLE => None,
            d => Some(d),
        }
    }

    /// Whether `p` was reached from any source.
    #[inline]
    pub fn reachable(&self, p: Position) -> bool {
        self.at(p).is_some()
    }

    /// Number of reached cells, sources included.
    pub fn reached(&self) -> usize {
        self.dist.iter().filter(|&&d| d != UNREACHABLE).count()
    }
}

/// Compute a multi-source breadth-first search distance map.
///
/// Each step has cost 1. Sources outside `bounds` are ignored.
pub fn bfs_map<P: Pather>(pather: &P, bounds: Bounds, sources: &[Position]) -> DistanceMap {
    let mut dist = vec![UNREACHABLE; bounds.len()];
    let mut queue: VecDeque<usize> = VecDeque::new();

    for &src in sources {
        if let Some(si) = bounds.index(src) {
            if dist[si] != UNREACHABLE {
                continue;
            }
            dist[si] = 0;
            queue.push_back(si);
        }
    }

    let mut nbuf = Vec::with_capacity(4);

    while let Some(ci) = queue.pop_front() {
        let current = dist[ci];
        nbuf.clear();
        pather.neighbors(bounds.position(ci), &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = bounds.index(np) else {
                continue;
            };
            if dist[ni] != UNREACHABLE {
                continue;
            }
            dist[ni] = current + 1;
            queue.push_back(ni);
        }
    }

    DistanceMap { bounds, dist }
}
