use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace, warn};
use maze_core::{Bounds, Grid, Position};

use crate::bfs::UNREACHABLE;
use crate::distance::Heuristic;
use crate::traits::{Pather, WeightedPather};

/// Cost of every move between adjacent cells.
pub const STEP_COST: i32 = 1;

const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// A route from start to goal, both endpoints included.
///
/// A path always holds at least one cell: when start and goal coincide it
/// is that single cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Position>"))]
pub struct Path(Vec<Position>);

impl Path {
    /// The cells in start-to-goal order.
    #[inline]
    pub fn positions(&self) -> &[Position] {
        &self.0
    }

    /// Number of cells on the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a path produced by a search.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of unit moves, i.e. the path cost.
    #[inline]
    pub fn moves(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// First cell.
    #[inline]
    pub fn start(&self) -> Position {
        self.0[0]
    }

    /// Last cell.
    #[inline]
    pub fn goal(&self) -> Position {
        self.0[self.0.len() - 1]
    }

    /// Whether the path crosses `p`.
    pub fn contains(&self, p: Position) -> bool {
        self.0.contains(&p)
    }

    /// Iterate over the cells in start-to-goal order.
    pub fn iter(&self) -> std::slice::Iter<'_, Position> {
        self.0.iter()
    }

    /// Consume the path, returning its cells.
    pub fn into_vec(self) -> Vec<Position> {
        self.0
    }
}

impl TryFrom<Vec<Position>> for Path {
    type Error = &'static str;

    fn try_from(cells: Vec<Position>) -> Result<Self, Self::Error> {
        if cells.is_empty() {
            return Err("a path holds at least one cell");
        }
        Ok(Path(cells))
    }
}

impl IntoIterator for Path {
    type Item = Position;
    type IntoIter = std::vec::IntoIter<Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Final result of a search.
///
/// An unreachable goal is an ordinary outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(Path),
    NotFound,
}

impl SearchOutcome {
    /// Whether a path was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The path, if one was found.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(p) => Some(p),
            Self::NotFound => None,
        }
    }

    /// Consume the outcome, returning the path if one was found.
    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Found(p) => Some(p),
            Self::NotFound => None,
        }
    }
}

/// Progress of a [`Search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    /// The frontier still holds work.
    Running,
    Found(Path),
    NotFound,
}

impl SearchState {
    /// Whether the search has terminated.
    #[inline]
    pub fn is_done(&self) -> bool {
        !matches!(self, Self::Running)
    }
}

// ---------------------------------------------------------------------------
// Frontier
// ---------------------------------------------------------------------------

/// Frontier entry, ordered for use in `BinaryHeap`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct FrontierEntry {
    f: i32,
    pos: Position,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first, then the
        // smallest position.
        other.f.cmp(&self.f).then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// An A* search in progress.
///
/// `Search` is an iterator: each call to `next` finalizes one cell, marks it
/// on the grid and yields it. The iterator ends once the goal is reached or
/// the frontier runs dry; [`state`](Self::state) then tells which.
///
/// Dropping a search before it ends is fine. The grid keeps only the
/// `Visited` marks made so far, which
/// [`Grid::clear_annotations`](maze_core::Grid::clear_annotations) removes.
pub struct Search<'g> {
    grid: &'g mut Grid,
    bounds: Bounds,
    start: Position,
    goal: Position,
    heuristic: Heuristic,
    frontier: BinaryHeap<FrontierEntry>,
    g_score: Vec<i32>,
    came_from: Vec<usize>,
    closed: Vec<bool>,
    nbuf: Vec<Position>,
    expanded: usize,
    state: SearchState,
}

impl<'g> Search<'g> {
    /// Start an A* search guided by the Manhattan distance.
    pub fn new(grid: &'g mut Grid, start: Position, goal: Position) -> Self {
        Self::with_heuristic(grid, start, goal, Heuristic::Manhattan)
    }

    /// Start a search ordered by the given heuristic.
    ///
    /// If start or goal is outside the grid or on an obstacle, the search is
    /// created already finished with [`SearchState::NotFound`].
    pub fn with_heuristic(
        grid: &'g mut Grid,
        start: Position,
        goal: Position,
        heuristic: Heuristic,
    ) -> Self {
        let bounds = grid.bounds();
        let len = bounds.len();
        let mut search = Self {
            grid,
            bounds,
            start,
            goal,
            heuristic,
            frontier: BinaryHeap::new(),
            g_score: vec![UNREACHABLE; len],
            came_from: vec![NO_PARENT; len],
            closed: vec![false; len],
            nbuf: Vec::with_capacity(4),
            expanded: 0,
            state: SearchState::Running,
        };

        let (Some(si), true, true) = (
            bounds.index(start),
            search.grid.is_passable(start),
            search.grid.is_passable(goal),
        ) else {
            warn!("search {start} -> {goal}: endpoint blocked or outside {bounds}");
            search.state = SearchState::NotFound;
            return search;
        };

        search.g_score[si] = 0;
        search.frontier.push(FrontierEntry {
            f: heuristic.estimate(start, goal),
            pos: start,
        });
        search
    }

    /// The start cell.
    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    /// The goal cell.
    #[inline]
    pub fn goal(&self) -> Position {
        self.goal
    }

    /// Current progress.
    #[inline]
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Number of cells finalized so far.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Number of entries waiting in the frontier, stale ones included.
    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Best known cost from the start to `p`, if `p` has been reached.
    pub fn g_score(&self, p: Position) -> Option<i32> {
        let i = self.bounds.index(p)?;
        match self.g_score[i] {
            UNREACHABLE => None,
            g => Some(g),
        }
    }

    /// The grid being searched.
    #[inline]
    pub fn grid(&self) -> &Grid {
        self.grid
    }

    /// Finalize the next cell and return it, or `None` once the search has
    /// terminated.
    pub fn step(&mut self) -> Option<Position> {
        if self.state.is_done() {
            return None;
        }

        loop {
            let Some(current) = self.frontier.pop() else {
                debug!(
                    "search {} -> {}: no path after {} expansions",
                    self.start, self.goal, self.expanded
                );
                self.state = SearchState::NotFound;
                return None;
            };

            let Some(ci) = self.bounds.index(current.pos) else {
                continue;
            };

            // Skip stale entries: the cell was already finalized through a
            // cheaper entry.
            if self.closed[ci] {
                continue;
            }
            self.closed[ci] = true;
            self.expanded += 1;
            trace!("expand {} f={} g={}", current.pos, current.f, self.g_score[ci]);

            if current.pos == self.goal {
                let path = self.reconstruct(ci);
                for &p in path.iter() {
                    self.grid.mark_path(p);
                }
                debug!(
                    "search {} -> {}: {} moves, {} expansions",
                    self.start,
                    self.goal,
                    path.moves(),
                    self.expanded
                );
                self.state = SearchState::Found(path);
                return Some(current.pos);
            }

            self.grid.mark_visited(current.pos);
            self.expand(ci, current.pos);
            return Some(current.pos);
        }
    }

    fn expand(&mut self, ci: usize, cp: Position) {
        let current_g = self.g_score[ci];
        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        self.grid.neighbors(cp, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = self.bounds.index(np) else {
                continue;
            };
            let tentative_g = current_g + self.grid.cost(cp, np);
            if tentative_g >= self.g_score[ni] {
                continue;
            }
            self.g_score[ni] = tentative_g;
            self.came_from[ni] = ci;
            self.frontier.push(FrontierEntry {
                f: tentative_g + self.heuristic.estimate(np, self.goal),
                pos: np,
            });
        }

        self.nbuf = nbuf;
    }

    fn reconstruct(&self, goal_idx: usize) -> Path {
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != NO_PARENT {
            path.push(self.bounds.position(ci));
            ci = self.came_from[ci];
        }
        path.reverse();
        Path(path)
    }

    /// Run the search to completion.
    pub fn finish(mut self) -> SearchOutcome {
        while self.step().is_some() {}
        match self.state {
            SearchState::Found(path) => SearchOutcome::Found(path),
            SearchState::Running | SearchState::NotFound => SearchOutcome::NotFound,
        }
    }

    /// The outcome of a terminated search, or `None` while it is still
    /// running. Use [`finish`](Self::finish) to drive it to the end.
    pub fn into_outcome(self) -> Option<SearchOutcome> {
        match self.state {
            SearchState::Running => None,
            SearchState::Found(path) => Some(SearchOutcome::Found(path)),
            SearchState::NotFound => Some(SearchOutcome::NotFound),
        }
    }
}

impl Iterator for Search<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        self.step()
    }
}

impl std::iter::FusedIterator for Search<'_> {}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Compute the shortest path from `start` to `goal` using A*.
///
/// Finalized cells are marked `Visited` on `grid` and, on success, the
/// route is marked `OnPath`.
pub fn find_path(grid: &mut Grid, start: Position, goal: Position) -> SearchOutcome {
    Search::new(grid, start, goal).finish()
}

/// Like [`find_path`], calling `on_visit` for every finalized cell in
/// visiting order (the goal included when it is reached).
pub fn find_path_traced(
    grid: &mut Grid,
    start: Position,
    goal: Position,
    on_visit: impl FnMut(Position),
) -> SearchOutcome {
    find_path_with(grid, start, goal, Heuristic::Manhattan, on_visit)
}

/// Traced search with an explicit frontier heuristic.
pub fn find_path_with(
    grid: &mut Grid,
    start: Position,
    goal: Position,
    heuristic: Heuristic,
    mut on_visit: impl FnMut(Position),
) -> SearchOutcome {
    let mut search = Search::with_heuristic(grid, start, goal, heuristic);
    while let Some(p) = search.step() {
        on_visit(p);
    }
    search.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::bfs_map;
    use crate::distance::manhattan;
    use maze_core::CellState;
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    fn assert_valid_path(grid: &Grid, path: &Path, start: Position, goal: Position) {
        assert_eq!(path.start(), start);
        assert_eq!(path.goal(), goal);
        for w in path.positions().windows(2) {
            assert_eq!(manhattan(w[0], w[1]), 1, "non-adjacent step {} -> {}", w[0], w[1]);
        }
        for &c in path.iter() {
            assert!(grid.is_passable(c), "path crosses obstacle at {c}");
        }
    }

    #[test]
    fn open_grid_is_manhattan_optimal() {
        for (rows, cols, goal) in [(5, 5, p(4, 4)), (3, 8, p(2, 7)), (6, 2, p(0, 1))] {
            let mut g = Grid::new(rows, cols);
            let start = p(0, 0);
            let path = find_path(&mut g, start, goal).into_path().unwrap();
            assert_eq!(path.len() as i32, manhattan(start, goal) + 1);
        }
    }

    #[test]
    fn five_by_five_staircase() {
        let mut g = Grid::new(5, 5);
        let path = find_path(&mut g, p(0, 0), p(4, 4)).into_path().unwrap();
        assert_eq!(path.len(), 9);
        assert_eq!(path.moves(), 8);
        for w in path.positions().windows(2) {
            let d = w[1] - w[0];
            assert!(d == p(1, 0) || d == p(0, 1), "not monotone: {} -> {}", w[0], w[1]);
        }
        assert_valid_path(&g, &path, p(0, 0), p(4, 4));
    }

    #[test]
    fn three_by_three_detour() {
        // .#.
        // .#.
        // ...
        let obstacles = [(0, 1), (1, 1)];
        let mut g = Grid::with_obstacles(3, 3, obstacles);
        let path = find_path(&mut g, p(0, 0), p(2, 2)).into_path().unwrap();
        assert_eq!(path.len(), 5);
        assert_valid_path(&g, &path, p(0, 0), p(2, 2));
        assert!(path.contains(p(2, 1)));
    }

    #[test]
    fn fully_blocked_is_not_found() {
        let mut g = Grid::with_obstacles(2, 2, [(0, 1), (1, 0)]);
        assert_eq!(find_path(&mut g, p(0, 0), p(1, 1)), SearchOutcome::NotFound);
        assert_eq!(g.count(CellState::OnPath), 0);
    }

    #[test]
    fn enclosed_goal_terminates() {
        let mut g = Grid::with_obstacles(7, 7, [(2, 3), (3, 2), (3, 4), (4, 3)]);
        let mut search = Search::new(&mut g, p(0, 0), p(3, 3));
        let visited = search.by_ref().count();
        assert_eq!(*search.state(), SearchState::NotFound);
        assert_eq!(visited, 49 - 5);
    }

    #[test]
    fn start_equals_goal() {
        let mut g = Grid::new(3, 3);
        let path = find_path(&mut g, p(1, 1), p(1, 1)).into_path().unwrap();
        assert_eq!(path.positions(), &[p(1, 1)]);
        assert_eq!(path.moves(), 0);
        assert_eq!(g.at(p(1, 1)), Some(CellState::OnPath));
    }

    #[test]
    fn blocked_endpoints_are_not_found() {
        let mut g = Grid::with_obstacles(3, 3, [(0, 0), (2, 2)]);
        assert_eq!(find_path(&mut g, p(0, 0), p(1, 1)), SearchOutcome::NotFound);
        assert_eq!(find_path(&mut g, p(1, 1), p(2, 2)), SearchOutcome::NotFound);
        assert_eq!(find_path(&mut g, p(1, 1), p(5, 5)), SearchOutcome::NotFound);
        assert_eq!(find_path(&mut g, p(-1, 0), p(1, 1)), SearchOutcome::NotFound);
        // Nothing was touched.
        assert_eq!(g.count(CellState::Visited), 0);
    }

    #[test]
    fn marks_visited_and_path() {
        let mut g = Grid::with_obstacles(4, 4, [(1, 1), (1, 2), (2, 1)]);
        let path = find_path(&mut g, p(0, 0), p(3, 3)).into_path().unwrap();
        assert_eq!(g.count(CellState::OnPath), path.len());
        for &c in path.iter() {
            assert_eq!(g.at(c), Some(CellState::OnPath));
        }
        assert_eq!(g.count(CellState::Obstacle), 3);
        for (pos, state) in g.iter() {
            if state == CellState::Visited {
                assert!(!path.contains(pos));
            }
        }
    }

    #[test]
    fn trace_reports_each_cell_once_ending_at_goal() {
        let mut g = Grid::with_obstacles(6, 6, [(1, 0), (1, 1), (1, 2), (1, 3), (3, 5), (4, 4)]);
        let mut seen = Vec::new();
        let outcome = find_path_traced(&mut g, p(0, 0), p(5, 5), |c| seen.push(c));
        assert!(outcome.is_found());
        assert_eq!(seen.first(), Some(&p(0, 0)));
        assert_eq!(seen.last(), Some(&p(5, 5)));
        let mut dedup = seen.clone();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), seen.len());
        for &c in &seen {
            assert!(g.at(c).is_some_and(CellState::is_annotation));
        }
        assert_eq!(g.count(CellState::Visited) + g.count(CellState::OnPath), seen.len());
    }

    #[test]
    fn trace_is_deterministic() {
        let obstacles = [(0, 2), (1, 2), (2, 2), (3, 4), (4, 1)];
        let mut a = Vec::new();
        let mut b = Vec::new();
        let mut g1 = Grid::with_obstacles(5, 6, obstacles);
        let mut g2 = Grid::with_obstacles(5, 6, obstacles);
        find_path_traced(&mut g1, p(0, 0), p(4, 5), |c| a.push(c));
        find_path_traced(&mut g2, p(0, 0), p(4, 5), |c| b.push(c));
        assert_eq!(a, b);
        assert_eq!(g1, g2);
    }

    #[test]
    fn equal_f_prefers_smaller_position() {
        // On an open grid every cell of the start's first ring has the same
        // f; (0,1) comes before (1,0) in row-major order.
        let mut g = Grid::new(3, 3);
        let mut search = Search::new(&mut g, p(0, 0), p(2, 2));
        assert_eq!(search.next(), Some(p(0, 0)));
        assert_eq!(search.next(), Some(p(0, 1)));
    }

    #[test]
    fn abandoned_search_leaves_grid_clean_after_reset() {
        let mut g = Grid::with_obstacles(8, 8, [(3, 3), (3, 4), (4, 3)]);
        let before = g.clone();
        {
            let mut search = Search::new(&mut g, p(0, 0), p(7, 7));
            for _ in 0..5 {
                search.next();
            }
            assert_eq!(*search.state(), SearchState::Running);
            assert_eq!(search.expanded(), 5);
        }
        assert_eq!(g.count(CellState::Visited), 5);
        g.clear_annotations();
        assert_eq!(g, before);

        // A fresh search on the reset grid still succeeds.
        let path = find_path(&mut g, p(0, 0), p(7, 7)).into_path().unwrap();
        assert_eq!(path.moves(), 14);
    }

    #[test]
    fn step_after_finish_stays_done() {
        let mut g = Grid::new(2, 2);
        let mut search = Search::new(&mut g, p(0, 0), p(1, 1));
        while search.step().is_some() {}
        assert!(search.state().is_done());
        assert_eq!(search.step(), None);
        assert_eq!(search.g_score(p(1, 1)), Some(2));
        assert!(search.into_outcome().is_some_and(|o| o.is_found()));
    }

    #[test]
    fn partial_search_has_no_outcome_yet() {
        let mut g = Grid::new(5, 5);
        let mut search = Search::new(&mut g, p(0, 0), p(4, 4));
        assert_eq!(search.step(), Some(p(0, 0)));
        assert_eq!(*search.state(), SearchState::Running);
        assert_eq!(search.into_outcome(), None);

        g.clear_annotations();
        let mut search = Search::new(&mut g, p(0, 0), p(4, 4));
        search.step();
        let path = search.finish().into_path().unwrap();
        assert_eq!(path.moves(), 8);
    }

    #[test]
    fn blocked_search_has_outcome_immediately() {
        let mut g = Grid::with_obstacles(3, 3, [(2, 2)]);
        let search = Search::new(&mut g, p(0, 0), p(2, 2));
        assert_eq!(search.into_outcome(), Some(SearchOutcome::NotFound));
    }

    #[test]
    fn empty_path_is_rejected() {
        assert!(Path::try_from(Vec::new()).is_err());
        let path = Path::try_from(vec![p(1, 1), p(1, 2)]).unwrap();
        assert_eq!(path.start(), p(1, 1));
        assert_eq!(path.goal(), p(1, 2));
    }

    #[test]
    fn repeated_runs_have_equal_length() {
        let mut g = Grid::with_obstacles(6, 6, [(0, 3), (1, 3), (2, 3), (4, 1), (4, 2), (4, 4)]);
        let first = find_path(&mut g, p(0, 0), p(5, 5)).into_path().unwrap();
        for _ in 0..3 {
            g.clear_annotations();
            let again = find_path(&mut g, p(0, 0), p(5, 5)).into_path().unwrap();
            assert_eq!(again.len(), first.len());
        }
    }

    #[test]
    fn dijkstra_matches_astar_length() {
        let obstacles = [(1, 1), (1, 2), (1, 3), (3, 0), (3, 1), (3, 3), (3, 4)];
        let mut g1 = Grid::with_obstacles(5, 5, obstacles);
        let mut g2 = g1.clone();
        let mut astar_visits = 0;
        let mut dijkstra_visits = 0;
        let a = find_path_with(&mut g1, p(0, 0), p(4, 4), Heuristic::Manhattan, |_| {
            astar_visits += 1
        });
        let d = find_path_with(&mut g2, p(0, 0), p(4, 4), Heuristic::Zero, |_| {
            dijkstra_visits += 1
        });
        assert_eq!(a.path().map(Path::len), d.path().map(Path::len));
        assert!(astar_visits <= dijkstra_visits);
    }

    #[test]
    fn matches_bfs_oracle_on_random_grids() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..200 {
            let rows = rng.random_range(1..=10);
            let cols = rng.random_range(1..=10);
            let density = rng.random_range(0..40);
            let mut g = Grid::new(rows, cols);
            for c in g.bounds() {
                if rng.random_range(0..100) < density {
                    g.place_obstacle(c);
                }
            }
            let start = p(rng.random_range(0..rows), rng.random_range(0..cols));
            let goal = p(rng.random_range(0..rows), rng.random_range(0..cols));

            let oracle = if g.is_passable(start) && g.is_passable(goal) {
                bfs_map(&g, g.bounds(), &[start]).at(goal)
            } else {
                None
            };
            let reference = g.clone();

            match find_path(&mut g, start, goal) {
                SearchOutcome::Found(path) => {
                    assert_eq!(Some(path.moves() as i32), oracle, "grid:\n{g}");
                    assert_valid_path(&reference, &path, start, goal);
                }
                SearchOutcome::NotFound => assert_eq!(oracle, None, "grid:\n{g}"),
            }
        }
    }

    #[test]
    fn frontier_entry_order() {
        let mut heap = BinaryHeap::new();
        heap.push(FrontierEntry { f: 3, pos: p(0, 0) });
        heap.push(FrontierEntry { f: 2, pos: p(1, 1) });
        heap.push(FrontierEntry { f: 2, pos: p(0, 5) });
        heap.push(FrontierEntry { f: 2, pos: p(1, 0) });
        let order: Vec<_> = std::iter::from_fn(|| heap.pop()).map(|e| e.pos).collect();
        assert_eq!(order, vec![p(0, 5), p(1, 0), p(1, 1), p(0, 0)]);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        let mut g = Grid::new(3, 3);
        let path = find_path(&mut g, Position::new(0, 0), Position::new(2, 1))
            .into_path()
            .unwrap();
        let json = serde_json::to_string(&path).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
        assert_eq!(back.goal(), Position::new(2, 1));
    }

    #[test]
    fn empty_path_does_not_deserialize() {
        assert!(serde_json::from_str::<Path>("[]").is_err());
    }
}
