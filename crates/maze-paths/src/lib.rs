//! Shortest-path search over obstacle grids.
//!
//! The engine is a heuristic best-first (A\*) search with unit edge costs
//! and 4-directional movement:
//!
//! - [`find_path`] runs a search to completion.
//! - [`find_path_traced`] does the same and reports every finalized cell to
//!   a callback, in visiting order.
//! - [`Search`] is the stepping form: an iterator yielding one finalized
//!   cell per call, so a caller can animate at its own pace or stop early.
//! - [`bfs_map`] computes unit-cost distance maps, handy for reachability
//!   queries.
//!
//! Searches annotate the [`Grid`](maze_core::Grid) they run on: finalized
//! cells become `Visited`, and the route becomes `OnPath` on success.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS distance maps |
//! | [`WeightedPather`] : [`Pather`] | A\* search |

mod bfs;
mod distance;
mod neighbors;
mod search;
mod traits;

pub use bfs::{DistanceMap, UNREACHABLE, bfs_map};
pub use distance::{Heuristic, manhattan};
pub use neighbors::cardinal;
pub use search::{
    Path, STEP_COST, Search, SearchOutcome, SearchState, find_path, find_path_traced,
    find_path_with,
};
pub use traits::{Pather, WeightedPather};
