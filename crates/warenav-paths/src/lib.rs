//! Shortest-path search for warehouse grids.
//!
//! This crate implements the pathfinding engine on top of
//! [`warenav_core::Grid`]:
//!
//! - **A\*** shortest-path search with unit step cost
//!   ([`PathBuffer::astar_path`], [`find_path`])
//! - **BFS** unweighted distance maps ([`PathBuffer::bfs_map`])
//!
//! Searches operate through [`PathBuffer`], which owns and reuses internal
//! node arrays so that repeated queries incur no allocations after warm-up.
//! The one-shot [`find_path`] entry point builds a scoped buffer per call:
//! no search state outlives the call, and the grid itself is never touched.
//!
//! Movement is 4-directional with every step costing 1, so the Manhattan
//! distance ([`manhattan`]) is an admissible and consistent heuristic and
//! the returned paths are optimal.

mod astar;
mod bfs;
mod distance;
mod search;
mod traits;

pub use astar::find_path;
pub use distance::manhattan;
pub use search::{PathBuffer, PathNode, UNREACHABLE};
pub use traits::{AstarPather, Pather};
