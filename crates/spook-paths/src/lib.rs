//! Least-scary-path search over wall-weighted mazes.
//!
//! This crate computes the minimum accumulated *scariness* of travelling
//! between two rooms of a maze whose inter-room walls carry directional
//! crossing weights:
//!
//! - **Dijkstra** shortest-cost search ([`PathFinder::search`])
//! - Per-room cost read-off from the last run ([`PathFinder::cost_at`],
//!   [`PathFinder::reached`])
//! - Route reconstruction ([`PathFinder::path_to`])
//!
//! The engine reads mazes through the [`WallGrid`] trait and never mutates
//! them. [`PathFinder`] owns and reuses its internal buffers, so repeated
//! searches incur no allocations after warm-up.
//!
//! # Example
//!
//! ```
//! use spook_maze::{Cell, Maze};
//! use spook_paths::PathFinder;
//!
//! let maze = Maze::open(2, 2);
//! let mut finder = PathFinder::new();
//! finder.initialize(&maze);
//! let cost = finder.search(&maze, Cell::new(0, 0), Cell::new(1, 1)).unwrap();
//! assert_eq!(cost, Some(2));
//! ```

mod dijkstra;
mod pathfinder;
mod traits;

pub use pathfinder::{PathCost, PathFinder, SearchError};
pub use traits::WallGrid;
