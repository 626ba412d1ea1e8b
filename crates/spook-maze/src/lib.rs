//! **spook-maze** — Wall-weighted maze types and generation.
//!
//! This crate provides the foundational types of the *spook* workspace: maze
//! coordinates and directions, per-room directional wall values with
//! "scariness" weights, the concrete [`Maze`] storage type, and a random
//! maze generator.

pub mod geom;
pub mod mapgen;
pub mod maze;

pub use geom::{Cell, Direction};
pub use mapgen::MazeGen;
pub use maze::{Maze, Room, Wall};
