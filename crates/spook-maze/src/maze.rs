//! Wall-weighted maze storage.
//!
//! A [`Maze`] is a rectangular arena of [`Room`]s, each carrying four
//! directional [`Wall`] values. Wall values are stored per room per
//! direction, so the cost of crossing between two rooms may differ by
//! direction of travel.

use crate::geom::{Cell, Direction};

// ---------------------------------------------------------------------------
// Wall
// ---------------------------------------------------------------------------

/// A directional wall value: either a passable weight or the impassable
/// sentinel.
///
/// `Open(0)` is an *open doorway*: no wall, but the room still takes unit
/// effort to cross. Zero never means free movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Wall {
    /// Passable, with a non-negative scariness weight.
    Open(i32),
    /// Impassable.
    Solid,
}

impl Wall {
    /// An open doorway (weight 0, crossed at unit cost).
    pub const DOORWAY: Wall = Wall::Open(0);

    /// The cost of crossing this wall, or `None` if it is solid.
    ///
    /// A weight of 0 crosses at cost 1: an open doorway still takes a step.
    /// All positive weights are used as-is.
    #[inline]
    pub fn crossing_cost(self) -> Option<i32> {
        match self {
            Wall::Solid => None,
            Wall::Open(w) => Some(w.max(1)),
        }
    }

    /// Whether this wall blocks movement.
    #[inline]
    pub fn is_solid(self) -> bool {
        matches!(self, Wall::Solid)
    }
}

impl Default for Wall {
    fn default() -> Self {
        Wall::Solid
    }
}

// ---------------------------------------------------------------------------
// Room
// ---------------------------------------------------------------------------

/// One maze room: four directional walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    walls: [Wall; 4],
}

impl Room {
    fn slot(dir: Direction) -> usize {
        match dir {
            Direction::North => 0,
            Direction::South => 1,
            Direction::East => 2,
            Direction::West => 3,
        }
    }

    /// The wall on the given side of the room.
    #[inline]
    pub fn wall(&self, dir: Direction) -> Wall {
        self.walls[Self::slot(dir)]
    }

    /// Replace the wall on the given side of the room.
    #[inline]
    pub fn set_wall(&mut self, dir: Direction, wall: Wall) {
        self.walls[Self::slot(dir)] = wall;
    }
}

// ---------------------------------------------------------------------------
// Maze
// ---------------------------------------------------------------------------

/// A rectangular grid of [`Room`]s backed by a flat row-major arena.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    rooms: Vec<Room>,
    rows: i32,
    cols: i32,
}

impl Maze {
    /// Create a maze with every wall solid.
    pub fn new(rows: i32, cols: i32) -> Self {
        let rows = rows.max(0);
        let cols = cols.max(0);
        Self {
            rooms: vec![Room::default(); (rows * cols) as usize],
            rows,
            cols,
        }
    }

    /// Create a maze whose interior walls are all open doorways and whose
    /// outer boundary is solid.
    pub fn open(rows: i32, cols: i32) -> Self {
        let mut maze = Self::new(rows, cols);
        for row in 0..rows {
            for col in 0..cols {
                let cell = Cell::new(row, col);
                for dir in Direction::ALL {
                    if maze.contains(cell.step(dir)) {
                        maze.set_wall(cell, dir, Wall::DOORWAY);
                    }
                }
            }
        }
        maze
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Whether the cell lies inside the maze.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row >= 0 && cell.row < self.rows && cell.col >= 0 && cell.col < self.cols
    }

    #[inline]
    fn index(&self, cell: Cell) -> usize {
        (cell.row * self.cols + cell.col) as usize
    }

    /// The room at a cell, or `None` if out of bounds.
    pub fn room(&self, cell: Cell) -> Option<&Room> {
        if !self.contains(cell) {
            return None;
        }
        Some(&self.rooms[self.index(cell)])
    }

    /// The wall on the given side of a cell. Out-of-bounds cells are treated
    /// as solid on every side.
    pub fn wall(&self, cell: Cell, dir: Direction) -> Wall {
        match self.room(cell) {
            Some(room) => room.wall(dir),
            None => Wall::Solid,
        }
    }

    /// Replace one side of one room. Does nothing if out of bounds.
    ///
    /// Only the named side changes; the adjacent room's matching wall keeps
    /// its own value, so directional costs may be asymmetric.
    pub fn set_wall(&mut self, cell: Cell, dir: Direction, wall: Wall) {
        if !self.contains(cell) {
            return;
        }
        let idx = self.index(cell);
        self.rooms[idx].set_wall(dir, wall);
    }

    /// Replace a wall on both of its sides: the named side of `cell` and the
    /// opposite side of the adjacent room, if that room exists.
    pub fn set_wall_both(&mut self, cell: Cell, dir: Direction, wall: Wall) {
        self.set_wall(cell, dir, wall);
        self.set_wall(cell.step(dir), dir.opposite(), wall);
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn maze_round_trip() {
        let mut maze = Maze::open(2, 3);
        maze.set_wall(Cell::new(0, 1), Direction::East, Wall::Open(9));
        let json = serde_json::to_string(&maze).unwrap();
        let back: Maze = serde_json::from_str(&json).unwrap();
        assert_eq!(maze, back);
    }
}
