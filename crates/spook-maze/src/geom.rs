//! Geometry primitives: [`Cell`] and [`Direction`].

use std::fmt;

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A maze coordinate. Row grows down, column grows right, both 0-indexed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Top-left corner (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new cell coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a cell shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The adjacent cell one step in `dir`. May lie outside any grid.
    #[inline]
    pub const fn step(self, dir: Direction) -> Self {
        let (drow, dcol) = dir.delta();
        self.shift(drow, dcol)
    }

    /// The four cardinal neighbours (north, south, east, west).
    #[inline]
    pub const fn neighbors(self) -> [Cell; 4] {
        [
            self.step(Direction::North),
            self.step(Direction::South),
            self.step(Direction::East),
            self.step(Direction::West),
        ]
    }
}

// --- trait impls for Cell ---

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// A cardinal direction between adjacent maze cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All four directions, in relaxation order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The (drow, dcol) offset of one step in this direction.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    /// The opposite direction.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_shift_and_step() {
        let c = Cell::new(2, 3);
        assert_eq!(c.shift(1, -1), Cell::new(3, 2));
        assert_eq!(c.step(Direction::North), Cell::new(1, 3));
        assert_eq!(c.step(Direction::South), Cell::new(3, 3));
        assert_eq!(c.step(Direction::East), Cell::new(2, 4));
        assert_eq!(c.step(Direction::West), Cell::new(2, 2));
    }

    #[test]
    fn neighbors_are_one_step_away() {
        let c = Cell::new(2, 3);
        let mut expected: Vec<_> = Direction::ALL.iter().map(|d| c.step(*d)).collect();
        let mut actual = c.neighbors().to_vec();
        expected.sort();
        actual.sort();
        assert_eq!(actual, expected);
    }

    #[test]
    fn cell_row_major_order() {
        let a = Cell::new(0, 5);
        let b = Cell::new(1, 0);
        assert!(a < b);
        assert!(Cell::new(1, 0) < Cell::new(1, 1));
    }

    #[test]
    fn direction_opposites() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            let (dr, dc) = dir.delta();
            let (or, oc) = dir.opposite().delta();
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }

    #[test]
    fn step_then_opposite_returns() {
        let c = Cell::new(4, 4);
        for dir in Direction::ALL {
            assert_eq!(c.step(dir).step(dir.opposite()), c);
        }
    }
}
