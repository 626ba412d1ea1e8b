use spook_maze::{Cell, Direction, Maze, Wall};

/// Read-only view of a wall-weighted grid, as consumed by the solver.
///
/// Wall values are directional: `wall(c, East)` is the cost of leaving `c`
/// eastward, which need not equal `wall(c.step(East), West)`.
pub trait WallGrid {
    /// Grid dimensions as `(rows, cols)`.
    fn dimensions(&self) -> (i32, i32);

    /// The wall between `cell` and its neighbor in `dir`.
    fn wall(&self, cell: Cell, dir: Direction) -> Wall;

    /// Whether a step from `cell` toward `dir` stays in bounds and is not
    /// blocked by a solid wall.
    fn can_go(&self, cell: Cell, dir: Direction) -> bool {
        let (rows, cols) = self.dimensions();
        let next = cell.step(dir);
        next.row >= 0
            && next.row < rows
            && next.col >= 0
            && next.col < cols
            && !self.wall(cell, dir).is_solid()
    }
}

impl WallGrid for Maze {
    fn dimensions(&self) -> (i32, i32) {
        (self.rows(), self.cols())
    }

    fn wall(&self, cell: Cell, dir: Direction) -> Wall {
        Maze::wall(self, cell, dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_go_respects_bounds_and_walls() {
        let mut maze = Maze::open(2, 2);
        maze.set_wall(Cell::ZERO, Direction::East, Wall::Solid);

        assert!(!maze.can_go(Cell::ZERO, Direction::North)); // boundary
        assert!(!maze.can_go(Cell::ZERO, Direction::West)); // boundary
        assert!(!maze.can_go(Cell::ZERO, Direction::East)); // solid wall
        assert!(maze.can_go(Cell::ZERO, Direction::South));
    }

    #[test]
    fn can_go_is_directional() {
        let mut maze = Maze::open(1, 2);
        // Block eastward travel only; the return trip stays open.
        maze.set_wall(Cell::ZERO, Direction::East, Wall::Solid);
        assert!(!maze.can_go(Cell::ZERO, Direction::East));
        assert!(maze.can_go(Cell::new(0, 1), Direction::West));
    }
}
