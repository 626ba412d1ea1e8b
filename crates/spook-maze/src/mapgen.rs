//! Maze generation.
//!
//! Provides a recursive-backtracker generator that carves a *perfect* maze
//! (exactly one route between any two rooms) into an all-solid [`Maze`],
//! assigning each carved passage a random scariness weight.

use crate::geom::{Cell, Direction};
use crate::maze::{Maze, Wall};
use rand::{Rng, RngExt};

/// Maze generator operating on a [`Maze`].
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub maze: Maze,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new `MazeGen` carving into the given maze.
    pub fn with_maze(maze: Maze, rng: R) -> Self {
        Self { rng, maze }
    }

    /// Carve a perfect maze using the recursive backtracker (iterative
    /// form), starting from `start`.
    ///
    /// Each carved passage becomes `Wall::Open(w)` on both sides, with `w`
    /// drawn uniformly from `0..=max_scariness`. Walls already open before
    /// the call are left as they are.
    ///
    /// Returns the number of passages carved: `rows * cols - 1` when the
    /// whole maze is reached from `start`.
    pub fn backtracker(&mut self, start: Cell, max_scariness: i32) -> usize {
        if !self.maze.contains(start) {
            return 0;
        }
        let cols = self.maze.cols();
        let total = (self.maze.rows() * cols) as usize;

        let mut visited = vec![false; total];
        let mut stack = Vec::with_capacity(total);
        let mut carved = 0usize;

        visited[(start.row * cols + start.col) as usize] = true;
        stack.push(start);

        while let Some(&cell) = stack.last() {
            // Collect directions leading to unvisited in-bounds rooms.
            let mut choices = [Direction::North; 4];
            let mut n = 0;
            for dir in Direction::ALL {
                let next = cell.step(dir);
                if self.maze.contains(next) && !visited[(next.row * cols + next.col) as usize] {
                    choices[n] = dir;
                    n += 1;
                }
            }

            if n == 0 {
                stack.pop();
                continue;
            }

            let dir = choices[self.rng.random_range(0..n)];
            let weight = if max_scariness > 0 {
                self.rng.random_range(0..=max_scariness)
            } else {
                0
            };
            self.maze.set_wall_both(cell, dir, Wall::Open(weight));
            carved += 1;

            let next = cell.step(dir);
            visited[(next.row * cols + next.col) as usize] = true;
            stack.push(next);
        }

        carved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backtracker_carves_spanning_tree() {
        let mut carver = MazeGen::with_maze(Maze::new(8, 8), rand::rng());
        let carved = carver.backtracker(Cell::ZERO, 5);
        assert_eq!(carved, 8 * 8 - 1);
    }

    #[test]
    fn carved_weights_stay_in_range() {
        let mut carver = MazeGen::with_maze(Maze::new(6, 6), rand::rng());
        carver.backtracker(Cell::ZERO, 3);
        for row in 0..6 {
            for col in 0..6 {
                for dir in Direction::ALL {
                    if let Wall::Open(w) = carver.maze.wall(Cell::new(row, col), dir) {
                        assert!((0..=3).contains(&w));
                    }
                }
            }
        }
    }

    #[test]
    fn carved_passages_match_on_both_sides() {
        let mut carver = MazeGen::with_maze(Maze::new(5, 5), rand::rng());
        carver.backtracker(Cell::ZERO, 4);
        for row in 0..5 {
            for col in 0..5 {
                let cell = Cell::new(row, col);
                for dir in Direction::ALL {
                    let next = cell.step(dir);
                    if carver.maze.contains(next) {
                        assert_eq!(
                            carver.maze.wall(cell, dir),
                            carver.maze.wall(next, dir.opposite())
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn out_of_bounds_start_carves_nothing() {
        let mut carver = MazeGen::with_maze(Maze::new(4, 4), rand::rng());
        assert_eq!(carver.backtracker(Cell::new(-1, 0), 5), 0);
        assert_eq!(carver.backtracker(Cell::new(4, 4), 5), 0);
    }
}
