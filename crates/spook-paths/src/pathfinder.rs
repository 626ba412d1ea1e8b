use std::collections::BinaryHeap;
use std::fmt;

use spook_maze::Cell;

use crate::traits::WallGrid;

/// A room with its finalized cost, returned from [`PathFinder::reached`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathCost {
    pub cell: Cell,
    pub cost: i32,
}

// ---------------------------------------------------------------------------
// Internal search state
// ---------------------------------------------------------------------------

/// Sentinel parent index for the start room.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Per-room search state. Transitions one way:
/// undiscovered -> discovered -> finalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeState {
    Undiscovered,
    Discovered { cost: i32, parent: usize },
    Finalized { cost: i32, parent: usize },
}

impl NodeState {
    /// Best-known cost, if the room has been discovered.
    pub(crate) fn cost(self) -> Option<i32> {
        match self {
            NodeState::Undiscovered => None,
            NodeState::Discovered { cost, .. } | NodeState::Finalized { cost, .. } => Some(cost),
        }
    }
}

/// Reference into the node arena, ordered by `cost` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct CellRef {
    pub(crate) idx: usize,
    pub(crate) cost: i32,
}

impl Ord for CellRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest cost first.
        other.cost.cmp(&self.cost)
    }
}

impl PartialOrd for CellRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// SearchError
// ---------------------------------------------------------------------------

/// Errors reported by [`PathFinder::search`].
///
/// An unreachable destination is *not* an error; it is the `Ok(None)`
/// outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// `search` was called before `initialize`.
    Uninitialized,
    /// A start or end coordinate lies outside the grid.
    OutOfBounds(Cell),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Uninitialized => {
                write!(f, "search called before the maze was initialized")
            }
            SearchError::OutOfBounds(cell) => {
                write!(f, "coordinate {cell} lies outside the maze")
            }
        }
    }
}

impl std::error::Error for SearchError {}

// ---------------------------------------------------------------------------
// PathFinder
// ---------------------------------------------------------------------------

/// Least-scary-path engine over a [`WallGrid`].
///
/// `PathFinder` owns the per-room distance table and the priority frontier,
/// both reused across searches so repeated queries incur no allocations
/// after the first. Each [`search`](PathFinder::search) call fully resets
/// them; no state survives between calls.
pub struct PathFinder {
    pub(crate) rows: i32,
    pub(crate) cols: i32,
    pub(crate) nodes: Vec<NodeState>,
    pub(crate) frontier: BinaryHeap<CellRef>,
    pub(crate) reached: Vec<PathCost>,
    pub(crate) initialized: bool,
}

impl Default for PathFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathFinder {
    /// Create an unbound engine. Call [`initialize`](Self::initialize)
    /// before searching.
    pub fn new() -> Self {
        Self {
            rows: 0,
            cols: 0,
            nodes: Vec::new(),
            frontier: BinaryHeap::new(),
            reached: Vec::new(),
            initialized: false,
        }
    }

    /// Bind the engine to a grid, sizing the distance table to its
    /// dimensions. Re-initializing against another grid discards all prior
    /// state.
    ///
    /// The grid later passed to [`search`](Self::search) must have these
    /// dimensions.
    pub fn initialize<G: WallGrid>(&mut self, grid: &G) {
        let (rows, cols) = grid.dimensions();
        self.rows = rows.max(0);
        self.cols = cols.max(0);
        let len = (self.rows * self.cols) as usize;
        self.nodes.clear();
        self.nodes.resize(len, NodeState::Undiscovered);
        self.frontier.clear();
        self.reached.clear();
        self.initialized = true;
    }

    /// Whether the cell lies inside the bound grid.
    #[inline]
    pub(crate) fn contains(&self, cell: Cell) -> bool {
        cell.row >= 0 && cell.row < self.rows && cell.col >= 0 && cell.col < self.cols
    }

    /// Convert a `Cell` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub(crate) fn idx(&self, cell: Cell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        Some((cell.row * self.cols + cell.col) as usize)
    }

    /// Convert a flat index back to a `Cell`.
    #[inline]
    pub(crate) fn cell(&self, idx: usize) -> Cell {
        Cell::new(idx as i32 / self.cols, idx as i32 % self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spook_maze::Maze;

    #[test]
    fn initialize_sizes_the_table() {
        let maze = Maze::open(4, 6);
        let mut finder = PathFinder::new();
        finder.initialize(&maze);
        assert_eq!(finder.nodes.len(), 24);
        assert!(finder.nodes.iter().all(|n| *n == NodeState::Undiscovered));
    }

    #[test]
    fn reinitialize_discards_prior_state() {
        let mut finder = PathFinder::new();
        finder.initialize(&Maze::open(3, 3));
        finder
            .search(&Maze::open(3, 3), Cell::ZERO, Cell::new(2, 2))
            .unwrap();
        finder.initialize(&Maze::open(2, 5));
        assert_eq!(finder.nodes.len(), 10);
        assert!(finder.nodes.iter().all(|n| *n == NodeState::Undiscovered));
        assert!(finder.reached().is_empty());
        assert_eq!(finder.cost_at(Cell::ZERO), None);
    }

    #[test]
    fn idx_round_trip() {
        let mut finder = PathFinder::new();
        finder.initialize(&Maze::open(3, 5));
        for row in 0..3 {
            for col in 0..5 {
                let cell = Cell::new(row, col);
                let idx = finder.idx(cell).unwrap();
                assert_eq!(finder.cell(idx), cell);
            }
        }
        assert_eq!(finder.idx(Cell::new(3, 0)), None);
        assert_eq!(finder.idx(Cell::new(0, -1)), None);
    }

    #[test]
    fn cell_ref_orders_smallest_first() {
        let mut heap = BinaryHeap::new();
        heap.push(CellRef { idx: 0, cost: 9 });
        heap.push(CellRef { idx: 1, cost: 2 });
        heap.push(CellRef { idx: 2, cost: 5 });
        assert_eq!(heap.pop().unwrap().cost, 2);
        assert_eq!(heap.pop().unwrap().cost, 5);
        assert_eq!(heap.pop().unwrap().cost, 9);
    }

    #[test]
    fn error_display() {
        assert_eq!(
            SearchError::Uninitialized.to_string(),
            "search called before the maze was initialized"
        );
        assert_eq!(
            SearchError::OutOfBounds(Cell::new(5, -1)).to_string(),
            "coordinate (5, -1) lies outside the maze"
        );
    }
}
