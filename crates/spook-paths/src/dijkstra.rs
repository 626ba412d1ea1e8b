use spook_maze::{Cell, Direction};

use crate::PathFinder;
use crate::pathfinder::{CellRef, NO_PARENT, NodeState, PathCost, SearchError};
use crate::traits::WallGrid;

impl PathFinder {
    /// Compute the least scary cost of travelling from `start` to `end`.
    ///
    /// Runs a full Dijkstra expansion from `start`, so after the call the
    /// whole distance table is available through
    /// [`cost_at`](Self::cost_at), [`reached`](Self::reached) and
    /// [`path_to`](Self::path_to) until the next `search`.
    ///
    /// Returns `Ok(None)` when `end` cannot be reached. The grid must be
    /// the one bound by [`initialize`](Self::initialize).
    ///
    /// # Errors
    ///
    /// [`SearchError::Uninitialized`] if `initialize` was never called,
    /// [`SearchError::OutOfBounds`] if `start` or `end` lies outside the
    /// grid. Both are checked before any state is touched.
    pub fn search<G: WallGrid>(
        &mut self,
        grid: &G,
        start: Cell,
        end: Cell,
    ) -> Result<Option<i32>, SearchError> {
        if !self.initialized {
            return Err(SearchError::Uninitialized);
        }
        for cell in [start, end] {
            if !self.contains(cell) {
                return Err(SearchError::OutOfBounds(cell));
            }
        }

        // Reset the distance table and frontier; nothing survives between
        // calls.
        for node in self.nodes.iter_mut() {
            *node = NodeState::Undiscovered;
        }
        self.frontier.clear();
        self.reached.clear();

        // Both endpoints were validated above.
        let si = (start.row * self.cols + start.col) as usize;
        self.nodes[si] = NodeState::Discovered {
            cost: 0,
            parent: NO_PARENT,
        };
        self.frontier.push(CellRef { idx: si, cost: 0 });

        self.relax_all(grid);

        Ok(self.cost_at(end))
    }

    /// Dijkstra relaxation loop: extract the cheapest frontier room,
    /// finalize it, relax its four neighbors, repeat until the frontier is
    /// empty.
    ///
    /// Cost decreases push a duplicate frontier entry; entries whose cost
    /// disagrees with the distance table (or whose room is already
    /// finalized) are stale and skipped on extraction.
    fn relax_all<G: WallGrid>(&mut self, grid: &G) {
        let mut frontier = std::mem::take(&mut self.frontier);

        while let Some(CellRef { idx: ci, cost }) = frontier.pop() {
            match self.nodes[ci] {
                NodeState::Discovered { cost: best, parent } if best == cost => {
                    self.nodes[ci] = NodeState::Finalized { cost: best, parent };
                }
                // Stale duplicate or already finalized.
                _ => continue,
            }

            let cell = self.cell(ci);
            self.reached.push(PathCost { cell, cost });

            for dir in Direction::ALL {
                if !grid.can_go(cell, dir) {
                    continue;
                }
                let Some(edge) = grid.wall(cell, dir).crossing_cost() else {
                    continue;
                };
                let Some(ni) = self.idx(cell.step(dir)) else {
                    continue;
                };
                let candidate = cost + edge;

                match self.nodes[ni] {
                    NodeState::Undiscovered => {
                        self.nodes[ni] = NodeState::Discovered {
                            cost: candidate,
                            parent: ci,
                        };
                        frontier.push(CellRef {
                            idx: ni,
                            cost: candidate,
                        });
                    }
                    NodeState::Discovered { cost: old, .. } if candidate < old => {
                        self.nodes[ni] = NodeState::Discovered {
                            cost: candidate,
                            parent: ci,
                        };
                        frontier.push(CellRef {
                            idx: ni,
                            cost: candidate,
                        });
                    }
                    // Worse than the best known, or already finalized.
                    _ => {}
                }
            }
        }

        self.frontier = frontier;
    }

    /// The finalized cost at `cell` from the last [`search`](Self::search),
    /// or `None` if the room was never reached (or lies out of bounds).
    pub fn cost_at(&self, cell: Cell) -> Option<i32> {
        self.nodes[self.idx(cell)?].cost()
    }

    /// Every room reached by the last [`search`](Self::search), with its
    /// cost, in finalization order (non-decreasing cost).
    pub fn reached(&self) -> &[PathCost] {
        &self.reached
    }

    /// The least scary route from the last search's start to `cell`,
    /// including both endpoints, or `None` if `cell` was not reached.
    pub fn path_to(&self, cell: Cell) -> Option<Vec<Cell>> {
        let mut ci = self.idx(cell)?;
        self.nodes[ci].cost()?;

        let mut path = Vec::new();
        loop {
            path.push(self.cell(ci));
            let parent = match self.nodes[ci] {
                NodeState::Discovered { parent, .. } | NodeState::Finalized { parent, .. } => {
                    parent
                }
                NodeState::Undiscovered => return None,
            };
            if parent == NO_PARENT {
                break;
            }
            ci = parent;
        }
        path.reverse();
        Some(path)
    }
}
