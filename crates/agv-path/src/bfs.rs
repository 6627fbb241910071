//! Default breadth-first pathfinder.

use std::collections::VecDeque;

use agv_core::{Cell, GridSpec};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{Path, Pathfinder};

/// Neighbor expansion order: `{+col, +row, -col, -row}` (east, south, west,
/// north).  Fixed so that tie-breaking among equal-length paths is
/// reproducible across runs and in test expectations.
const DIRS: [(i64, i64); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Breadth-first search over 4-directional neighbors.
///
/// BFS explores in strictly increasing step-count order, so the first time
/// the goal is dequeued its distance from the start is minimal — the returned
/// path has the fewest steps among all obstacle-free routes.
pub struct BfsPathfinder;

impl Pathfinder for BfsPathfinder {
    fn find_path(
        &self,
        grid: GridSpec,
        start: Cell,
        goal: Cell,
        obstacles: &FxHashSet<Cell>,
    ) -> Path {
        if start == goal {
            return Path::from_cells(vec![start]);
        }
        if !grid.contains(start) || !grid.contains(goal) {
            return Path::empty();
        }

        let mut visited: FxHashSet<Cell> = FxHashSet::default();
        // parent[c] = the cell from which c was first reached.
        let mut parent: FxHashMap<Cell, Cell> = FxHashMap::default();
        let mut queue: VecDeque<Cell> = VecDeque::new();

        visited.insert(start);
        queue.push_back(start);

        while let Some(cell) = queue.pop_front() {
            if cell == goal {
                return reconstruct(start, goal, &parent);
            }

            for (dr, dc) in DIRS {
                let row = cell.row as i64 + dr;
                let col = cell.col as i64 + dc;
                if row < 0 || col < 0 {
                    continue;
                }
                let next = Cell::new(row as u32, col as u32);
                if !grid.contains(next) || obstacles.contains(&next) || visited.contains(&next) {
                    continue;
                }
                visited.insert(next);
                parent.insert(next, cell);
                queue.push_back(next);
            }
        }

        Path::empty()
    }
}

/// Walk the parent chain from `goal` back to `start` and reverse it.
fn reconstruct(start: Cell, goal: Cell, parent: &FxHashMap<Cell, Cell>) -> Path {
    let mut cells = vec![goal];
    let mut cur = goal;
    while cur != start {
        cur = parent[&cur];
        cells.push(cur);
    }
    cells.reverse();
    Path::from_cells(cells)
}
