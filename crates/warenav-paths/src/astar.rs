use std::collections::BinaryHeap;

use warenav_core::{Grid, Point};

use crate::PathBuffer;
use crate::search::{NodeRef, UNREACHABLE};
use crate::traits::AstarPather;

impl PathBuffer {
    /// Compute the shortest path from `from` to `to` using A*.
    ///
    /// Every step costs 1. Returns the full path (including both endpoints)
    /// or `None` if no path exists within the buffer's coordinate space.
    ///
    /// A cell whose cost improves while it is already on the frontier is
    /// pushed again; the superseded entry is recognised and skipped when
    /// popped. Ties between equal `f` values fall to heap order, which is
    /// not specified — callers must not rely on which of several optimal
    /// paths is returned.
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        if start_idx == goal_idx {
            return Some(vec![from]);
        }

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        // Initialise the start node.
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.f = pather.estimate(from, to);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: self.nodes[start_idx].f,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;
            let current_point = self.point(ci);

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                let tentative_g = current_g + 1;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    // Already visited this generation.
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.g = UNREACHABLE;
                }

                n.g = tentative_g;
                n.f = tentative_g + pather.estimate(np, to);
                n.parent = ci;
                n.open = true;

                open.push(NodeRef { idx: ni, f: n.f });
            }
        };

        self.nbuf = nbuf;

        if !found {
            return None;
        }

        // Reconstruct path by walking parents back from the goal.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        Some(path)
    }
}

/// Compute the shortest obstacle-avoiding path on `grid`.
///
/// Returns the ordered cell sequence from `start` to `destination`
/// inclusive; the empty vector means no path exists. An unreachable
/// destination is a normal outcome, not an error. A `start` or
/// `destination` that is out of bounds or sits on an obstacle also yields
/// the empty vector.
///
/// Search state is scoped to the call. Callers issuing many queries can
/// hold a [`PathBuffer`] and use [`PathBuffer::astar_path`] directly to
/// reuse its allocations.
pub fn find_path(grid: &Grid, start: Point, destination: Point) -> Vec<Point> {
    if !grid.is_open(start) || !grid.is_open(destination) {
        return Vec::new();
    }
    let mut buf = PathBuffer::for_grid(grid);
    buf.astar_path(grid, start, destination).unwrap_or_default()
}
