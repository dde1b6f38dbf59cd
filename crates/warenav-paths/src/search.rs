use warenav_core::{Grid, Point};

/// A position with an associated cost, returned from BFS map queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

// ---------------------------------------------------------------------------
// Internal node for the A* priority-queue search
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: 0,
            f: 0,
            parent: usize::MAX,
            generation: 0,
            open: false,
        }
    }
}

/// Reference into the node array, ordered by `f` for use in `BinaryHeap`.
#[derive(Clone, Copy, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: i32,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f)
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Sentinel value meaning "unreachable" in BFS maps.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// PathBuffer
// ---------------------------------------------------------------------------

/// Reusable working storage for path queries on a `width` × `height` grid.
///
/// `PathBuffer` owns the node arrays, BFS maps, and scratch buffers the
/// search algorithms need, so a caller issuing repeated queries pays for
/// allocation once. Node arrays are invalidated lazily via a generation
/// counter rather than cleared between searches.
///
/// Nothing in the buffer refers back to any particular grid; the buffer
/// only fixes the coordinate space. One buffer serves one caller at a time
/// (`&mut self` per query); independent callers use independent buffers.
pub struct PathBuffer {
    pub(crate) width: usize,
    pub(crate) height: usize,
    // A* caches
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    // BFS caches
    pub(crate) bfs_map: Vec<i32>,
    pub(crate) bfs_results: Vec<PathNode>,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathBuffer {
    /// Create a new `PathBuffer` for a grid of the given dimensions.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0) as usize;
        let h = height.max(0) as usize;
        let len = w * h;
        Self {
            width: w,
            height: h,
            nodes: vec![Node::default(); len],
            generation: 0,
            bfs_map: vec![UNREACHABLE; len],
            bfs_results: Vec::new(),
            nbuf: Vec::with_capacity(4),
        }
    }

    /// Create a `PathBuffer` sized for `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.width(), grid.height())
    }

    /// Re-target the buffer at a grid of different dimensions.
    ///
    /// If the new cell count fits within existing capacity, the node array
    /// is preserved and only the generation counter is bumped so stale
    /// entries are ignored. Otherwise caches are reallocated.
    pub fn resize(&mut self, width: i32, height: i32) {
        let w = width.max(0) as usize;
        let h = height.max(0) as usize;
        let new_len = w * h;
        let old_capacity = self.nodes.len();
        self.width = w;
        self.height = h;

        if new_len <= old_capacity {
            self.generation = self.generation.wrapping_add(1);
            self.bfs_results.clear();
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;

        self.bfs_map.clear();
        self.bfs_map.resize(new_len, UNREACHABLE);
        self.bfs_results.clear();
    }

    /// Width of the covered coordinate space.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width as i32
    }

    /// Height of the covered coordinate space.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height as i32
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.y < 0 || p.x as usize >= self.width || p.y as usize >= self.height {
            return None;
        }
        Some(p.y as usize * self.width + p.x as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        Point::new((idx % self.width) as i32, (idx / self.width) as i32)
    }
}
