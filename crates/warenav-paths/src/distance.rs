use warenav_core::Point;

/// Manhattan (L1) distance between two points.
///
/// The exact path cost between two cells on an obstacle-free grid with
/// 4-directional unit-cost movement, and therefore an admissible and
/// consistent A* heuristic on any such grid.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
