//! Random obstacle placement.

use std::collections::HashSet;

use rand::{Rng, RngExt};
use warenav_core::Point;

/// Sample `count` distinct obstacle cells, uniformly over the grid.
///
/// Obstacles never land on `start` or `destination`, so the returned set
/// satisfies the grid core's contract for those endpoints. The caller must
/// have validated that `count` obstacles fit ([`crate::config::SimConfig::validate`]);
/// rejection sampling does not terminate otherwise.
pub fn generate_obstacles(
    rng: &mut impl Rng,
    width: i32,
    height: i32,
    count: usize,
    start: Point,
    destination: Point,
) -> HashSet<Point> {
    let mut obstacles = HashSet::with_capacity(count);
    while obstacles.len() < count {
        let p = Point::new(rng.random_range(0..width), rng.random_range(0..height));
        if p != start && p != destination {
            obstacles.insert(p);
        }
    }
    obstacles
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn respects_count_bounds_and_endpoints() {
        let mut rng = StdRng::seed_from_u64(7);
        let start = Point::ZERO;
        let dest = Point::new(7, 9);

        for _ in 0..50 {
            let obstacles = generate_obstacles(&mut rng, 10, 10, 8, start, dest);
            assert_eq!(obstacles.len(), 8);
            assert!(!obstacles.contains(&start));
            assert!(!obstacles.contains(&dest));
            for &p in &obstacles {
                assert!(p.x >= 0 && p.x < 10 && p.y >= 0 && p.y < 10);
            }
        }
    }

    #[test]
    fn zero_count_yields_empty_set() {
        let mut rng = StdRng::seed_from_u64(7);
        let obstacles = generate_obstacles(&mut rng, 5, 5, 0, Point::ZERO, Point::new(4, 4));
        assert!(obstacles.is_empty());
    }

    #[test]
    fn fills_every_free_cell_when_saturated() {
        // 2x2 grid with two endpoints leaves exactly two free cells.
        let mut rng = StdRng::seed_from_u64(7);
        let start = Point::ZERO;
        let dest = Point::new(1, 1);
        let obstacles = generate_obstacles(&mut rng, 2, 2, 2, start, dest);
        assert!(obstacles.contains(&Point::new(1, 0)));
        assert!(obstacles.contains(&Point::new(0, 1)));
    }
}
