//! Terminal rendering of the warehouse.
//!
//! Draws the grid with crossterm: obstacles in red, the start and
//! destination markers in green and blue, the planned path in cyan, and
//! the robot on top. Cells are spaced two columns apart so the grid reads
//! roughly square in a terminal.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{Attribute, Color, SetAttribute, SetForegroundColor},
    terminal::{self, ClearType},
};

use warenav_core::{Grid, Point};

/// Draw one complete frame: grid, path overlay, robot, and a status line.
pub fn draw_frame(
    out: &mut impl Write,
    grid: &Grid,
    start: Point,
    destination: Point,
    path: &[Point],
    robot: Point,
    status: &str,
) -> io::Result<()> {
    queue!(out, terminal::Clear(ClearType::All))?;

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            let (ch, color, bold) = cell_glyph(grid, start, destination, path, robot, p);
            queue!(
                out,
                cursor::MoveTo((x * 2) as u16, y as u16),
                SetForegroundColor(color)
            )?;
            if bold {
                queue!(out, SetAttribute(Attribute::Bold))?;
            }
            write!(out, "{ch}")?;
            if bold {
                queue!(out, SetAttribute(Attribute::Reset))?;
            }
        }
    }

    queue!(
        out,
        cursor::MoveTo(0, grid.height() as u16 + 1),
        SetForegroundColor(Color::Reset)
    )?;
    write!(out, "{status}")?;
    out.flush()
}

/// Pick the glyph for one cell. The robot is drawn on top of everything,
/// then the endpoint markers, then obstacles, then the path overlay.
fn cell_glyph(
    grid: &Grid,
    start: Point,
    destination: Point,
    path: &[Point],
    robot: Point,
    p: Point,
) -> (char, Color, bool) {
    if p == robot {
        ('@', Color::White, true)
    } else if p == start {
        ('S', Color::Green, false)
    } else if p == destination {
        ('D', Color::Blue, false)
    } else if grid.is_blocked(p) {
        ('#', Color::Red, false)
    } else if path.contains(&p) {
        ('·', Color::Cyan, false)
    } else {
        ('.', Color::DarkGrey, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn glyph_precedence() {
        let blocked: HashSet<Point> = [Point::new(2, 0)].into_iter().collect();
        let g = Grid::new(5, 5, blocked).unwrap();
        let start = Point::ZERO;
        let dest = Point::new(4, 0);
        let path = vec![start, Point::new(0, 1)];

        // Robot wins even on the start marker.
        assert_eq!(cell_glyph(&g, start, dest, &path, start, start).0, '@');
        assert_eq!(cell_glyph(&g, start, dest, &path, dest, start).0, 'S');
        assert_eq!(
            cell_glyph(&g, start, dest, &path, start, Point::new(2, 0)).0,
            '#'
        );
        assert_eq!(
            cell_glyph(&g, start, dest, &path, start, Point::new(0, 1)).0,
            '·'
        );
        assert_eq!(
            cell_glyph(&g, start, dest, &path, start, Point::new(3, 3)).0,
            '.'
        );
    }

    #[test]
    fn frame_writes_without_error() {
        let g = Grid::open(4, 3).unwrap();
        let mut buf = Vec::new();
        draw_frame(
            &mut buf,
            &g,
            Point::ZERO,
            Point::new(3, 2),
            &[],
            Point::ZERO,
            "status",
        )
        .unwrap();
        assert!(!buf.is_empty());
    }
}
