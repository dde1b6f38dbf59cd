//! The simulation: sample a warehouse layout, plan once, walk the path.

use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{self, ClearType},
};

use warenav_core::{Grid, Point};
use warenav_paths::find_path;

use crate::config::SimConfig;
use crate::obstacles::generate_obstacles;
use crate::render;

/// One warehouse run: a sampled obstacle layout and the planned path.
pub struct Simulation {
    config: SimConfig,
    grid: Grid,
    path: Vec<Point>,
}

impl Simulation {
    /// Build a simulation with a freshly sampled obstacle layout.
    ///
    /// The path is planned here, once; the walk only replays it.
    pub fn new(config: SimConfig) -> Result<Self, Box<dyn std::error::Error>> {
        config.validate()?;
        let mut rng = rand::rng();
        let blocked = generate_obstacles(
            &mut rng,
            config.width,
            config.height,
            config.num_obstacles,
            config.start,
            config.destination,
        );
        let grid = Grid::new(config.width, config.height, blocked)?;
        let path = find_path(&grid, config.start, config.destination);
        Ok(Self { config, grid, path })
    }

    /// The planned path (empty if the destination is unreachable).
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// The sampled grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Run the simulation to completion, or until the user quits.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        if self.path.is_empty() {
            log::warn!(
                "no path from {} to {}",
                self.config.start,
                self.config.destination
            );
            println!("No valid path found to the destination.");
            return Ok(());
        }
        log::info!("path found, {} moves", self.path.len() - 1);

        init_terminal()?;
        let result = self.walk();
        close_terminal();
        result?;
        Ok(())
    }

    /// Step the robot along the path, one cell per frame.
    fn walk(&self) -> io::Result<()> {
        let mut out = io::stdout();
        let pace = self.config.move_delay + self.config.step_pause;
        let moves = self.path.len() - 1;

        for (i, &pos) in self.path.iter().enumerate() {
            let status = if pos == self.config.destination {
                format!("Destination reached in {moves} moves.")
            } else {
                format!("Step {i}/{moves} (q quits)")
            };
            render::draw_frame(
                &mut out,
                &self.grid,
                self.config.start,
                self.config.destination,
                &self.path,
                pos,
                &status,
            )?;
            if poll_quit(pace)? {
                break;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Terminal lifecycle
// ---------------------------------------------------------------------------

fn init_terminal() -> io::Result<()> {
    terminal::enable_raw_mode()?;
    execute!(
        io::stdout(),
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::Clear(ClearType::All)
    )
}

fn close_terminal() {
    let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

/// Sleep for `timeout`, waking early only if the user asks to quit
/// (`q`, Esc, or Ctrl-C).
fn poll_quit(timeout: Duration) -> io::Result<bool> {
    let deadline = Instant::now() + timeout;
    loop {
        let now = Instant::now();
        if now >= deadline {
            return Ok(false);
        }
        if event::poll(deadline - now)? {
            if let Event::Key(KeyEvent {
                code, modifiers, ..
            }) = event::read()?
            {
                match code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(true);
                    }
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warenav_paths::manhattan;

    #[test]
    fn sampled_layout_is_consistent() {
        // Layouts are random, so check the invariants that must hold for
        // every sample rather than a specific path.
        for _ in 0..20 {
            let sim = Simulation::new(SimConfig::default()).unwrap();
            assert_eq!(sim.grid().blocked().len(), 8);
            assert!(sim.grid().is_open(Point::ZERO));
            assert!(sim.grid().is_open(Point::new(7, 9)));

            let path = sim.path();
            if path.is_empty() {
                continue; // unreachable layout, a normal outcome
            }
            assert_eq!(path.first(), Some(&Point::ZERO));
            assert_eq!(path.last(), Some(&Point::new(7, 9)));
            for w in path.windows(2) {
                assert_eq!(manhattan(w[0], w[1]), 1);
            }
            for &p in path {
                assert!(sim.grid().is_open(p));
            }
        }
    }

    #[test]
    fn obstacle_free_config_always_has_a_path() {
        let cfg = SimConfig {
            num_obstacles: 0,
            ..SimConfig::default()
        };
        let sim = Simulation::new(cfg).unwrap();
        assert_eq!(sim.path().len(), 17);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = SimConfig {
            destination: Point::new(42, 0),
            ..SimConfig::default()
        };
        assert!(Simulation::new(cfg).is_err());
    }
}
