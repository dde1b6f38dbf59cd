//! Warebot — an autonomous warehouse robot simulation built on warenav.
//!
//! Plans a shortest path through a randomly obstructed warehouse grid and
//! animates a robot walking it in the terminal. Press `q` or Esc to quit.

mod config;
mod obstacles;
mod render;
mod sim;

use config::SimConfig;
use sim::Simulation;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let sim = Simulation::new(SimConfig::default())?;
    sim.run()?;
    Ok(())
}
