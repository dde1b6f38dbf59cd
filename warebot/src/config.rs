//! Simulation configuration.

use std::fmt;
use std::time::Duration;

use warenav_core::Point;

/// Parameters for one simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub width: i32,
    pub height: i32,
    pub start: Point,
    pub destination: Point,
    pub num_obstacles: usize,
    /// Delay covering the robot's movement into a cell.
    pub move_delay: Duration,
    /// Pause after every step before the next move.
    pub step_pause: Duration,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            start: Point::ZERO,
            destination: Point::new(7, 9),
            num_obstacles: 8,
            move_delay: Duration::from_millis(100),
            step_pause: Duration::from_secs(2),
        }
    }
}

/// Errors detected when validating a [`SimConfig`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Start or destination lies outside the grid.
    EndpointOutOfBounds { which: &'static str, pos: Point },
    /// More obstacles requested than cells available once the start and
    /// destination are kept free.
    TooManyObstacles { requested: usize, capacity: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndpointOutOfBounds { which, pos } => {
                write!(f, "{which} {pos} lies outside the grid")
            }
            Self::TooManyObstacles {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "{requested} obstacles requested but only {capacity} cells are free"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl SimConfig {
    /// Check that the configuration describes a runnable simulation.
    ///
    /// Grid dimension validity itself is checked by `Grid::new`; this
    /// guards the contracts the obstacle generator relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let in_bounds = |p: Point| p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height;
        if !in_bounds(self.start) {
            return Err(ConfigError::EndpointOutOfBounds {
                which: "start",
                pos: self.start,
            });
        }
        if !in_bounds(self.destination) {
            return Err(ConfigError::EndpointOutOfBounds {
                which: "destination",
                pos: self.destination,
            });
        }
        let cells = (self.width as usize) * (self.height as usize);
        let reserved = if self.start == self.destination { 1 } else { 2 };
        let capacity = cells - reserved;
        if self.num_obstacles > capacity {
            return Err(ConfigError::TooManyObstacles {
                requested: self.num_obstacles,
                capacity,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_out_of_bounds_endpoints() {
        let cfg = SimConfig {
            destination: Point::new(10, 9),
            ..SimConfig::default()
        };
        assert_eq!(
            cfg.validate().unwrap_err(),
            ConfigError::EndpointOutOfBounds {
                which: "destination",
                pos: Point::new(10, 9),
            }
        );

        let cfg = SimConfig {
            start: Point::new(-1, 0),
            ..SimConfig::default()
        };
        assert!(matches!(
            cfg.validate().unwrap_err(),
            ConfigError::EndpointOutOfBounds { which: "start", .. }
        ));
    }

    #[test]
    fn rejects_obstacle_overflow() {
        let cfg = SimConfig {
            width: 3,
            height: 3,
            start: Point::ZERO,
            destination: Point::new(2, 2),
            num_obstacles: 8,
            ..SimConfig::default()
        };
        assert_eq!(
            cfg.validate().unwrap_err(),
            ConfigError::TooManyObstacles {
                requested: 8,
                capacity: 7,
            }
        );

        let cfg = SimConfig {
            num_obstacles: 7,
            ..cfg
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn coincident_endpoints_reserve_one_cell() {
        let cfg = SimConfig {
            width: 2,
            height: 2,
            start: Point::ZERO,
            destination: Point::ZERO,
            num_obstacles: 3,
            ..SimConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }
}
