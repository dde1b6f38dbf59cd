//! Core types for warehouse grid navigation.
//!
//! This crate provides the two building blocks every other warenav crate
//! works with:
//!
//! - [`Point`]: a 2D integer cell coordinate, hashable and totally ordered.
//! - [`Grid`]: a fixed-size rectangular lattice with a set of blocked cells,
//!   bounds checking, and cardinal neighbor enumeration.
//!
//! A `Grid` is immutable once constructed: changing the obstacle layout
//! means building a new `Grid`. This keeps a grid trivially shareable
//! between concurrent path queries.

pub mod geom;
pub mod grid;

pub use geom::Point;
pub use grid::{Grid, GridError};
