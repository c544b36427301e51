#![forbid(unsafe_code)]

//! Floor-plan rendering pipeline for the mesa floor manager.
//!
//! Three stateless stages, re-run from scratch after every registry
//! mutation (there is no cached derived state):
//!
//! 1. [`layout::positions`] - maps a record count to 2D floor coordinates:
//!    a hand-tuned five-anchor preset, then a row-major overflow grid
//! 2. [`chain::edges`] - when chain mode is on, links each table to its
//!    enumeration-order successor with a directed edge
//! 3. [`FloorPainter`] - rasterizes tables and edges into a character grid
//!    for terminal display
//!
//! All three are pure functions of their inputs; the same registry snapshot
//! always produces the same picture.

pub mod chain;
pub mod layout;
pub mod painter;

pub use chain::Edge;
pub use layout::{Point, positions};
pub use painter::FloorPainter;
