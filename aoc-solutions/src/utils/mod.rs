//! Stateless helpers for turning puzzle text into lines, numbers and grids.

pub mod grid;
pub mod text;

pub use grid::{Grid, NEIGHBORS_4, NEIGHBORS_8, manhattan};
pub use text::{chunks, extract_ints, ints, lines, sliding_windows};
