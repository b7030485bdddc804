#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
//! I/O glue around the engine: puzzle files in and rendered grids out.
//! The engine itself never touches text; everything textual lives here.

/// Text-grid parsing, order detection and rendering.
pub mod grid;
