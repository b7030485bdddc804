#![deny(missing_docs)]
//! A solver for generalized Sudoku puzzles (9x9, 16x16 and 25x25 grids),
//! combining constraint propagation with depth-first backtracking search.

/// The `engine` module implements the solving core: grid topology, candidate
/// tracking, constraint propagation and backtracking search.
pub mod engine;

/// The `puzzle` module implements the I/O glue around the engine: parsing
/// puzzle files, detecting the grid order and rendering grids as text.
pub mod puzzle;
