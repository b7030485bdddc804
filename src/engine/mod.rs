#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
//! The solving core.
//!
//! The topology of the grid (squares, units, peers) is built once per puzzle
//! and shared read-only by every board clone the search produces. The board
//! tracks the remaining candidate digits per square, propagation narrows the
//! candidates to a fixed point, and the search driver branches where
//! propagation alone is not enough.

/// Board state: candidate sets per square, solved counter, liveness flag.
pub mod board;

/// Digits and fixed-width candidate bitsets.
pub mod digit;

/// Error types reported across the engine boundary.
pub mod error;

/// Constraint propagation: the mutually recursive `assign` and `eliminate`.
pub mod propagate;

/// Depth-first backtracking search over cloned boards.
pub mod search;

/// The engine facade: clue intake, solving, verification and statistics.
pub mod solver;

/// Grid topology: squares, units and peers derived from the grid order.
pub mod topology;
