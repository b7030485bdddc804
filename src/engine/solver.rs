#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
//! The engine facade.
//!
//! [`Engine`] ties the pieces together: it owns the shared topology, feeds
//! the given clues through propagation, falls back to search when
//! propagation alone is not enough, and hands back either a [`Solution`]
//! (the raw square-to-digit mapping) or a [`SolveError`]. Formatting and
//! parsing live in the `puzzle` module; nothing here touches text.

use crate::engine::board::Board;
use crate::engine::digit::Digit;
use crate::engine::error::{ConfigError, SolveError};
use crate::engine::propagate::assign;
use crate::engine::search::search;
use crate::engine::topology::{Square, Topology};
use log::debug;

/// Counters collected while solving one puzzle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Number of `assign` calls, clue placement and forced moves included.
    pub assignments: usize,
    /// Number of candidate removals actually performed.
    pub eliminations: usize,
    /// Number of search branches opened (board clones made).
    pub branches: usize,
    /// Number of branches abandoned after a contradiction.
    pub backtracks: usize,
}

/// The clue mapping handed across the engine boundary: for every square of
/// the grid, either a given digit or blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clues {
    cells: Vec<Option<Digit>>,
}

impl Clues {
    /// An all-blank clue mapping for a grid of the given order.
    #[must_use]
    pub fn blank(order: usize) -> Self {
        Self {
            cells: vec![None; order * order],
        }
    }

    /// Sets the clue at `square`.
    ///
    /// # Panics
    ///
    /// Panics if the square index is outside the mapping.
    pub fn set(&mut self, square: Square, digit: Digit) {
        self.cells[square.index()] = Some(digit);
    }

    /// Clears the clue at `square`.
    ///
    /// # Panics
    ///
    /// Panics if the square index is outside the mapping.
    pub fn clear(&mut self, square: Square) {
        self.cells[square.index()] = None;
    }

    /// The clue at `square`, if any.
    #[must_use]
    pub fn get(&self, square: Square) -> Option<Digit> {
        self.cells[square.index()]
    }

    /// Number of squares the mapping covers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the mapping covers no squares.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of given (non-blank) clues.
    #[must_use]
    pub fn given_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Iterates over the given clues as `(square, digit)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (Square, Digit)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, digit)| digit.map(|digit| (Square::new(index), digit)))
    }
}

impl From<Vec<Option<Digit>>> for Clues {
    fn from(cells: Vec<Option<Digit>>) -> Self {
        Self { cells }
    }
}

/// A fully solved grid: one digit per square, in row-major square order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    digits: Vec<Digit>,
}

impl Solution {
    /// The digit solved at `square`.
    #[must_use]
    pub fn digit(&self, square: Square) -> Digit {
        self.digits[square.index()]
    }

    /// The solved digits in row-major square order.
    #[must_use]
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Checks the Latin-square post-condition: every unit of `topology`
    /// contains each digit of the alphabet exactly once.
    #[must_use]
    pub fn verify(&self, topology: &Topology) -> bool {
        if self.digits.len() != topology.square_count() {
            return false;
        }
        (0..topology.unit_count()).all(|unit| {
            let mut seen = crate::engine::digit::DigitSet::EMPTY;
            for &square in topology.unit(unit) {
                seen.insert(self.digit(square));
            }
            seen == crate::engine::digit::DigitSet::full(topology.order())
        })
    }

    /// Extracts the solved mapping from a fully propagated board.
    fn from_board(topology: &Topology, board: &Board) -> Self {
        let digits = topology
            .squares()
            .map(|square| {
                board
                    .candidates(square)
                    .sole()
                    .expect("solved board has a sole candidate per square")
            })
            .collect();
        Self { digits }
    }
}

/// A solver instance for one grid order. The topology is built once and
/// shared read-only by every board the solve produces.
#[derive(Debug, Clone)]
pub struct Engine {
    topology: Topology,
    stats: SolveStats,
}

impl Engine {
    /// Creates an engine for a grid of the given order.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the order has no integer square root or
    /// is larger than the digit alphabet supports.
    pub fn new(order: usize) -> Result<Self, ConfigError> {
        Ok(Self {
            topology: Topology::new(order)?,
            stats: SolveStats::default(),
        })
    }

    /// The shared topology of this engine.
    #[must_use]
    pub const fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Counters collected by the most recent [`Self::solve`] call.
    #[must_use]
    pub const fn stats(&self) -> SolveStats {
        self.stats
    }

    /// Solves a puzzle given as a clue mapping.
    ///
    /// The clues are validated against the topology, fed through constraint
    /// propagation, and handed to the depth-first search only if propagation
    /// leaves unresolved squares.
    ///
    /// # Errors
    ///
    /// * [`SolveError::Config`] - the clue mapping does not fit the grid.
    /// * [`SolveError::Unsatisfiable`] - the clues contradict each other
    ///   during initial propagation.
    /// * [`SolveError::Exhausted`] - every search branch ended in
    ///   contradiction.
    pub fn solve(&mut self, clues: &Clues) -> Result<Solution, SolveError> {
        self.check_clues(clues)?;
        self.stats = SolveStats::default();

        let mut board = Board::new(&self.topology);
        for (square, digit) in clues.entries() {
            if !assign(&self.topology, &mut board, &mut self.stats, square, digit) {
                debug!(
                    "clue {digit} at {} contradicts earlier clues",
                    self.topology.square_name(square)
                );
                return Err(SolveError::Unsatisfiable);
            }
        }

        debug!(
            "propagation fixed {} of {} squares",
            board.solved_count(),
            self.topology.square_count()
        );

        let solved = if board.is_solved() {
            board
        } else {
            search(&self.topology, board, &mut self.stats).ok_or(SolveError::Exhausted)?
        };

        let solution = Solution::from_board(&self.topology, &solved);
        debug_assert!(solution.verify(&self.topology));
        debug!(
            "solved with {} branches, {} eliminations",
            self.stats.branches, self.stats.eliminations
        );
        Ok(solution)
    }

    fn check_clues(&self, clues: &Clues) -> Result<(), ConfigError> {
        if clues.len() != self.topology.square_count() {
            return Err(ConfigError::ClueCountMismatch {
                expected: self.topology.square_count(),
                found: clues.len(),
            });
        }
        for (square, digit) in clues.entries() {
            if digit.get() as usize > self.topology.order() {
                return Err(ConfigError::ClueDigitOutOfRange {
                    square: square.index(),
                    digit: digit.get(),
                    order: self.topology.order(),
                });
            }
        }
        Ok(())
    }
}
