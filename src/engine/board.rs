#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
//! Board state: the candidate digits remaining at every square.
//!
//! A fresh board considers every digit possible everywhere. Propagation
//! narrows the candidate sets in place; the search driver deep-copies the
//! board at each branch point, so a clone is owned exclusively by its branch
//! and simply dropped when the branch fails.

use crate::engine::digit::{Digit, DigitSet};
use crate::engine::topology::{Square, Topology};

/// Candidate sets for every square, plus the solved counter and the
/// liveness flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<DigitSet>,
    solved: usize,
    alive: bool,
}

impl Board {
    /// Creates a board for `topology` with every digit possible everywhere.
    #[must_use]
    pub fn new(topology: &Topology) -> Self {
        Self {
            cells: vec![DigitSet::full(topology.order()); topology.square_count()],
            solved: 0,
            alive: true,
        }
    }

    /// The candidate set at `square`.
    #[must_use]
    pub fn candidates(&self, square: Square) -> DigitSet {
        self.cells[square.index()]
    }

    /// Overwrites the candidate set at `square`. Used only while setting a
    /// board up; propagation goes through [`Self::remove_candidate`].
    pub fn set_candidates(&mut self, square: Square, candidates: DigitSet) {
        self.cells[square.index()] = candidates;
    }

    /// Removes `digit` from the candidates at `square`, returning whether a
    /// removal actually occurred.
    pub fn remove_candidate(&mut self, square: Square, digit: Digit) -> bool {
        self.cells[square.index()].remove(digit)
    }

    /// Records that one more square has been narrowed to a single candidate.
    /// Called exactly once per square, the first time its set reaches size 1.
    pub const fn mark_solved(&mut self) {
        self.solved += 1;
    }

    /// Number of squares narrowed to a single candidate so far.
    #[must_use]
    pub const fn solved_count(&self) -> usize {
        self.solved
    }

    /// Whether every square has been narrowed to a single candidate.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved == self.cells.len()
    }

    /// Whether this board can still lead to a solution.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.alive
    }

    /// Marks the board as contradictory. Irreversible for this instance;
    /// search branches clone from the pre-failure parent, never from here.
    pub const fn fail(&mut self) {
        self.alive = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(value: u8) -> Digit {
        Digit::new(value).unwrap()
    }

    fn board_9() -> (Topology, Board) {
        let topology = Topology::new(9).unwrap();
        let board = Board::new(&topology);
        (topology, board)
    }

    #[test]
    fn test_fresh_board_has_all_candidates() {
        let (topology, board) = board_9();
        for square in topology.squares() {
            assert_eq!(board.candidates(square), DigitSet::full(9));
        }
        assert!(board.is_alive());
        assert!(!board.is_solved());
        assert_eq!(board.solved_count(), 0);
    }

    #[test]
    fn test_remove_candidate_reports_removal() {
        let (_, mut board) = board_9();
        let square = Square::new(40);
        assert!(board.remove_candidate(square, digit(5)));
        assert!(!board.remove_candidate(square, digit(5)), "no-op when absent");
        assert_eq!(board.candidates(square).len(), 8);
    }

    #[test]
    fn test_solved_counter_reaches_target() {
        let topology = Topology::new(4).unwrap();
        let mut board = Board::new(&topology);
        for _ in 0..16 {
            assert!(!board.is_solved());
            board.mark_solved();
        }
        assert!(board.is_solved());
    }

    #[test]
    fn test_fail_is_irreversible() {
        let (_, mut board) = board_9();
        board.fail();
        assert!(!board.is_alive());
    }

    #[test]
    fn test_clone_is_independent() {
        let (_, mut board) = board_9();
        let square = Square::new(0);
        let clone = board.clone();
        board.remove_candidate(square, digit(1));
        board.fail();
        assert_eq!(clone.candidates(square), DigitSet::full(9));
        assert!(clone.is_alive());
    }
}
