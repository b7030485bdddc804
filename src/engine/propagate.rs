#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
//! Constraint propagation to a fixed point.
//!
//! Two mutually recursive operations narrow a live board: [`assign`] drives
//! a square toward a single digit by eliminating every other candidate, and
//! [`eliminate`] removes one candidate and follows the consequences:
//!
//! 1. a square left with a single candidate forces that digit out of all of
//!    its peers;
//! 2. a digit left with a single possible place in a unit is assigned there.
//!
//! Each call strictly shrinks some candidate set, so the recursion always
//! halts. A contradiction (an empty candidate set, or a digit with no place
//! left in a unit) marks the board dead and unwinds as `false`; no failure
//! ever crosses this boundary as a panic.

use crate::engine::board::Board;
use crate::engine::digit::Digit;
use crate::engine::solver::SolveStats;
use crate::engine::topology::{Square, Topology};
use smallvec::SmallVec;

/// Scratch list of the squares in one unit that still admit a digit. Units
/// hold at most 25 squares, but the interesting cases hold one or two.
type Places = SmallVec<[Square; 8]>;

/// Drives `square` toward holding only `digit` by eliminating every other
/// candidate currently at the square.
///
/// Returns `false` and leaves the board marked dead if any elimination
/// uncovers a contradiction.
pub fn assign(
    topology: &Topology,
    board: &mut Board,
    stats: &mut SolveStats,
    square: Square,
    digit: Digit,
) -> bool {
    stats.assignments += 1;
    let others = board.candidates(square).without(digit);
    for other in others {
        if !eliminate(topology, board, stats, square, other) {
            return false;
        }
    }
    true
}

/// Removes `digit` as a candidate at `square` and propagates the
/// consequences to a fixed point.
///
/// Re-eliminating an absent digit is a no-op, which makes propagation
/// idempotent per `(square, digit)` pair. Returns `false` and leaves the
/// board marked dead on contradiction.
pub fn eliminate(
    topology: &Topology,
    board: &mut Board,
    stats: &mut SolveStats,
    square: Square,
    digit: Digit,
) -> bool {
    if !board.candidates(square).contains(digit) {
        return true;
    }

    board.remove_candidate(square, digit);
    stats.eliminations += 1;

    let remaining = board.candidates(square);
    if remaining.is_empty() {
        // No value works at this square.
        board.fail();
        return false;
    }
    if let Some(value) = remaining.sole() {
        board.mark_solved();
        for &peer in topology.peers(square) {
            if !eliminate(topology, board, stats, peer, value) {
                return false;
            }
        }
    }

    for &unit in topology.units_of(square) {
        let mut places = Places::new();
        for &candidate in topology.unit(unit) {
            if board.candidates(candidate).contains(digit) {
                places.push(candidate);
            }
        }
        match places.as_slice() {
            [] => {
                // No square left in the unit can hold the digit.
                board.fail();
                return false;
            }
            [only] => {
                if !assign(topology, board, stats, *only, digit) {
                    return false;
                }
            }
            _ => {}
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::digit::DigitSet;

    fn digit(value: u8) -> Digit {
        Digit::new(value).unwrap()
    }

    fn setup(order: usize) -> (Topology, Board, SolveStats) {
        let topology = Topology::new(order).unwrap();
        let board = Board::new(&topology);
        (topology, board, SolveStats::default())
    }

    #[test]
    fn test_assign_on_blank_board_pins_digit() {
        let (topology, mut board, mut stats) = setup(9);
        let square = topology.square_at(0, 0);
        assert!(assign(&topology, &mut board, &mut stats, square, digit(5)));

        let mut expected = DigitSet::EMPTY;
        expected.insert(digit(5));
        assert_eq!(board.candidates(square), expected);
        assert_eq!(board.solved_count(), 1);
        // Every peer lost the assigned digit.
        for &peer in topology.peers(square) {
            assert!(!board.candidates(peer).contains(digit(5)));
        }
    }

    #[test]
    fn test_eliminate_is_idempotent() {
        let (topology, mut board, mut stats) = setup(9);
        let square = topology.square_at(3, 3);
        assert!(eliminate(&topology, &mut board, &mut stats, square, digit(2)));
        let snapshot = board.clone();
        let eliminations = stats.eliminations;

        assert!(eliminate(&topology, &mut board, &mut stats, square, digit(2)));
        assert_eq!(board, snapshot, "second elimination must change nothing");
        assert_eq!(stats.eliminations, eliminations);
    }

    #[test]
    fn test_eliminating_last_candidate_fails_board() {
        let (topology, mut board, mut stats) = setup(4);
        let square = topology.square_at(1, 1);
        let mut only = DigitSet::EMPTY;
        only.insert(digit(3));
        board.set_candidates(square, only);

        assert!(!eliminate(&topology, &mut board, &mut stats, square, digit(3)));
        assert!(!board.is_alive());
    }

    #[test]
    fn test_conflicting_assignments_fail() {
        let (topology, mut board, mut stats) = setup(9);
        let first = topology.square_at(0, 0);
        let second = topology.square_at(0, 5); // same row unit
        assert!(assign(&topology, &mut board, &mut stats, first, digit(7)));
        assert!(!assign(&topology, &mut board, &mut stats, second, digit(7)));
        assert!(!board.is_alive());
    }

    #[test]
    fn test_sole_place_in_unit_forces_assignment() {
        let (topology, mut board, mut stats) = setup(4);
        let row: Vec<Square> = topology.unit(0).to_vec();
        // Deny digit 4 to three of the four squares of row A; the fourth
        // must take it.
        for &square in &row[..3] {
            assert!(eliminate(&topology, &mut board, &mut stats, square, digit(4)));
        }
        let forced = row[3];
        assert_eq!(board.candidates(forced).sole(), Some(digit(4)));
    }

    #[test]
    fn test_assign_counts_stats() {
        let (topology, mut board, mut stats) = setup(9);
        assert!(assign(
            &topology,
            &mut board,
            &mut stats,
            topology.square_at(2, 2),
            digit(1)
        ));
        assert!(stats.assignments >= 1);
        // Eight candidates leave the assigned square, plus peer fallout.
        assert!(stats.eliminations >= 8);
    }
}
