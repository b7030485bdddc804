#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
//! Depth-first backtracking search.
//!
//! Propagation alone solves easy grids; everything else branches. The driver
//! picks an unresolved square with the fewest remaining candidates, tries
//! each candidate in increasing digit order on its own clone of the board,
//! and returns the first fully solved board it reaches. Failed clones are
//! simply dropped; the recursion depth is bounded by the number of squares.

use crate::engine::board::Board;
use crate::engine::propagate::assign;
use crate::engine::solver::SolveStats;
use crate::engine::topology::{Square, Topology};

/// Explores candidate assignments depth-first until a solved board is found
/// or every branch is exhausted.
///
/// Takes the board by value: the caller's propagated board is consumed by
/// the root of the search, and each branch owns its clone exclusively.
#[must_use]
pub fn search(topology: &Topology, board: Board, stats: &mut SolveStats) -> Option<Board> {
    if !board.is_alive() {
        return None;
    }
    if board.is_solved() {
        return Some(board);
    }

    let square = best_square(topology, &board)?;
    for digit in board.candidates(square) {
        stats.branches += 1;
        let mut branch = board.clone();
        if assign(topology, &mut branch, stats, square, digit) {
            if let Some(solved) = search(topology, branch, stats) {
                return Some(solved);
            }
        }
        stats.backtracks += 1;
    }
    None
}

/// Picks the unresolved square with the fewest remaining candidates.
///
/// A square with exactly two candidates short-circuits the scan; otherwise
/// the first square with the minimum count wins. Returns `None` only when
/// every square is already resolved.
fn best_square(topology: &Topology, board: &Board) -> Option<Square> {
    let mut best: Option<(Square, usize)> = None;
    for square in topology.squares() {
        let count = board.candidates(square).len();
        if count == 2 {
            return Some(square);
        }
        if count > 1 && best.is_none_or(|(_, min)| count < min) {
            best = Some((square, count));
        }
    }
    best.map(|(square, _)| square)
}
