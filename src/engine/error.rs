#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
//! Error types reported across the engine boundary.
//!
//! Contradictions discovered during propagation or search are not errors;
//! they travel up the recursive call chain as ordinary `false` returns and
//! kill the local board. Only two things ever reach the caller as `Err`:
//! malformed configuration (rejected before any propagation starts) and the
//! absence of a solution.

/// A configuration problem, detected before propagation starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// The grid order has no integer square root, so no box shape exists.
    #[display("grid order {order} is not a perfect square")]
    OrderNotSquare {
        /// The rejected order.
        order: usize,
    },

    /// The grid order is larger than the digit alphabet supports.
    #[display("grid order {order} exceeds the largest supported order {max}")]
    OrderTooLarge {
        /// The rejected order.
        order: usize,
        /// The largest supported order.
        max: usize,
    },

    /// The clue mapping does not cover the grid's squares exactly.
    #[display("clue mapping covers {found} squares, expected {expected}")]
    ClueCountMismatch {
        /// Number of squares in the topology.
        expected: usize,
        /// Number of squares the clue mapping covers.
        found: usize,
    },

    /// A clue digit falls outside the grid's alphabet.
    #[display("clue digit {digit} at square {square} is outside the 1..={order} alphabet")]
    ClueDigitOutOfRange {
        /// Index of the offending square.
        square: usize,
        /// The 1-based clue digit.
        digit: u8,
        /// The grid order, which bounds the alphabet.
        order: usize,
    },
}

/// Why a puzzle could not be solved.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
)]
pub enum SolveError {
    /// The given clues contradict each other; initial propagation failed.
    #[display("the given clues contradict each other; no solution exists")]
    Unsatisfiable,

    /// Every branch of the search tree ended in contradiction.
    #[display("search exhausted every branch without finding a solution")]
    Exhausted,

    /// The puzzle was malformed before propagation even started.
    #[display("{_0}")]
    #[from]
    Config(ConfigError),
}

impl SolveError {
    /// Whether this error means "no solution exists" (as opposed to a
    /// malformed puzzle). `Unsatisfiable` and `Exhausted` differ only in
    /// timing: propagation-time versus search-time.
    #[must_use]
    pub const fn is_no_solution(self) -> bool {
        matches!(self, Self::Unsatisfiable | Self::Exhausted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ConfigError::OrderNotSquare { order: 10 };
        assert_eq!(err.to_string(), "grid order 10 is not a perfect square");

        let err = SolveError::from(ConfigError::OrderTooLarge { order: 36, max: 25 });
        assert_eq!(
            err.to_string(),
            "grid order 36 exceeds the largest supported order 25"
        );
    }

    #[test]
    fn test_no_solution_classification() {
        assert!(SolveError::Unsatisfiable.is_no_solution());
        assert!(SolveError::Exhausted.is_no_solution());
        assert!(
            !SolveError::Config(ConfigError::OrderNotSquare { order: 10 }).is_no_solution()
        );
    }
}
