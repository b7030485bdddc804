#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
//! Puzzle text format.
//!
//! A puzzle file is either N lines of N symbols, or a single line of N²
//! symbols. `.` and `0` mark blank squares; givens use the digit alphabet
//! `1`-`9` then `A`-`P`. The grid order is detected from the input shape
//! (first-line length, or the square root of a single line's length), and
//! an explicitly supplied order always wins over detection.
//!
//! Rendering mirrors the classic terminal layout: symbols separated by
//! spaces, `|` between box stacks and a blank line between box bands.

use crate::engine::digit::Digit;
use crate::engine::solver::Clues;
use itertools::Itertools;
use std::fmt;
use std::path::Path;

/// A parsed, not yet solved puzzle: the grid order plus a clue per square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    order: usize,
    cells: Vec<Option<Digit>>,
}

/// Why a puzzle file could not be read or parsed.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum PuzzleError {
    /// The file could not be read.
    #[display("failed to read puzzle: {_0}")]
    #[from]
    Io(std::io::Error),

    /// The input contains no symbols at all.
    #[display("puzzle is empty")]
    Empty,

    /// A single-line puzzle whose length is not a perfect square.
    #[display("a single-line puzzle of {found} symbols cannot form a square grid")]
    NotSquare {
        /// Number of symbols found on the line.
        found: usize,
    },

    /// A line of the grid holds the wrong number of symbols.
    #[display("line {line} has {found} symbols, expected {expected}")]
    RaggedLine {
        /// 1-based line number within the grid.
        line: usize,
        /// Symbols expected per line (the grid order).
        expected: usize,
        /// Symbols found.
        found: usize,
    },

    /// The grid has the wrong number of rows for its detected order.
    #[display("expected {expected} rows, found {found}")]
    RowCount {
        /// Rows expected (the grid order).
        expected: usize,
        /// Rows found.
        found: usize,
    },

    /// The input holds the wrong number of symbols for the requested order.
    #[display("expected {expected} symbols for an order-{order} grid, found {found}")]
    CellCount {
        /// The requested grid order.
        order: usize,
        /// Symbols expected (order squared).
        expected: usize,
        /// Symbols found.
        found: usize,
    },

    /// A symbol is neither blank nor a digit of this grid's alphabet.
    #[display("unrecognised symbol '{symbol}' for a {order}x{order} grid")]
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// The grid order, which bounds the alphabet.
        order: usize,
    },
}

impl Puzzle {
    /// Parses a puzzle, detecting the grid order from the input shape:
    /// several lines of symbols use the first line's length, a single line
    /// uses the square root of its length.
    ///
    /// # Errors
    ///
    /// Returns a [`PuzzleError`] when the input is empty, the shape is
    /// inconsistent, or a symbol falls outside the grid's alphabet. Whether
    /// the detected order is a valid grid order is the engine's call, not
    /// ours.
    pub fn parse(text: &str) -> Result<Self, PuzzleError> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(|line| line.chars().filter(|c| is_symbol(*c)).collect_vec())
            .filter(|symbols: &Vec<char>| !symbols.is_empty())
            .collect();

        match rows.as_slice() {
            [] => Err(PuzzleError::Empty),
            [line] => {
                let found = line.len();
                let order = (1..=found)
                    .find(|n| n * n == found)
                    .ok_or(PuzzleError::NotSquare { found })?;
                Self::from_symbols(order, line.iter().copied())
            }
            rows => {
                let order = rows[0].len();
                if rows.len() != order {
                    return Err(PuzzleError::RowCount {
                        expected: order,
                        found: rows.len(),
                    });
                }
                for (index, row) in rows.iter().enumerate() {
                    if row.len() != order {
                        return Err(PuzzleError::RaggedLine {
                            line: index + 1,
                            expected: order,
                            found: row.len(),
                        });
                    }
                }
                Self::from_symbols(order, rows.iter().flatten().copied())
            }
        }
    }

    /// Parses a puzzle with an explicitly given grid order, ignoring the
    /// input's line structure entirely.
    ///
    /// # Errors
    ///
    /// Returns a [`PuzzleError`] when the symbol count is not `order²` or a
    /// symbol falls outside the alphabet.
    pub fn parse_with_order(text: &str, order: usize) -> Result<Self, PuzzleError> {
        let symbols = text.chars().filter(|c| is_symbol(*c)).collect_vec();
        if symbols.len() != order * order {
            return Err(PuzzleError::CellCount {
                order,
                expected: order * order,
                found: symbols.len(),
            });
        }
        Self::from_symbols(order, symbols.into_iter())
    }

    fn from_symbols(
        order: usize,
        symbols: impl Iterator<Item = char>,
    ) -> Result<Self, PuzzleError> {
        let cells = symbols
            .map(|symbol| match symbol {
                '.' | '0' => Ok(None),
                _ => Digit::from_char(symbol)
                    .filter(|digit| digit.get() as usize <= order)
                    .map(Some)
                    .ok_or(PuzzleError::UnknownSymbol { symbol, order }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { order, cells })
    }

    /// The grid order detected or requested at parse time.
    #[must_use]
    pub const fn order(&self) -> usize {
        self.order
    }

    /// Number of given (non-blank) squares.
    #[must_use]
    pub fn given_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// The clue mapping to hand to the engine.
    #[must_use]
    pub fn clues(&self) -> Clues {
        Clues::from(self.cells.clone())
    }
}

/// Whitespace and the `|` box separators our own renderer emits carry no
/// information and are skipped before shape detection.
fn is_symbol(c: char) -> bool {
    !c.is_whitespace() && c != '|'
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = render_cells(self.order, |index| {
            self.cells[index].map_or('.', Digit::to_char)
        });
        write!(f, "{rendered}")
    }
}

/// Reads and parses a puzzle file. `order`, if given, overrides shape
/// detection.
///
/// # Errors
///
/// Returns a [`PuzzleError`] when the file cannot be read or its content
/// does not parse.
pub fn parse_puzzle_file(path: &Path, order: Option<usize>) -> Result<Puzzle, PuzzleError> {
    let text = std::fs::read_to_string(path)?;
    match order {
        Some(order) => Puzzle::parse_with_order(&text, order),
        None => Puzzle::parse(&text),
    }
}

/// Renders a solved grid with box separators.
#[must_use]
pub fn render_solution(order: usize, digits: &[Digit]) -> String {
    render_cells(order, |index| digits[index].to_char())
}

/// Shared grid layout: a space after every symbol, `| ` between box
/// stacks, a newline per row and a blank line between box bands.
fn render_cells(order: usize, symbol: impl Fn(usize) -> char) -> String {
    let box_size = (1..=order).find(|b| b * b == order).unwrap_or(order);
    let mut out = String::new();
    for row in 0..order {
        for col in 0..order {
            out.push(symbol(row * order + col));
            if col + 1 != order {
                out.push(' ');
                if (col + 1) % box_size == 0 {
                    out.push_str("| ");
                }
            }
        }
        out.push('\n');
        if (row + 1) % box_size == 0 && row + 1 != order {
            out.push('\n');
        }
    }
    out
}

/// The classic "easy" 9x9 grid from the Sudoku literature; constraint
/// propagation alone solves it.
pub const EXAMPLE_EASY: &str = "\
003020600
900305001
001806400
008102900
700000008
006708200
002609500
800203009
005010300
";

/// A hard 9x9 grid that constraint propagation cannot finish, in the
/// one-line format; the search driver has to branch.
pub const EXAMPLE_HARD: &str =
    "4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_multi_line_nine() {
        let puzzle = Puzzle::parse(EXAMPLE_EASY).unwrap();
        assert_eq!(puzzle.order(), 9);
        assert_eq!(puzzle.given_count(), 32);
        let clues = puzzle.clues();
        assert_eq!(clues.len(), 81);
        assert_eq!(clues.given_count(), 32);
    }

    #[test]
    fn test_parse_single_line() {
        let puzzle = Puzzle::parse(EXAMPLE_HARD).unwrap();
        assert_eq!(puzzle.order(), 9);
        assert_eq!(puzzle.given_count(), 17);
    }

    #[test]
    fn test_blank_markers_are_interchangeable() {
        let dots = Puzzle::parse(&EXAMPLE_EASY.replace('0', ".")).unwrap();
        let zeros = Puzzle::parse(EXAMPLE_EASY).unwrap();
        assert_eq!(dots, zeros);
    }

    #[test]
    fn test_parse_sixteen_symbols() {
        // One row band of a 16x16 grid uses digits beyond 9.
        let line = "123456789ABCDEFG".repeat(16);
        let puzzle = Puzzle::parse(&line).unwrap();
        assert_eq!(puzzle.order(), 16);
        assert_eq!(puzzle.given_count(), 256);
    }

    #[test]
    fn test_ragged_line_is_rejected() {
        let text = "003020600\n9003\n001806400\n008102900\n700000008\n006708200\n002609500\n800203009\n005010300\n";
        match Puzzle::parse(text) {
            Err(PuzzleError::RaggedLine {
                line: 2,
                expected: 9,
                found: 4,
            }) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_row_count_mismatch_is_rejected() {
        let text = "123456789\n123456789\n";
        match Puzzle::parse(text) {
            Err(PuzzleError::RowCount {
                expected: 9,
                found: 2,
            }) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_single_line_must_be_square() {
        match Puzzle::parse("12345") {
            Err(PuzzleError::NotSquare { found: 5 }) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(Puzzle::parse(""), Err(PuzzleError::Empty)));
        assert!(matches!(Puzzle::parse("\n  \n"), Err(PuzzleError::Empty)));
    }

    #[test]
    fn test_symbol_outside_alphabet_is_rejected() {
        // 'A' is digit 10, which a 9x9 grid does not use.
        let text = EXAMPLE_EASY.replacen('6', "A", 1);
        match Puzzle::parse(&text) {
            Err(PuzzleError::UnknownSymbol { symbol: 'A', order: 9 }) => {}
            other => panic!("unexpected result: {other:?}"),
        }
        // 'Z' is no digit at all.
        match Puzzle::parse(&EXAMPLE_HARD.replacen('4', "Z", 1)) {
            Err(PuzzleError::UnknownSymbol { symbol: 'Z', order: 9 }) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_explicit_order_overrides_shape() {
        let puzzle = Puzzle::parse_with_order(EXAMPLE_HARD, 9).unwrap();
        assert_eq!(puzzle.order(), 9);
        match Puzzle::parse_with_order(EXAMPLE_HARD, 16) {
            Err(PuzzleError::CellCount {
                order: 16,
                expected: 256,
                found: 81,
            }) => {}
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_display_round_trips_symbols() {
        let puzzle = Puzzle::parse(EXAMPLE_EASY).unwrap();
        let shown = puzzle.to_string();
        let reparsed = Puzzle::parse(&shown).unwrap();
        assert_eq!(puzzle, reparsed);
    }

    #[test]
    fn test_render_layout() {
        let digits: Vec<Digit> = "1234341221434321"
            .chars()
            .map(|c| Digit::from_char(c).unwrap())
            .collect();
        let expected = "\
1 2 | 3 4
3 4 | 1 2

2 1 | 4 3
4 3 | 2 1
";
        assert_eq!(render_solution(4, &digits), expected);
    }
}
