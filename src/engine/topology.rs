#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
//! Grid topology: squares, units and peers.
//!
//! A unit is a row, a column or a box: N squares that must hold N distinct
//! digits. Every square belongs to exactly three units, and its peers are
//! all squares sharing any of those units. The tables built here are
//! computed once per puzzle and never mutated afterwards; boards and search
//! branches share them by reference.

use crate::engine::digit::Digit;
use crate::engine::error::ConfigError;
use itertools::Itertools;
use rustc_hash::FxHashSet;
use std::fmt;

/// The largest grid order the digit alphabet supports.
pub const MAX_ORDER: usize = Digit::MAX as usize;

/// One cell of the grid, identified by its row-major index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u16);

impl Square {
    /// Creates a square from its row-major index.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn new(index: usize) -> Self {
        Self(index as u16)
    }

    /// The row-major index of this square.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Index of a unit in a [`Topology`]'s unit table.
pub type UnitId = usize;

/// The unit and peer tables for one grid order.
#[derive(Debug, Clone, PartialEq)]
pub struct Topology {
    order: usize,
    box_size: usize,
    /// The squares of each unit: N rows, then N columns, then N boxes.
    unit_squares: Vec<Vec<Square>>,
    /// For each square, the row, column and box unit containing it.
    square_units: Vec<[UnitId; 3]>,
    /// For each square, every square sharing a unit with it, deduplicated,
    /// excluding the square itself.
    peers: Vec<Vec<Square>>,
}

impl Topology {
    /// Builds the topology for a grid of the given order.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the order has no integer square root
    /// (no box shape exists) or exceeds [`MAX_ORDER`]. Nothing is built in
    /// either case.
    pub fn new(order: usize) -> Result<Self, ConfigError> {
        let box_size = (1..=order)
            .find(|b| b * b == order)
            .ok_or(ConfigError::OrderNotSquare { order })?;
        if order > MAX_ORDER {
            return Err(ConfigError::OrderTooLarge {
                order,
                max: MAX_ORDER,
            });
        }

        let square_count = order * order;
        let at = |row: usize, col: usize| Square::new(row * order + col);

        let mut unit_squares: Vec<Vec<Square>> = Vec::with_capacity(3 * order);
        for row in 0..order {
            unit_squares.push((0..order).map(|col| at(row, col)).collect());
        }
        for col in 0..order {
            unit_squares.push((0..order).map(|row| at(row, col)).collect());
        }
        for (band, stack) in (0..box_size).cartesian_product(0..box_size) {
            let unit = (0..box_size)
                .cartesian_product(0..box_size)
                .map(|(dr, dc)| at(band * box_size + dr, stack * box_size + dc))
                .collect();
            unit_squares.push(unit);
        }

        let mut square_units = Vec::with_capacity(square_count);
        for row in 0..order {
            for col in 0..order {
                let box_unit = 2 * order + (row / box_size) * box_size + col / box_size;
                square_units.push([row, order + col, box_unit]);
            }
        }

        let peers = square_units
            .iter()
            .enumerate()
            .map(|(index, units)| {
                let mut seen: FxHashSet<Square> = units
                    .iter()
                    .flat_map(|&unit| unit_squares[unit].iter().copied())
                    .collect();
                seen.remove(&Square::new(index));
                // Deterministic peer order, independent of hashing.
                seen.into_iter().sorted().collect()
            })
            .collect();

        Ok(Self {
            order,
            box_size,
            unit_squares,
            square_units,
            peers,
        })
    }

    /// The grid order N.
    #[must_use]
    pub const fn order(&self) -> usize {
        self.order
    }

    /// The box side length, the square root of the order.
    #[must_use]
    pub const fn box_size(&self) -> usize {
        self.box_size
    }

    /// Number of squares in the grid.
    #[must_use]
    pub fn square_count(&self) -> usize {
        self.square_units.len()
    }

    /// Iterates over all squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Square> + use<> {
        (0..self.square_count()).map(Square::new)
    }

    /// The square at the given row and column.
    #[must_use]
    pub const fn square_at(&self, row: usize, col: usize) -> Square {
        Square::new(row * self.order + col)
    }

    /// Number of units; always three times the order.
    #[must_use]
    pub fn unit_count(&self) -> usize {
        self.unit_squares.len()
    }

    /// The squares of one unit.
    #[must_use]
    pub fn unit(&self, unit: UnitId) -> &[Square] {
        &self.unit_squares[unit]
    }

    /// The three units containing `square`: its row, column and box.
    #[must_use]
    pub fn units_of(&self, square: Square) -> &[UnitId; 3] {
        &self.square_units[square.index()]
    }

    /// The peers of `square`.
    #[must_use]
    pub fn peers(&self, square: Square) -> &[Square] {
        &self.peers[square.index()]
    }

    /// The chess-style name of a square: row letter then column symbol,
    /// `A1` through `Y9`/`YP` depending on the order.
    #[must_use]
    pub fn square_name(&self, square: Square) -> SquareName {
        SquareName {
            row: square.index() / self.order,
            col: square.index() % self.order,
        }
    }
}

/// Displayable chess-style square name, such as `A1` or `D7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareName {
    row: usize,
    col: usize,
}

impl fmt::Display for SquareName {
    #[allow(clippy::cast_possible_truncation)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = (b'A' + self.row as u8) as char;
        // The column alphabet is the digit alphabet.
        match Digit::new(self.col as u8 + 1) {
            Some(col) => write!(f, "{row}{col}"),
            None => write!(f, "{row}?"),
        }
    }
}
