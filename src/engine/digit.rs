#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
//! Digits and candidate sets.
//!
//! A [`Digit`] is one symbol of the puzzle alphabet, numbered from 1. The
//! textual alphabet follows the classic large-grid convention: `1`-`9` for
//! the first nine digits, then `A`-`P` up to the 25th.
//!
//! A [`DigitSet`] is a fixed-width bitset over that alphabet. 25 bits cover
//! the largest supported grid, so a `u32` gives O(1) membership, removal and
//! count, and a cheap `Copy` for the candidate tables.

use std::fmt;

/// One digit of the puzzle alphabet, in `1..=25`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// The largest digit any supported grid can use.
    pub const MAX: u8 = 25;

    /// Creates a digit from its 1-based value, or `None` if out of range.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// The 1-based value of this digit.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// The textual symbol for this digit: `'1'`-`'9'`, then `'A'`-`'P'`.
    #[must_use]
    pub const fn to_char(self) -> char {
        if self.0 <= 9 {
            (b'0' + self.0) as char
        } else {
            (b'A' + self.0 - 10) as char
        }
    }

    /// Parses a textual symbol back into a digit.
    #[must_use]
    pub const fn from_char(symbol: char) -> Option<Self> {
        match symbol {
            '1'..='9' => Self::new(symbol as u8 - b'0'),
            'A'..='P' => Self::new(symbol as u8 - b'A' + 10),
            _ => None,
        }
    }

    const fn bit(self) -> u32 {
        1 << (self.0 - 1)
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A set of digits, stored as one bit per digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DigitSet(u32);

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The full set `{1, ..., order}`.
    ///
    /// # Panics
    ///
    /// Panics if `order` exceeds [`Digit::MAX`]; callers obtain the order
    /// from a validated topology.
    #[must_use]
    pub fn full(order: usize) -> Self {
        assert!(order <= Digit::MAX as usize, "order {order} out of range");
        Self((1u32 << order) - 1)
    }

    /// Whether `digit` is in the set.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & digit.bit() != 0
    }

    /// Adds `digit` to the set.
    pub const fn insert(&mut self, digit: Digit) {
        self.0 |= digit.bit();
    }

    /// Removes `digit` from the set, returning whether it was present.
    pub const fn remove(&mut self, digit: Digit) -> bool {
        let present = self.contains(digit);
        self.0 &= !digit.bit();
        present
    }

    /// The set with `digit` removed.
    #[must_use]
    pub const fn without(self, digit: Digit) -> Self {
        Self(self.0 & !digit.bit())
    }

    /// Number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The single remaining digit, if the set has exactly one element.
    #[must_use]
    pub const fn sole(self) -> Option<Digit> {
        if self.0.count_ones() == 1 {
            #[allow(clippy::cast_possible_truncation)]
            let value = self.0.trailing_zeros() as u8 + 1;
            Some(Digit(value))
        } else {
            None
        }
    }

    /// Iterates over the digits in the set, in increasing order.
    #[must_use]
    pub const fn iter(self) -> DigitIter {
        DigitIter(self.0)
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = DigitIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.iter() {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

/// Iterator over the digits of a [`DigitSet`], smallest first.
#[derive(Debug, Clone)]
pub struct DigitIter(u32);

impl Iterator for DigitIter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.0 == 0 {
            return None;
        }
        #[allow(clippy::cast_possible_truncation)]
        let digit = Digit(self.0.trailing_zeros() as u8 + 1);
        self.0 &= self.0 - 1;
        Some(digit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for DigitIter {}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(value: u8) -> Digit {
        Digit::new(value).unwrap()
    }

    #[test]
    fn test_digit_range() {
        assert!(Digit::new(0).is_none());
        assert!(Digit::new(1).is_some());
        assert!(Digit::new(25).is_some());
        assert!(Digit::new(26).is_none());
    }

    #[test]
    fn test_digit_chars_round_trip() {
        for value in 1..=Digit::MAX {
            let digit = d(value);
            assert_eq!(Digit::from_char(digit.to_char()), Some(digit));
        }
        assert_eq!(d(9).to_char(), '9');
        assert_eq!(d(10).to_char(), 'A');
        assert_eq!(d(25).to_char(), 'P');
        assert_eq!(Digit::from_char('.'), None);
        assert_eq!(Digit::from_char('0'), None);
        assert_eq!(Digit::from_char('Q'), None);
    }

    #[test]
    fn test_full_set() {
        let set = DigitSet::full(9);
        assert_eq!(set.len(), 9);
        assert!(set.contains(d(1)));
        assert!(set.contains(d(9)));
        assert!(!set.contains(d(10)));
        assert_eq!(DigitSet::full(25).len(), 25);
    }

    #[test]
    fn test_insert_remove() {
        let mut set = DigitSet::EMPTY;
        set.insert(d(4));
        assert!(set.contains(d(4)));
        assert!(set.remove(d(4)));
        assert!(!set.remove(d(4)), "second removal is a no-op");
        assert!(set.is_empty());
    }

    #[test]
    fn test_sole() {
        assert_eq!(DigitSet::EMPTY.sole(), None);
        assert_eq!(DigitSet::full(9).sole(), None);
        let mut set = DigitSet::EMPTY;
        set.insert(d(17));
        assert_eq!(set.sole(), Some(d(17)));
    }

    #[test]
    fn test_iter_increasing() {
        let mut set = DigitSet::EMPTY;
        for value in [7, 2, 25, 1] {
            set.insert(d(value));
        }
        let digits: Vec<u8> = set.iter().map(Digit::get).collect();
        assert_eq!(digits, vec![1, 2, 7, 25]);
        assert_eq!(set.iter().len(), 4);
    }

    #[test]
    fn test_without() {
        let set = DigitSet::full(4).without(d(3));
        let digits: Vec<u8> = set.iter().map(Digit::get).collect();
        assert_eq!(digits, vec![1, 2, 4]);
    }

    #[test]
    fn test_display() {
        let mut set = DigitSet::EMPTY;
        set.insert(d(1));
        set.insert(d(12));
        assert_eq!(set.to_string(), "1C");
    }
}
