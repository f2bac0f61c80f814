#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Placements and solutions.
//!
//! A `Solution` prints exactly the way the renderer expects to read it back:
//! a bracketed, comma separated list of `(row, column)` pairs, for example
//! `[(1, 1), (2, 5), (3, 8), (4, 6), (5, 3), (6, 7), (7, 2), (8, 4)]`.

use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt::Display;
use std::ops::Index;

/// The side length of the board. Rows and columns are numbered `1..=BOARD_SIZE`.
pub const BOARD_SIZE: usize = 8;

/// A single queen, identified by its 1-based row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Placement {
    /// The 1-based row.
    pub row: usize,
    /// The 1-based column.
    pub column: usize,
}

impl Placement {
    /// Creates a placement at `(row, column)`.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

impl From<(usize, usize)> for Placement {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row, column)
    }
}

impl From<Placement> for (usize, usize) {
    fn from(placement: Placement) -> Self {
        (placement.row, placement.column)
    }
}

impl Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// An ordered sequence of placements, one per row, starting at row 1.
///
/// Solutions are only ever grown by [`Solution::extended`], which copies the
/// existing placements, so a solution handed out by a solver is never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Solution(SmallVec<[Placement; BOARD_SIZE]>);

impl Solution {
    /// The empty solution, i.e. the only solution for zero rows.
    #[must_use]
    pub const fn new() -> Self {
        Self(SmallVec::new_const())
    }

    /// Returns a copy of this solution with `placement` appended.
    #[must_use]
    pub fn extended(&self, placement: Placement) -> Self {
        let mut next = self.clone();
        next.0.push(placement);
        next
    }

    /// The number of placed queens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no queen has been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The placements in row order.
    #[must_use]
    pub fn placements(&self) -> &[Placement] {
        &self.0
    }

    /// Iterates over the placements in row order.
    pub fn iter(&self) -> impl Iterator<Item = &Placement> {
        self.0.iter()
    }

    /// Iterates over the column of each placement in row order.
    pub fn columns(&self) -> impl DoubleEndedIterator<Item = usize> + '_ {
        self.0.iter().map(|p| p.column)
    }
}

impl Index<usize> for Solution {
    type Output = Placement;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl FromIterator<Placement> for Solution {
    fn from_iter<T: IntoIterator<Item = Placement>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const K: usize> From<[(usize, usize); K]> for Solution {
    fn from(pairs: [(usize, usize); K]) -> Self {
        pairs.into_iter().map(Placement::from).collect()
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.0.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_printed_format() {
        let solution = Solution::from([
            (1, 1),
            (2, 5),
            (3, 8),
            (4, 6),
            (5, 3),
            (6, 7),
            (7, 2),
            (8, 4),
        ]);
        assert_eq!(
            solution.to_string(),
            "[(1, 1), (2, 5), (3, 8), (4, 6), (5, 3), (6, 7), (7, 2), (8, 4)]"
        );
    }

    #[test]
    fn test_empty_display() {
        assert!(Solution::new().is_empty());
        assert_eq!(Solution::new().to_string(), "[]");
    }

    #[test]
    fn test_extended_leaves_original_untouched() {
        let base = Solution::from([(1, 3)]);
        let next = base.extended(Placement::new(2, 1));

        assert_eq!(base.len(), 1);
        assert_eq!(next.len(), 2);
        assert_eq!(next[1], Placement::new(2, 1));
        assert_eq!(next.columns().collect::<Vec<_>>(), vec![3, 1]);
        assert_eq!(next.columns().rev().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_placement_tuple_conversion() {
        let placement = Placement::from((4, 7));
        assert_eq!(placement.row, 4);
        assert_eq!(placement.column, 7);
        assert_eq!(<(usize, usize)>::from(placement), (4, 7));
    }
}
