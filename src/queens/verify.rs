#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Independent checks of solver output.
//!
//! These do not reuse [`under_attack`](crate::queens::attack::under_attack); they
//! compare every queen against sets of occupied columns and diagonals instead.

use crate::queens::placement::Solution;
use rustc_hash::FxHashSet;

/// Checks a complete solution for a board of side `size`.
///
/// Equivalent to `verify_partial(solution, size, size)`.
#[must_use]
pub fn verify(solution: &Solution, size: usize) -> bool {
    verify_partial(solution, size, size)
}

/// Checks that `solution` places exactly `rows` queens on rows `1..=rows`, in
/// order, within a board of side `size`, with no two queens sharing a column or
/// a diagonal.
#[must_use]
pub fn verify_partial(solution: &Solution, rows: usize, size: usize) -> bool {
    if rows == 0 {
        return solution.is_empty();
    }
    if solution.len() != rows || rows > size {
        return false;
    }

    let mut columns = FxHashSet::default();
    let mut rising = FxHashSet::default();
    let mut falling = FxHashSet::default();

    solution.iter().enumerate().all(|(i, p)| {
        p.row == i + 1
            && (1..=size).contains(&p.column)
            && columns.insert(p.column)
            && rising.insert(p.row + p.column)
            && falling.insert(p.row + size - p.column)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_solution() {
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
        assert!(verify(&solution, 8));
    }

    #[test]
    fn test_wrong_length() {
        let solution = Solution::from([(1, 2), (2, 4)]);
        assert!(!verify(&solution, 4));
        assert!(verify_partial(&solution, 2, 4));
    }

    #[test]
    fn test_shared_column() {
        let solution = Solution::from([(1, 1), (2, 3), (3, 1)]);
        assert!(!verify_partial(&solution, 3, 8));
    }

    #[test]
    fn test_shared_diagonal() {
        let rising = Solution::from([(1, 3), (2, 1), (3, 5), (4, 4)]);
        assert!(!verify_partial(&rising, 4, 8));

        let falling = Solution::from([(1, 1), (2, 4), (3, 6), (4, 8), (5, 5)]);
        assert!(!verify_partial(&falling, 5, 8));
    }

    #[test]
    fn test_rows_out_of_order() {
        let solution = Solution::from([(2, 4), (1, 2)]);
        assert!(!verify_partial(&solution, 2, 4));
    }

    #[test]
    fn test_zero_rows() {
        assert!(verify_partial(&Solution::new(), 0, 8));
        assert!(!verify_partial(&Solution::from([(1, 1)]), 0, 8));
    }

    #[test]
    fn test_column_off_board() {
        let solution = Solution::from([(1, 5)]);
        assert!(!verify_partial(&solution, 1, 4));
    }
}
