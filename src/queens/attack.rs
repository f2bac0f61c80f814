#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The attack check used when extending a partial solution by one row.
//!
//! The candidate sits on the row after the last placed queen. Walking the placed
//! queens from the closest row outwards, the squares that can see the candidate
//! spread one column further left and right per row:
//!
//! ```text
//!      c
//!     lcr
//!    l c r
//!   l  c  r
//! ```
//!
//! so one pass with two moving counters covers the column and both diagonals.

use crate::queens::placement::Placement;

/// Returns `true` if a queen placed in `column` on the row after `queens` is
/// attacked by any of them.
///
/// `queens` must be ordered by row, first row first.
#[must_use]
pub fn under_attack(column: usize, queens: &[Placement]) -> bool {
    let mut left = column;
    let mut right = column;

    for queen in queens.iter().rev() {
        // `left` wraps past zero on the board's edge; a wrapped value never matches a column.
        left = left.wrapping_sub(1);
        right += 1;

        if queen.column == left || queen.column == column || queen.column == right {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queens::placement::BOARD_SIZE;

    #[test]
    fn test_nothing_placed_is_never_attacked() {
        for column in 1..=BOARD_SIZE {
            assert!(!under_attack(column, &[]));
        }
    }

    #[test]
    fn test_single_queen() {
        let queens = [Placement::new(1, 1)];
        assert!(under_attack(1, &queens), "same column");
        assert!(under_attack(2, &queens), "diagonal");
        assert!(!under_attack(3, &queens));
    }

    #[test]
    fn test_diagonal_spreads_with_distance() {
        let queens = [Placement::new(1, 4), Placement::new(2, 1)];
        // Row 3: (1, 4) is two rows up, so columns 2 and 6 are on its diagonals.
        assert!(under_attack(2, &queens));
        assert!(under_attack(6, &queens));
        // (2, 1) is one row up and hits column 2 as well; column 5 is free of both.
        assert!(!under_attack(5, &queens));
        assert!(!under_attack(7, &queens));
    }

    #[test]
    fn test_left_edge_does_not_underflow() {
        let queens = [
            Placement::new(1, 8),
            Placement::new(2, 6),
            Placement::new(3, 4),
        ];
        assert!(!under_attack(1, &queens));
    }
}
