#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Solution search strategies.
//!
//! Two interchangeable strategies enumerate the same solutions in the same order:
//!
//! 1.  **Declarative**: builds every solution for `n` rows from every solution for
//!     `n - 1` rows, trying each column for row `n` in turn. All partial solutions of
//!     every size are alive at once.
//! 2.  **Backtracking**: a depth-first walk that places one queen at a time and keeps
//!     column and diagonal occupancy in bit sets, undoing each placement on the way back.
//!
//! The declarative strategy tries columns in the *outer* loop and smaller solutions in
//! the inner one, so its output is ordered by the last row's column first, then the
//! second to last, and so on. The backtracking walk reproduces that order by filling
//! rows from the last one down to the first.

use crate::queens::attack::under_attack;
use crate::queens::error::SolveError;
use crate::queens::placement::{BOARD_SIZE, Placement, Solution};
use bit_vec::BitVec;
use clap::ValueEnum;
use itertools::iproduct;
use smallvec::SmallVec;
use std::fmt::Display;

/// Counters collected during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Squares considered for a new queen.
    pub candidates: usize,
    /// Candidates rejected because an existing queen attacks them.
    pub conflicts: usize,
    /// Queens successfully placed, counting every intermediate partial solution.
    pub placements: usize,
    /// Solutions covering all requested rows.
    pub solutions: usize,
}

/// A strategy for enumerating queen placements on a square board.
pub trait QueensSolver {
    /// Returns every non-attacking placement of queens on rows `1..=rows`.
    ///
    /// `rows == 0` yields exactly one solution, the empty one.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Rows`] if `rows` exceeds the board size.
    fn solve(&mut self, rows: usize) -> Result<Vec<Solution>, SolveError>;

    /// Counters from the most recent call to [`QueensSolver::solve`].
    fn stats(&self) -> SearchStats;
}

fn check_size(size: usize) -> Result<usize, SolveError> {
    if (1..=BOARD_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(SolveError::BoardSize {
            size,
            max: BOARD_SIZE,
        })
    }
}

fn check_rows(rows: usize, size: usize) -> Result<(), SolveError> {
    if rows > size {
        Err(SolveError::Rows { rows, size })
    } else {
        Ok(())
    }
}

/// Recomputes smaller solutions and extends them one row at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declarative {
    size: usize,
    stats: SearchStats,
}

impl Declarative {
    /// Creates a solver for a board of side `size`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::BoardSize`] if `size` is not in `1..=BOARD_SIZE`.
    pub fn new(size: usize) -> Result<Self, SolveError> {
        Ok(Self {
            size: check_size(size)?,
            stats: SearchStats::default(),
        })
    }

    fn extend(&mut self, n: usize) -> Vec<Solution> {
        if n == 0 {
            return vec![Solution::new()];
        }

        let smaller = self.extend(n - 1);
        let mut solutions = Vec::new();

        for (column, solution) in iproduct!(1..=self.size, smaller.iter()) {
            self.stats.candidates += 1;
            if under_attack(column, solution.placements()) {
                self.stats.conflicts += 1;
                continue;
            }
            solutions.push(solution.extended(Placement::new(n, column)));
        }

        self.stats.placements += solutions.len();
        solutions
    }
}

impl QueensSolver for Declarative {
    fn solve(&mut self, rows: usize) -> Result<Vec<Solution>, SolveError> {
        check_rows(rows, self.size)?;
        self.stats = SearchStats::default();

        let solutions = self.extend(rows);
        self.stats.solutions = solutions.len();
        Ok(solutions)
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// Depth-first search with in-place occupancy tracking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backtracking {
    size: usize,
    columns: BitVec,
    /// Indexed by `row + column - 2`.
    rising: BitVec,
    /// Indexed by `row + size - 1 - column`.
    falling: BitVec,
    /// Placed queens, highest row first.
    stack: SmallVec<[Placement; BOARD_SIZE]>,
    stats: SearchStats,
}

impl Backtracking {
    /// Creates a solver for a board of side `size`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::BoardSize`] if `size` is not in `1..=BOARD_SIZE`.
    pub fn new(size: usize) -> Result<Self, SolveError> {
        let size = check_size(size)?;
        let diagonals = 2 * size - 1;
        Ok(Self {
            size,
            columns: BitVec::from_elem(size, false),
            rising: BitVec::from_elem(diagonals, false),
            falling: BitVec::from_elem(diagonals, false),
            stack: SmallVec::new(),
            stats: SearchStats::default(),
        })
    }

    const fn rising_index(&self, row: usize, column: usize) -> usize {
        row + column - 2
    }

    const fn falling_index(&self, row: usize, column: usize) -> usize {
        row + self.size - 1 - column
    }

    fn is_attacked(&self, row: usize, column: usize) -> bool {
        self.columns[column - 1]
            || self.rising[self.rising_index(row, column)]
            || self.falling[self.falling_index(row, column)]
    }

    fn mark(&mut self, placement: Placement, occupied: bool) {
        let Placement { row, column } = placement;
        let rising = self.rising_index(row, column);
        let falling = self.falling_index(row, column);
        self.columns.set(column - 1, occupied);
        self.rising.set(rising, occupied);
        self.falling.set(falling, occupied);
    }

    fn descend(&mut self, row: usize, out: &mut Vec<Solution>) {
        if row == 0 {
            out.push(self.stack.iter().rev().copied().collect());
            return;
        }

        for column in 1..=self.size {
            self.stats.candidates += 1;
            if self.is_attacked(row, column) {
                self.stats.conflicts += 1;
                continue;
            }

            let placement = Placement::new(row, column);
            self.stats.placements += 1;
            self.mark(placement, true);
            self.stack.push(placement);

            self.descend(row - 1, out);

            self.stack.pop();
            self.mark(placement, false);
        }
    }
}

impl QueensSolver for Backtracking {
    fn solve(&mut self, rows: usize) -> Result<Vec<Solution>, SolveError> {
        check_rows(rows, self.size)?;
        self.stats = SearchStats::default();

        let mut solutions = Vec::new();
        self.descend(rows, &mut solutions);
        self.stats.solutions = solutions.len();
        Ok(solutions)
    }

    fn stats(&self) -> SearchStats {
        self.stats
    }
}

/// Enum representing the search strategy, as chosen on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Copy, Hash, Default, ValueEnum)]
pub enum SolverType {
    /// Rebuild solutions from all smaller solutions.
    #[default]
    Declarative,
    /// Depth-first search with occupancy bit sets.
    Backtracking,
}

impl Display for SolverType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Declarative => write!(f, "declarative"),
            Self::Backtracking => write!(f, "backtracking"),
        }
    }
}

impl SolverType {
    /// Converts the `SolverType` to a concrete `SolverImpls` for a board of side `size`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::BoardSize`] if `size` is not in `1..=BOARD_SIZE`.
    pub fn to_impl(self, size: usize) -> Result<SolverImpls, SolveError> {
        Ok(match self {
            Self::Declarative => SolverImpls::Declarative(Declarative::new(size)?),
            Self::Backtracking => SolverImpls::Backtracking(Backtracking::new(size)?),
        })
    }
}

/// A solver selected at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverImpls {
    /// See [`Declarative`].
    Declarative(Declarative),
    /// See [`Backtracking`].
    Backtracking(Backtracking),
}

impl QueensSolver for SolverImpls {
    fn solve(&mut self, rows: usize) -> Result<Vec<Solution>, SolveError> {
        match self {
            Self::Declarative(s) => s.solve(rows),
            Self::Backtracking(s) => s.solve(rows),
        }
    }

    fn stats(&self) -> SearchStats {
        match self {
            Self::Declarative(s) => s.stats(),
            Self::Backtracking(s) => s.stats(),
        }
    }
}

/// Returns every solution for `rows` rows of the fixed 8x8 board, using the
/// declarative strategy.
///
/// # Errors
///
/// Returns [`SolveError::Rows`] if `rows` exceeds [`BOARD_SIZE`].
pub fn solve(rows: usize) -> Result<Vec<Solution>, SolveError> {
    Declarative::new(BOARD_SIZE)?.solve(rows)
}
