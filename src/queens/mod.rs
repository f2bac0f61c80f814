#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! This module enumerates every way to place non-attacking queens on the board, one row at a time.

/// The attack check for a candidate square on the next row.
pub mod attack;
/// Errors produced around a solver run.
pub mod error;
/// Placements, solutions and their printed form.
pub mod placement;
/// The search strategies.
pub mod solver;
/// Independent checks of solver output.
pub mod verify;

pub use attack::under_attack;
pub use error::SolveError;
pub use placement::{BOARD_SIZE, Placement, Solution};
pub use solver::{QueensSolver, SearchStats, SolverType, solve};
