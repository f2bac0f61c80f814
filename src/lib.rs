#![deny(missing_docs)]
//! This crate solves the eight queens puzzle and draws boards from the solver's printed output.

/// The `queens` module implements the solution search, which places one queen per row so that
/// no two queens share a column or a diagonal.
pub mod queens;

/// The `board` module implements the renderer, which reads printed solutions back and draws
/// them as an 8x8 grid of `Q` and `-` tokens.
pub mod board;
