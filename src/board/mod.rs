#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! This module draws boards from the solver's printed output.

/// Errors raised while rendering.
pub mod error;
/// The file-or-stdin input source.
pub mod input;
/// Digit extraction and board drawing.
pub mod render;

pub use error::{LineError, RenderError};
pub use input::{DEFAULT_INPUT, Input, STDIN_NOTICE};
pub use render::{column_digits, draw_board, render_lines};
