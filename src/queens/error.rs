use thiserror::Error;

/// Errors raised around a solver run. The search itself cannot fail.
#[derive(Debug, Error)]
pub enum SolveError {
    /// The requested board is empty or larger than the fixed board.
    #[error("board size {size} is out of range 1..={max}")]
    BoardSize {
        /// The requested size.
        size: usize,
        /// The largest supported size.
        max: usize,
    },

    /// More rows were requested than the board has.
    #[error("cannot place {rows} rows on a board of size {size}")]
    Rows {
        /// The requested number of rows.
        rows: usize,
        /// The board size.
        size: usize,
    },

    /// A produced solution failed verification.
    #[error("solution {solution} failed verification")]
    Verification {
        /// The offending solution, in its printed form.
        solution: String,
    },

    /// Writing the solutions out failed.
    #[error("failed to write solutions: {0}")]
    Io(#[from] std::io::Error),
}
