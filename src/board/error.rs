use thiserror::Error;

/// A problem with a single line of solver output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    /// The line ends before the last column digit.
    #[error("line is {len} bytes long, need at least {needed}")]
    TooShort {
        /// The line length in bytes.
        len: usize,
        /// The smallest length that reaches every digit offset.
        needed: usize,
    },

    /// The character at a digit offset is not a decimal digit.
    #[error("expected a column digit for row {row}, found {found:?}")]
    NotADigit {
        /// The 1-based board row the character belongs to.
        row: usize,
        /// The character found instead.
        found: char,
    },
}

/// Errors that stop the renderer.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A line could not be turned into a board.
    #[error("line {line}: {source}")]
    Line {
        /// The 1-based input line number.
        line: usize,
        /// What was wrong with it.
        #[source]
        source: LineError,
    },

    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
