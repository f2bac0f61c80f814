#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Drawing boards from printed solutions.
//!
//! The column digits are not parsed out of the line; they are picked from fixed
//! character offsets. In `[(1, 1), (2, 5), ...` the first column digit is at offset 5
//! and every following pair is 8 characters further on. This only holds for single digit rows and
//! columns printed exactly the way [`Solution`](crate::queens::Solution) displays
//! itself; any other spacing silently picks the wrong characters.

use crate::board::error::{LineError, RenderError};
use crate::queens::BOARD_SIZE;
use smallvec::SmallVec;
use std::io::{BufRead, Write};

/// Character offset of the first row's column digit.
pub const FIRST_DIGIT_OFFSET: usize = 5;

/// Distance in characters between consecutive column digits.
pub const DIGIT_STRIDE: usize = 8;

const LAST_DIGIT_OFFSET: usize = FIRST_DIGIT_OFFSET + DIGIT_STRIDE * (BOARD_SIZE - 1);

/// Picks the character at each column digit offset of `line`.
///
/// # Errors
///
/// Returns [`LineError::TooShort`] if `line` ends before the last offset. Its `len`
/// counts characters.
pub fn column_digits(line: &str) -> Result<[char; BOARD_SIZE], LineError> {
    let chars: SmallVec<[char; LAST_DIGIT_OFFSET + 1]> =
        line.chars().take(LAST_DIGIT_OFFSET + 1).collect();
    if chars.len() <= LAST_DIGIT_OFFSET {
        return Err(LineError::TooShort {
            len: line.chars().count(),
            needed: LAST_DIGIT_OFFSET + 1,
        });
    }

    let mut digits = ['\0'; BOARD_SIZE];
    for (row, digit) in digits.iter_mut().enumerate() {
        *digit = chars[FIRST_DIGIT_OFFSET + row * DIGIT_STRIDE];
    }
    Ok(digits)
}

/// Draws one board from its column digits.
///
/// Each row marks the queen's column with `Q` and every other square with `-`.
/// Every token is followed by a single space and every row ends with a newline.
/// A digit of `0`, or one beyond the board, leaves its row without a queen.
///
/// # Errors
///
/// Returns [`LineError::NotADigit`] for a character that is not a decimal digit.
pub fn draw_board(digits: &[char; BOARD_SIZE]) -> Result<String, LineError> {
    let mut board = String::with_capacity(BOARD_SIZE * (2 * BOARD_SIZE + 1));

    for (row, &digit) in digits.iter().enumerate() {
        let column = digit.to_digit(10).ok_or(LineError::NotADigit {
            row: row + 1,
            found: digit,
        })? as usize;

        for k in 1..=BOARD_SIZE {
            board.push(if column == k { 'Q' } else { '-' });
            board.push(' ');
        }
        board.push('\n');
    }
    Ok(board)
}

/// Renders every line of `reader` to `out` and returns the number of boards drawn.
///
/// Boards drawn before a bad line stay written. The digit list of a line is written
/// before its digits are parsed, so it also appears for a line whose board fails.
///
/// # Errors
///
/// Returns [`RenderError::Line`] with the 1-based line number for the first line that
/// cannot be rendered, or [`RenderError::Io`] if reading or writing fails.
pub fn render_lines<R: BufRead, W: Write>(reader: R, out: &mut W) -> Result<usize, RenderError> {
    let mut boards = 0;
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let at_line = |source: LineError| RenderError::Line {
            line: i + 1,
            source,
        };

        let digits = column_digits(&line).map_err(at_line)?;
        writeln!(out, "{digits:?}")?;
        let board = draw_board(&digits).map_err(at_line)?;
        out.write_all(board.as_bytes())?;
        boards += 1;
    }
    out.flush()?;
    Ok(boards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::queens::{Solution, solve};
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    const LINE: &str = "[(1, 1), (2, 5), (3, 8), (4, 6), (5, 3), (6, 7), (7, 2), (8, 4)]";

    #[test]
    fn test_column_digits() {
        assert_eq!(
            column_digits(LINE).unwrap(),
            ['1', '5', '8', '6', '3', '7', '2', '4']
        );
    }

    #[test]
    fn test_column_digits_count_characters() {
        let line = LINE.replacen('[', "\u{e9}", 1);
        assert_eq!(column_digits(&line).unwrap(), column_digits(LINE).unwrap());

        let line = LINE.replacen("(3, 8)", "(3, \u{e9})", 1);
        let digits = column_digits(&line).unwrap();
        assert_eq!(
            draw_board(&digits),
            Err(LineError::NotADigit {
                row: 3,
                found: '\u{e9}'
            })
        );
    }

    #[test]
    fn test_render_one_line() {
        let expected = [
            "['1', '5', '8', '6', '3', '7', '2', '4']\n",
            "Q - - - - - - - \n",
            "- - - - Q - - - \n",
            "- - - - - - - Q \n",
            "- - - - - Q - - \n",
            "- - Q - - - - - \n",
            "- - - - - - Q - \n",
            "- Q - - - - - - \n",
            "- - - Q - - - - \n",
        ]
        .concat();
        let mut out = Vec::new();
        assert_eq!(render_lines(Cursor::new(LINE), &mut out).unwrap(), 1);
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_every_solution_round_trips() {
        for solution in solve(BOARD_SIZE).unwrap() {
            let board = draw_board(&column_digits(&solution.to_string()).unwrap()).unwrap();
            let rows: Vec<&str> = board.lines().collect();
            assert_eq!(rows.len(), BOARD_SIZE);

            let mut queens_per_column = [0; BOARD_SIZE];
            for (row, placement) in rows.iter().zip(solution.iter()) {
                let tokens: Vec<&str> = row.split_whitespace().collect();
                assert_eq!(tokens.iter().filter(|t| **t == "Q").count(), 1);
                let column = tokens.iter().position(|t| *t == "Q").unwrap();
                assert_eq!(column + 1, placement.column);
                queens_per_column[column] += 1;
            }
            assert_eq!(queens_per_column, [1; BOARD_SIZE]);
        }
    }

    #[test]
    fn test_short_line() {
        assert_eq!(
            column_digits("[(1, 1), (2, 5)]"),
            Err(LineError::TooShort {
                len: 16,
                needed: 62
            })
        );
        assert!(column_digits("").is_err());
    }

    #[test]
    fn test_not_a_digit() {
        let line = LINE.replacen("(3, 8)", "(3, x)", 1);
        let digits = column_digits(&line).unwrap();
        assert_eq!(
            draw_board(&digits),
            Err(LineError::NotADigit { row: 3, found: 'x' })
        );
    }

    #[test]
    fn test_partial_solution_is_too_short() {
        let line = Solution::from([(1, 1), (2, 3)]).to_string();
        assert!(matches!(
            column_digits(&line),
            Err(LineError::TooShort { len: 16, .. })
        ));
    }

    #[test]
    fn test_render_lines_reports_line_number() {
        let input = format!("{LINE}\n{LINE}\nnot a solution\n{LINE}\n");
        let mut out = Vec::new();
        let err = render_lines(Cursor::new(input), &mut out).unwrap_err();

        assert!(matches!(err, RenderError::Line { line: 3, .. }));
        let written = String::from_utf8(out).unwrap();
        assert_eq!(written.matches("Q ").count(), 2 * BOARD_SIZE);
    }

    #[test]
    fn test_bad_digit_still_prints_digit_list() {
        let input = LINE.replacen("(8, 4)", "(8, ?)", 1);
        let mut out = Vec::new();
        let err = render_lines(Cursor::new(input), &mut out).unwrap_err();

        assert!(matches!(
            err,
            RenderError::Line {
                line: 1,
                source: LineError::NotADigit { row: 8, found: '?' }
            }
        ));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "['1', '5', '8', '6', '3', '7', '2', '?']\n"
        );
    }

    #[test]
    fn test_render_lines_counts_boards() {
        let input = solve(BOARD_SIZE)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        let mut out = Vec::new();
        assert_eq!(render_lines(Cursor::new(input), &mut out).unwrap(), 92);
    }
}
