//! Where the renderer reads solutions from: a named file if it can be opened,
//! standard input otherwise.

use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read, StdinLock};
use std::path::Path;

/// The file the renderer looks for in the working directory.
pub const DEFAULT_INPUT: &str = "8qs.out";

/// Printed to stdout when the renderer falls back to standard input.
pub const STDIN_NOTICE: &str = "getting data from stdin...";

/// An open source of solution lines.
///
/// Dropping a `File` source closes the file. Standard input is only locked,
/// never closed.
#[derive(Debug)]
pub enum Input {
    /// A file that was opened successfully.
    File(BufReader<File>),
    /// Standard input, used when the file could not be opened.
    Stdin(StdinLock<'static>),
}

impl Input {
    /// Opens `path`, falling back to standard input if that fails or `path` is not a
    /// regular file.
    pub fn open(path: &Path) -> Self {
        match open_regular_file(path) {
            Ok(file) => {
                debug!("Reading solutions from {}", path.display());
                Self::File(BufReader::new(file))
            }
            Err(e) => {
                debug!("Cannot open {}: {e}; reading stdin", path.display());
                Self::Stdin(io::stdin().lock())
            }
        }
    }

    /// Whether this is the standard input fallback.
    #[must_use]
    pub const fn is_stdin(&self) -> bool {
        matches!(self, Self::Stdin(_))
    }
}

fn open_regular_file(path: &Path) -> io::Result<File> {
    let file = File::open(path)?;
    if file.metadata()?.is_file() {
        Ok(file)
    } else {
        Err(io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"))
    }
}

impl Read for Input {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::File(r) => r.read(buf),
            Self::Stdin(r) => r.read(buf),
        }
    }
}

impl BufRead for Input {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            Self::File(r) => r.fill_buf(),
            Self::Stdin(r) => r.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            Self::File(r) => r.consume(amt),
            Self::Stdin(r) => r.consume(amt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_opens_existing_file() {
        let path = std::env::temp_dir().join(format!("queens-input-{}.out", std::process::id()));
        let mut file = File::create(&path).unwrap();
        writeln!(file, "first").unwrap();
        writeln!(file, "second").unwrap();
        drop(file);

        let input = Input::open(&path);
        assert!(!input.is_stdin());
        let lines: Vec<String> = input.lines().map(Result::unwrap).collect();
        assert_eq!(lines, vec!["first", "second"]);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_directory_falls_back_to_stdin() {
        let path = std::env::temp_dir().join(format!("queens-dir-{}.out", std::process::id()));
        std::fs::create_dir_all(&path).unwrap();

        assert!(Input::open(&path).is_stdin());

        std::fs::remove_dir(&path).unwrap();
    }

    #[test]
    fn test_missing_file_falls_back_to_stdin() {
        let path = Path::new("definitely/not/here/8qs.out");
        assert!(Input::open(path).is_stdin());
    }
}
