#![allow(clippy::cast_precision_loss)]

use clap::{Args, Parser, Subcommand};
use eight_queens::board::{self, Input, RenderError, STDIN_NOTICE};
use eight_queens::queens::verify::verify_partial;
use eight_queens::queens::{
    BOARD_SIZE, QueensSolver, SearchStats, Solution, SolveError, SolverType,
};
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use thiserror::Error;
use tikv_jemalloc_ctl::{epoch, stats};

/// Defines the command-line interface for the eight queens application.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(
    name = "eight-queens",
    version,
    about = "Solve the eight queens puzzle and draw the solutions",
    args_conflicts_with_subcommands = true
)]
pub(crate) struct Cli {
    /// Specifies the subcommand to execute (`solve`, `show` or `completions`).
    /// Without one, the solver runs with the options given here.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Solver options used when no subcommand is given.
    #[command(flatten)]
    pub solve: SolveOptions,

    /// Common options applicable to all commands.
    #[command(flatten)]
    pub common: CommonOptions,
}

/// Enumerates the available subcommands.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Print every solution, one per line.
    Solve {
        /// Options for this subcommand.
        #[command(flatten)]
        options: SolveOptions,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Draw a board for every solution line read from a file, or from stdin if the
    /// file cannot be opened.
    Show {
        /// The solution file to read.
        #[arg(short, long, default_value = board::DEFAULT_INPUT)]
        input: PathBuf,

        /// Draw every `.out` file found under this directory instead.
        #[arg(long, conflicts_with = "input")]
        dir: Option<PathBuf>,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct CommonOptions {
    /// Enable debug logging. Otherwise `RUST_LOG` decides.
    #[arg(short, long, default_value_t = false)]
    pub(crate) debug: bool,
}

/// Options controlling a solver run.
#[derive(Args, Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub(crate) struct SolveOptions {
    /// The search strategy. Both produce the same solutions in the same order.
    #[arg(long, default_value_t = SolverType::Declarative)]
    pub(crate) strategy: SolverType,

    /// Number of rows to fill, starting from row 1.
    #[arg(short, long, default_value_t = BOARD_SIZE)]
    pub(crate) rows: usize,

    /// Print only the number of solutions.
    #[arg(short, long, default_value_t = false, conflicts_with = "output")]
    pub(crate) count: bool,

    /// Write solutions to this file instead of stdout (the renderer reads `8qs.out`).
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,

    /// Check every solution independently of the search.
    #[arg(short, long, default_value_t = false)]
    pub(crate) verify: bool,

    /// Print search and memory statistics after solving.
    #[arg(short, long, default_value_t = false)]
    pub(crate) stats: bool,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            strategy: SolverType::default(),
            rows: BOARD_SIZE,
            count: false,
            output: None,
            verify: false,
            stats: false,
        }
    }
}

/// Anything that makes a command fail.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("unable to read allocator statistics: {0}")]
    Allocator(#[from] tikv_jemalloc_ctl::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Writes each solution on its own line.
pub(crate) fn write_solutions<W: Write>(out: &mut W, solutions: &[Solution]) -> io::Result<()> {
    for solution in solutions {
        writeln!(out, "{solution}")?;
    }
    out.flush()
}

/// Verifies every solution of a run with `rows` rows.
///
/// Prints `Verified: true` if all pass.
///
/// # Errors
///
/// Returns [`SolveError::Verification`] naming the first solution that fails.
pub(crate) fn verify_solutions(solutions: &[Solution], rows: usize) -> Result<(), SolveError> {
    if let Some(bad) = solutions
        .iter()
        .find(|s| !verify_partial(s, rows, BOARD_SIZE))
    {
        println!("Verified: false");
        return Err(SolveError::Verification {
            solution: bad.to_string(),
        });
    }
    println!("Verified: true");
    Ok(())
}

/// Runs the solver and reports results, including stats and verification.
///
/// # Errors
///
/// If `rows` is out of range, the output cannot be written, verification fails, or
/// allocator statistics cannot be read.
pub(crate) fn solve_and_report(options: &SolveOptions) -> Result<(), CliError> {
    epoch::advance()?;

    let time = Instant::now();
    let mut solver = options.strategy.to_impl(BOARD_SIZE)?;
    let solutions = solver.solve(options.rows)?;
    let elapsed = time.elapsed();

    debug!(
        "{} strategy found {} solutions for {} rows in {elapsed:?}",
        options.strategy,
        solutions.len(),
        options.rows
    );

    if options.count {
        println!("{}", solutions.len());
    } else if let Some(path) = &options.output {
        let mut out = BufWriter::new(File::create(path)?);
        write_solutions(&mut out, &solutions)?;
        info!("Solutions written to: {}", path.display());
    } else {
        write_solutions(&mut BufWriter::new(io::stdout().lock()), &solutions)?;
    }

    if options.verify {
        verify_solutions(&solutions, options.rows)?;
    }

    if options.stats {
        epoch::advance()?;
        let allocated_mib = stats::allocated::read()? as f64 / (1024.0 * 1024.0);
        let resident_mib = stats::resident::read()? as f64 / (1024.0 * 1024.0);

        print_stats(
            options,
            elapsed,
            &solver.stats(),
            allocated_mib,
            resident_mib,
        );
    }

    Ok(())
}

/// Draws every solution line from `input`, or from stdin if it cannot be opened.
///
/// # Errors
///
/// If a line is malformed or reading/writing fails.
pub(crate) fn show<W: Write>(input: &Path, out: &mut W) -> Result<(), CliError> {
    let source = Input::open(input);
    let from_stdin = source.is_stdin();
    show_from(source, from_stdin, out)
}

/// Draws every solution line from `source`, announcing a stdin fallback first.
///
/// # Errors
///
/// If a line is malformed or reading/writing fails.
pub(crate) fn show_from<R: BufRead, W: Write>(
    source: R,
    from_stdin: bool,
    out: &mut W,
) -> Result<(), CliError> {
    if from_stdin {
        writeln!(out, "{STDIN_NOTICE}")?;
    }

    let boards = board::render_lines(source, out)?;
    debug!("Rendered {boards} boards");
    Ok(())
}

/// Draws every `.out` file under a directory.
///
/// Files are visited in file name order; each is preceded by a `Rendering:` header.
///
/// # Errors
///
/// If the path is not a directory, or any file cannot be read or rendered.
pub(crate) fn show_dir<W: Write>(path: &Path, out: &mut W) -> Result<(), CliError> {
    if !path.is_dir() {
        return Err(CliError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Provided path is not a directory: {}", path.display()),
        )));
    }

    for entry in walkdir::WalkDir::new(path)
        .sort_by_file_name()
        .into_iter()
        .filter_map(Result::ok)
    {
        let file_path = entry.path();
        if !file_path.is_file() || file_path.extension().is_none_or(|ext| ext != "out") {
            debug!("Skipping: {}", file_path.display());
            continue;
        }

        writeln!(out, "Rendering: {}", file_path.display())?;
        let reader = BufReader::new(File::open(file_path)?);
        board::render_lines(reader, out)?;
    }

    Ok(())
}

/// Helper function to print a single statistic line in a formatted table row.
///
/// # Arguments
/// * `label` - The description of the statistic.
/// * `value` - The value of the statistic, implementing `std::fmt::Display`.
pub(crate) fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate (value/second).
///
/// # Arguments
/// * `label` - The description of the statistic.
/// * `value` - The raw count for the statistic.
/// * `elapsed` - The elapsed time in seconds, used to calculate the rate.
pub(crate) fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

/// Prints a summary of problem and search statistics.
///
/// # Arguments
/// * `options` - The options the solver ran with.
/// * `elapsed` - Duration spent by the solver.
/// * `s` - `SearchStats` collected by the solver.
/// * `allocated` - Allocated memory in MiB.
/// * `resident` - Resident memory in MiB.
pub(crate) fn print_stats(
    options: &SolveOptions,
    elapsed: Duration,
    s: &SearchStats,
    allocated: f64,
    resident: f64,
) {
    let elapsed_secs = elapsed.as_secs_f64();

    println!("\n=======================[ Problem Statistics ]=========================");
    stat_line("Board size", BOARD_SIZE);
    stat_line("Rows", options.rows);
    stat_line("Strategy", options.strategy);

    println!("========================[ Search Statistics ]========================");
    stat_line_with_rate("Candidates", s.candidates, elapsed_secs);
    stat_line_with_rate("Conflicts", s.conflicts, elapsed_secs);
    stat_line_with_rate("Placements", s.placements, elapsed_secs);
    stat_line("Solutions", s.solutions);
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");
}
