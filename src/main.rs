//! # Eight Queens
//!
//! `eight-queens` places eight queens on a chess board so that none of them attacks
//! another, prints every such placement, and draws boards from the printed output.
//!
//! ## Features
//!
//! -   **Two search strategies**:
//!     -   `declarative`: builds the solutions for `n` rows from all solutions for `n - 1`
//!         rows (the default).
//!     -   `backtracking`: a depth-first walk with column and diagonal bit sets.
//!
//!     Both produce the same 92 solutions in the same order.
//! -   **Partial boards**: fill only the first `--rows` rows.
//! -   **Verification**: check every solution independently of the search.
//! -   **Statistics**: candidate, conflict and placement counts plus memory usage.
//! -   **Renderer**: turns each printed solution back into an 8x8 grid.
//!
//! ## Usage
//!
//! ```sh
//! eight-queens [OPTIONS] [SUBCOMMAND]
//! ```
//!
//! ### Subcommands
//!
//! 1.  **`solve`**: Print every solution, one per line. This is also what runs when no
//!     subcommand is given.
//!     ```sh
//!     eight-queens solve [--strategy declarative|backtracking] [--rows N] [--count]
//!                        [--output PATH] [--verify] [--stats]
//!     ```
//!
//! 2.  **`show`**: Draw boards. Reads `8qs.out` from the current directory, or standard
//!     input if that file cannot be opened.
//!     ```sh
//!     eight-queens show [--input PATH | --dir DIR]
//!     ```
//!
//! 3.  **`completions`**: Print a shell completion script.
//!
//! `-d, --debug` enables debug logging for any subcommand; otherwise `RUST_LOG` applies.
//!
//! ## Example Invocations
//!
//! ```sh
//! # Print all solutions
//! eight-queens
//!
//! # Save them and draw them
//! eight-queens solve --output 8qs.out
//! eight-queens show
//!
//! # Or pipe them straight through (with no 8qs.out in the current directory)
//! eight-queens solve | eight-queens show
//!
//! # Count solutions with the backtracking strategy and print statistics
//! eight-queens solve --strategy backtracking --count --stats
//! ```

use crate::command_line::cli::{Cli, CliError, Commands, show, show_dir, solve_and_report};
use clap::{CommandFactory, Parser};
use log::{LevelFilter, error};

mod command_line;

/// Global allocator using `tikv-jemallocator`, which also backs the memory figures
/// in `--stats`.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Sets up `env_logger`. `--debug` forces the debug level; otherwise `RUST_LOG`
/// applies, defaulting to warnings only.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

/// Dispatches to the command handler.
fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Some(Commands::Solve { options, .. }) => solve_and_report(&options),
        Some(Commands::Show { input, dir, .. }) => {
            let mut out = std::io::stdout().lock();
            match dir {
                Some(dir) => show_dir(&dir, &mut out),
                None => show(&input, &mut out),
            }
        }
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
        None => solve_and_report(&cli.solve),
    }
}

/// Main entry point of the application.
///
/// Parses command-line arguments, sets up logging and runs the requested command.
/// Any error is logged and ends the process with exit status 1.
fn main() {
    let cli = Cli::parse();

    let debug = match &cli.command {
        Some(Commands::Solve { common, .. } | Commands::Show { common, .. }) => {
            common.debug || cli.common.debug
        }
        _ => cli.common.debug,
    };
    init_logging(debug);

    if let Err(e) = run(cli) {
        error!("{e}");
        std::process::exit(1);
    }
}
