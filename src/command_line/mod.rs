/// Argument definitions and the command handlers behind them.
pub(crate) mod cli;
