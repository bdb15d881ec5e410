//! Command-line arguments.

use crate::config::TableStyle;
use clap::{Parser, Subcommand};

/// Largest problem size solvable within each time budget, assuming the
/// algorithm takes f(n) microseconds
#[derive(Parser, Debug)]
#[command(name = "growth-table")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Table layout
    #[arg(short, long, value_enum, default_value_t = TableStyle::Aligned, global = true)]
    pub style: TableStyle,

    /// Log at debug level on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print the max-n table (default)
    Table,
    /// List each growth function with the inverse used to compute it
    Inverses,
}

impl Cli {
    /// The selected command; no subcommand means `table`.
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Table)
    }
}
