//! Command-line front end for the growth table.
//!
//! The calculation lives in `growth-calculator`; this crate parses the command
//! line, sets up logging and hands the computed table to a `TableRenderer`.

pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod tracing_setup;

use cli::{Cli, Command};
use config::RenderConfig;
use error::TableError;
use growth_calculator::GrowthTableCalculator;
use std::io::Write;
use tracing::{debug, info};

/// Runs the selected command, writing its output to `out`.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<(), TableError> {
    let calculator = GrowthTableCalculator::new();
    match cli.command() {
        Command::Table => {
            let config = RenderConfig::from(cli);
            info!(style = ?config.style, "rendering growth table");
            let table = calculator.compute();
            config.renderer().render(&table, out)?;
        }
        Command::Inverses => {
            debug!("listing inverse formulas");
            render::inverses::write_inverses(calculator.functions(), out)?;
        }
    }
    Ok(())
}
