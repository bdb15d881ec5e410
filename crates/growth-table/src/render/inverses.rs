//! The `inverses` listing: each growth function next to the inverse used to
//! find its largest `n`.

use growth_calculator::GrowthFunction;
use std::io::{self, Write};

const FUNCTION_HEADER: &str = "f(n)";
const INVERSE_HEADER: &str = "f^-1(T)";

pub fn write_inverses<'a>(
    functions: impl Iterator<Item = &'a dyn GrowthFunction>,
    out: &mut dyn Write,
) -> io::Result<()> {
    let entries: Vec<_> = functions.map(|f| (f.label(), f.inverse_formula())).collect();
    let width = entries
        .iter()
        .map(|(label, _)| label.chars().count())
        .chain(std::iter::once(FUNCTION_HEADER.len()))
        .max()
        .unwrap_or(0)
        + 4;

    writeln!(out, "{FUNCTION_HEADER:<width$}{INVERSE_HEADER}")?;
    writeln!(out, "{}", "-".repeat(width + INVERSE_HEADER.len()))?;
    for (label, inverse) in entries {
        writeln!(out, "{label:<width$}{inverse}")?;
    }
    Ok(())
}
