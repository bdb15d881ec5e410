//! Manual column layout: left-aligned cells separated by `|`, with a dashed
//! rule under the header.

use super::{TableRenderer, column_widths, text_grid};
use crate::error::TableError;
use growth_types::ResultTable;
use std::io::Write;

const SEPARATOR: &str = " | ";
const RULE_SEPARATOR: &str = "-+-";

#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnRenderer;

fn write_line(
    out: &mut dyn Write,
    cells: &[String],
    widths: &[usize],
) -> std::io::Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:<w$}"))
        .collect::<Vec<_>>()
        .join(SEPARATOR);
    writeln!(out, "{}", line.trim_end())
}

impl TableRenderer for ColumnRenderer {
    fn render(&self, table: &ResultTable, out: &mut dyn Write) -> Result<(), TableError> {
        let grid = text_grid(table);
        let widths = column_widths(&grid);

        let mut lines = grid.iter();
        if let Some(header) = lines.next() {
            write_line(out, header, &widths)?;
            let rule: Vec<_> = widths.iter().map(|&w| "-".repeat(w)).collect();
            writeln!(out, "{}", rule.join(RULE_SEPARATOR))?;
        }
        for line in lines {
            write_line(out, line, &widths)?;
        }
        Ok(())
    }
}
