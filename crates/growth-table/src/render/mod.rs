//! Table renderers.
//!
//! One computed [`ResultTable`] can be written in several layouts; each
//! layout implements [`TableRenderer`].

pub mod aligned;
pub mod columns;
pub mod inverses;
pub mod json;
pub mod printf;

use crate::error::TableError;
use growth_types::ResultTable;
use std::io::Write;

/// Writes a computed table to a byte sink.
pub trait TableRenderer {
    fn render(&self, table: &ResultTable, out: &mut dyn Write) -> Result<(), TableError>;
}

/// The table as text: a header line (empty label cell, then budget labels)
/// followed by one line per function.
pub(crate) fn text_grid(table: &ResultTable) -> Vec<Vec<String>> {
    let header: Vec<String> = std::iter::once(String::new())
        .chain(table.budgets.iter().cloned())
        .collect();
    let body = table.rows.iter().map(|row| {
        std::iter::once(row.function.clone())
            .chain(row.max_n.iter().map(ToString::to_string))
            .collect::<Vec<_>>()
    });
    std::iter::once(header).chain(body).collect()
}

/// Widest cell per column, in characters.
pub(crate) fn column_widths(grid: &[Vec<String>]) -> Vec<usize> {
    let columns = grid.iter().map(Vec::len).max().unwrap_or(0);
    (0..columns)
        .map(|c| {
            grid.iter()
                .filter_map(|line| line.get(c))
                .map(|s| s.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect()
}
