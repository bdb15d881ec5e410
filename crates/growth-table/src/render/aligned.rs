//! Aligned-writer layout: every column as wide as its widest cell plus
//! padding, cells right-aligned.

use super::{TableRenderer, column_widths, text_grid};
use crate::error::TableError;
use growth_types::ResultTable;
use std::io::Write;

#[derive(Debug, Clone, Copy)]
pub struct AlignedRenderer {
    /// Spaces added to the left of every column.
    pub padding: usize,
}

impl Default for AlignedRenderer {
    fn default() -> Self {
        Self { padding: 3 }
    }
}

impl TableRenderer for AlignedRenderer {
    fn render(&self, table: &ResultTable, out: &mut dyn Write) -> Result<(), TableError> {
        let grid = text_grid(table);
        let widths = column_widths(&grid);

        for line in &grid {
            for (cell, width) in line.iter().zip(&widths) {
                write!(out, "{:>w$}", cell, w = width + self.padding)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}
