//! Printf-style layout: fixed cell widths, no measuring. Every value cell is
//! preceded by one space; cells wider than their slot push the rest of the
//! line to the right.

use super::TableRenderer;
use crate::error::TableError;
use growth_types::ResultTable;
use std::io::Write;

#[derive(Debug, Clone, Copy)]
pub struct PrintfRenderer {
    pub label_width: usize,
    pub cell_width: usize,
}

impl Default for PrintfRenderer {
    fn default() -> Self {
        Self {
            label_width: 10,
            cell_width: 12,
        }
    }
}

impl TableRenderer for PrintfRenderer {
    fn render(&self, table: &ResultTable, out: &mut dyn Write) -> Result<(), TableError> {
        write!(out, "{:<w$}", "", w = self.label_width)?;
        for budget in &table.budgets {
            write!(out, " {:>w$}", budget, w = self.cell_width)?;
        }
        writeln!(out)?;

        for row in &table.rows {
            write!(out, "{:<w$}", row.function, w = self.label_width)?;
            for cell in &row.max_n {
                write!(out, " {:>w$}", cell.to_string(), w = self.cell_width)?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}
