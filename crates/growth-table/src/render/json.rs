use super::TableRenderer;
use crate::error::TableError;
use growth_types::ResultTable;
use std::io::Write;

/// Pretty-printed JSON. Finite cells are numbers; overflow and exhausted
/// searches are strings (`"+Inf"`, `">=99"`).
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl TableRenderer for JsonRenderer {
    fn render(&self, table: &ResultTable, out: &mut dyn Write) -> Result<(), TableError> {
        serde_json::to_writer_pretty(&mut *out, table)?;
        writeln!(out)?;
        Ok(())
    }
}
