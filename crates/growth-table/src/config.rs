//! Presentation settings derived from the command line.
//!
//! Functions and budgets are fixed; only the table layout can be chosen.

use crate::cli::Cli;
use crate::render::{
    TableRenderer, aligned::AlignedRenderer, columns::ColumnRenderer, json::JsonRenderer,
    printf::PrintfRenderer,
};
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum TableStyle {
    /// Content-sized columns, right-aligned
    #[default]
    Aligned,
    /// Fixed-width cells
    Printf,
    /// Left-aligned columns with separators
    Columns,
    /// Pretty-printed JSON
    Json,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub style: TableStyle,
}

impl From<&Cli> for RenderConfig {
    fn from(cli: &Cli) -> Self {
        Self { style: cli.style }
    }
}

impl RenderConfig {
    pub fn renderer(&self) -> Box<dyn TableRenderer> {
        match self.style {
            TableStyle::Aligned => Box::new(AlignedRenderer::default()),
            TableStyle::Printf => Box::new(PrintfRenderer::default()),
            TableStyle::Columns => Box::new(ColumnRenderer),
            TableStyle::Json => Box::new(JsonRenderer),
        }
    }
}
