//! Growth Types
//!
//! This crate defines the value records shared across the growth table workspace
//! (currently `growth-calculator` and `growth-table`). Keeping them here lets the
//! renderers depend on the table shape without pulling in the calculator.

#![deny(warnings)]
#![deny(missing_docs)]

mod types;
pub use types::{FunctionRow, MaxN, ResultTable, TimeBudget};
